//! Content block registry.
//!
//! Maps block names to definitions registered by plugins at startup. The
//! kernel builds the registry mutable during boot, registers plugin
//! blocks, and freezes it behind an `Arc` before serving requests, so no
//! locking is involved on the read path.

use std::collections::HashMap;

use crate::types::{BlockError, ContentBlock};

/// Registry of content blocks, keyed by machine name.
#[derive(Default)]
pub struct ContentBlockRegistry {
    blocks: HashMap<String, Box<dyn ContentBlock>>,
}

impl ContentBlockRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block definition under `name`.
    ///
    /// Names are unique: registering an existing name replaces the
    /// previous definition. No validation is performed.
    pub fn register(&mut self, name: impl Into<String>, block: Box<dyn ContentBlock>) {
        self.blocks.insert(name.into(), block);
    }

    /// Render the named block.
    ///
    /// Produces the block's style rules, one `selector { body }` line per
    /// rule in insertion order wrapped in a `<style>` tag, followed by the
    /// block's markup. Unknown names render as an empty string rather than
    /// an error; a failing markup producer propagates unmodified. Output
    /// is rebuilt on every call.
    pub fn render(&self, name: &str) -> Result<String, BlockError> {
        let Some(block) = self.blocks.get(name) else {
            return Ok(String::new());
        };

        let markup = block.render()?;

        let mut out = String::from("<style>\n");
        for (selector, body) in block.styles().iter() {
            out.push_str(selector);
            out.push_str(" { ");
            out.push_str(body);
            out.push_str(" }\n");
        }
        out.push_str("</style>\n");
        out.push_str(&markup);
        Ok(out)
    }

    /// Check whether a block is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    /// Registered block names, sorted for deterministic listings.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.blocks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::types::StyleRules;

    struct FixedBlock {
        styles: StyleRules,
        markup: &'static str,
    }

    impl ContentBlock for FixedBlock {
        fn styles(&self) -> StyleRules {
            self.styles.clone()
        }

        fn render(&self) -> Result<String, BlockError> {
            Ok(self.markup.to_string())
        }
    }

    struct BrokenBlock;

    impl ContentBlock for BrokenBlock {
        fn styles(&self) -> StyleRules {
            StyleRules::new()
        }

        fn render(&self) -> Result<String, BlockError> {
            Err(BlockError::markup("upstream image service unavailable"))
        }
    }

    fn slider() -> Box<FixedBlock> {
        Box::new(FixedBlock {
            styles: StyleRules::new().rule(".slider", "width: 100%;"),
            markup: "<div class=\"slider\"></div>",
        })
    }

    #[test]
    fn render_emits_styles_then_markup() {
        let mut registry = ContentBlockRegistry::new();
        registry.register("image-slider", slider());

        let html = registry.render("image-slider").unwrap();
        assert_eq!(
            html,
            "<style>\n.slider { width: 100%; }\n</style>\n<div class=\"slider\"></div>"
        );
    }

    #[test]
    fn unknown_name_renders_empty() {
        let registry = ContentBlockRegistry::new();
        assert_eq!(registry.render("nonexistent").unwrap(), "");
        assert!(registry.is_empty());
    }

    #[test]
    fn unknown_name_on_populated_registry_renders_empty() {
        let mut registry = ContentBlockRegistry::new();
        registry.register("image-slider", slider());
        assert_eq!(registry.render("carousel").unwrap(), "");
    }

    #[test]
    fn style_lines_follow_insertion_order() {
        let mut registry = ContentBlockRegistry::new();
        registry.register(
            "tabs",
            Box::new(FixedBlock {
                styles: StyleRules::new()
                    .rule(".tabs", "display: flex;")
                    .rule(".tabs__tab", "padding: 4px 8px;")
                    .rule(".tabs__tab--active", "font-weight: bold;"),
                markup: "<div class=\"tabs\"></div>",
            }),
        );

        let html = registry.render("tabs").unwrap();
        let flex = html.find(".tabs { display: flex; }\n").unwrap();
        let pad = html.find(".tabs__tab { padding: 4px 8px; }\n").unwrap();
        let active = html.find(".tabs__tab--active { font-weight: bold; }\n").unwrap();
        assert!(flex < pad);
        assert!(pad < active);
    }

    #[test]
    fn reregistration_overwrites_previous_definition() {
        let mut registry = ContentBlockRegistry::new();
        registry.register(
            "banner",
            Box::new(FixedBlock {
                styles: StyleRules::new().rule(".banner", "color: red;"),
                markup: "<div>old banner</div>",
            }),
        );
        registry.register(
            "banner",
            Box::new(FixedBlock {
                styles: StyleRules::new().rule(".banner", "color: blue;"),
                markup: "<div>new banner</div>",
            }),
        );

        assert_eq!(registry.len(), 1);
        let html = registry.render("banner").unwrap();
        assert!(html.contains("<div>new banner</div>"));
        assert!(html.contains(".banner { color: blue; }"));
        assert!(!html.contains("old banner"));
    }

    #[test]
    fn render_failure_propagates() {
        let mut registry = ContentBlockRegistry::new();
        registry.register("broken", Box::new(BrokenBlock));

        let err = registry.render("broken").unwrap_err();
        assert!(
            err.to_string().contains("upstream image service unavailable"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn empty_style_set_still_emits_style_tag() {
        let mut registry = ContentBlockRegistry::new();
        registry.register(
            "bare",
            Box::new(FixedBlock {
                styles: StyleRules::new(),
                markup: "<p>bare</p>",
            }),
        );

        assert_eq!(
            registry.render("bare").unwrap(),
            "<style>\n</style>\n<p>bare</p>"
        );
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = ContentBlockRegistry::new();
        registry.register("zeta", slider());
        registry.register("alpha", slider());

        assert_eq!(registry.names(), vec!["alpha", "zeta"]);
        assert!(registry.contains("alpha"));
        assert!(!registry.contains("omega"));
    }
}
