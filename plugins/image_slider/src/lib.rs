//! Image slider plugin for Vetrina.
//!
//! Provides the "image-slider" content block: a horizontally scrolling
//! strip of slides together with the stylesheet rules the markup depends
//! on. This is the reference plugin for the content-block contract.

use vetrina_sdk::render::html_escape;
use vetrina_sdk::{BlockError, ContentBlock, ContentBlockRegistry, StyleRules};

/// Machine name the slider block is registered under.
pub const BLOCK_NAME: &str = "image-slider";

/// A single slide in the strip.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Image source URL.
    pub src: String,
    /// Alternative text for the image.
    pub alt: String,
}

impl Slide {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// The image slider content block.
pub struct ImageSliderBlock {
    slides: Vec<Slide>,
}

impl ImageSliderBlock {
    /// Create a slider over the given slides.
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// The demo slide set served by the example site.
    pub fn demo() -> Self {
        Self::new(vec![
            Slide::new(
                "/static/slides/01-harbor.jpg",
                "Fishing boats in the harbor at dawn",
            ),
            Slide::new(
                "/static/slides/02-old-town.jpg",
                "Old town alley in afternoon light",
            ),
            Slide::new(
                "/static/slides/03-coast.jpg",
                "Coastal cliffs under a clearing sky",
            ),
        ])
    }
}

impl ContentBlock for ImageSliderBlock {
    fn styles(&self) -> StyleRules {
        StyleRules::new()
            .rule(".slider", "width: 100%; overflow: hidden;")
            .rule(
                ".slider__track",
                "display: flex; transition: transform 0.4s ease;",
            )
            .rule(".slider__slide", "flex: 0 0 100%; margin: 0;")
            .rule(".slider__slide img", "width: 100%; display: block;")
    }

    fn render(&self) -> Result<String, BlockError> {
        let mut html = String::from("<div class=\"slider\"><div class=\"slider__track\">");
        for slide in &self.slides {
            html.push_str(&format!(
                "<figure class=\"slider__slide\"><img src=\"{}\" alt=\"{}\"></figure>",
                html_escape(&slide.src),
                html_escape(&slide.alt)
            ));
        }
        html.push_str("</div></div>");
        Ok(html)
    }
}

/// Register the slider block.
///
/// Called once by the kernel during startup, after the database
/// connectivity check has succeeded.
pub fn register(registry: &mut ContentBlockRegistry) {
    registry.register(BLOCK_NAME, Box::new(ImageSliderBlock::demo()));
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn registers_under_expected_name() {
        let mut registry = ContentBlockRegistry::new();
        register(&mut registry);

        assert!(registry.contains(BLOCK_NAME));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn rendered_fragment_has_styles_before_markup() {
        let mut registry = ContentBlockRegistry::new();
        register(&mut registry);

        let html = registry.render(BLOCK_NAME).unwrap();
        assert!(html.starts_with("<style>\n"));
        assert!(html.contains(".slider { width: 100%; overflow: hidden; }\n"));

        let style_end = html.find("</style>").unwrap();
        let track = html.find("<div class=\"slider__track\">").unwrap();
        assert!(style_end < track);
    }

    #[test]
    fn markup_contains_all_demo_slides() {
        let html = ImageSliderBlock::demo().render().unwrap();

        assert_eq!(html.matches("<figure class=\"slider__slide\">").count(), 3);
        assert!(html.contains("/static/slides/01-harbor.jpg"));
        assert!(html.contains("Coastal cliffs under a clearing sky"));
    }

    #[test]
    fn slide_attributes_are_escaped() {
        let block = ImageSliderBlock::new(vec![Slide::new(
            "/img/a.jpg?w=800&h=600",
            "A \"quoted\" caption",
        )]);

        let html = block.render().unwrap();
        assert!(html.contains("/img/a.jpg?w=800&amp;h=600"));
        assert!(html.contains("A &quot;quoted&quot; caption"));
    }

    #[test]
    fn style_rules_start_with_slider_container() {
        let styles = ImageSliderBlock::demo().styles();
        let first = styles.iter().next().unwrap();
        assert_eq!(first, (".slider", "width: 100%; overflow: hidden;"));
    }
}
