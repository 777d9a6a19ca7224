//! Core types for Vetrina content blocks.
//!
//! Plugins implement [`ContentBlock`] and register the result into the
//! kernel's registry at startup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error propagated from a block's markup producer.
///
/// The registry performs no recovery, retry, or logging; a failing block
/// surfaces here and the caller decides what to do with it.
#[derive(Debug, Error)]
pub enum BlockError {
    /// The block's markup producer failed.
    #[error("markup generation failed: {reason}")]
    Markup { reason: String },
}

impl BlockError {
    /// Shorthand for a markup failure with the given reason.
    pub fn markup(reason: impl Into<String>) -> Self {
        Self::Markup {
            reason: reason.into(),
        }
    }
}

/// Ordered CSS selector/rule pairs emitted ahead of a block's markup.
///
/// Insertion order is preserved exactly, so the style lines a block
/// produces are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRules {
    rules: Vec<(String, String)>,
}

impl StyleRules {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule, builder-style.
    #[must_use]
    pub fn rule(mut self, selector: impl Into<String>, body: impl Into<String>) -> Self {
        self.push(selector, body);
        self
    }

    /// Append a rule.
    pub fn push(&mut self, selector: impl Into<String>, body: impl Into<String>) {
        self.rules.push((selector.into(), body.into()));
    }

    /// Iterate over (selector, body) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(s, b)| (s.as_str(), b.as_str()))
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// A named, reusable unit of styled markup.
///
/// The contract has exactly two capabilities: a style-rule accessor and a
/// zero-argument markup producer. The registry owns registered blocks and
/// invokes both on every render; nothing is cached.
pub trait ContentBlock: Send + Sync {
    /// CSS rules emitted ahead of the block's markup.
    fn styles(&self) -> StyleRules;

    /// Produce the block's HTML markup.
    ///
    /// Errors propagate to the caller unmodified.
    fn render(&self) -> Result<String, BlockError>;
}
