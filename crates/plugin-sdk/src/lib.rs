//! Vetrina Plugin SDK
//!
//! The content-block contract and registry shared between the kernel and
//! plugins. Plugins depend on this crate alone: the kernel hands each
//! plugin a mutable [`ContentBlockRegistry`] during startup and freezes
//! it before serving requests.

pub mod registry;
pub mod render;
pub mod types;

pub use registry::ContentBlockRegistry;
pub use types::{BlockError, ContentBlock, StyleRules};
