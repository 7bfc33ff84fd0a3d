//! View template port
//!
//! A template reference is a path-like string resolved to a markup fragment.
//! The router treats the content as opaque text; a failed load surfaces as a
//! template error and is mapped to the router's error pseudo-state.

use async_trait::async_trait;

use crate::domain::result::Result;

/// Template source trait
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Resolve a template reference to its markup fragment
    async fn load(&self, reference: &str) -> Result<String>;
}
