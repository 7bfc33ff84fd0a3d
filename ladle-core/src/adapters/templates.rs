//! Template source adapters
//!
//! `EmbeddedTemplates` serves the fragments compiled into the binary;
//! `FsTemplateSource` resolves references against a directory on disk for
//! users who customize their views.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::result::{Error, Result};
use crate::ports::TemplateSource;
use crate::templates;

/// Template source backed by the embedded fragment table
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmbeddedTemplates {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TemplateSource for EmbeddedTemplates {
    async fn load(&self, reference: &str) -> Result<String> {
        templates::find(reference)
            .map(str::to_string)
            .ok_or_else(|| Error::template(format!("unknown template: {}", reference)))
    }
}

/// Template source backed by a directory of markup fragments
pub struct FsTemplateSource {
    root: PathBuf,
}

impl FsTemplateSource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl TemplateSource for FsTemplateSource {
    async fn load(&self, reference: &str) -> Result<String> {
        let path = self.root.join(reference);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::template(format!("failed to load {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_embedded_templates_resolve() {
        let source = EmbeddedTemplates::new();

        let home = source.load("home.html").await.unwrap();
        assert!(home.contains("<section"));

        let missing = source.load("nope.html").await;
        assert!(matches!(missing, Err(Error::Template(_))));
    }

    #[tokio::test]
    async fn test_fs_templates_resolve() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("home.html"), "<p>custom</p>").unwrap();

        let source = FsTemplateSource::new(dir.path().to_path_buf());
        assert_eq!(source.load("home.html").await.unwrap(), "<p>custom</p>");
        assert!(source.load("missing.html").await.is_err());
    }
}
