//! Configuration management
//!
//! Settings live in a `settings.json` in the ladle directory:
//! ```json
//! {
//!   "app": { "demoMode": false, "templatesDir": null },
//!   "catalog": { "url": "https://www.themealdb.com/api/json/v1/1" }
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::adapters::mealdb::DEFAULT_CATALOG_URL;

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(default)]
    catalog: CatalogSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    #[serde(default)]
    templates_dir: Option<PathBuf>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogSettings {
    #[serde(default)]
    url: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Ladle configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub demo_mode: bool,
    pub catalog_url: String,
    pub templates_dir: Option<PathBuf>,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo_mode: false,
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            templates_dir: None,
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the ladle directory
    ///
    /// Demo mode can be enabled via:
    /// 1. Settings file (ladle demo on)
    /// 2. Environment variable LADLE_DEMO_MODE (for CI/testing)
    pub fn load(ladle_dir: &Path) -> Result<Self> {
        let settings_path = ladle_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let demo_mode = match std::env::var("LADLE_DEMO_MODE").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.demo_mode,
        };

        Ok(Self {
            demo_mode,
            catalog_url: raw
                .catalog
                .url
                .clone()
                .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string()),
            templates_dir: raw.app.templates_dir.clone(),
            _raw_settings: raw,
        })
    }

    /// Save config to the ladle directory
    /// Preserves settings the application doesn't manage
    pub fn save(&self, ladle_dir: &Path) -> Result<()> {
        let settings_path = ladle_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.demo_mode = self.demo_mode;
        settings.app.templates_dir = self.templates_dir.clone();
        settings.catalog.url = Some(self.catalog_url.clone());

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Enable demo mode
    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
    }

    /// Disable demo mode
    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_settings_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert!(!config.demo_mode);
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert!(config.templates_dir.is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();

        let mut config = Config::default();
        config.enable_demo_mode();
        config.catalog_url = "http://localhost:9000/api".to_string();
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert!(loaded.demo_mode);
        assert_eq!(loaded.catalog_url, "http://localhost:9000/api");
    }

    #[test]
    fn test_corrupt_settings_file_yields_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{broken").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert!(!config.demo_mode);
    }
}
