//! Configuration for the catalog.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a [`crate::registry::ContentRegistry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Schema version stamped onto records at registration time
    pub schema_version: String,
    /// Directory holding per-lab JSON documents, if labs load from disk
    pub labs_dir: Option<PathBuf>,
    /// Search settings
    pub search: SearchConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            schema_version: "1.0.0".to_string(),
            labs_dir: None,
            search: SearchConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Load config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// Search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Cap on matches returned per entity kind
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_results: 200 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.schema_version, "1.0.0");
        assert!(config.labs_dir.is_none());
        assert_eq!(config.search.max_results, 200);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = CatalogConfig::default();
        config.labs_dir = Some(PathBuf::from("/var/lib/catalog/labs"));
        let yaml = config.to_yaml().unwrap();
        let parsed = CatalogConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.labs_dir, config.labs_dir);
        assert_eq!(parsed.search.max_results, 200);
    }
}
