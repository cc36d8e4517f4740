//! Taxonomy source configuration from TOML (`[taxonomy]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw taxonomy configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTaxonomyConfig {
    /// Remote CSV location; the published taxonomy when unset
    pub url: Option<String>,
    /// Local CSV file; takes precedence over `url`
    pub path: Option<PathBuf>,
    /// Load timeout in seconds (`None` waits indefinitely)
    pub timeout_seconds: Option<u64>,
    /// User-Agent header for remote fetches
    pub user_agent: Option<String>,
}

impl Default for FileTaxonomyConfig {
    fn default() -> Self {
        Self {
            url: None,
            path: None,
            timeout_seconds: Some(30),
            user_agent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_section_keeps_defaults() {
        let toml_str = r#"
[taxonomy]
path = "data/ukcat.csv"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.taxonomy.path, Some(PathBuf::from("data/ukcat.csv")));
        assert_eq!(config.taxonomy.timeout_seconds, Some(30));
        assert!(config.taxonomy.url.is_none());
    }
}
