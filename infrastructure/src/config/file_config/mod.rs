//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod taxonomy;

pub use output::{FileOutputConfig, FileOutputFormat};
pub use taxonomy::FileTaxonomyConfig;

use prospie_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Raised when the configuration contains at least one fatal issue.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("{}", .0.iter().map(|i| i.message.as_str()).collect::<Vec<_>>().join("; "))]
    Invalid(Vec<ConfigIssue>),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where the taxonomy comes from
    pub taxonomy: FileTaxonomyConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let taxonomy = &self.taxonomy;

        if let Some(url) = taxonomy.url.as_deref()
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidTaxonomyUrl {
                    value: url.to_string(),
                },
                message: format!("taxonomy.url: '{}' is not an http(s) URL", url),
            });
        }

        if taxonomy.url.is_some() && taxonomy.path.is_some() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::AmbiguousTaxonomySource,
                message: "taxonomy.url and taxonomy.path are both set; using taxonomy.path"
                    .to_string(),
            });
        }

        if taxonomy.timeout_seconds == Some(0) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::ZeroTimeout,
                message: "taxonomy.timeout_seconds cannot be 0".to_string(),
            });
        }

        issues
    }

    /// Fail on error-severity issues, handing back the warnings.
    pub fn ensure_valid(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(ConfigIssue::is_error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError::Invalid(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospie_domain::OutputFormat;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[taxonomy]
url = "https://example.org/ukcat.csv"
timeout_seconds = 10
user_agent = "prospie-test"

[output]
format = "full"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.taxonomy.url.as_deref(),
            Some("https://example.org/ukcat.csv")
        );
        assert_eq!(config.taxonomy.timeout_seconds, Some(10));
        assert_eq!(config.taxonomy.user_agent.as_deref(), Some("prospie-test"));
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert!(config.ensure_valid().unwrap().is_empty());
    }

    #[test]
    fn test_non_http_url_is_error() {
        let mut config = FileConfig::default();
        config.taxonomy.url = Some("ftp://example.org/ukcat.csv".to_string());

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::InvalidTaxonomyUrl { .. }
        ));
        assert!(config.ensure_valid().is_err());
    }

    #[test]
    fn test_url_and_path_is_warning() {
        let mut config = FileConfig::default();
        config.taxonomy.url = Some("https://example.org/ukcat.csv".to_string());
        config.taxonomy.path = Some(PathBuf::from("ukcat.csv"));

        let warnings = config.ensure_valid().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, ConfigIssueCode::AmbiguousTaxonomySource);
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let mut config = FileConfig::default();
        config.taxonomy.timeout_seconds = Some(0);

        let err = config.ensure_valid().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }
}
