//! Output configuration from TOML (`[output]` section)
//!
//! ```toml
//! [output]
//! format = "full"   # tags | full | json; unset means tags
//! color = false     # plain text, e.g. when piping into a file
//! ```

use prospie_domain::OutputFormat;
use serde::{Deserialize, Serialize};

// Re-export OutputFormat from domain for convenience
pub use prospie_domain::OutputFormat as FileOutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// How extraction results are printed; `--output` overrides it
    pub format: Option<OutputFormat>,
    /// ANSI colors in the `full` report and rule listings
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let toml_str = r#"
[output]
format = "json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(config.output.color);
    }

    #[test]
    fn test_unset_format_means_tags() {
        let config: super::super::FileConfig = toml::from_str("[output]\ncolor = false\n").unwrap();
        assert!(!config.output.color);
        assert_eq!(config.output.format.unwrap_or_default(), OutputFormat::Tags);
    }
}
