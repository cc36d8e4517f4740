//! Configuration issues
//!
//! Configuration is validated up front and every problem is reported as a
//! structured [`ConfigIssue`] rather than failing on the first one.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// Taxonomy URL is not an http(s) URL
    InvalidTaxonomyUrl { value: String },
    /// Both a URL and a local path are set; the path wins
    AmbiguousTaxonomySource,
    /// A zero timeout would fail every load
    ZeroTimeout,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_error() {
        let issue = ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::AmbiguousTaxonomySource,
            message: "both set".to_string(),
        };
        assert!(!issue.is_error());

        let issue = ConfigIssue {
            severity: Severity::Error,
            code: ConfigIssueCode::ZeroTimeout,
            message: "zero".to_string(),
        };
        assert!(issue.is_error());
    }
}
