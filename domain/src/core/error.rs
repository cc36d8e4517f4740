//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Taxonomy document is empty")]
    EmptyTaxonomy,

    #[error("Taxonomy header is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Invalid keyword score for '{keyword}': {reason}")]
    InvalidScore { keyword: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let error = DomainError::MissingColumn("tag".to_string());
        assert_eq!(
            error.to_string(),
            "Taxonomy header is missing required column 'tag'"
        );
    }
}
