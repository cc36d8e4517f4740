//! Classification output types

use super::display::DisplaySource;
use serde::Serialize;

/// Sorted, case-insensitively unique keyword list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassificationResult {
    keywords: Vec<String>,
}

impl ClassificationResult {
    /// Sort with ordinary string ordering and drop entries whose lower-cased
    /// form was already seen.
    pub fn from_unsorted(mut keywords: Vec<String>) -> Self {
        keywords.sort();
        let mut seen = std::collections::HashSet::new();
        keywords.retain(|keyword| seen.insert(keyword.to_lowercase()));
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn into_keywords(self) -> Vec<String> {
        self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.keywords.iter()
    }

    pub fn contains_ignore_case(&self, keyword: &str) -> bool {
        let key = keyword.to_lowercase();
        self.keywords.iter().any(|k| k.to_lowercase() == key)
    }
}

impl<'a> IntoIterator for &'a ClassificationResult {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// What went wrong with a rule or area during classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Include pattern did not compile; the rule was skipped
    InvalidInclude,
    /// Exclude pattern did not compile; the rule was not excluded
    InvalidExclude,
    /// Area pattern could not be built; the area was added unverified
    AreaFallback,
}

/// A non-fatal problem found while classifying
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationDiagnostic {
    pub kind: DiagnosticKind,
    /// Rule tag or area name
    pub subject: String,
    pub message: String,
}

impl std::fmt::Display for ClassificationDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let what = match self.kind {
            DiagnosticKind::InvalidInclude => "invalid regex for tag",
            DiagnosticKind::InvalidExclude => "invalid exclude regex for tag",
            DiagnosticKind::AreaFallback => "unverified area",
        };
        write!(f, "{} '{}': {}", what, self.subject, self.message)
    }
}

/// Keyword with the provenance of its display casing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub source: DisplaySource,
}

/// Full classification output: keywords plus everything needed to explain them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationReport {
    pub result: ClassificationResult,
    /// Display provenance for each keyword, in result order
    pub entries: Vec<KeywordEntry>,
    /// Rules whose tag was added
    pub matched_rules: usize,
    /// Rules suppressed by their exclude pattern
    pub excluded_rules: usize,
    /// Areas found in the corpus (or added unverified)
    pub matched_areas: usize,
    pub diagnostics: Vec<ClassificationDiagnostic>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unsorted_sorts_bytewise() {
        let result = ClassificationResult::from_unsorted(vec![
            "care".to_string(),
            "Bristol".to_string(),
            "Arts".to_string(),
        ]);
        // Upper-case letters sort before lower-case ones
        assert_eq!(result.keywords(), ["Arts", "Bristol", "care"]);
    }

    #[test]
    fn test_from_unsorted_dedups_case_insensitively() {
        let result =
            ClassificationResult::from_unsorted(vec!["Youth".to_string(), "youth".to_string()]);
        assert_eq!(result.len(), 1);
        assert!(result.contains_ignore_case("YOUTH"));
    }

    #[test]
    fn test_serialize_transparent() {
        let result = ClassificationResult::from_unsorted(vec!["Arts".to_string()]);
        assert_eq!(serde_json::to_string(&result).unwrap(), r#"["Arts"]"#);
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = ClassificationDiagnostic {
            kind: DiagnosticKind::InvalidInclude,
            subject: "Broken".to_string(),
            message: "unclosed group".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "invalid regex for tag 'Broken': unclosed group"
        );
    }
}
