//! Taxonomy rules
//!
//! A rule assigns a tag when its include pattern matches the corpus and its
//! exclude pattern (if any) does not.

use serde::{Deserialize, Serialize};

/// A single tag → pattern rule from the taxonomy document
///
/// # Example
///
/// ```
/// use prospie_domain::taxonomy::TaxonomyRule;
///
/// let rule = TaxonomyRule::new("Education", "school").with_exclude("pre-school");
/// assert!(!rule.is_inert());
/// assert_eq!(rule.exclude_pattern(), Some("pre-school"));
///
/// let inert = TaxonomyRule::new("Education", "");
/// assert!(inert.is_inert());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyRule {
    /// Label assigned when the rule matches
    pub tag: String,
    /// Regular expression tested case-insensitively against the corpus
    pub include_pattern: String,
    /// Regular expression that suppresses the rule when it matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_pattern: Option<String>,
    /// Taxonomy code (e.g. `"BE-AG-YO"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Top-level category the tag belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Depth in the taxonomy hierarchy (1 = broadest)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
}

impl TaxonomyRule {
    pub fn new(tag: impl Into<String>, include_pattern: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            include_pattern: include_pattern.into(),
            exclude_pattern: None,
            code: None,
            category: None,
            level: None,
        }
    }

    pub fn with_exclude(mut self, exclude_pattern: impl Into<String>) -> Self {
        self.exclude_pattern = Some(exclude_pattern.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    /// A rule with no tag or no include pattern never contributes a tag.
    pub fn is_inert(&self) -> bool {
        self.tag.trim().is_empty() || self.include_pattern.trim().is_empty()
    }

    /// The exclude pattern, if present and not blank.
    pub fn exclude_pattern(&self) -> Option<&str> {
        self.exclude_pattern
            .as_deref()
            .filter(|pattern| !pattern.trim().is_empty())
    }

    /// Whether this rule's tag equals `key` once lower-cased.
    pub fn tag_matches_key(&self, key: &str) -> bool {
        !self.tag.is_empty() && self.tag.to_lowercase() == key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_exclude_is_none() {
        let rule = TaxonomyRule::new("Youth", "young people").with_exclude("   ");
        assert_eq!(rule.exclude_pattern(), None);
    }

    #[test]
    fn test_blank_tag_is_inert() {
        assert!(TaxonomyRule::new("", "school").is_inert());
        assert!(TaxonomyRule::new("Education", "  ").is_inert());
        assert!(!TaxonomyRule::new("Education", "school").is_inert());
    }

    #[test]
    fn test_tag_matches_key() {
        let rule = TaxonomyRule::new("Care Experienced", "care.experienced");
        assert!(rule.tag_matches_key("care experienced"));
        assert!(!rule.tag_matches_key("Care Experienced"));
        assert!(!TaxonomyRule::new("", "x").tag_matches_key(""));
    }

    #[test]
    fn test_serialize_skips_missing_optionals() {
        let json = serde_json::to_string(&TaxonomyRule::new("Arts", "\\barts?\\b")).unwrap();
        assert!(!json.contains("exclude_pattern"));
        assert!(!json.contains("level"));
    }
}
