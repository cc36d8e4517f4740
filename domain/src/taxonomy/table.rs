//! Immutable rule table

use super::rule::TaxonomyRule;
use std::sync::Arc;

/// Ordered, shared list of taxonomy rules
///
/// Cloning is cheap: the rules live behind an `Arc` and are never mutated
/// once the table is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: Arc<[TaxonomyRule]>,
}

impl RuleTable {
    pub fn new(rules: Vec<TaxonomyRule>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    /// An empty table: "no external classifications available".
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaxonomyRule> {
        self.rules.iter()
    }

    pub fn rules(&self) -> &[TaxonomyRule] {
        &self.rules
    }

    /// First rule (in table order) whose tag lower-cases to `key`.
    ///
    /// `key` must already be lower-cased.
    pub fn find_by_key(&self, key: &str) -> Option<&TaxonomyRule> {
        self.rules.iter().find(|rule| rule.tag_matches_key(key))
    }

    /// Case-insensitive tag lookup.
    pub fn find_tag(&self, tag: &str) -> Option<&TaxonomyRule> {
        self.find_by_key(&tag.to_lowercase())
    }
}

impl From<Vec<TaxonomyRule>> for RuleTable {
    fn from(rules: Vec<TaxonomyRule>) -> Self {
        Self::new(rules)
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a TaxonomyRule;
    type IntoIter = std::slice::Iter<'a, TaxonomyRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
