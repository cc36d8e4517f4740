//! Display-form resolution for working-set keys.
//!
//! Keys in the working set are lower-cased. Each one is mapped back to a
//! presentable form by checking, in order:
//!
//! 1. [`DisplaySource::RuleTag`]: a taxonomy rule whose tag lower-cases to the key
//! 2. [`DisplaySource::AreaName`]: an input area whose name lower-cases to the key
//! 3. [`DisplaySource::Capitalized`]: the key with its first character upper-cased
//!
//! The order applies no matter where the key came from, so a seed keyword
//! `"care experienced"` is shown as the rule's `"Care Experienced"`.

use crate::core::string::capitalize_first;
use crate::taxonomy::RuleTable;
use serde::Serialize;

/// Where a keyword's display casing came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplaySource {
    RuleTag,
    AreaName,
    Capitalized,
}

impl DisplaySource {
    /// All sources in precedence order
    pub const PRECEDENCE: [DisplaySource; 3] = [
        DisplaySource::RuleTag,
        DisplaySource::AreaName,
        DisplaySource::Capitalized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplaySource::RuleTag => "rule_tag",
            DisplaySource::AreaName => "area_name",
            DisplaySource::Capitalized => "capitalized",
        }
    }
}

impl std::fmt::Display for DisplaySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A working-set key resolved to its display form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedKeyword {
    pub display: String,
    pub source: DisplaySource,
}

/// Resolve one lower-cased key to its display form.
///
/// # Examples
///
/// ```
/// use prospie_domain::classification::{DisplaySource, resolve_display};
/// use prospie_domain::taxonomy::{RuleTable, TaxonomyRule};
///
/// let rules = RuleTable::new(vec![TaxonomyRule::new("Care Experienced", "care.experienced")]);
/// let areas = vec!["Bristol".to_string()];
///
/// assert_eq!(resolve_display("care experienced", &rules, &areas).display, "Care Experienced");
/// assert_eq!(resolve_display("bristol", &rules, &areas).source, DisplaySource::AreaName);
/// assert_eq!(resolve_display("youth", &rules, &areas).display, "Youth");
/// ```
pub fn resolve_display(key: &str, rules: &RuleTable, areas: &[String]) -> ResolvedKeyword {
    DisplaySource::PRECEDENCE
        .iter()
        .find_map(|source| lookup(*source, key, rules, areas))
        .unwrap_or_else(|| ResolvedKeyword {
            display: capitalize_first(key),
            source: DisplaySource::Capitalized,
        })
}

fn lookup(
    source: DisplaySource,
    key: &str,
    rules: &RuleTable,
    areas: &[String],
) -> Option<ResolvedKeyword> {
    let display = match source {
        DisplaySource::RuleTag => rules.find_by_key(key).map(|rule| rule.tag.clone()),
        DisplaySource::AreaName => areas
            .iter()
            .find(|area| !area.is_empty() && area.to_lowercase() == key)
            .cloned(),
        DisplaySource::Capitalized => Some(capitalize_first(key)),
    }?;
    Some(ResolvedKeyword { display, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::TaxonomyRule;

    fn rules() -> RuleTable {
        RuleTable::new(vec![
            TaxonomyRule::new("Bristol", "bristol"),
            TaxonomyRule::new("Young People", "youth"),
        ])
    }

    #[test]
    fn test_rule_tag_beats_area_name() {
        let areas = vec!["BRISTOL".to_string()];
        let resolved = resolve_display("bristol", &rules(), &areas);
        assert_eq!(resolved.display, "Bristol");
        assert_eq!(resolved.source, DisplaySource::RuleTag);
    }

    #[test]
    fn test_area_name_beats_capitalization() {
        let areas = vec!["City of London".to_string()];
        let resolved = resolve_display("city of london", &rules(), &areas);
        assert_eq!(resolved.display, "City of London");
        assert_eq!(resolved.source, DisplaySource::AreaName);
    }

    #[test]
    fn test_capitalization_fallback() {
        let resolved = resolve_display("mental health", &rules(), &[]);
        assert_eq!(resolved.display, "Mental health");
        assert_eq!(resolved.source, DisplaySource::Capitalized);
    }

    #[test]
    fn test_precedence_order() {
        assert_eq!(
            DisplaySource::PRECEDENCE,
            [
                DisplaySource::RuleTag,
                DisplaySource::AreaName,
                DisplaySource::Capitalized
            ]
        );
    }

    #[test]
    fn test_source_display() {
        assert_eq!(DisplaySource::AreaName.to_string(), "area_name");
    }
}
