//! Keyword classifier
//!
//! Maps a [`ClassificationInput`] and a [`RuleTable`] to a sorted,
//! case-insensitively unique keyword list:
//!
//! 1. Seed the working set with the lower-cased existing keywords
//! 2. Build the lower-cased [`Corpus`]
//! 3. Evaluate every taxonomy rule, in table order
//! 4. Test every area name as a word-bounded literal
//! 5. Resolve each key to its display form ([`resolve_display`])
//! 6. Sort
//!
//! Classification never fails: bad patterns become diagnostics on the
//! [`ClassificationReport`].

use super::corpus::Corpus;
use super::display::resolve_display;
use super::input::ClassificationInput;
use super::matcher::{AreaOutcome, CompiledRule, RuleOutcome, match_area};
use super::result::{
    ClassificationDiagnostic, ClassificationReport, ClassificationResult, DiagnosticKind,
    KeywordEntry,
};
use crate::taxonomy::RuleTable;
use std::collections::{BTreeSet, HashSet};

/// Classifier bound to one rule table
///
/// Patterns are compiled once in [`Classifier::new`], so a single instance
/// can classify many inputs cheaply.
///
/// # Example
///
/// ```
/// use prospie_domain::{ClassificationInput, Classifier};
/// use prospie_domain::taxonomy::{RuleTable, TaxonomyRule};
///
/// let rules = RuleTable::new(vec![TaxonomyRule::new("Care Experienced", "care.experienced")]);
/// let classifier = Classifier::new(rules);
///
/// let input = ClassificationInput::new()
///     .with_activities("We support care-experienced young people into education")
///     .with_areas(["Bristol"]);
///
/// let result = classifier.classify(&input);
/// assert_eq!(result.keywords(), ["Bristol", "Care Experienced"]);
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: RuleTable,
    compiled: Vec<CompiledRule>,
}

impl Classifier {
    pub fn new(rules: RuleTable) -> Self {
        let compiled = rules.iter().map(CompiledRule::compile).collect();
        Self { rules, compiled }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn classify(&self, input: &ClassificationInput) -> ClassificationResult {
        self.classify_with_report(input).result
    }

    pub fn classify_with_report(&self, input: &ClassificationInput) -> ClassificationReport {
        let mut report = ClassificationReport::default();

        let mut working_set: BTreeSet<String> = input
            .existing_keywords
            .iter()
            .filter(|keyword| !keyword.trim().is_empty())
            .map(|keyword| keyword.to_lowercase())
            .collect();

        let corpus = Corpus::from_input(input);

        for (rule, compiled) in self.rules.iter().zip(&self.compiled) {
            let outcome = compiled.evaluate(&corpus);
            match &outcome {
                RuleOutcome::InvalidInclude(error) => {
                    report.diagnostics.push(ClassificationDiagnostic {
                        kind: DiagnosticKind::InvalidInclude,
                        subject: rule.tag.clone(),
                        message: error.clone(),
                    });
                }
                RuleOutcome::MatchedIgnoringExclude(error) => {
                    report.diagnostics.push(ClassificationDiagnostic {
                        kind: DiagnosticKind::InvalidExclude,
                        subject: rule.tag.clone(),
                        message: error.clone(),
                    });
                }
                RuleOutcome::Excluded => report.excluded_rules += 1,
                _ => {}
            }

            if outcome.adds_tag() {
                report.matched_rules += 1;
                working_set.insert(rule.tag.to_lowercase());
            }
        }

        for area in input.areas.iter().filter(|area| !area.is_empty()) {
            let outcome = match_area(area, &corpus);
            if let AreaOutcome::Fallback(error) = &outcome {
                report.diagnostics.push(ClassificationDiagnostic {
                    kind: DiagnosticKind::AreaFallback,
                    subject: area.clone(),
                    message: error.clone(),
                });
            }
            if outcome.adds_area() {
                report.matched_areas += 1;
                working_set.insert(area.to_lowercase());
            }
        }

        let mut resolved: Vec<_> = working_set
            .iter()
            .map(|key| resolve_display(key, &self.rules, &input.areas))
            .collect();
        resolved.sort_by(|a, b| a.display.cmp(&b.display));

        let mut seen = HashSet::new();
        resolved.retain(|entry| seen.insert(entry.display.to_lowercase()));

        report.result =
            ClassificationResult::from_unsorted(resolved.iter().map(|r| r.display.clone()).collect());
        report.entries = resolved
            .into_iter()
            .map(|r| KeywordEntry {
                keyword: r.display,
                source: r.source,
            })
            .collect();

        report
    }
}

/// Classify `input` against `rules` in one call.
///
/// Prefer [`Classifier`] when classifying many inputs against the same table.
pub fn classify(input: &ClassificationInput, rules: &RuleTable) -> ClassificationResult {
    Classifier::new(rules.clone()).classify(input)
}
