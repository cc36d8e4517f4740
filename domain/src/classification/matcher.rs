//! Rule and area matching against a corpus.
//!
//! Each rule is compiled into its own fallible unit so a bad pattern in the
//! taxonomy never aborts the rest of the batch:
//!
//! | Include | Exclude | Outcome |
//! |---------|---------|---------|
//! | empty | - | [`RuleOutcome::Inert`] |
//! | invalid | - | [`RuleOutcome::InvalidInclude`] |
//! | no match | - | [`RuleOutcome::NoMatch`] |
//! | match | absent / blank / no match | [`RuleOutcome::Matched`] |
//! | match | match | [`RuleOutcome::Excluded`] |
//! | match | invalid | [`RuleOutcome::MatchedIgnoringExclude`] |

use super::corpus::Corpus;
use crate::taxonomy::TaxonomyRule;
use regex::{Regex, RegexBuilder};

/// Result of evaluating one rule against a corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// No tag or no include pattern
    Inert,
    /// Include pattern failed to compile (error message)
    InvalidInclude(String),
    NoMatch,
    /// Include matched but the exclude pattern matched too
    Excluded,
    Matched,
    /// Include matched; the exclude pattern failed to compile and was ignored
    MatchedIgnoringExclude(String),
}

impl RuleOutcome {
    /// Whether the rule's tag goes into the working set
    pub fn adds_tag(&self) -> bool {
        matches!(
            self,
            RuleOutcome::Matched | RuleOutcome::MatchedIgnoringExclude(_)
        )
    }
}

#[derive(Debug, Clone)]
enum CompiledPatterns {
    Inert,
    Invalid(String),
    Ready {
        include: Regex,
        exclude: Option<Result<Regex, String>>,
    },
}

/// A taxonomy rule with its patterns compiled case-insensitively
#[derive(Debug, Clone)]
pub struct CompiledRule {
    patterns: CompiledPatterns,
}

impl CompiledRule {
    pub fn compile(rule: &TaxonomyRule) -> Self {
        let patterns = if rule.is_inert() {
            CompiledPatterns::Inert
        } else {
            match compile_case_insensitive(&rule.include_pattern) {
                Err(error) => CompiledPatterns::Invalid(error),
                Ok(include) => CompiledPatterns::Ready {
                    include,
                    exclude: rule.exclude_pattern().map(compile_case_insensitive),
                },
            }
        };
        Self { patterns }
    }

    pub fn evaluate(&self, corpus: &Corpus) -> RuleOutcome {
        let (include, exclude) = match &self.patterns {
            CompiledPatterns::Inert => return RuleOutcome::Inert,
            CompiledPatterns::Invalid(error) => return RuleOutcome::InvalidInclude(error.clone()),
            CompiledPatterns::Ready { include, exclude } => (include, exclude),
        };

        if !include.is_match(corpus.as_str()) {
            return RuleOutcome::NoMatch;
        }

        match exclude {
            None => RuleOutcome::Matched,
            Some(Ok(exclude)) if exclude.is_match(corpus.as_str()) => RuleOutcome::Excluded,
            Some(Ok(_)) => RuleOutcome::Matched,
            Some(Err(error)) => RuleOutcome::MatchedIgnoringExclude(error.clone()),
        }
    }
}

/// Compile and evaluate a single rule in one step.
///
/// # Examples
///
/// ```
/// use prospie_domain::classification::{Corpus, RuleOutcome, evaluate_rule};
/// use prospie_domain::taxonomy::TaxonomyRule;
///
/// let rule = TaxonomyRule::new("Education", "school").with_exclude("pre-school");
/// let outcome = evaluate_rule(&rule, &Corpus::new("We run a pre-school programme"));
/// assert_eq!(outcome, RuleOutcome::Excluded);
/// ```
pub fn evaluate_rule(rule: &TaxonomyRule, corpus: &Corpus) -> RuleOutcome {
    CompiledRule::compile(rule).evaluate(corpus)
}

/// Result of testing an area name against a corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaOutcome {
    Matched,
    NoMatch,
    /// The word-bounded pattern could not be built; the name is added as-is
    Fallback(String),
}

impl AreaOutcome {
    pub fn adds_area(&self) -> bool {
        matches!(self, AreaOutcome::Matched | AreaOutcome::Fallback(_))
    }
}

/// Test whether `area` occurs as a whole word (or word-bounded phrase).
///
/// The name is matched literally: every regex metacharacter is escaped and
/// the result is wrapped in `\b ... \b`.
///
/// # Examples
///
/// ```
/// use prospie_domain::classification::{AreaOutcome, Corpus, match_area};
///
/// let corpus = Corpus::new("We support Bristol-based projects");
/// assert_eq!(match_area("Bristol", &corpus), AreaOutcome::Matched);
///
/// let corpus = Corpus::new("Farms across East Bristolshire");
/// assert_eq!(match_area("Bristol", &corpus), AreaOutcome::NoMatch);
/// ```
pub fn match_area(area: &str, corpus: &Corpus) -> AreaOutcome {
    let pattern = format!(r"\b{}\b", regex::escape(area));
    match compile_case_insensitive(&pattern) {
        Ok(regex) if regex.is_match(corpus.as_str()) => AreaOutcome::Matched,
        Ok(_) => AreaOutcome::NoMatch,
        Err(error) => AreaOutcome::Fallback(error),
    }
}

fn compile_case_insensitive(pattern: &str) -> Result<Regex, String> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| e.to_string())
}
