//! Keyword classification domain
//!
//! Pure functions that turn a charity's profile into taxonomy keywords.
//! No I/O happens here; the rule table is handed in by the caller.

pub mod classifier;
pub mod corpus;
pub mod display;
pub mod input;
pub mod matcher;
pub mod result;

pub use classifier::{Classifier, classify};
pub use corpus::Corpus;
pub use display::{DisplaySource, ResolvedKeyword, resolve_display};
pub use input::ClassificationInput;
pub use matcher::{AreaOutcome, CompiledRule, RuleOutcome, evaluate_rule, match_area};
pub use result::{
    ClassificationDiagnostic, ClassificationReport, ClassificationResult, DiagnosticKind,
    KeywordEntry,
};
