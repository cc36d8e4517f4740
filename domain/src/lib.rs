//! Domain layer for prospie keyword extraction
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Taxonomy
//!
//! An external vocabulary (UKCAT) of tags, each with an include regex and an
//! optional exclude regex. Parsed from CSV into an immutable [`RuleTable`].
//!
//! ## Classification
//!
//! A charity's profile ([`ClassificationInput`]) is flattened into a
//! lower-cased corpus. Every rule and every area name is tested against it,
//! and the hits (plus the caller's existing keywords) become a sorted,
//! case-insensitively unique [`ClassificationResult`].
//!
//! ## Scoring
//!
//! Strong keyword matches are weighted by taxonomy level to produce a
//! specificity bonus ([`scoring::keyword_bonus`]).

pub mod classification;
pub mod config;
pub mod core;
pub mod scoring;
pub mod taxonomy;

// Re-export commonly used types
pub use classification::{
    ClassificationDiagnostic, ClassificationInput, ClassificationReport, ClassificationResult,
    Classifier, DiagnosticKind, DisplaySource, KeywordEntry, classify,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use scoring::{KeywordBonus, WeightedKeyword, keyword_bonus, parse_keyword_score};
pub use taxonomy::{ParsedTaxonomy, RuleTable, TaxonomyRule, parse_taxonomy};
