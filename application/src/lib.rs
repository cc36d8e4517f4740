//! Application layer for prospie keyword extraction
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    progress::{NoTaxonomyProgress, TaxonomyProgressNotifier},
    taxonomy_source::{TaxonomyFetchError, TaxonomySourcePort},
};
pub use use_cases::extract_keywords::{ExtractKeywordsOutput, ExtractKeywordsUseCase};
pub use use_cases::load_taxonomy::TaxonomyService;
pub use use_cases::score_keywords::ScoreKeywordsUseCase;
