//! Taxonomy domain
//!
//! The taxonomy (UKCAT) is an external vocabulary of tags, each with a
//! regular expression that decides whether a charity's text earns the tag.
//!
//! ```text
//! ukcat.csv ──parse_taxonomy──▶ RuleTable ──▶ Classifier
//!                                   │
//!                                   └──▶ KeywordSpecificity (levels)
//! ```

pub mod parsing;
pub mod rule;
pub mod table;

pub use parsing::{ParsedTaxonomy, parse_csv_line, parse_taxonomy};
pub use rule::TaxonomyRule;
pub use table::RuleTable;
