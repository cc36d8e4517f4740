//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod extract_keywords;
pub mod load_taxonomy;
pub mod score_keywords;
pub(crate) mod shared;
