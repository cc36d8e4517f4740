//! Alignment scoring helpers that depend on the taxonomy.

pub mod specificity;

pub use specificity::{
    KeywordBonus, MAX_BONUS, MIN_BONUS, WeightedKeyword, keyword_bonus, level_weight,
    parse_keyword_score,
};
