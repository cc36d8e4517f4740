//! Keyword specificity bonus
//!
//! Strong keyword matches between a charity and a funder earn an alignment
//! bonus. Deep taxonomy tags (e.g. "Care leavers") say more than broad ones
//! (e.g. "Education"), so each match is weighted by its tag's level.
//!
//! | Level | Weight |
//! |-------|--------|
//! | 1 | 0.3 |
//! | 2 | 0.7 |
//! | 3 | 1.0 |
//! | other / missing | 1.0 |
//! | not in taxonomy | 0.3 |
//!
//! `bonus = clamp(1.1 + mean(weighted) * 0.2, 1.1, 1.3)`

use crate::core::error::DomainError;
use crate::taxonomy::RuleTable;
use serde::Serialize;

pub const MIN_BONUS: f64 = 1.1;
pub const MAX_BONUS: f64 = 1.3;
const BONUS_SCALE: f64 = 0.2;
const UNKNOWN_KEYWORD_WEIGHT: f64 = 0.3;

/// Weight for a taxonomy level
pub fn level_weight(level: Option<u8>) -> f64 {
    match level {
        Some(1) => 0.3,
        Some(2) => 0.7,
        _ => 1.0,
    }
}

/// One keyword's contribution to the bonus
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedKeyword {
    pub keyword: String,
    pub score: f64,
    /// Taxonomy level, when the keyword is a known tag
    pub level: Option<u8>,
    pub known_tag: bool,
    pub weight: f64,
    pub weighted_score: f64,
}

/// Computed specificity bonus
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordBonus {
    pub keywords: Vec<WeightedKeyword>,
    pub average_weighted: f64,
    pub bonus: f64,
}

/// Compute the specificity bonus for strongly matched keywords.
///
/// Returns `None` when there are no matches, since no bonus applies.
///
/// # Examples
///
/// ```
/// use prospie_domain::scoring::keyword_bonus;
/// use prospie_domain::taxonomy::{RuleTable, TaxonomyRule};
///
/// let rules = RuleTable::new(vec![TaxonomyRule::new("Care leavers", "care leaver").with_level(3)]);
/// let bonus = keyword_bonus(&[("care leavers".to_string(), 0.9)], &rules).unwrap();
/// assert!((bonus.bonus - 1.28).abs() < 1e-9);
/// ```
pub fn keyword_bonus(strong_matches: &[(String, f64)], rules: &RuleTable) -> Option<KeywordBonus> {
    if strong_matches.is_empty() {
        return None;
    }

    let keywords: Vec<WeightedKeyword> = strong_matches
        .iter()
        .map(|(keyword, score)| {
            let rule = rules.find_tag(keyword);
            let weight = match rule {
                Some(rule) => level_weight(rule.level),
                None => UNKNOWN_KEYWORD_WEIGHT,
            };
            WeightedKeyword {
                keyword: keyword.clone(),
                score: *score,
                level: rule.and_then(|r| r.level),
                known_tag: rule.is_some(),
                weight,
                weighted_score: score * weight,
            }
        })
        .collect();

    let average_weighted =
        keywords.iter().map(|k| k.weighted_score).sum::<f64>() / keywords.len() as f64;
    let bonus = (MIN_BONUS + average_weighted * BONUS_SCALE).clamp(MIN_BONUS, MAX_BONUS);

    Some(KeywordBonus {
        keywords,
        average_weighted,
        bonus,
    })
}

/// Parse a `KEYWORD=SCORE` pair, with the score in `[0, 1]`.
///
/// The keyword may itself contain `=`; the last one separates the score.
pub fn parse_keyword_score(s: &str) -> Result<(String, f64), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidScore {
        keyword: s.to_string(),
        reason: reason.to_string(),
    };

    let (keyword, score) = s.rsplit_once('=').ok_or_else(|| invalid("expected KEYWORD=SCORE"))?;
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(invalid("keyword is empty"));
    }

    let score: f64 = score
        .trim()
        .parse()
        .map_err(|_| invalid("score is not a number"))?;
    if !(0.0..=1.0).contains(&score) {
        return Err(invalid("score must be between 0 and 1"));
    }

    Ok((keyword.to_string(), score))
}
