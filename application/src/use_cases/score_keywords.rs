//! Score keywords use case
//!
//! Computes the keyword specificity bonus for a set of strong matches,
//! using the taxonomy's levels to tell specific tags from broad ones.

use super::load_taxonomy::TaxonomyService;
use crate::ports::progress::TaxonomyProgressNotifier;
use prospie_domain::{KeywordBonus, keyword_bonus};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for computing the keyword specificity bonus
pub struct ScoreKeywordsUseCase {
    taxonomy: Arc<TaxonomyService>,
}

impl ScoreKeywordsUseCase {
    pub fn new(taxonomy: Arc<TaxonomyService>) -> Self {
        Self { taxonomy }
    }

    /// Returns `None` when there are no strong matches.
    pub async fn execute(
        &self,
        strong_matches: &[(String, f64)],
        progress: &dyn TaxonomyProgressNotifier,
    ) -> Option<KeywordBonus> {
        if strong_matches.is_empty() {
            debug!("No strong keyword matches, no bonus");
            return None;
        }

        let rules = self.taxonomy.load_with_progress(progress).await;
        let bonus = keyword_bonus(strong_matches, &rules)?;
        info!(
            "Keyword bonus {:.3} from {} matches",
            bonus.bonus,
            bonus.keywords.len()
        );
        Some(bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoTaxonomyProgress;
    use crate::use_cases::shared::test_support::{StubSource, TAXONOMY_CSV};
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_bonus_uses_taxonomy_levels() {
        let service = Arc::new(TaxonomyService::new(Arc::new(StubSource::new(TAXONOMY_CSV))));
        let use_case = ScoreKeywordsUseCase::new(service);

        let matches = vec![
            ("care experienced".to_string(), 1.0),
            ("Education".to_string(), 1.0),
        ];
        let bonus = use_case.execute(&matches, &NoTaxonomyProgress).await.unwrap();

        assert_eq!(bonus.keywords[0].level, Some(3));
        assert_eq!(bonus.keywords[1].level, Some(1));
        // mean(1.0, 0.3) = 0.65 → 1.1 + 0.13
        assert!((bonus.bonus - 1.23).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_no_matches_skips_taxonomy_load() {
        let source = Arc::new(StubSource::new(TAXONOMY_CSV));
        let use_case = ScoreKeywordsUseCase::new(Arc::new(TaxonomyService::new(source.clone())));

        assert!(use_case.execute(&[], &NoTaxonomyProgress).await.is_none());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }
}
