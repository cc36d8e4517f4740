//! Extract keywords use case
//!
//! Loads the taxonomy (once per process) and classifies a charity's
//! profile against it. Keyword extraction assists the form flow rather than
//! gating it, so this use case never fails: a missing taxonomy simply means
//! only the seed keywords and area names can come back.

use super::load_taxonomy::TaxonomyService;
use super::shared::log_diagnostics;
use crate::ports::progress::{NoTaxonomyProgress, TaxonomyProgressNotifier};
use prospie_domain::{ClassificationInput, ClassificationReport, ClassificationResult, Classifier};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Output of one keyword extraction
#[derive(Debug, Clone, Serialize)]
pub struct ExtractKeywordsOutput {
    /// Number of rules in the taxonomy used (0 when it failed to load)
    pub rule_count: usize,
    pub report: ClassificationReport,
}

impl ExtractKeywordsOutput {
    pub fn keywords(&self) -> &ClassificationResult {
        &self.report.result
    }
}

/// Use case for extracting keywords from a charity profile
pub struct ExtractKeywordsUseCase {
    taxonomy: Arc<TaxonomyService>,
}

impl ExtractKeywordsUseCase {
    pub fn new(taxonomy: Arc<TaxonomyService>) -> Self {
        Self { taxonomy }
    }

    pub async fn execute(&self, input: &ClassificationInput) -> ExtractKeywordsOutput {
        self.execute_with_progress(input, &NoTaxonomyProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        input: &ClassificationInput,
        progress: &dyn TaxonomyProgressNotifier,
    ) -> ExtractKeywordsOutput {
        let classifier = Classifier::new(self.taxonomy.load_with_progress(progress).await);
        Self::run(&classifier, input)
    }

    /// Classify several profiles against one taxonomy load.
    ///
    /// Outputs are returned in input order.
    pub async fn execute_batch(
        &self,
        inputs: &[ClassificationInput],
        progress: &dyn TaxonomyProgressNotifier,
    ) -> Vec<ExtractKeywordsOutput> {
        let classifier = Classifier::new(self.taxonomy.load_with_progress(progress).await);
        info!("Classifying {} profiles", inputs.len());
        inputs
            .iter()
            .map(|input| Self::run(&classifier, input))
            .collect()
    }

    fn run(classifier: &Classifier, input: &ClassificationInput) -> ExtractKeywordsOutput {
        let report = classifier.classify_with_report(input);
        log_diagnostics(&report.diagnostics);
        info!(
            "Extracted {} keywords ({} rule matches, {} area matches)",
            report.result.len(),
            report.matched_rules,
            report.matched_areas
        );

        ExtractKeywordsOutput {
            rule_count: classifier.rules().len(),
            report,
        }
    }
}
