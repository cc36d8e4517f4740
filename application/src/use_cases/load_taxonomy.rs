//! Taxonomy loading
//!
//! [`TaxonomyService`] owns the process-lifetime rule table. The first
//! caller fetches and parses the document; concurrent callers wait on that
//! same in-flight load, and later callers get the cached table.
//!
//! A failed load is logged and answered with an empty table. Failures are
//! not cached, so the next call tries again.
//!
//! # Usage
//!
//! ```ignore
//! use prospie_application::TaxonomyService;
//! use std::sync::Arc;
//!
//! let service = Arc::new(TaxonomyService::new(source));
//! let rules = service.load().await; // fetch + parse
//! let again = service.load().await; // cached
//! ```

use crate::config::BehaviorConfig;
use crate::ports::progress::{NoTaxonomyProgress, TaxonomyProgressNotifier};
use crate::ports::taxonomy_source::{TaxonomyFetchError, TaxonomySourcePort};
use prospie_domain::{RuleTable, parse_taxonomy};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

/// Memoizing taxonomy loader
pub struct TaxonomyService {
    source: Arc<dyn TaxonomySourcePort>,
    behavior: BehaviorConfig,
    cache: OnceCell<RuleTable>,
}

impl TaxonomyService {
    pub fn new(source: Arc<dyn TaxonomySourcePort>) -> Self {
        Self {
            source,
            behavior: BehaviorConfig::default(),
            cache: OnceCell::new(),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn location(&self) -> String {
        self.source.location()
    }

    /// The cached table, if a load has already succeeded.
    pub fn cached(&self) -> Option<RuleTable> {
        self.cache.get().cloned()
    }

    /// Load the rule table, degrading to an empty table on failure.
    pub async fn load(&self) -> RuleTable {
        self.load_with_progress(&NoTaxonomyProgress).await
    }

    /// Same as [`load`](Self::load) with progress callbacks.
    pub async fn load_with_progress(&self, progress: &dyn TaxonomyProgressNotifier) -> RuleTable {
        match self.try_load_with_progress(progress).await {
            Ok(table) => table,
            Err(e) => {
                warn!("Error fetching taxonomy from {}: {}", self.source.location(), e);
                RuleTable::empty()
            }
        }
    }

    /// Load the rule table, surfacing the failure instead of degrading.
    pub async fn try_load(&self) -> Result<RuleTable, TaxonomyFetchError> {
        self.try_load_with_progress(&NoTaxonomyProgress).await
    }

    pub async fn try_load_with_progress(
        &self,
        progress: &dyn TaxonomyProgressNotifier,
    ) -> Result<RuleTable, TaxonomyFetchError> {
        if let Some(table) = self.cache.get() {
            debug!("Using cached taxonomy ({} rules)", table.len());
            return Ok(table.clone());
        }

        self.cache
            .get_or_try_init(|| self.fetch_and_parse(progress))
            .await
            .cloned()
    }

    async fn fetch_and_parse(
        &self,
        progress: &dyn TaxonomyProgressNotifier,
    ) -> Result<RuleTable, TaxonomyFetchError> {
        let location = self.source.location();
        info!("Fetching taxonomy from {}", location);
        progress.on_fetch_start(&location);

        let result = self.fetch_document().await.and_then(|text| {
            let parsed = parse_taxonomy(&text)?;
            if parsed.skipped_rows > 0 {
                debug!("Skipped {} malformed taxonomy rows", parsed.skipped_rows);
            }
            Ok(parsed.table)
        });

        match &result {
            Ok(table) => {
                info!("Loaded {} taxonomy rules", table.len());
                progress.on_fetch_complete(table.len(), true);
            }
            Err(_) => progress.on_fetch_complete(0, false),
        }

        result
    }

    async fn fetch_document(&self) -> Result<String, TaxonomyFetchError> {
        match self.behavior.load_timeout {
            Some(limit) => tokio::time::timeout(limit, self.source.fetch_document())
                .await
                .map_err(|_| TaxonomyFetchError::Timeout(limit))?,
            None => self.source.fetch_document().await,
        }
    }
}
