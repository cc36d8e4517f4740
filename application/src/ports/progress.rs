//! Progress notification port
//!
//! Defines the interface for reporting progress while the taxonomy loads.

/// Callback for taxonomy load progress
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait TaxonomyProgressNotifier: Send + Sync {
    /// Called before the document is fetched
    fn on_fetch_start(&self, _location: &str) {}

    /// Called once the fetch and parse finished (or failed)
    fn on_fetch_complete(&self, _rule_count: usize, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoTaxonomyProgress;

impl TaxonomyProgressNotifier for NoTaxonomyProgress {}
