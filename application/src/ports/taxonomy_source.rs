//! Taxonomy source port.
//!
//! Defines where the raw taxonomy CSV comes from. Infrastructure adapters
//! implement this for HTTP and local files; parsing and caching happen in
//! [`TaxonomyService`](crate::use_cases::load_taxonomy::TaxonomyService).

use async_trait::async_trait;
use prospie_domain::DomainError;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while obtaining the taxonomy.
#[derive(Error, Debug)]
pub enum TaxonomyFetchError {
    /// The request could not be sent or the body could not be read
    #[error("Request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status
    #[error("HTTP error: {status} {reason}")]
    Status { status: u16, reason: String },

    /// The document exceeds the size limit
    #[error("Taxonomy too large: {size} bytes (max: {max} bytes)")]
    TooLarge { size: u64, max: u64 },

    /// A local taxonomy file could not be read
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// The document was fetched but is not a usable taxonomy
    #[error("Failed to parse taxonomy: {0}")]
    Parse(#[from] DomainError),

    /// The load did not finish within the configured timeout
    #[error("Taxonomy load timed out after {0:?}")]
    Timeout(Duration),
}

/// Port for fetching the raw taxonomy document.
#[async_trait]
pub trait TaxonomySourcePort: Send + Sync {
    /// Where the document comes from (URL or path), for logs and progress.
    fn location(&self) -> String;

    /// Fetch the whole CSV document as text.
    async fn fetch_document(&self) -> Result<String, TaxonomyFetchError>;
}
