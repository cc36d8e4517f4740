//! Taxonomy source adapters
//!
//! Implementations of [`TaxonomySourcePort`](prospie_application::TaxonomySourcePort).
//! The HTTP source is behind the `remote` feature.

pub mod file;
#[cfg(feature = "remote")]
pub mod http;

pub use file::FileTaxonomySource;
#[cfg(feature = "remote")]
pub use http::HttpTaxonomySource;

/// Published UK charity activity taxonomy
pub const DEFAULT_TAXONOMY_URL: &str =
    "https://raw.githubusercontent.com/lico27/ukcat/main/data/ukcat.csv";
