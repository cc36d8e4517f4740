//! Infrastructure layer for prospie
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod taxonomy;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat,
    FileTaxonomyConfig,
};
#[cfg(feature = "remote")]
pub use taxonomy::HttpTaxonomySource;
pub use taxonomy::{DEFAULT_TAXONOMY_URL, FileTaxonomySource};
