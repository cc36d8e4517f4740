//! Configuration file loading for prospie
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PROSPIE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./prospie.toml` or `./.prospie.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/prospie/config.toml`
//! 5. Fallback: `~/.config/prospie/config.toml`
//! 6. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat, FileTaxonomyConfig,
};
pub use loader::ConfigLoader;
