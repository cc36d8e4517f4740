//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — domain-level errors
//! - [`string`] — casing and truncation helpers

pub mod error;
pub mod string;
