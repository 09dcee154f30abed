//! Workspace base error type.
//!
//! Sub-crates define their own error enums and convert `SwError` into them
//! via `From` where a core operation (e.g. parameter validation) can fail.

use thiserror::Error;

/// The top-level error type for `sw-core`.
#[derive(Debug, Error)]
pub enum SwError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sw-core`.
pub type SwResult<T> = Result<T, SwError>;
