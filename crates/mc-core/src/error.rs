//! Configuration error type shared by the `mc-*` crates.

use thiserror::Error;

/// Errors produced while validating run configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `mc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
