//! Workspace base error type.
//!
//! Sub-crates define their own error enums; `CoreError` covers the failures
//! shared by all of them: malformed textual input and invalid configuration.

use thiserror::Error;

/// The base error type for `rp-core` and a common building block for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `rp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
