//! Core error types for cinelog-core

use thiserror::Error;

/// Errors that can occur when handling domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Runtime string did not match the `"<minutes> mins"` format
    #[error("invalid runtime format")]
    InvalidRuntimeFormat,

    /// Id parameter was malformed or non-positive
    #[error("invalid id parameter")]
    InvalidIdParameter,
}
