//! Error types for hashxx.
//!
//! Every error is a normal, recoverable result of a single call; there are no
//! process-level failures and no panics on caller-reachable paths.

use thiserror::Error;

/// Errors that can occur while validating arguments or hashing values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HashxxError {
    /// No values were supplied where at least one is required.
    #[error("at least one value is required")]
    MissingArguments,

    /// An unexpected or extra keyword argument was supplied.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The seed argument is present but not representable as a `u32`.
    #[error("seed must be an unsigned 32-bit integer, got {0}")]
    InvalidSeedType(&'static str),

    /// A value (or nested element) is neither bytes, a sequence, nor nothing.
    #[error("{0}")]
    UnsupportedType(String),
}

/// Result type alias for hashxx operations.
pub type HashxxResult<T> = Result<T, HashxxError>;

impl HashxxError {
    /// Unsupported-type error naming the offending runtime type.
    pub(crate) fn unsupported(type_name: &str) -> Self {
        Self::UnsupportedType(format!(
            "unsupported value type `{type_name}`; expected bytes, a sequence of values, or nothing"
        ))
    }

    /// Unsupported-type error for decoded text.
    ///
    /// Text gets its own message: the byte encoding of text belongs to the
    /// caller and is never guessed here.
    pub(crate) fn unencoded_text() -> Self {
        Self::UnsupportedType(
            "text is not hashable directly; convert it to bytes with an explicit encoding first"
                .to_string(),
        )
    }

    pub(crate) fn unexpected_kwarg(name: &str) -> Self {
        Self::InvalidArguments(format!("unexpected keyword argument `{name}`"))
    }

    pub(crate) fn too_many_kwargs(count: usize) -> Self {
        Self::InvalidArguments(format!(
            "expected at most one keyword argument (`seed`), got {count}"
        ))
    }
}

// =============================================================================
// Tests
// =============================================================================
