//! Error types for chain verification.

use headerchain_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors that can occur while verifying headers and header chains.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Structural validation error.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Core error (decoding, signer recovery).
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// No headers were supplied.
    #[error("empty chain")]
    EmptyChain,

    /// A link in the chain failed.
    #[error("invalid link at block {number}: {source}")]
    InvalidLink {
        number: u32,
        #[source]
        source: ValidationError,
    },
}

/// Result type for verification operations.
pub type Result<T> = std::result::Result<T, VerifyError>;
