//! Error types for headerchain core.

use thiserror::Error;

use crate::types::{Address, Hash32};

/// Core errors that can occur during header operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("not signed")]
    NotSigned,

    #[error("signer recovery failed: {0}")]
    RecoveryFailed(String),

    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Errors at the canonical decode boundary.
///
/// Decoding is all-or-nothing: any of these means no header was produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("cbor decoding error: {0}")]
    Cbor(String),

    #[error("input is not in canonical form")]
    NonCanonical,

    #[error("expected a field list")]
    NotAList,

    #[error("wrong field count: expected {expected}, got {got}")]
    FieldCount { expected: usize, got: usize },

    #[error("field {index}: expected {expected}")]
    FieldType { index: usize, expected: &'static str },

    #[error("field {index}: expected {expected} bytes, got {got}")]
    FieldLength {
        index: usize,
        expected: usize,
        got: usize,
    },

    #[error("field {index}: big integer has leading zero bytes")]
    BigIntLeadingZero { index: usize },
}

/// Structural validation errors for headers and header links.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("header is not signed")]
    Unsigned,

    #[error("signature verification failed: {0}")]
    SignatureFailed(String),

    #[error("signer mismatch: expected {expected}, got {got}")]
    SignerMismatch { expected: Address, got: Address },

    #[error("parent mismatch: expected {expected}, got {got}")]
    ParentMismatch { expected: Hash32, got: Hash32 },

    #[error("invalid block number: expected {expected}, got {got}")]
    NumberMismatch { expected: u32, got: u32 },

    #[error("block number overflows after {0}")]
    NumberOverflow(u32),

    #[error("expected genesis header, parent is {0}")]
    GenesisExpected(Hash32),
}

impl From<CoreError> for ValidationError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NotSigned => ValidationError::Unsigned,
            CoreError::RecoveryFailed(msg) => ValidationError::SignatureFailed(msg),
            CoreError::Codec(e) => ValidationError::SignatureFailed(e.to_string()),
        }
    }
}
