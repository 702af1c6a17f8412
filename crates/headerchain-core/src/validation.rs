//! Header validation: signer checks and structural chain links.
//!
//! These checks cover only what the header format itself guarantees. Gas
//! bounds, timestamp rules and score accounting belong to consensus.

use crate::error::ValidationError;
use crate::header::Header;
use crate::types::Address;

/// Check that a header is signed and its signer recovers.
///
/// When `expected` is given the recovered signer must match it. Returns the
/// recovered signer.
pub fn validate_signature(
    header: &Header,
    expected: Option<&Address>,
) -> Result<Address, ValidationError> {
    let signer = header.signer()?;

    if let Some(expected) = expected {
        if *expected != signer {
            return Err(ValidationError::SignerMismatch {
                expected: *expected,
                got: signer,
            });
        }
    }

    Ok(signer)
}

/// Check that `child` directly extends `parent`.
pub fn validate_link(parent: &Header, child: &Header) -> Result<(), ValidationError> {
    let parent_hash = parent.hash();
    if child.parent_hash() != parent_hash {
        return Err(ValidationError::ParentMismatch {
            expected: parent_hash,
            got: child.parent_hash(),
        });
    }

    let expected = parent
        .number()
        .checked_add(1)
        .ok_or(ValidationError::NumberOverflow(parent.number()))?;

    if child.number() != expected {
        return Err(ValidationError::NumberMismatch {
            expected,
            got: child.number(),
        });
    }

    Ok(())
}

/// Check that a header is a genesis header (zero parent hash).
pub fn validate_genesis(header: &Header) -> Result<(), ValidationError> {
    if !header.parent_hash().is_zero() {
        return Err(ValidationError::GenesisExpected(header.parent_hash()));
    }
    Ok(())
}
