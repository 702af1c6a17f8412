//! Chain verifier: signature and link checks over sequences of headers.

use headerchain_core::{validate_genesis, validate_link, validate_signature, Address, Header};

use crate::error::{Result, VerifyError};

/// Configuration for the verifier.
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    /// Reject headers without a signature.
    pub require_signatures: bool,
    /// Only accept headers signed by this account. Setting it rejects
    /// unsigned headers regardless of `require_signatures`.
    pub expected_signer: Option<Address>,
    /// Require the first header of a chain to be a genesis header.
    pub require_genesis_root: bool,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            require_signatures: true,
            expected_signer: None,
            require_genesis_root: false,
        }
    }
}

/// Verifies headers and contiguous header chains.
///
/// Only the header format is checked: signatures, parent links and embedded
/// block numbers. Consensus rules are out of scope.
#[derive(Debug, Clone, Default)]
pub struct ChainVerifier {
    config: VerifierConfig,
}

impl ChainVerifier {
    /// Create a new verifier.
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    /// The verifier configuration.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Verify a single header's signature per configuration.
    ///
    /// Returns the recovered signer, or `None` for an accepted unsigned header.
    pub fn verify_header(&self, header: &Header) -> Result<Option<Address>> {
        let signature_optional =
            !self.config.require_signatures && self.config.expected_signer.is_none();
        if !header.is_signed() && signature_optional {
            return Ok(None);
        }

        let signer = validate_signature(header, self.config.expected_signer.as_ref())?;
        Ok(Some(signer))
    }

    /// Verify a contiguous chain of headers, oldest first.
    ///
    /// Returns the number of the last header.
    pub fn verify_chain(&self, headers: &[Header]) -> Result<u32> {
        let (Some(first), Some(last)) = (headers.first(), headers.last()) else {
            return Err(VerifyError::EmptyChain);
        };

        if self.config.require_genesis_root {
            validate_genesis(first)?;
        }

        for header in headers {
            self.verify_header(header)?;
        }

        for pair in headers.windows(2) {
            let (parent, child) = (&pair[0], &pair[1]);
            if let Err(source) = validate_link(parent, child) {
                tracing::warn!(
                    parent = %parent.hash(),
                    number = child.number(),
                    error = %source,
                    "header link rejected"
                );
                return Err(VerifyError::InvalidLink {
                    number: child.number(),
                    source,
                });
            }
        }

        let tip = last.number();
        tracing::debug!(len = headers.len(), tip, "verified header chain");
        Ok(tip)
    }
}
