//! # headerchain
//!
//! Canonical block headers for a distributed ledger: identity, ancestry and
//! authorship computed deterministically.
//!
//! ## Overview
//!
//! - **Identity**: the block hash is a Blake3 digest of the canonical header
//!   encoding, with the block number written into its first 4 bytes
//! - **Ancestry**: a header's number is read from its parent hash, never stored
//! - **Authorship**: the signer is recovered from a signature over a narrower
//!   signing hash that excludes total score and the signature itself
//!
//! ## Key Concepts
//!
//! - **Header**: Immutable. Attaching a signature yields a new header.
//! - **Genesis**: The header whose parent hash is all zero. Its number is 0.
//! - **Chain**: Each header's parent hash is the previous header's hash.
//!
//! ## Usage
//!
//! ```rust
//! use headerchain::{ChainVerifier, HeaderBuilder, Keypair, VerifierConfig};
//!
//! let keypair = Keypair::from_seed(&[0x42; 32]);
//!
//! let genesis = HeaderBuilder::genesis()
//!     .timestamp(1_530_014_400)
//!     .sign(&keypair);
//! let block1 = HeaderBuilder::new(genesis.hash())
//!     .timestamp(1_530_014_410)
//!     .total_score(1u32)
//!     .sign(&keypair);
//!
//! assert_eq!(block1.number(), 1);
//! assert_eq!(block1.signer().unwrap(), keypair.address());
//!
//! let verifier = ChainVerifier::new(VerifierConfig {
//!     expected_signer: Some(keypair.address()),
//!     ..Default::default()
//! });
//! assert_eq!(verifier.verify_chain(&[genesis, block1]).unwrap(), 1);
//! ```
//!
//! ## Re-exports
//!
//! - `headerchain::core` - Core primitives (Header, Hash32, codec, hashing)

pub mod error;
pub mod verifier;

// Re-export component crates
pub use headerchain_core as core;

// Re-export main types for convenience
pub use error::{Result, VerifyError};
pub use verifier::{ChainVerifier, VerifierConfig};

// Re-export commonly used core types
pub use headerchain_core::{
    number, Address, BigUint, CodecError, CoreError, Hash32, Header, HeaderBuilder,
    HeaderContent, Keypair, ValidationError,
};
