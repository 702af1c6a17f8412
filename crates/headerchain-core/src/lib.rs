//! # headerchain Core
//!
//! Pure primitives for block headers: the immutable header value, its
//! canonical encoding, its hashes and its signer.
//!
//! This crate contains no I/O, no storage, no networking. It is pure computation
//! over cryptographic data structures.
//!
//! ## Key Types
//!
//! - [`Header`] - Immutable block header with memoized hash and signer
//! - [`HeaderContent`] - The canonical, serializable header payload
//! - [`Hash32`] - 32-byte digest (block hashes, merkle roots)
//! - [`Address`] - 20-byte account identifier
//!
//! ## Hash Layout
//!
//! A block hash is the Blake3 digest of the canonical header encoding with
//! its first 4 bytes overwritten by the block number. A header's number is
//! therefore read straight off its parent hash, see [`number()`].
//!
//! ## Canonicalization
//!
//! Headers are encoded as deterministic CBOR field lists. See [`canonical`] module.

pub mod canonical;
pub mod crypto;
pub mod error;
pub mod hashing;
pub mod header;
pub mod number;
pub mod types;
pub mod validation;

pub use canonical::{canonical_content_bytes, canonical_signing_bytes, decode_content};
pub use crypto::{recover_signer, Keypair, PublicKey, SIGNATURE_LEN};
pub use error::{CodecError, CoreError, ValidationError};
pub use hashing::{block_hash, full_hash, signing_hash};
pub use header::{Header, HeaderBuilder, HeaderContent};
pub use number::{child_number, number};
pub use types::{Address, Hash32};
pub use validation::{validate_genesis, validate_link, validate_signature};

// Big integer type used for scores and gas.
pub use num_bigint::BigUint;
