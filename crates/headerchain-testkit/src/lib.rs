//! # headerchain Testkit
//!
//! Testing utilities for headerchain.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known headers with expected bytes and hashes for cross-platform verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for building signed headers and chains
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the canonical encoding, signing hash and block hash:
//!
//! ```rust
//! use headerchain_testkit::vectors::{all_vectors, header_from_vector};
//!
//! for vector in all_vectors() {
//!     let header = header_from_vector(&vector);
//!     assert_eq!(header.hash().to_hex(), vector.expected_block_hash);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use headerchain_testkit::generators::{ContentParams, header_from_params};
//!
//! proptest! {
//!     #[test]
//!     fn hash_is_deterministic(params: ContentParams) {
//!         let h1 = header_from_params(&params);
//!         let h2 = header_from_params(&params);
//!         prop_assert_eq!(h1.hash(), h2.hash());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use headerchain_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let chain = fixture.make_chain(3);
//! assert_eq!(chain[2].number(), 2);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, TestFixture};
pub use generators::{content_from_params, header_from_params, ContentParams};
pub use vectors::{all_vectors, header_from_vector, verify_all_vectors, GoldenVector};
