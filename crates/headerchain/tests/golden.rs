//! Golden test vectors for cross-implementation verification.
//!
//! Every implementation of the header format must produce identical:
//! - content_bytes (canonical encoding, signature included)
//! - signing_hash
//! - block_hash (number in the first 4 bytes)
//! - signer

use headerchain::core::canonical_signing_bytes;
use headerchain::{ChainVerifier, Header, VerifierConfig};
use headerchain_testkit::{all_vectors, header_from_vector, verify_all_vectors};
use serde::{Deserialize, Serialize};

/// A golden vector as exchanged with other implementations.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportedVector {
    pub name: String,
    pub content_bytes: String,
    pub signing_bytes: String,
    pub signing_hash: String,
    pub block_hash: String,
    pub number: u32,
    pub signer: Option<String>,
}

fn export(name: &str, header: &Header) -> ExportedVector {
    ExportedVector {
        name: name.to_string(),
        content_bytes: hex::encode(header.encode()),
        signing_bytes: hex::encode(canonical_signing_bytes(header.content())),
        signing_hash: header.hash_for_signing().to_hex(),
        block_hash: header.hash().to_hex(),
        number: header.number(),
        signer: header.signer().ok().map(|a| a.to_hex()),
    }
}

fn export_all() -> Vec<ExportedVector> {
    all_vectors()
        .iter()
        .map(|v| export(v.name, &header_from_vector(v)))
        .collect()
}

#[test]
fn test_generate_vectors() {
    let exported = export_all();
    let reference = all_vectors();
    assert_eq!(exported.len(), reference.len());

    for (e, v) in exported.iter().zip(&reference) {
        assert_eq!(e.name, v.name);
        assert_eq!(e.content_bytes, v.expected_content_bytes, "{}", v.name);
        assert_eq!(e.signing_hash, v.expected_signing_hash, "{}", v.name);
        assert_eq!(e.block_hash, v.expected_block_hash, "{}", v.name);
        assert_eq!(e.number, v.expected_number, "{}", v.name);

        let expected_signer = Some(v.expected_signer)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        assert_eq!(e.signer, expected_signer, "{}", v.name);
    }
}

#[test]
fn test_vectors_match_reference() {
    for (name, matches, block_hash) in verify_all_vectors() {
        assert!(matches, "vector {} diverged, block hash {}", name, block_hash);
    }
}

#[test]
fn test_vectors_json_roundtrip() {
    let vectors = export_all();
    let json = serde_json::to_string_pretty(&vectors).unwrap();
    let parsed: Vec<ExportedVector> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, vectors);
}

#[test]
fn test_vectors_decode() {
    // Bytes produced elsewhere must decode to a header with the same identity
    for v in &all_vectors() {
        let bytes = hex::decode(v.expected_content_bytes).unwrap();
        let header = Header::decode(&bytes).unwrap();

        assert_eq!(header.hash().to_hex(), v.expected_block_hash, "{}", v.name);
        assert_eq!(header.hash_for_signing().to_hex(), v.expected_signing_hash, "{}", v.name);
        assert_eq!(header.number(), v.expected_number, "{}", v.name);
        assert_eq!(header.encode(), bytes, "{}", v.name);
    }
}

#[test]
fn test_signed_vectors_verify() {
    let verifier = ChainVerifier::new(VerifierConfig::default());
    for v in all_vectors().iter().filter(|v| v.signer_seed.is_some()) {
        let header = header_from_vector(v);
        let signer = verifier.verify_header(&header).unwrap().unwrap();
        assert_eq!(signer.to_hex(), v.expected_signer, "{}", v.name);
    }
}
