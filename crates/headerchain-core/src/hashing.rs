//! Hash engine: Blake3 digests over canonical header encodings.

use crate::canonical::{canonical_content_bytes, canonical_signing_bytes};
use crate::header::HeaderContent;
use crate::number::{child_number, embed_number};
use crate::types::Hash32;

/// Digest of the full canonical encoding, before number embedding.
pub fn full_hash(content: &HeaderContent) -> Hash32 {
    Hash32::hash(&canonical_content_bytes(content))
}

/// Digest of the signing subset (no total score, no signature).
pub fn signing_hash(content: &HeaderContent) -> Hash32 {
    Hash32::hash(&canonical_signing_bytes(content))
}

/// The block hash: `full_hash` with its first 4 bytes replaced by the block
/// number. Only the remaining 28 bytes carry digest entropy.
pub fn block_hash(content: &HeaderContent) -> Hash32 {
    let mut hash = full_hash(content);
    embed_number(&mut hash, child_number(&content.parent_hash));
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::number;
    use bytes::Bytes;
    use num_bigint::BigUint;

    fn content(parent_hash: Hash32) -> HeaderContent {
        HeaderContent {
            parent_hash,
            timestamp: 1_700_000_000,
            total_score: BigUint::from(3u32),
            gas_limit: BigUint::from(10_000_000u64),
            gas_used: BigUint::from(0u32),
            beneficiary: Default::default(),
            txs_root: Hash32::ZERO,
            state_root: Hash32::from_bytes([0x01; 32]),
            receipts_root: Hash32::ZERO,
            signature: Bytes::new(),
        }
    }

    #[test]
    fn test_block_hash_keeps_digest_tail() {
        let c = content(Hash32::from_bytes([0x09; 32]));
        let full = full_hash(&c);
        let block = block_hash(&c);
        assert_eq!(&full.0[4..], &block.0[4..]);
        assert_eq!(number(&block), 0x0909_0909 + 1);
    }

    #[test]
    fn test_genesis_block_hash_prefix() {
        let block = block_hash(&content(Hash32::ZERO));
        assert_eq!(&block.0[..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_signing_hash_differs_from_full_hash() {
        let c = content(Hash32::ZERO);
        assert_ne!(signing_hash(&c), full_hash(&c));
    }

    #[test]
    fn test_signing_hash_ignores_score_and_signature() {
        let a = content(Hash32::ZERO);
        let mut b = a.clone();
        b.total_score = BigUint::from(1_000_000u32);
        b.signature = Bytes::from_static(&[0x01; 96]);
        assert_eq!(signing_hash(&a), signing_hash(&b));
        assert_ne!(full_hash(&a), full_hash(&b));
    }
}
