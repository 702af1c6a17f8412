//! Block numbers embedded in block hashes.
//!
//! The first 4 bytes of every block hash are overwritten with the block's
//! number (big-endian), so a child header can derive its own number from its
//! parent hash without walking the chain.

use crate::types::Hash32;

/// Number of leading hash bytes that carry the block number.
pub const NUMBER_LEN: usize = 4;

/// Extract the block number from a block hash.
pub fn number(hash: &Hash32) -> u32 {
    let mut prefix = [0u8; NUMBER_LEN];
    prefix.copy_from_slice(&hash.0[..NUMBER_LEN]);
    u32::from_be_bytes(prefix)
}

/// Overwrite the leading bytes of a digest with a block number.
pub fn embed_number(hash: &mut Hash32, number: u32) {
    hash.0[..NUMBER_LEN].copy_from_slice(&number.to_be_bytes());
}

/// Number of the block whose parent hash is given.
///
/// A zero parent hash marks genesis (number 0). The increment saturates at
/// `u32::MAX`; chain validation reports that case as an overflow.
pub fn child_number(parent_hash: &Hash32) -> u32 {
    if parent_hash.is_zero() {
        return 0;
    }
    number(parent_hash).saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_number_reads_big_endian_prefix() {
        let mut bytes = [0xffu8; 32];
        bytes[..4].copy_from_slice(&[0x00, 0x01, 0x02, 0x03]);
        assert_eq!(number(&Hash32(bytes)), 0x0001_0203);
    }

    #[test]
    fn test_embed_number() {
        let mut hash = Hash32::from_bytes([0xaa; 32]);
        embed_number(&mut hash, 0x0102_0304);
        assert_eq!(&hash.0[..4], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&hash.0[4..], &[0xaa; 28]);
        assert_eq!(number(&hash), 0x0102_0304);
    }

    #[test]
    fn test_genesis_parent() {
        assert_eq!(child_number(&Hash32::ZERO), 0);
    }

    #[test]
    fn test_genesis_hash_has_zero_prefix() {
        // The genesis block hash starts with 0x00000000 but is not all zero.
        let mut genesis_hash = Hash32::from_bytes([0x5c; 32]);
        embed_number(&mut genesis_hash, 0);
        assert_eq!(child_number(&genesis_hash), 1);
    }

    #[test]
    fn test_child_number_saturates() {
        let mut parent = Hash32::from_bytes([0x01; 32]);
        embed_number(&mut parent, u32::MAX);
        assert_eq!(child_number(&parent), u32::MAX);
    }

    proptest! {
        #[test]
        fn test_embed_then_read(bytes in any::<[u8; 32]>(), n in any::<u32>()) {
            let mut hash = Hash32(bytes);
            embed_number(&mut hash, n);
            prop_assert_eq!(number(&hash), n);
            prop_assert_eq!(&hash.0[4..], &bytes[4..]);
        }

        #[test]
        fn test_child_of_non_genesis(bytes in any::<[u8; 32]>(), n in 0u32..u32::MAX) {
            let mut parent = Hash32(bytes);
            embed_number(&mut parent, n);
            prop_assume!(!parent.is_zero());
            prop_assert_eq!(child_number(&parent), n + 1);
        }
    }
}
