//! Canonical CBOR encoding for deterministic serialization.
//!
//! A header is encoded as an ordered field list following RFC 8949 Core
//! Deterministic Encoding:
//! - The field list is a definite-length array, fields in declared order
//! - Integers use the smallest valid encoding
//! - Byte strings carry hashes, addresses and the signature
//! - Arbitrary-precision integers are byte strings holding the big-endian
//!   magnitude with no leading zero bytes (zero is the empty string)
//!
//! The canonical encoding is critical: the block hash and the signing hash
//! are digests of these bytes, so every implementation must produce them
//! identically.

use ciborium::value::Value;
use num_bigint::BigUint;

use crate::error::CodecError;
use crate::header::HeaderContent;
use crate::types::{Address, Hash32};

/// Number of fields in an encoded header.
pub const CONTENT_FIELD_COUNT: usize = 10;

/// Number of fields covered by the signing hash.
pub const SIGNING_FIELD_COUNT: usize = 8;

/// Header field positions in the full field list.
mod index {
    pub const PARENT_HASH: usize = 0;
    pub const TIMESTAMP: usize = 1;
    pub const TOTAL_SCORE: usize = 2;
    pub const GAS_LIMIT: usize = 3;
    pub const GAS_USED: usize = 4;
    pub const BENEFICIARY: usize = 5;
    pub const TXS_ROOT: usize = 6;
    pub const STATE_ROOT: usize = 7;
    pub const RECEIPTS_ROOT: usize = 8;
    pub const SIGNATURE: usize = 9;
}

/// A single entry of an ordered field list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    /// Unsigned 64-bit integer.
    Uint(u64),
    /// Arbitrary-precision non-negative integer.
    BigUint(&'a BigUint),
    /// Fixed or variable length byte sequence.
    Bytes(&'a [u8]),
}

/// The full header field list, in canonical order.
pub fn content_fields(content: &HeaderContent) -> Vec<Field<'_>> {
    vec![
        Field::Bytes(content.parent_hash.as_bytes()),
        Field::Uint(content.timestamp),
        Field::BigUint(&content.total_score),
        Field::BigUint(&content.gas_limit),
        Field::BigUint(&content.gas_used),
        Field::Bytes(content.beneficiary.as_bytes()),
        Field::Bytes(content.txs_root.as_bytes()),
        Field::Bytes(content.state_root.as_bytes()),
        Field::Bytes(content.receipts_root.as_bytes()),
        Field::Bytes(&content.signature),
    ]
}

/// The field list covered by the signing hash.
///
/// `total_score` and `signature` are excluded: the score may be finalized
/// after signing, and the signature cannot commit to itself.
pub fn signing_fields(content: &HeaderContent) -> Vec<Field<'_>> {
    vec![
        Field::Bytes(content.parent_hash.as_bytes()),
        Field::Uint(content.timestamp),
        Field::BigUint(&content.gas_limit),
        Field::BigUint(&content.gas_used),
        Field::Bytes(content.beneficiary.as_bytes()),
        Field::Bytes(content.txs_root.as_bytes()),
        Field::Bytes(content.state_root.as_bytes()),
        Field::Bytes(content.receipts_root.as_bytes()),
    ]
}

/// Encode header content to canonical bytes.
pub fn canonical_content_bytes(content: &HeaderContent) -> Vec<u8> {
    encode_fields(&content_fields(content))
}

/// Encode the signing subset of header content to canonical bytes.
pub fn canonical_signing_bytes(content: &HeaderContent) -> Vec<u8> {
    encode_fields(&signing_fields(content))
}

/// Encode an ordered field list as a definite-length CBOR array.
pub fn encode_fields(fields: &[Field<'_>]) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_uint(&mut buf, 4, fields.len() as u64);
    for field in fields {
        encode_field(&mut buf, field);
    }
    buf
}

fn encode_field(buf: &mut Vec<u8>, field: &Field<'_>) {
    match field {
        Field::Uint(n) => encode_uint(buf, 0, *n),
        Field::BigUint(n) => encode_bytes(buf, &big_uint_bytes(n)),
        Field::Bytes(b) => encode_bytes(buf, b),
    }
}

/// Big-endian magnitude without leading zeros. Zero is empty.
fn big_uint_bytes(n: &BigUint) -> Vec<u8> {
    if n.bits() == 0 {
        Vec::new()
    } else {
        n.to_bytes_be()
    }
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffffffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a byte string (major type 2).
fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

/// Decode header content from canonical bytes.
///
/// The input must be exactly one canonical field list: anything that does
/// not re-encode to the identical bytes is rejected.
pub fn decode_content(bytes: &[u8]) -> Result<HeaderContent, CodecError> {
    let cursor = std::io::Cursor::new(bytes);
    let value: Value =
        ciborium::from_reader(cursor).map_err(|e| CodecError::Cbor(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        _ => return Err(CodecError::NotAList),
    };

    if items.len() != CONTENT_FIELD_COUNT {
        return Err(CodecError::FieldCount {
            expected: CONTENT_FIELD_COUNT,
            got: items.len(),
        });
    }

    let content = HeaderContent {
        parent_hash: Hash32(fixed_bytes(&items, index::PARENT_HASH)?),
        timestamp: uint(&items, index::TIMESTAMP)?,
        total_score: big_uint(&items, index::TOTAL_SCORE)?,
        gas_limit: big_uint(&items, index::GAS_LIMIT)?,
        gas_used: big_uint(&items, index::GAS_USED)?,
        beneficiary: Address(fixed_bytes(&items, index::BENEFICIARY)?),
        txs_root: Hash32(fixed_bytes(&items, index::TXS_ROOT)?),
        state_root: Hash32(fixed_bytes(&items, index::STATE_ROOT)?),
        receipts_root: Hash32(fixed_bytes(&items, index::RECEIPTS_ROOT)?),
        signature: byte_string(&items, index::SIGNATURE)?.to_vec().into(),
    };

    // Catches non-shortest heads, indefinite lengths and trailing bytes.
    if canonical_content_bytes(&content) != bytes {
        return Err(CodecError::NonCanonical);
    }

    Ok(content)
}

fn byte_string(items: &[Value], index: usize) -> Result<&[u8], CodecError> {
    match &items[index] {
        Value::Bytes(b) => Ok(b),
        _ => Err(CodecError::FieldType {
            index,
            expected: "byte string",
        }),
    }
}

fn fixed_bytes<const N: usize>(items: &[Value], index: usize) -> Result<[u8; N], CodecError> {
    let b = byte_string(items, index)?;
    b.try_into().map_err(|_| CodecError::FieldLength {
        index,
        expected: N,
        got: b.len(),
    })
}

fn uint(items: &[Value], index: usize) -> Result<u64, CodecError> {
    let err = CodecError::FieldType {
        index,
        expected: "unsigned integer",
    };
    match &items[index] {
        Value::Integer(i) => u64::try_from(*i).map_err(|_| err),
        _ => Err(err),
    }
}

fn big_uint(items: &[Value], index: usize) -> Result<BigUint, CodecError> {
    let b = byte_string(items, index)?;
    if b.first() == Some(&0) {
        return Err(CodecError::BigIntLeadingZero { index });
    }
    Ok(BigUint::from_bytes_be(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn sample_content() -> HeaderContent {
        HeaderContent {
            parent_hash: Hash32::from_bytes([0x11; 32]),
            timestamp: 5,
            total_score: BigUint::from(0u32),
            gas_limit: BigUint::from(10_000_000u64),
            gas_used: BigUint::from(21_000u64),
            beneficiary: Address::from_bytes([0x22; 20]),
            txs_root: Hash32::from_bytes([0x33; 32]),
            state_root: Hash32::from_bytes([0x44; 32]),
            receipts_root: Hash32::from_bytes([0x55; 32]),
            signature: Bytes::new(),
        }
    }

    // Offsets into the encoding of `sample_content`.
    const TIMESTAMP_OFFSET: usize = 1 + 2 + 32;
    const TOTAL_SCORE_OFFSET: usize = TIMESTAMP_OFFSET + 1;

    #[test]
    fn test_integer_encoding() {
        // Test smallest encoding for various integer sizes
        let mut buf = Vec::new();

        // 0-23: single byte
        encode_uint(&mut buf, 0, 0);
        assert_eq!(buf, vec![0x00]);

        buf.clear();
        encode_uint(&mut buf, 0, 23);
        assert_eq!(buf, vec![0x17]);

        // 24-255: two bytes
        buf.clear();
        encode_uint(&mut buf, 0, 24);
        assert_eq!(buf, vec![0x18, 24]);

        buf.clear();
        encode_uint(&mut buf, 0, 255);
        assert_eq!(buf, vec![0x18, 255]);

        // 256-65535: three bytes
        buf.clear();
        encode_uint(&mut buf, 0, 256);
        assert_eq!(buf, vec![0x19, 0x01, 0x00]);

        buf.clear();
        encode_uint(&mut buf, 0, 65535);
        assert_eq!(buf, vec![0x19, 0xff, 0xff]);

        buf.clear();
        encode_uint(&mut buf, 0, u64::MAX);
        assert_eq!(buf, vec![0x1b, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_field_list_encoding() {
        let big = BigUint::from(256u32);
        let zero = BigUint::from(0u32);
        let bytes = encode_fields(&[
            Field::Uint(0),
            Field::Bytes(&[]),
            Field::BigUint(&big),
            Field::BigUint(&zero),
        ]);
        assert_eq!(bytes, vec![0x84, 0x00, 0x40, 0x42, 0x01, 0x00, 0x40]);
    }

    #[test]
    fn test_field_order_matters() {
        let a = encode_fields(&[Field::Uint(1), Field::Uint(2)]);
        let b = encode_fields(&[Field::Uint(2), Field::Uint(1)]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_content_layout() {
        let bytes = canonical_content_bytes(&sample_content());
        assert_eq!(bytes[0], 0x8a); // array of 10
        assert_eq!(&bytes[1..3], &[0x58, 0x20]); // 32-byte string
        assert_eq!(&bytes[3..35], &[0x11; 32]);
        assert_eq!(bytes[TIMESTAMP_OFFSET], 0x05);
        assert_eq!(bytes[TOTAL_SCORE_OFFSET], 0x40); // zero score
        assert_eq!(*bytes.last().unwrap(), 0x40); // empty signature
    }

    #[test]
    fn test_signing_bytes_exclude_score_and_signature() {
        let mut content = sample_content();
        let before = canonical_signing_bytes(&content);
        assert_eq!(before[0], 0x88); // array of 8

        content.total_score = BigUint::from(999u32);
        content.signature = Bytes::from_static(b"sig");
        assert_eq!(canonical_signing_bytes(&content), before);

        content.timestamp += 1;
        assert_ne!(canonical_signing_bytes(&content), before);
    }

    #[test]
    fn test_content_roundtrip() {
        let mut content = sample_content();
        content.total_score = BigUint::parse_bytes(b"123456789012345678901234567890", 10).unwrap();
        content.timestamp = u64::MAX;
        content.signature = Bytes::from(vec![0xAB; 96]);

        let bytes = canonical_content_bytes(&content);
        let decoded = decode_content(&bytes).unwrap();
        assert_eq!(decoded, content);
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut bytes = canonical_content_bytes(&sample_content());
        bytes.push(0x00);
        assert_eq!(decode_content(&bytes), Err(CodecError::NonCanonical));
    }

    #[test]
    fn test_decode_rejects_non_shortest_integer() {
        let bytes = canonical_content_bytes(&sample_content());
        let mut padded = bytes[..TIMESTAMP_OFFSET].to_vec();
        padded.extend_from_slice(&[0x18, 0x05]);
        padded.extend_from_slice(&bytes[TIMESTAMP_OFFSET + 1..]);
        assert_eq!(decode_content(&padded), Err(CodecError::NonCanonical));
    }

    #[test]
    fn test_decode_rejects_big_int_leading_zero() {
        let bytes = canonical_content_bytes(&sample_content());
        let mut padded = bytes[..TOTAL_SCORE_OFFSET].to_vec();
        padded.extend_from_slice(&[0x41, 0x00]);
        padded.extend_from_slice(&bytes[TOTAL_SCORE_OFFSET + 1..]);
        assert_eq!(
            decode_content(&padded),
            Err(CodecError::BigIntLeadingZero { index: 2 })
        );
    }

    #[test]
    fn test_decode_rejects_truncated() {
        let bytes = canonical_content_bytes(&sample_content());
        for len in [0, 1, 10, bytes.len() - 1] {
            assert!(matches!(
                decode_content(&bytes[..len]),
                Err(CodecError::Cbor(_))
            ));
        }
    }

    #[test]
    fn test_decode_rejects_wrong_field_count() {
        let bytes = canonical_signing_bytes(&sample_content());
        assert_eq!(
            decode_content(&bytes),
            Err(CodecError::FieldCount {
                expected: 10,
                got: 8
            })
        );
    }

    #[test]
    fn test_decode_rejects_wrong_fixed_length() {
        let content = sample_content();
        let mut fields = content_fields(&content);
        fields[0] = Field::Bytes(&[0x11; 31]);
        assert_eq!(
            decode_content(&encode_fields(&fields)),
            Err(CodecError::FieldLength {
                index: 0,
                expected: 32,
                got: 31
            })
        );
    }

    #[test]
    fn test_decode_rejects_wrong_field_type() {
        let content = sample_content();
        let mut fields = content_fields(&content);
        fields[5] = Field::Uint(7);
        assert_eq!(
            decode_content(&encode_fields(&fields)),
            Err(CodecError::FieldType {
                index: 5,
                expected: "byte string"
            })
        );
    }

    #[test]
    fn test_decode_rejects_non_list() {
        assert_eq!(decode_content(&[0x05]), Err(CodecError::NotAList));
    }
}
