//! Proptest generators for property-based testing.

use proptest::prelude::*;

use headerchain_core::{Address, BigUint, Hash32, Header, HeaderContent, Keypair};

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate a random Hash32.
pub fn hash32() -> impl Strategy<Value = Hash32> {
    any::<[u8; 32]>().prop_map(Hash32::from_bytes)
}

/// Generate a parent hash: genesis (zero) about a quarter of the time.
pub fn parent_hash() -> impl Strategy<Value = Hash32> {
    prop_oneof![
        1 => Just(Hash32::ZERO),
        3 => hash32(),
    ]
}

/// Generate a random Address.
pub fn address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from_bytes)
}

/// Generate an arbitrary-precision integer of up to `max_bytes` bytes.
pub fn big_uint(max_bytes: usize) -> impl Strategy<Value = BigUint> {
    prop::collection::vec(any::<u8>(), 0..=max_bytes).prop_map(|b| BigUint::from_bytes_be(&b))
}

/// Generate signature bytes of up to `max_len` bytes (not necessarily valid).
pub fn signature(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Parameters for generating header content.
#[derive(Debug, Clone)]
pub struct ContentParams {
    pub parent_hash: Hash32,
    pub timestamp: u64,
    pub total_score: BigUint,
    pub gas_limit: BigUint,
    pub gas_used: BigUint,
    pub beneficiary: Address,
    pub txs_root: Hash32,
    pub state_root: Hash32,
    pub receipts_root: Hash32,
    pub signature: Vec<u8>,
}

impl Arbitrary for ContentParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            parent_hash(),
            any::<u64>(),
            big_uint(40),
            big_uint(12),
            big_uint(12),
            address(),
            (hash32(), hash32(), hash32()),
            signature(128),
        )
            .prop_map(
                |(parent_hash, timestamp, total_score, gas_limit, gas_used, beneficiary, roots, signature)| {
                    ContentParams {
                        parent_hash,
                        timestamp,
                        total_score,
                        gas_limit,
                        gas_used,
                        beneficiary,
                        txs_root: roots.0,
                        state_root: roots.1,
                        receipts_root: roots.2,
                        signature,
                    }
                },
            )
            .boxed()
    }
}

/// Build header content from parameters.
pub fn content_from_params(params: &ContentParams) -> HeaderContent {
    HeaderContent {
        parent_hash: params.parent_hash,
        timestamp: params.timestamp,
        total_score: params.total_score.clone(),
        gas_limit: params.gas_limit.clone(),
        gas_used: params.gas_used.clone(),
        beneficiary: params.beneficiary,
        txs_root: params.txs_root,
        state_root: params.state_root,
        receipts_root: params.receipts_root,
        signature: params.signature.clone().into(),
    }
}

/// Build a header from parameters.
pub fn header_from_params(params: &ContentParams) -> Header {
    Header::new(content_from_params(params))
}
