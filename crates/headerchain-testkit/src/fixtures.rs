//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use headerchain_core::{Address, Hash32, Header, HeaderBuilder, Keypair, PublicKey};

/// Timestamp of the fixture genesis header.
pub const GENESIS_TIMESTAMP: u64 = 1_530_014_400;

/// Seconds between consecutive fixture blocks.
pub const BLOCK_INTERVAL: u64 = 10;

/// Gas limit used by fixture blocks.
pub const GAS_LIMIT: u64 = 10_000_000;

/// A test fixture with a block producer keypair.
pub struct TestFixture {
    pub keypair: Keypair,
}

impl TestFixture {
    /// Create a new test fixture with a random keypair.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::generate(),
        }
    }

    /// Create with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_seed(&seed),
        }
    }

    /// Get the keypair's public key.
    pub fn public_key(&self) -> PublicKey {
        self.keypair.public_key()
    }

    /// The account the fixture's signatures recover to.
    pub fn address(&self) -> Address {
        self.keypair.address()
    }

    /// Create an unsigned genesis header.
    pub fn make_unsigned_genesis(&self) -> Header {
        HeaderBuilder::genesis()
            .timestamp(GENESIS_TIMESTAMP)
            .gas_limit(GAS_LIMIT)
            .beneficiary(self.address())
            .build()
    }

    /// Create a signed genesis header.
    pub fn make_genesis(&self) -> Header {
        self.make_unsigned_genesis().sign(&self.keypair)
    }

    /// Create a signed header extending `parent`.
    ///
    /// The total score grows by one per block and the state root is derived
    /// from the block number so siblings at different heights never collide.
    pub fn make_child(&self, parent: &Header) -> Header {
        let number = parent.number() + 1;
        HeaderBuilder::new(parent.hash())
            .timestamp(parent.timestamp() + BLOCK_INTERVAL)
            .total_score(parent.total_score() + 1u32)
            .gas_limit(GAS_LIMIT)
            .beneficiary(self.address())
            .state_root(Hash32::hash(&number.to_be_bytes()))
            .sign(&self.keypair)
    }

    /// Create a signed chain of `len` headers starting at genesis.
    pub fn make_chain(&self, len: usize) -> Vec<Header> {
        let mut headers: Vec<Header> = Vec::with_capacity(len);
        for _ in 0..len {
            let next = match headers.last() {
                Some(parent) => self.make_child(parent),
                None => self.make_genesis(),
            };
            headers.push(next);
        }
        headers
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple test fixtures for multi-producer tests.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[..8].copy_from_slice(&(i as u64).to_le_bytes());
            TestFixture::with_seed(seed)
        })
        .collect()
}
