//! Header: the immutable block header value.
//!
//! A header is never edited. Attaching a signature produces a new header,
//! so the memoized hash and signer of a published header can never go stale.

use bytes::Bytes;
use num_bigint::BigUint;
use std::fmt;
use std::sync::OnceLock;

use crate::canonical::{canonical_content_bytes, decode_content};
use crate::crypto::{recover_signer, Keypair};
use crate::error::CoreError;
use crate::hashing::{block_hash, signing_hash};
use crate::number::child_number;
use crate::types::{Address, Hash32};

/// The canonical, serializable payload of a header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderContent {
    /// Hash of the parent header (zero for genesis).
    pub parent_hash: Hash32,

    /// Seconds since the Unix epoch. Untrusted.
    pub timestamp: u64,

    /// Score accumulated from genesis up to and including this block.
    pub total_score: BigUint,

    /// Gas limit of the block.
    pub gas_limit: BigUint,

    /// Gas used by the block's transactions.
    pub gas_used: BigUint,

    /// Reward recipient.
    pub beneficiary: Address,

    /// Merkle root of the block's transactions.
    pub txs_root: Hash32,

    /// Account state root after applying the block.
    pub state_root: Hash32,

    /// Merkle root of the transaction receipts.
    pub receipts_root: Hash32,

    /// Producer signature over the signing hash. Empty when unsigned.
    pub signature: Bytes,
}

#[derive(Debug, Clone, Default)]
struct HeaderCache {
    hash: OnceLock<Hash32>,
    signer: OnceLock<Address>,
}

/// An immutable block header with memoized hash and signer.
///
/// Equality is content equality; whether the caches are populated never
/// matters.
#[derive(Clone)]
pub struct Header {
    content: HeaderContent,
    cache: HeaderCache,
}

impl Header {
    /// Wrap header content. Caches start empty.
    pub fn new(content: HeaderContent) -> Self {
        Self {
            content,
            cache: HeaderCache::default(),
        }
    }

    /// Decode a header from canonical bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, CoreError> {
        match decode_content(bytes) {
            Ok(content) => Ok(Self::new(content)),
            Err(e) => {
                tracing::debug!(len = bytes.len(), error = %e, "header decoding failed");
                Err(e.into())
            }
        }
    }

    /// Encode the header content to canonical bytes. Caches are not encoded.
    pub fn encode(&self) -> Vec<u8> {
        canonical_content_bytes(&self.content)
    }

    /// The underlying content.
    pub fn content(&self) -> &HeaderContent {
        &self.content
    }

    /// Consume the header, returning its content.
    pub fn into_content(self) -> HeaderContent {
        self.content
    }

    /// Hash of the parent header.
    pub fn parent_hash(&self) -> Hash32 {
        self.content.parent_hash
    }

    /// Sequential number of this block, inferred from the parent hash.
    pub fn number(&self) -> u32 {
        child_number(&self.content.parent_hash)
    }

    /// Block timestamp.
    pub fn timestamp(&self) -> u64 {
        self.content.timestamp
    }

    /// Total score accumulated from genesis to this block.
    pub fn total_score(&self) -> &BigUint {
        &self.content.total_score
    }

    /// Gas limit.
    pub fn gas_limit(&self) -> &BigUint {
        &self.content.gas_limit
    }

    /// Gas used by the block's transactions.
    pub fn gas_used(&self) -> &BigUint {
        &self.content.gas_used
    }

    /// Reward recipient.
    pub fn beneficiary(&self) -> Address {
        self.content.beneficiary
    }

    /// Merkle root of the block's transactions.
    pub fn txs_root(&self) -> Hash32 {
        self.content.txs_root
    }

    /// Account state root after the block is applied.
    pub fn state_root(&self) -> Hash32 {
        self.content.state_root
    }

    /// Merkle root of the transaction receipts.
    pub fn receipts_root(&self) -> Hash32 {
        self.content.receipts_root
    }

    /// Raw signature bytes (empty when unsigned).
    pub fn signature(&self) -> &[u8] {
        &self.content.signature
    }

    /// Whether a signature is attached.
    pub fn is_signed(&self) -> bool {
        !self.content.signature.is_empty()
    }

    /// The block hash, with the block number in its first 4 bytes.
    ///
    /// Computed on first call and memoized for the lifetime of this value.
    pub fn hash(&self) -> Hash32 {
        *self.cache.hash.get_or_init(|| {
            let hash = block_hash(&self.content);
            tracing::trace!(number = self.number(), hash = %hash, "computed block hash");
            hash
        })
    }

    /// Hash of every field except total score and signature.
    pub fn hash_for_signing(&self) -> Hash32 {
        signing_hash(&self.content)
    }

    /// A new header with the signature replaced by a copy of `signature`.
    ///
    /// The receiver is untouched and the new header starts with empty caches.
    /// The signature format is not checked here.
    pub fn with_signature(&self, signature: &[u8]) -> Header {
        let mut content = self.content.clone();
        content.signature = Bytes::copy_from_slice(signature);
        Header::new(content)
    }

    /// Sign the header with a keypair.
    pub fn sign(&self, keypair: &Keypair) -> Header {
        self.with_signature(&keypair.sign_hash(&self.hash_for_signing()))
    }

    /// Recover the account that signed this header.
    ///
    /// Fails with [`CoreError::NotSigned`] when no signature is attached.
    /// Successful recoveries are memoized; failures are not.
    pub fn signer(&self) -> Result<Address, CoreError> {
        if self.content.signature.is_empty() {
            return Err(CoreError::NotSigned);
        }
        if let Some(signer) = self.cache.signer.get() {
            return Ok(*signer);
        }

        let signer = recover_signer(&self.hash_for_signing(), &self.content.signature)?;
        tracing::trace!(number = self.number(), signer = %signer, "recovered header signer");
        Ok(*self.cache.signer.get_or_init(|| signer))
    }
}

impl From<HeaderContent> for Header {
    fn from(content: HeaderContent) -> Self {
        Self::new(content)
    }
}

impl PartialEq for Header {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

impl Eq for Header {}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Header")
            .field("number", &self.number())
            .field("content", &self.content)
            .finish()
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let signer = match self.signer() {
            Ok(addr) => addr.to_string(),
            Err(CoreError::NotSigned) => "unsigned".to_string(),
            Err(e) => format!("invalid ({})", e),
        };
        writeln!(f, "Header({}):", self.hash())?;
        writeln!(f, "    Number:         {}", self.number())?;
        writeln!(f, "    ParentHash:     {}", self.content.parent_hash)?;
        writeln!(f, "    Timestamp:      {}", self.content.timestamp)?;
        writeln!(f, "    TotalScore:     {}", self.content.total_score)?;
        writeln!(f, "    GasLimit:       {}", self.content.gas_limit)?;
        writeln!(f, "    GasUsed:        {}", self.content.gas_used)?;
        writeln!(f, "    Beneficiary:    {}", self.content.beneficiary)?;
        writeln!(f, "    TxsRoot:        {}", self.content.txs_root)?;
        writeln!(f, "    StateRoot:      {}", self.content.state_root)?;
        writeln!(f, "    ReceiptsRoot:   {}", self.content.receipts_root)?;
        write!(f, "    Signer:         {}", signer)
    }
}

/// Builder for assembling headers.
pub struct HeaderBuilder {
    content: HeaderContent,
}

impl HeaderBuilder {
    /// Start building a header on top of `parent_hash`.
    pub fn new(parent_hash: Hash32) -> Self {
        Self {
            content: HeaderContent {
                parent_hash,
                ..Default::default()
            },
        }
    }

    /// Start building a genesis header.
    pub fn genesis() -> Self {
        Self::new(Hash32::ZERO)
    }

    /// Set the timestamp.
    pub fn timestamp(mut self, ts: u64) -> Self {
        self.content.timestamp = ts;
        self
    }

    /// Set the total score.
    pub fn total_score(mut self, score: impl Into<BigUint>) -> Self {
        self.content.total_score = score.into();
        self
    }

    /// Set the gas limit.
    pub fn gas_limit(mut self, gas: impl Into<BigUint>) -> Self {
        self.content.gas_limit = gas.into();
        self
    }

    /// Set the gas used.
    pub fn gas_used(mut self, gas: impl Into<BigUint>) -> Self {
        self.content.gas_used = gas.into();
        self
    }

    /// Set the beneficiary.
    pub fn beneficiary(mut self, beneficiary: Address) -> Self {
        self.content.beneficiary = beneficiary;
        self
    }

    /// Set the transactions root.
    pub fn txs_root(mut self, root: Hash32) -> Self {
        self.content.txs_root = root;
        self
    }

    /// Set the state root.
    pub fn state_root(mut self, root: Hash32) -> Self {
        self.content.state_root = root;
        self
    }

    /// Set the receipts root.
    pub fn receipts_root(mut self, root: Hash32) -> Self {
        self.content.receipts_root = root;
        self
    }

    /// Build an unsigned header.
    pub fn build(self) -> Header {
        Header::new(self.content)
    }

    /// Build and sign the header.
    pub fn sign(self, keypair: &Keypair) -> Header {
        self.build().sign(keypair)
    }
}
