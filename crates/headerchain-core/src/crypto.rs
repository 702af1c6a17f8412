//! Signature adapter: Ed25519 signing and signer recovery over header hashes.
//!
//! Ed25519 has no public-key recovery, so a header signature carries the
//! signer's public key in front of the signature proper:
//!
//! ```text
//! signature = public_key (32 bytes) || ed25519(signing_hash) (64 bytes)
//! ```
//!
//! Recovery verifies the embedded signature against the embedded key and
//! derives the account identifier from the key.

use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;
use crate::types::{Address, Hash32};

/// Length of an Ed25519 public key.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Length of a raw Ed25519 signature.
pub const ED25519_SIGNATURE_LEN: usize = 64;

/// Length of a header signature (public key followed by Ed25519 signature).
pub const SIGNATURE_LEN: usize = PUBLIC_KEY_LEN + ED25519_SIGNATURE_LEN;

/// A 32-byte Ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(pub [u8; 32]);

impl PublicKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The account identifier owned by this key.
    pub fn address(&self) -> Address {
        Address::from_public_key(&self.0)
    }

    /// Verify a raw Ed25519 signature over a hash.
    ///
    /// Small-order keys and signature points are rejected: a weak key would
    /// verify one signature against every hash.
    pub fn verify(&self, hash: &Hash32, signature: &[u8; 64]) -> Result<(), CoreError> {
        let verifying_key = VerifyingKey::from_bytes(&self.0)
            .map_err(|_| CoreError::RecoveryFailed("invalid public key".into()))?;

        if verifying_key.is_weak() {
            return Err(CoreError::RecoveryFailed("weak public key".into()));
        }

        let sig = Signature::from_bytes(signature);

        verifying_key
            .verify_strict(hash.as_bytes(), &sig)
            .map_err(|_| CoreError::RecoveryFailed("signature does not verify".into()))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for PublicKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// A keypair for signing headers.
///
/// This wraps ed25519-dalek's SigningKey.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let signing_key = SigningKey::generate(&mut rng);
        Self { signing_key }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// Get the public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// The account identifier a recovered signature resolves to.
    pub fn address(&self) -> Address {
        self.public_key().address()
    }

    /// Sign a hash, producing a recoverable header signature.
    pub fn sign_hash(&self, hash: &Hash32) -> Vec<u8> {
        let sig = self.signing_key.sign(hash.as_bytes());
        let mut out = Vec::with_capacity(SIGNATURE_LEN);
        out.extend_from_slice(&self.public_key().0);
        out.extend_from_slice(&sig.to_bytes());
        out
    }

    /// Get the raw seed bytes (secret key material).
    pub fn seed(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({:?})", self.public_key())
    }
}

/// Recover the signer's account identifier from a hash and header signature.
pub fn recover_signer(hash: &Hash32, signature: &[u8]) -> Result<Address, CoreError> {
    if signature.len() != SIGNATURE_LEN {
        tracing::debug!(len = signature.len(), "rejecting signature with bad length");
        return Err(CoreError::RecoveryFailed(format!(
            "expected {} signature bytes, got {}",
            SIGNATURE_LEN,
            signature.len()
        )));
    }

    let (pk_bytes, sig_bytes) = signature.split_at(PUBLIC_KEY_LEN);
    let mut pk = [0u8; PUBLIC_KEY_LEN];
    pk.copy_from_slice(pk_bytes);
    let mut sig = [0u8; ED25519_SIGNATURE_LEN];
    sig.copy_from_slice(sig_bytes);

    let public_key = PublicKey(pk);
    if let Err(e) = public_key.verify(hash, &sig) {
        tracing::debug!(key = ?public_key, hash = %hash, error = %e, "signer recovery failed");
        return Err(e);
    }

    Ok(public_key.address())
}
