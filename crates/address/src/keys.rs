//! Secp256k1 keys, as far as addresses need them: SEC1 public-key serialization and the
//! derivation of a public key from a private key.

use bchaddr_core::hashes::{hash160, Hash160Digest};
use k256::elliptic_curve::sec1::ToEncodedPoint;

use crate::AddressResult;

/// A secp256k1 public key, with the SEC1 form it serializes to.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    key: k256::PublicKey,
    compressed: bool,
}

impl PublicKey {
    /// Wrap a key, choosing its serialized form.
    pub fn new(key: k256::PublicKey, compressed: bool) -> Self {
        Self { key, compressed }
    }

    /// Parse a SEC1 encoded key. The compression of the input is kept.
    pub fn from_slice(data: &[u8]) -> AddressResult<Self> {
        let key = k256::PublicKey::from_sec1_bytes(data)?;
        Ok(Self {
            key,
            compressed: data.len() == 33,
        })
    }

    /// Parse a hex-encoded SEC1 key.
    pub fn from_hex(s: &str) -> AddressResult<Self> {
        Self::from_slice(&hex::decode(s)?)
    }

    /// The SEC1 serialization. 33 bytes if compressed, else 65.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.key
            .to_encoded_point(self.compressed)
            .as_bytes()
            .to_vec()
    }

    /// True if the key serializes in compressed form.
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// The underlying curve point.
    pub fn inner(&self) -> &k256::PublicKey {
        &self.key
    }

    /// `RIPEMD160(SHA256(bytes))` of the serialization.
    pub fn hash160(&self) -> Hash160Digest {
        hash160(&self.to_bytes())
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.to_bytes()))
    }
}

/// A secp256k1 private key. Carries the serialization flag of the public key it derives.
#[derive(Clone)]
pub struct PrivateKey {
    key: k256::SecretKey,
    compressed: bool,
}

impl PrivateKey {
    /// Wrap a key, choosing the form of its public key.
    pub fn new(key: k256::SecretKey, compressed: bool) -> Self {
        Self { key, compressed }
    }

    /// Parse a 32-byte big-endian scalar. The derived public key is compressed.
    pub fn from_slice(data: &[u8]) -> AddressResult<Self> {
        Ok(Self {
            key: k256::SecretKey::from_slice(data)?,
            compressed: true,
        })
    }

    /// Parse a hex-encoded scalar.
    pub fn from_hex(s: &str) -> AddressResult<Self> {
        Self::from_slice(&hex::decode(s)?)
    }

    /// Return a copy that derives uncompressed public keys.
    pub fn uncompressed(mut self) -> Self {
        self.compressed = false;
        self
    }

    /// Derive the public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::new(self.key.public_key(), self.compressed)
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("compressed", &self.compressed)
            .finish_non_exhaustive()
    }
}
