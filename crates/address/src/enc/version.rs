//! The binary version-byte form: `[version byte][20-byte hash]`.
//!
//! The version byte is a per-network, per-type prefix looked up in the network registry.

use crate::{
    enc::bases::{EncodingError, EncodingResult},
    nets::{self, Network},
    types::AddressType,
};

/// Length of the hash carried by the binary form.
pub const HASH_LENGTH: usize = 20;

/// Length of the binary form.
pub const VERSIONED_LENGTH: usize = 1 + HASH_LENGTH;

/// A binary-form address split into its parts. The version byte is not yet classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedPayload {
    /// The version byte
    pub version: u8,
    /// The hash
    pub hash: [u8; HASH_LENGTH],
}

/// Split a 21-byte buffer into version byte and hash.
pub fn decode_versioned(buf: &[u8]) -> EncodingResult<VersionedPayload> {
    if buf.len() != VERSIONED_LENGTH {
        return Err(EncodingError::InvalidHashLength(buf.len().saturating_sub(1)));
    }
    let mut hash = [0u8; HASH_LENGTH];
    hash.copy_from_slice(&buf[1..]);
    Ok(VersionedPayload {
        version: buf[0],
        hash,
    })
}

/// All (network, type) interpretations of a version byte, in registry order. Fails with
/// `UnknownVersionByte` if there are none.
pub fn classify_version_byte(version: u8) -> EncodingResult<Vec<(&'static Network, AddressType)>> {
    let matches = nets::by_version_byte(version);
    if matches.is_empty() {
        return Err(EncodingError::UnknownVersionByte(version));
    }
    Ok(matches)
}

/// Produce the binary form of a hash for a network and type.
pub fn encode_versioned(network: &Network, kind: AddressType, hash: &[u8]) -> EncodingResult<Vec<u8>> {
    if hash.len() != HASH_LENGTH {
        return Err(EncodingError::InvalidHashLength(hash.len()));
    }
    let mut v = Vec::with_capacity(VERSIONED_LENGTH);
    v.push(network.version_byte(kind));
    v.extend_from_slice(hash);
    Ok(v)
}
