//! The CashAddr text codec.
//!
//! A CashAddr string is `[prefix ":"] payload`. The payload is base-32 text of the version
//! byte and hash, regrouped into 5-bit symbols, followed by 8 checksum symbols. The version
//! byte packs the address type (bits 3 and 4) and the hash size (bits 0 to 2).
//!
//! ```
//! use bchaddr::{enc::cashaddr, types::AddressType};
//!
//! let address = cashaddr::encode("bitcoincash", AddressType::PayToPublicKeyHash, &[0u8; 20]).unwrap();
//! assert_eq!(address, "bitcoincash:qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqfnhks603");
//!
//! let decoded = cashaddr::decode(&address).unwrap();
//! assert_eq!(decoded.prefix, "bitcoincash");
//! assert_eq!(decoded.hash, vec![0u8; 20]);
//! ```

use crate::{
    enc::{
        bases::{
            bytes_to_u5s, decode_base32, encode_base32, u5s_to_bytes, EncodingError,
            EncodingResult,
        },
        checksum::{create_checksum, verify_checksum, CHECKSUM_LENGTH},
    },
    nets::NETWORKS,
    types::AddressType,
};

/// Separates the prefix from the payload.
pub const SEPARATOR: char = ':';

const TYPE_MASK: u8 = 0x78;
const SIZE_MASK: u8 = 0x07;

/// Hash sizes in bits, indexed by the size bits of the version byte.
const HASH_SIZES: [usize; 8] = [160, 192, 224, 256, 320, 384, 448, 512];

/// A decoded CashAddr string. The prefix is the one written in the string, or the inferred one
/// if the string had none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashAddrPayload {
    /// The human-readable prefix the checksum verified against.
    pub prefix: String,
    /// The address type from the version byte.
    pub kind: AddressType,
    /// The hash.
    pub hash: Vec<u8>,
}

fn type_bits(kind: AddressType) -> u8 {
    match kind {
        AddressType::PayToPublicKeyHash => 0x00,
        AddressType::PayToScriptHash => 0x08,
    }
}

/// The size bits of the version byte for a hash of `len` bytes.
pub fn hash_size_bits(len: usize) -> EncodingResult<u8> {
    HASH_SIZES
        .iter()
        .position(|bits| *bits == len * 8)
        .map(|i| i as u8)
        .ok_or(EncodingError::InvalidHashLength(len))
}

/// Build the version byte for a type and hash length.
pub fn version_byte(kind: AddressType, hash_len: usize) -> EncodingResult<u8> {
    Ok(type_bits(kind) | hash_size_bits(hash_len)?)
}

/// Read the address type out of a version byte.
pub fn type_from_version_byte(version: u8) -> EncodingResult<AddressType> {
    match version & TYPE_MASK {
        0x00 => Ok(AddressType::PayToPublicKeyHash),
        0x08 => Ok(AddressType::PayToScriptHash),
        _ => Err(EncodingError::InvalidVersionByte(version)),
    }
}

/// Read the hash size in bits out of a version byte.
pub fn hash_size_from_version_byte(version: u8) -> usize {
    HASH_SIZES[(version & SIZE_MASK) as usize]
}

/// Encode a hash as CashAddr without the prefix.
pub fn encode_payload(prefix: &str, kind: AddressType, hash: &[u8]) -> EncodingResult<String> {
    let mut data = vec![version_byte(kind, hash.len())?];
    data.extend_from_slice(hash);

    let mut symbols = bytes_to_u5s(&data);
    let checksum = create_checksum(prefix, &symbols)?;
    symbols.extend(checksum);

    Ok(encode_base32(&symbols))
}

/// Encode a hash as CashAddr, `prefix:payload`. Output is lower-case.
pub fn encode(prefix: &str, kind: AddressType, hash: &[u8]) -> EncodingResult<String> {
    Ok(format!("{}{}{}", prefix, SEPARATOR, encode_payload(prefix, kind, hash)?))
}

/// Decode a CashAddr string. If the prefix is omitted, each known network's prefix is tried in
/// registry order and the first that verifies the checksum is used.
pub fn decode(s: &str) -> EncodingResult<CashAddrPayload> {
    let has_lower = s.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = s.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(EncodingError::MixedCase);
    }
    let s = s.to_ascii_lowercase();

    let mut pieces = s.split(SEPARATOR);
    let (prefix, payload) = match (pieces.next(), pieces.next(), pieces.next()) {
        (Some(prefix), Some(payload), None) => (Some(prefix), payload),
        (Some(payload), None, None) => (None, payload),
        _ => {
            return Err(EncodingError::InvalidAddressString(format!(
                "more than one '{}' in {}",
                SEPARATOR, s
            )))
        }
    };

    let symbols = decode_base32(payload)?;
    if symbols.len() <= CHECKSUM_LENGTH {
        return Err(EncodingError::InvalidAddressString(format!(
            "payload of {} symbols is too short",
            symbols.len()
        )));
    }

    let prefix = match prefix {
        Some(prefix) => {
            if !verify_checksum(prefix, &symbols) {
                return Err(EncodingError::InvalidChecksum);
            }
            prefix.to_owned()
        }
        None => infer_prefix(&symbols)?.to_owned(),
    };

    let data = u5s_to_bytes(&symbols[..symbols.len() - CHECKSUM_LENGTH])?;
    let (version, hash) = data.split_first().ok_or_else(|| {
        EncodingError::InvalidAddressString("payload has no version byte".to_owned())
    })?;

    let kind = type_from_version_byte(*version)?;
    let expected = hash_size_from_version_byte(*version);
    if expected != hash.len() * 8 {
        return Err(EncodingError::HashSizeMismatch {
            expected,
            got: hash.len() * 8,
        });
    }

    Ok(CashAddrPayload {
        prefix,
        kind,
        hash: hash.to_vec(),
    })
}

fn infer_prefix(symbols: &[bech32::u5]) -> EncodingResult<&'static str> {
    for network in NETWORKS.iter() {
        tracing::trace!(prefix = network.prefix, "trying prefix");
        if verify_checksum(network.prefix, symbols) {
            tracing::debug!(network = network.name, "inferred cashaddr prefix");
            return Ok(network.prefix);
        }
    }
    Err(EncodingError::InvalidChecksum)
}
