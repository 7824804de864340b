//! The CashAddr base-32 alphabet and the bit-regrouping transform between 8-bit bytes and 5-bit
//! symbols. Also defines common encoder errors.
//!
//! The alphabet is the same one bech32 uses, so symbols are carried as `bech32::u5` and
//! regrouped by the bech32 crate. Trailing bits left over when going from symbols back to bytes
//! must be zero.

use bech32::{u5, Error as BechError, FromBase32, ToBase32};
use once_cell::sync::Lazy;
use thiserror::Error;

/// Errors that can be returned by the CashAddr and version-byte codecs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Address strings must be entirely lower-case or entirely upper-case.
    #[error("Mixed case in address string")]
    MixedCase,

    /// A character outside the base-32 alphabet was found in the payload.
    #[error("Invalid character {0:?} in address payload")]
    InvalidCharacter(char),

    /// No candidate prefix yields a zero polymod.
    #[error("Invalid checksum")]
    InvalidChecksum,

    /// The bits left over after regrouping symbols into bytes are not zero.
    #[error("Non-zero padding bits in address payload")]
    NonZeroPadding,

    /// The type bits of the version byte are neither P2PKH nor P2SH.
    #[error("Invalid address type in version byte 0x{0:02x}")]
    InvalidVersionByte(u8),

    /// The hash does not have the length the version byte announces.
    #[error("Hash size mismatch. Version byte announces {expected} bits, got {got}")]
    HashSizeMismatch {
        /// The size in bits announced by the version byte.
        expected: usize,
        /// The size in bits of the decoded hash.
        got: usize,
    },

    /// No registered network uses this byte as a pubkeyhash or scripthash prefix.
    #[error("Version byte 0x{0:02x} does not match any known network")]
    UnknownVersionByte(u8),

    /// The string cannot be a CashAddr address.
    #[error("Invalid address string: {0}")]
    InvalidAddressString(String),

    /// Hashes must be 20, 24, 28, 32, 40, 48, 56 or 64 bytes.
    #[error("Invalid hash length {0}")]
    InvalidHashLength(usize),

    /// Bubbled up error from bech32 library
    #[error("BechError: {:?}", .0)]
    BechError(#[from] BechError),
}

/// A simple result type alias
pub type EncodingResult<T> = Result<T, EncodingError>;

/// The CashAddr base-32 alphabet. Index `i` is the character for symbol `i`.
pub const ALPHABET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Reverse lookup from ASCII byte to symbol value. -1 marks bytes outside the alphabet.
static ALPHABET_REV: Lazy<[i8; 128]> = Lazy::new(|| {
    let mut table = [-1i8; 128];
    for (i, c) in ALPHABET.bytes().enumerate() {
        table[c as usize] = i as i8;
        table[c.to_ascii_uppercase() as usize] = i as i8;
    }
    table
});

/// Look up the symbol for an alphabet character. Upper-case characters are accepted.
pub fn char_to_u5(c: char) -> EncodingResult<u5> {
    if !c.is_ascii() {
        return Err(EncodingError::InvalidCharacter(c));
    }
    match ALPHABET_REV[c as usize] {
        -1 => Err(EncodingError::InvalidCharacter(c)),
        v => Ok(u5::try_from_u8(v as u8)?),
    }
}

/// Decode a base-32 string into its symbols.
pub fn decode_base32(s: &str) -> EncodingResult<Vec<u5>> {
    s.chars().map(char_to_u5).collect()
}

/// Encode symbols as a lower-case base-32 string.
pub fn encode_base32(symbols: &[u5]) -> String {
    symbols.iter().map(|s| s.to_char()).collect()
}

/// Regroup bytes into symbols, zero-padding the final symbol.
pub fn bytes_to_u5s(data: &[u8]) -> Vec<u5> {
    data.to_base32()
}

/// Regroup symbols into bytes. Trailing bits must be zero and fewer than one symbol wide.
pub fn u5s_to_bytes(symbols: &[u5]) -> EncodingResult<Vec<u8>> {
    Vec::<u8>::from_base32(symbols).map_err(|e| match e {
        BechError::InvalidPadding => EncodingError::NonZeroPadding,
        e => e.into(),
    })
}
