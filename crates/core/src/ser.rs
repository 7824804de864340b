//! A simple trait for binary (de)Serialization using std `Read` and `Write` traits.

use std::io::{Cursor, Error as IOError, Read, Write};

use hex::FromHexError;
use thiserror::Error;

/// Erros related to serialization of types.
#[derive(Debug, Error)]
pub enum SerError {
    /// IOError bubbled up from a `Write` passed to a `ByteFormat::write_to` implementation.
    #[error("Serialization error")]
    IOError(#[from] IOError),

    /// `deserialize_hex` encountered an error on its input.
    #[error("Error deserializing hex string")]
    FromHexError(#[from] FromHexError),
}

/// Type alias for serialization errors
pub type SerResult<T> = Result<T, SerError>;

/// A simple trait for deserializing from `std::io::Read` and serializing to `std::io::Write`.
///
/// `ByteFormat` is used for the fixed-width binary form of addresses and for the raw bytes of
/// scripts.
pub trait ByteFormat {
    /// An associated error type
    type Error: From<SerError> + From<IOError> + std::error::Error;

    /// Returns the byte-length of the serialized data structure.
    fn serialized_length(&self) -> usize;

    /// Deserializes an instance of `Self` from a `std::io::Read`.
    /// The `limit` argument is used only when deserializing variable-length items, and specifies
    /// a maximum number of bytes to read.
    fn read_from<R>(reader: &mut R, limit: usize) -> Result<Self, Self::Error>
    where
        R: Read,
        Self: std::marker::Sized;

    /// Serializes `self` to a `std::io::Write`. Following `Write` trait conventions, its `Ok`
    /// type is a `usize` denoting the number of bytes written.
    fn write_to<W>(&self, writer: &mut W) -> Result<usize, Self::Error>
    where
        W: Write;

    /// Decodes a hex string to a `Vec<u8>`, deserializes an instance of `Self` from that vector.
    fn deserialize_hex(s: &str) -> Result<Self, Self::Error>
    where
        Self: std::marker::Sized,
    {
        let v: Vec<u8> = hex::decode(s).map_err(SerError::from)?;
        let limit = v.len();
        let mut cursor = Cursor::new(v);
        Self::read_from(&mut cursor, limit)
    }

    /// Serializes `self` to a vector, returns the hex-encoded vector
    fn serialize_hex(&self) -> Result<String, Self::Error> {
        let mut v: Vec<u8> = vec![];
        self.write_to(&mut v)?;
        Ok(hex::encode(v))
    }
}
