//! # bchaddr
//!
//! Bitcoin Cash addresses. An `Address` is a hash tagged with its network and type. It can be
//! built from a bare hash, the 21-byte binary form, a public key, an output script, CashAddr
//! text, or a structured record, and serialized back to binary, text or record form.
//!
//! ```
//! use bchaddr::prelude::*;
//!
//! let address = Address::from_string(
//!     "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a",
//!     None,
//!     None,
//! ).unwrap();
//! assert!(address.is_pay_to_public_key_hash());
//! assert_eq!(address.network().name, "livenet");
//! assert_eq!(
//!     address.to_cash_address(true).unwrap(),
//!     "qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a"
//! );
//! ```
//!
//! ## Crate Layout
//!
//! - `enc` holds the CashAddr text codec, the binary version-byte codec, and the per-network
//!   `AddressEncoder`s.
//! - `nets` is the network registry.
//! - `classify` turns any supported input into an `Address`.
//! - `types` holds the `Address` itself, its record form, and output scripts.
//! - `keys` wraps secp256k1 keys.
//!
//! The default network is chosen by cargo feature: `mainnet` (default), `testnet` or `regtest`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod classify;
pub mod defaults;
pub mod enc;
pub mod keys;
pub mod nets;
pub mod prelude;
pub mod types;

use thiserror::Error;

use crate::{enc::EncodingError, types::AddressType};

/// Errors that can be returned while building or serializing an address.
#[derive(Debug, Error)]
pub enum AddressError {
    /// The input has none of the supported shapes.
    #[error("Unrecognized data format: {0}")]
    UnrecognizedDataFormat(String),

    /// No registered network has this name or prefix.
    #[error("Unknown network {0}")]
    UnknownNetwork(String),

    /// The input encodes a network other than the one requested.
    #[error("Network mismatch. Expected {expected}, got {got}")]
    NetworkMismatch {
        /// The requested network
        expected: &'static str,
        /// The network the input encodes
        got: &'static str,
    },

    /// The input encodes a type other than the one requested.
    #[error("Type mismatch. Expected {expected}, got {got}")]
    TypeMismatch {
        /// The requested type
        expected: AddressType,
        /// The type the input encodes
        got: AddressType,
    },

    /// Not "pubkeyhash" or "scripthash".
    #[error("Invalid address type {0}")]
    InvalidAddressType(String),

    /// The script is not a P2PKH or P2SH output.
    #[error("Cannot derive an address from script {0}")]
    CannotDeriveAddress(String),

    /// Multisig needs 1 <= threshold <= keys <= 16.
    #[error("Invalid multisig threshold {threshold} of {keys} keys")]
    InvalidThreshold {
        /// The requested threshold
        threshold: usize,
        /// The number of keys
        keys: usize,
    },

    /// Bubbled up from the codecs
    #[error(transparent)]
    EncodingError(#[from] EncodingError),

    /// Bubbled up from `ByteFormat`
    #[error(transparent)]
    SerError(#[from] bchaddr_core::ser::SerError),

    /// IOError bubbled up from a `Read` or `Write`
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Bad hex input
    #[error(transparent)]
    FromHexError(#[from] hex::FromHexError),

    /// Bad JSON input
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// Invalid key material
    #[error(transparent)]
    KeyError(#[from] k256::elliptic_curve::Error),
}

/// Type alias for address results
pub type AddressResult<T> = Result<T, AddressError>;
