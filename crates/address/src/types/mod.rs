//! Holds the address value type, its structured record form, the two address types, and the
//! scripts addresses are derived from.

/// The canonical address value
pub mod address;
/// The structured record form of an address
pub mod record;
/// Output scripts and their hash-extraction contract
pub mod script;

pub use address::*;
pub use record::*;
pub use script::*;

use serde::{Deserialize, Serialize};

use crate::AddressError;

/// The two supported address types.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressType {
    /// Pay to Pubkeyhash
    #[serde(rename = "pubkeyhash")]
    PayToPublicKeyHash,
    /// Pay to Scripthash
    #[serde(rename = "scripthash")]
    PayToScriptHash,
}

impl AddressType {
    /// The name used in the record form.
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::PayToPublicKeyHash => "pubkeyhash",
            AddressType::PayToScriptHash => "scripthash",
        }
    }
}

impl std::fmt::Display for AddressType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AddressType {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pubkeyhash" => Ok(AddressType::PayToPublicKeyHash),
            "scripthash" => Ok(AddressType::PayToScriptHash),
            _ => Err(AddressError::InvalidAddressType(s.to_owned())),
        }
    }
}
