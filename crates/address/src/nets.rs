//! The `nets` module holds the registry of known networks. Each network descriptor carries the
//! CashAddr human-readable prefix and the version bytes of the binary form.
//!
//! The registry is a fixed, read-only table. Its order (livenet, testnet, regtest) is the order
//! in which prefixes are tried when a CashAddr string omits its prefix, and the order in which
//! version-byte matches are reported.
//!
//! `NetworkParams` lifts a registry entry to the type level, so that an encoder can be
//! parameterized by its network:
//!
//! ```
//! use bchaddr::{nets::{Main, NetworkParams}, enc::MainnetEncoder};
//! use bchaddr_core::enc::AddressEncoder;
//!
//! let address = MainnetEncoder::string_to_address(
//!     "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a"
//! ).unwrap();
//! assert_eq!(address.network(), Main::network());
//! ```

use crate::{types::AddressType, AddressError, AddressResult};

/// A network descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Network {
    /// The canonical name, e.g. "livenet".
    pub name: &'static str,
    /// An alternate name accepted by lookups, e.g. "mainnet".
    pub alias: Option<&'static str>,
    /// The CashAddr human-readable prefix, e.g. "bitcoincash".
    pub prefix: &'static str,
    /// The version byte of pubkeyhash addresses in binary form.
    pub pubkeyhash: u8,
    /// The version byte of scripthash addresses in binary form.
    pub scripthash: u8,
}

impl Network {
    /// The binary-form version byte for an address type on this network.
    pub fn version_byte(&self, kind: AddressType) -> u8 {
        match kind {
            AddressType::PayToPublicKeyHash => self.pubkeyhash,
            AddressType::PayToScriptHash => self.scripthash,
        }
    }

    /// True if `name` is this network's name or alias.
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name || self.alias == Some(name)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Bitcoin Cash mainnet
pub static LIVENET: Network = Network {
    name: "livenet",
    alias: Some("mainnet"),
    prefix: "bitcoincash",
    pubkeyhash: 0x00,
    scripthash: 0x05,
};

/// Bitcoin Cash testnet
pub static TESTNET: Network = Network {
    name: "testnet",
    alias: None,
    prefix: "bchtest",
    pubkeyhash: 0x6f,
    scripthash: 0xc4,
};

/// Bitcoin Cash regtest. Shares its version bytes with testnet.
pub static REGTEST: Network = Network {
    name: "regtest",
    alias: None,
    prefix: "bchreg",
    pubkeyhash: 0x6f,
    scripthash: 0xc4,
};

/// All known networks, in lookup order.
pub static NETWORKS: [&Network; 3] = [&LIVENET, &TESTNET, &REGTEST];

/// Find a network by name or alias.
pub fn by_name(name: &str) -> Option<&'static Network> {
    NETWORKS.iter().copied().find(|n| n.is_named(name))
}

/// Find a network by name or alias, failing with `UnknownNetwork`.
pub fn lookup(name: &str) -> AddressResult<&'static Network> {
    by_name(name).ok_or_else(|| AddressError::UnknownNetwork(name.to_owned()))
}

/// Find a network by its CashAddr prefix.
pub fn by_prefix(prefix: &str) -> Option<&'static Network> {
    NETWORKS.iter().copied().find(|n| n.prefix == prefix)
}

/// Every (network, type) pair whose binary-form version byte is `byte`, in registry order.
pub fn by_version_byte(byte: u8) -> Vec<(&'static Network, AddressType)> {
    let mut matches = vec![];
    for network in NETWORKS.iter().copied() {
        if network.pubkeyhash == byte {
            matches.push((network, AddressType::PayToPublicKeyHash));
        } else if network.scripthash == byte {
            matches.push((network, AddressType::PayToScriptHash));
        }
    }
    matches
}

/// NetworkParams lifts a registry entry to the type level.
pub trait NetworkParams {
    /// The registry entry.
    fn network() -> &'static Network;
}

/// A param struct for mainnet
#[derive(Debug, Clone)]
pub struct Main;

impl NetworkParams for Main {
    fn network() -> &'static Network {
        &LIVENET
    }
}

/// A param struct for testnet
#[derive(Debug, Clone)]
pub struct Test;

impl NetworkParams for Test {
    fn network() -> &'static Network {
        &TESTNET
    }
}

/// A param struct for regtest
#[derive(Debug, Clone)]
pub struct Reg;

impl NetworkParams for Reg {
    fn network() -> &'static Network {
        &REGTEST
    }
}
