//! The canonical address value.
//!
//! An `Address` is a hash, a network and a type, all fixed at construction. Constructors take
//! an optional explicit network and type; whatever the input encodes must agree with them.
//! Constructors that cannot learn a network from their input use the default network.

use std::io::{Read, Write};

use bchaddr_core::ser::ByteFormat;

use crate::{
    classify::{AddressData, Classifier},
    enc::{cashaddr, version},
    keys::{PrivateKey, PublicKey},
    nets::Network,
    types::{AddressRecord, AddressType, Script},
    AddressError, AddressResult,
};

/// A Bitcoin Cash address.
///
/// Two addresses are equal iff hash, network and type all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    hash: Vec<u8>,
    network: &'static Network,
    kind: AddressType,
}

impl Address {
    /// Assemble an address from its parts. The hash must have a CashAddr length: 20, 24, 28,
    /// 32, 40, 48, 56 or 64 bytes.
    pub fn from_parts(
        hash: Vec<u8>,
        network: &'static Network,
        kind: AddressType,
    ) -> AddressResult<Self> {
        cashaddr::hash_size_bits(hash.len())?;
        Ok(Self {
            hash,
            network,
            kind,
        })
    }

    /// Build an address from any supported input with the default classifier.
    pub fn new(
        data: AddressData<'_>,
        network: Option<&'static Network>,
        kind: Option<AddressType>,
    ) -> AddressResult<Self> {
        Classifier::default().classify(data, network, kind)
    }

    /// Parse CashAddr text.
    pub fn from_string(
        s: &str,
        network: Option<&'static Network>,
        kind: Option<AddressType>,
    ) -> AddressResult<Self> {
        Self::new(AddressData::Text(s), network, kind)
    }

    /// Parse the 21-byte binary form.
    pub fn from_buffer(
        buf: &[u8],
        network: Option<&'static Network>,
        kind: Option<AddressType>,
    ) -> AddressResult<Self> {
        Self::new(AddressData::VersionedBuffer(buf), network, kind)
    }

    /// The pubkeyhash address of a public key.
    pub fn from_public_key(
        key: &PublicKey,
        network: Option<&'static Network>,
    ) -> AddressResult<Self> {
        Self::new(AddressData::PublicKey(key), network, None)
    }

    /// The pubkeyhash address of a private key's public key.
    pub fn from_private_key(
        key: &PrivateKey,
        network: Option<&'static Network>,
    ) -> AddressResult<Self> {
        Self::from_public_key(&key.public_key(), network)
    }

    /// A pubkeyhash address. The hash must be 20 bytes.
    pub fn from_public_key_hash(
        hash: &[u8],
        network: Option<&'static Network>,
    ) -> AddressResult<Self> {
        Self::from_hash160(hash, network, AddressType::PayToPublicKeyHash)
    }

    /// A scripthash address. The hash must be 20 bytes.
    pub fn from_script_hash(
        hash: &[u8],
        network: Option<&'static Network>,
    ) -> AddressResult<Self> {
        Self::from_hash160(hash, network, AddressType::PayToScriptHash)
    }

    fn from_hash160(
        hash: &[u8],
        network: Option<&'static Network>,
        kind: AddressType,
    ) -> AddressResult<Self> {
        if hash.len() != version::HASH_LENGTH {
            return Err(crate::enc::EncodingError::InvalidHashLength(hash.len()).into());
        }
        Self::new(AddressData::RawHash(hash), network, Some(kind))
    }

    /// The address an output script pays to. Fails with `CannotDeriveAddress` unless the script
    /// is a P2PKH or P2SH output.
    pub fn from_script(
        script: &Script,
        network: Option<&'static Network>,
    ) -> AddressResult<Self> {
        Self::new(AddressData::Script(script), network, None)
    }

    /// Build an address from its record form.
    pub fn from_object(record: AddressRecord) -> AddressResult<Self> {
        Self::new(AddressData::Record(record), None, None)
    }

    /// The scripthash address of a redeem script.
    pub fn paying_to(script: &Script, network: Option<&'static Network>) -> AddressResult<Self> {
        Self::from_script_hash(&script.hash160(), network)
    }

    /// The scripthash address of a sorted `threshold`-of-n multisig script.
    pub fn create_multisig(
        pubkeys: &[PublicKey],
        threshold: usize,
        network: Option<&'static Network>,
    ) -> AddressResult<Self> {
        let script = Script::multisig(pubkeys, threshold, true)?;
        Self::paying_to(&script, network)
    }

    /// The error that building an address from `data` would return, if any.
    pub fn get_validation_error(
        data: AddressData<'_>,
        network: Option<&'static Network>,
        kind: Option<AddressType>,
    ) -> Option<AddressError> {
        Classifier::default().validation_error(data, network, kind)
    }

    /// True if an address can be built from `data`.
    pub fn is_valid(
        data: AddressData<'_>,
        network: Option<&'static Network>,
        kind: Option<AddressType>,
    ) -> bool {
        Classifier::default().is_valid(data, network, kind)
    }

    /// The hash.
    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    /// The network.
    pub fn network(&self) -> &'static Network {
        self.network
    }

    /// The address type.
    pub fn kind(&self) -> AddressType {
        self.kind
    }

    /// True for pubkeyhash addresses.
    pub fn is_pay_to_public_key_hash(&self) -> bool {
        self.kind == AddressType::PayToPublicKeyHash
    }

    /// True for scripthash addresses.
    pub fn is_pay_to_script_hash(&self) -> bool {
        self.kind == AddressType::PayToScriptHash
    }

    /// The 21-byte binary form. Only 20-byte hashes have one.
    pub fn to_buffer(&self) -> AddressResult<Vec<u8>> {
        Ok(version::encode_versioned(self.network, self.kind, &self.hash)?)
    }

    /// The CashAddr text, with or without the `prefix:` part.
    pub fn to_cash_address(&self, strip_prefix: bool) -> AddressResult<String> {
        let prefix = self.network.prefix;
        let s = if strip_prefix {
            cashaddr::encode_payload(prefix, self.kind, &self.hash)?
        } else {
            cashaddr::encode(prefix, self.kind, &self.hash)?
        };
        Ok(s)
    }

    /// The record form.
    pub fn to_object(&self) -> AddressRecord {
        AddressRecord {
            hash: Some(hex::encode(&self.hash)),
            hash_buffer: None,
            kind: Some(self.kind.to_string()),
            network: Some(self.network.name.to_owned()),
        }
    }

    /// The record form as JSON.
    pub fn to_json(&self) -> AddressResult<serde_json::Value> {
        Ok(serde_json::to_value(self.to_object())?)
    }

    /// The output script paying to this address.
    pub fn to_script(&self) -> Script {
        match self.kind {
            AddressType::PayToPublicKeyHash => Script::p2pkh(&self.hash),
            AddressType::PayToScriptHash => Script::p2sh(&self.hash),
        }
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.to_cash_address(false).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl ByteFormat for Address {
    type Error = AddressError;

    fn serialized_length(&self) -> usize {
        version::VERSIONED_LENGTH
    }

    fn read_from<R>(reader: &mut R, _limit: usize) -> Result<Self, Self::Error>
    where
        R: Read,
        Self: std::marker::Sized,
    {
        let mut buf = [0u8; version::VERSIONED_LENGTH];
        reader.read_exact(&mut buf)?;
        Address::from_buffer(&buf, None, None)
    }

    fn write_to<W>(&self, writer: &mut W) -> Result<usize, Self::Error>
    where
        W: Write,
    {
        let buf = self.to_buffer()?;
        writer.write_all(&buf)?;
        Ok(buf.len())
    }
}
