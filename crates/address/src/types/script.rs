//! Output scripts. Scripts are opaque byte vectors; we recognize only the standard output
//! templates that addresses are derived from, and build those templates.
//!
//! ```
//! use bchaddr::types::{AddressType, Script};
//!
//! let script = Script::p2pkh(&[0u8; 20]);
//! assert_eq!(
//!     script.address_info(),
//!     Some((AddressType::PayToPublicKeyHash, vec![0u8; 20]))
//! );
//! ```

use bchaddr_core::hashes::{hash160, Hash160Digest};

use crate::{keys::PublicKey, types::AddressType, AddressError, AddressResult};

const OP_DUP: u8 = 0x76;
const OP_HASH160: u8 = 0xa9;
const OP_EQUAL: u8 = 0x87;
const OP_EQUALVERIFY: u8 = 0x88;
const OP_CHECKSIG: u8 = 0xac;
const OP_CHECKMULTISIG: u8 = 0xae;
const OP_1: u8 = 0x51;
const OP_16: u8 = 0x60;

/// The most keys a bare multisig script may carry.
pub const MAX_MULTISIG_KEYS: usize = 16;

bchaddr_core::wrap_byte_vector!(
    /// A Script is a marked `Vec<u8>`. Its binary form is the raw script bytes, without a length
    /// prefix.
    Script
);

/// Standard output script templates, and a non-standard type for all other scripts.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum ScriptType {
    /// Pay to Pubkeyhash.
    Pkh(Hash160Digest),
    /// Pay to Scripthash.
    Sh(Hash160Digest),
    /// Bare m-of-n multisig.
    Multisig {
        /// Signatures required
        threshold: usize,
        /// Keys listed
        keys: usize,
    },
    /// Nonstandard or unknown `Script` type.
    NonStandard,
}

fn small_int(op: u8) -> Option<usize> {
    if (OP_1..=OP_16).contains(&op) {
        Some((op - OP_1 + 1) as usize)
    } else {
        None
    }
}

fn digest(bytes: &[u8]) -> Hash160Digest {
    let mut h = Hash160Digest::default();
    h.copy_from_slice(bytes);
    h
}

impl Script {
    /// `OP_DUP OP_HASH160 <hash> OP_EQUALVERIFY OP_CHECKSIG`
    pub fn p2pkh(hash: &[u8]) -> Self {
        let mut v = Vec::with_capacity(hash.len() + 5);
        v.extend_from_slice(&[OP_DUP, OP_HASH160, hash.len() as u8]);
        v.extend_from_slice(hash);
        v.extend_from_slice(&[OP_EQUALVERIFY, OP_CHECKSIG]);
        v.into()
    }

    /// `OP_HASH160 <hash> OP_EQUAL`
    pub fn p2sh(hash: &[u8]) -> Self {
        let mut v = Vec::with_capacity(hash.len() + 3);
        v.extend_from_slice(&[OP_HASH160, hash.len() as u8]);
        v.extend_from_slice(hash);
        v.push(OP_EQUAL);
        v.into()
    }

    /// `OP_m <key>... OP_n OP_CHECKMULTISIG`. With `sort` set, keys are ordered by their
    /// serialization so that any permutation of the same keys yields the same script.
    ///
    /// Fails with `InvalidThreshold` unless `1 <= threshold <= keys <= 16`.
    pub fn multisig(pubkeys: &[PublicKey], threshold: usize, sort: bool) -> AddressResult<Self> {
        let n = pubkeys.len();
        if threshold == 0 || threshold > n || n > MAX_MULTISIG_KEYS {
            return Err(AddressError::InvalidThreshold { threshold, keys: n });
        }

        let mut keys: Vec<Vec<u8>> = pubkeys.iter().map(PublicKey::to_bytes).collect();
        if sort {
            keys.sort();
        }

        let mut v = vec![OP_1 - 1 + threshold as u8];
        for key in keys.iter() {
            v.push(key.len() as u8);
            v.extend_from_slice(key);
        }
        v.push(OP_1 - 1 + n as u8);
        v.push(OP_CHECKMULTISIG);
        Ok(v.into())
    }

    /// `RIPEMD160(SHA256(script))`
    pub fn hash160(&self) -> Hash160Digest {
        hash160(self.items())
    }

    fn multisig_shape(&self) -> Option<(usize, usize)> {
        let items = self.items();
        if items.len() < 3 || items[items.len() - 1] != OP_CHECKMULTISIG {
            return None;
        }
        let threshold = small_int(items[0])?;
        let keys = small_int(items[items.len() - 2])?;

        let mut cursor = 1;
        let mut found = 0;
        while cursor < items.len() - 2 {
            let len = items[cursor] as usize;
            if len != 33 && len != 65 {
                return None;
            }
            cursor += 1 + len;
            found += 1;
        }
        if cursor != items.len() - 2 || found != keys || threshold > keys {
            return None;
        }
        Some((threshold, keys))
    }

    /// Inspect the `Script` to determine its type.
    pub fn standard_type(&self) -> ScriptType {
        let items = self.items();
        match items.len() {
            0x19 if items[0..3] == [OP_DUP, OP_HASH160, 0x14]
                && items[0x17..] == [OP_EQUALVERIFY, OP_CHECKSIG] =>
            {
                ScriptType::Pkh(digest(&items[3..0x17]))
            }
            0x17 if items[0..2] == [OP_HASH160, 0x14] && items[0x16] == OP_EQUAL => {
                ScriptType::Sh(digest(&items[2..0x16]))
            }
            _ => match self.multisig_shape() {
                Some((threshold, keys)) => ScriptType::Multisig { threshold, keys },
                None => ScriptType::NonStandard,
            },
        }
    }

    /// The address type and hash an output script pays to. `None` if the script is not a
    /// P2PKH or P2SH output.
    pub fn address_info(&self) -> Option<(AddressType, Vec<u8>)> {
        match self.standard_type() {
            ScriptType::Pkh(h) => Some((AddressType::PayToPublicKeyHash, h.to_vec())),
            ScriptType::Sh(h) => Some((AddressType::PayToScriptHash, h.to_vec())),
            _ => None,
        }
    }
}
