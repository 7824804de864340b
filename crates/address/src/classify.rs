//! Normalizes every supported input shape into an `Address`.
//!
//! Inputs are a closed set of variants, `AddressData`. Dynamically-typed input (JSON) is mapped
//! to a variant once, by `AddressData::from_json`. Each variant has its own decode path, which
//! may or may not determine the network and type. The `Classifier` then reconciles those with
//! the caller's explicit network and type, and fills in its defaults.

use crate::{
    enc::{cashaddr, version},
    keys::PublicKey,
    nets::{self, Network},
    types::{Address, AddressRecord, AddressType, Script},
    AddressError, AddressResult,
};

/// Text longer than this is rejected before decoding. A prefixed CashAddr carrying a 64-byte
/// hash is 116 characters.
pub const MAX_TEXT_LENGTH: usize = 128;

/// Text at or below this length cannot be CashAddr. Legacy base58 addresses are 34 or 35
/// characters long and are not supported.
pub const LEGACY_MAX_LENGTH: usize = 35;

/// The shapes an address can be built from.
#[derive(Debug, Clone)]
pub enum AddressData<'a> {
    /// A bare hash. Network and type come from the caller or the defaults.
    RawHash(&'a [u8]),
    /// The 21-byte binary form.
    VersionedBuffer(&'a [u8]),
    /// A public key. Produces a pubkeyhash address.
    PublicKey(&'a PublicKey),
    /// An output script. Must be a P2PKH or P2SH output.
    Script(&'a Script),
    /// CashAddr text, with or without its prefix.
    Text(&'a str),
    /// A structured record.
    Record(AddressRecord),
}

impl<'a> AddressData<'a> {
    /// Map a JSON value to an input shape. Strings are text, objects are records.
    pub fn from_json(value: &'a serde_json::Value) -> AddressResult<Self> {
        match value {
            serde_json::Value::String(s) => Ok(AddressData::Text(s.as_str())),
            serde_json::Value::Object(_) => {
                Ok(AddressData::Record(serde_json::from_value(value.clone())?))
            }
            other => Err(AddressError::UnrecognizedDataFormat(format!(
                "cannot build an address from JSON {}",
                other
            ))),
        }
    }
}

impl<'a> TryFrom<&'a [u8]> for AddressData<'a> {
    type Error = AddressError;

    /// 20 bytes are a bare hash, 21 bytes are the binary form.
    fn try_from(buf: &'a [u8]) -> AddressResult<Self> {
        match buf.len() {
            version::HASH_LENGTH => Ok(AddressData::RawHash(buf)),
            version::VERSIONED_LENGTH => Ok(AddressData::VersionedBuffer(buf)),
            len => Err(AddressError::UnrecognizedDataFormat(format!(
                "{} bytes is neither a hash nor a versioned buffer",
                len
            ))),
        }
    }
}

impl<'a> From<&'a str> for AddressData<'a> {
    fn from(s: &'a str) -> Self {
        AddressData::Text(s)
    }
}

impl<'a> From<&'a PublicKey> for AddressData<'a> {
    fn from(key: &'a PublicKey) -> Self {
        AddressData::PublicKey(key)
    }
}

impl<'a> From<&'a Script> for AddressData<'a> {
    fn from(script: &'a Script) -> Self {
        AddressData::Script(script)
    }
}

impl From<AddressRecord> for AddressData<'_> {
    fn from(record: AddressRecord) -> Self {
        AddressData::Record(record)
    }
}

/// What a decode path learned about its input.
struct Decoded {
    hash: Vec<u8>,
    network: Option<&'static Network>,
    kind: Option<AddressType>,
}

impl Decoded {
    fn hash(hash: &[u8]) -> Self {
        Self {
            hash: hash.to_vec(),
            network: None,
            kind: None,
        }
    }
}

/// Builds addresses from any `AddressData`, with an injected default network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    default_network: &'static Network,
}

impl Default for Classifier {
    /// Uses the network selected by cargo feature.
    fn default() -> Self {
        Self::new(crate::defaults::network())
    }
}

impl Classifier {
    /// Instantiate a classifier that falls back to `default_network`.
    pub fn new(default_network: &'static Network) -> Self {
        Self { default_network }
    }

    /// The network used when neither the input nor the caller determines one.
    pub fn default_network(&self) -> &'static Network {
        self.default_network
    }

    /// Build an address. An explicit `network` or `kind` must agree with whatever the input
    /// itself encodes, else `NetworkMismatch` or `TypeMismatch`.
    pub fn classify(
        &self,
        data: AddressData<'_>,
        network: Option<&'static Network>,
        kind: Option<AddressType>,
    ) -> AddressResult<Address> {
        let decoded = match data {
            AddressData::RawHash(hash) => Decoded::hash(hash),
            AddressData::VersionedBuffer(buf) => {
                decode_versioned_buffer(buf, network.unwrap_or(self.default_network))?
            }
            AddressData::PublicKey(key) => Decoded {
                hash: key.hash160().to_vec(),
                network: None,
                kind: Some(AddressType::PayToPublicKeyHash),
            },
            AddressData::Script(script) => decode_script(script)?,
            AddressData::Text(s) => decode_text(s)?,
            AddressData::Record(record) => decode_record(&record)?,
        };
        self.resolve(decoded, network, kind)
    }

    /// The error `classify` would return, or `None` if the input is a valid address.
    pub fn validation_error(
        &self,
        data: AddressData<'_>,
        network: Option<&'static Network>,
        kind: Option<AddressType>,
    ) -> Option<AddressError> {
        let err = self.classify(data, network, kind).err();
        if let Some(e) = &err {
            tracing::debug!(error = %e, "address failed validation");
        }
        err
    }

    /// True if `classify` would succeed.
    pub fn is_valid(
        &self,
        data: AddressData<'_>,
        network: Option<&'static Network>,
        kind: Option<AddressType>,
    ) -> bool {
        self.validation_error(data, network, kind).is_none()
    }

    fn resolve(
        &self,
        decoded: Decoded,
        network: Option<&'static Network>,
        kind: Option<AddressType>,
    ) -> AddressResult<Address> {
        let network = match (network, decoded.network) {
            (Some(expected), Some(got)) if expected != got => {
                return Err(AddressError::NetworkMismatch {
                    expected: expected.name,
                    got: got.name,
                })
            }
            (Some(n), _) | (None, Some(n)) => n,
            (None, None) => self.default_network,
        };
        let kind = match (kind, decoded.kind) {
            (Some(expected), Some(got)) if expected != got => {
                return Err(AddressError::TypeMismatch { expected, got })
            }
            (Some(k), _) | (None, Some(k)) => k,
            (None, None) => AddressType::PayToPublicKeyHash,
        };
        Address::from_parts(decoded.hash, network, kind)
    }
}

/// Shared version bytes resolve to `preferred` when it is a candidate, else to the first
/// candidate in registry order.
fn decode_versioned_buffer(buf: &[u8], preferred: &'static Network) -> AddressResult<Decoded> {
    let payload = version::decode_versioned(buf)?;
    let candidates = version::classify_version_byte(payload.version)?;

    let (network, kind) = candidates
        .iter()
        .find(|(candidate, _)| *candidate == preferred)
        .copied()
        .unwrap_or(candidates[0]);
    if candidates.len() > 1 {
        tracing::debug!(
            version = payload.version,
            network = network.name,
            "ambiguous version byte"
        );
    }

    Ok(Decoded {
        hash: payload.hash.to_vec(),
        network: Some(network),
        kind: Some(kind),
    })
}

fn decode_script(script: &Script) -> AddressResult<Decoded> {
    let (kind, hash) = script
        .address_info()
        .ok_or_else(|| AddressError::CannotDeriveAddress(hex::encode(script.items())))?;
    Ok(Decoded {
        hash,
        network: None,
        kind: Some(kind),
    })
}

fn decode_text(s: &str) -> AddressResult<Decoded> {
    let s = s.trim();
    if s.len() > MAX_TEXT_LENGTH {
        return Err(cashaddr_rejection(format!("{} characters is too long", s.len())));
    }
    if s.len() <= LEGACY_MAX_LENGTH {
        return Err(cashaddr_rejection(format!(
            "{} characters is too short for cashaddr, legacy addresses are not supported",
            s.len()
        )));
    }

    let payload = cashaddr::decode(s)?;
    let network = nets::by_prefix(&payload.prefix)
        .ok_or_else(|| AddressError::UnknownNetwork(payload.prefix.clone()))?;
    Ok(Decoded {
        hash: payload.hash,
        network: Some(network),
        kind: Some(payload.kind),
    })
}

fn decode_record(record: &AddressRecord) -> AddressResult<Decoded> {
    Ok(Decoded {
        hash: record.hash_bytes()?,
        network: record.network()?,
        kind: Some(record.address_type()?),
    })
}

fn cashaddr_rejection(reason: String) -> AddressError {
    crate::enc::EncodingError::InvalidAddressString(reason).into()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        enc::EncodingError,
        nets::{LIVENET, REGTEST, TESTNET},
    };

    const HASH: &str = "76a04053bda0a88bda5177b86a15c3b29f559873";

    fn hash() -> Vec<u8> {
        hex::decode(HASH).unwrap()
    }

    #[test]
    fn it_dispatches_byte_slices_by_length() {
        let h = hash();
        assert!(matches!(
            AddressData::try_from(&h[..]).unwrap(),
            AddressData::RawHash(_)
        ));
        let mut buf = vec![0x05];
        buf.extend_from_slice(&h);
        assert!(matches!(
            AddressData::try_from(&buf[..]).unwrap(),
            AddressData::VersionedBuffer(_)
        ));
        assert!(matches!(
            AddressData::try_from(&buf[..19]),
            Err(AddressError::UnrecognizedDataFormat(_))
        ));
    }

    #[test]
    fn it_maps_json_values_to_shapes() {
        let text = serde_json::json!("bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a");
        assert!(matches!(
            AddressData::from_json(&text).unwrap(),
            AddressData::Text(_)
        ));
        let record = serde_json::json!({"hash": HASH, "type": "pubkeyhash"});
        assert!(matches!(
            AddressData::from_json(&record).unwrap(),
            AddressData::Record(_)
        ));
        for value in [serde_json::json!(12), serde_json::json!([1, 2]), serde_json::Value::Null].iter() {
            assert!(matches!(
                AddressData::from_json(value),
                Err(AddressError::UnrecognizedDataFormat(_))
            ));
        }
    }

    #[test]
    fn it_fills_in_defaults_for_bare_hashes() {
        let h = hash();
        let classifier = Classifier::new(&TESTNET);
        let address = classifier.classify(AddressData::RawHash(&h), None, None).unwrap();
        assert_eq!(address.network(), &TESTNET);
        assert_eq!(address.kind(), AddressType::PayToPublicKeyHash);

        let address = classifier
            .classify(
                AddressData::RawHash(&h),
                Some(&LIVENET),
                Some(AddressType::PayToScriptHash),
            )
            .unwrap();
        assert_eq!(address.network(), &LIVENET);
        assert_eq!(address.kind(), AddressType::PayToScriptHash);
    }

    #[test]
    fn it_resolves_shared_version_bytes() {
        let mut buf = vec![0xc4];
        buf.extend_from_slice(&hash());
        let classifier = Classifier::new(&LIVENET);

        let address = classifier.classify(AddressData::VersionedBuffer(&buf), None, None).unwrap();
        assert_eq!(address.network(), &TESTNET);
        assert_eq!(address.kind(), AddressType::PayToScriptHash);

        let address = classifier
            .classify(AddressData::VersionedBuffer(&buf), Some(&REGTEST), None)
            .unwrap();
        assert_eq!(address.network(), &REGTEST);

        match classifier.classify(AddressData::VersionedBuffer(&buf), Some(&LIVENET), None) {
            Err(AddressError::NetworkMismatch { expected, got }) => {
                assert_eq!(expected, "livenet");
                assert_eq!(got, "testnet");
            }
            other => panic!("expected NetworkMismatch, got {:?}", other),
        }

        match classifier.classify(
            AddressData::VersionedBuffer(&buf),
            None,
            Some(AddressType::PayToPublicKeyHash),
        ) {
            Err(AddressError::TypeMismatch { expected, got }) => {
                assert_eq!(expected, AddressType::PayToPublicKeyHash);
                assert_eq!(got, AddressType::PayToScriptHash);
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn it_prefers_the_default_network_for_shared_version_bytes() {
        let classifier = Classifier::new(&REGTEST);
        for kind in [AddressType::PayToPublicKeyHash, AddressType::PayToScriptHash].iter() {
            let original = Address::from_parts(hash(), &REGTEST, *kind).unwrap();
            let buf = original.to_buffer().unwrap();
            let address = classifier.classify(AddressData::VersionedBuffer(&buf), None, None).unwrap();
            assert_eq!(address, original);
        }

        // an explicit network still wins over the default
        let mut buf = vec![0x6f];
        buf.extend_from_slice(&hash());
        let address = classifier
            .classify(AddressData::VersionedBuffer(&buf), Some(&TESTNET), None)
            .unwrap();
        assert_eq!(address.network(), &TESTNET);

        // a default that does not share the byte does not affect resolution
        let mut buf = vec![0x00];
        buf.extend_from_slice(&hash());
        let address = classifier.classify(AddressData::VersionedBuffer(&buf), None, None).unwrap();
        assert_eq!(address.network(), &LIVENET);
    }

    #[test]
    fn it_cross_checks_explicit_types() {
        let classifier = Classifier::default();
        let text = "bitcoincash:ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq";
        match classifier.classify(text.into(), None, Some(AddressType::PayToPublicKeyHash)) {
            Err(AddressError::TypeMismatch { expected, got }) => {
                assert_eq!(expected, AddressType::PayToPublicKeyHash);
                assert_eq!(got, AddressType::PayToScriptHash);
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
        assert!(classifier.is_valid(text.into(), Some(&LIVENET), Some(AddressType::PayToScriptHash)));
    }

    #[test]
    fn it_rejects_legacy_and_oversized_text() {
        let classifier = Classifier::default();
        let long = format!("bitcoincash:{}", "q".repeat(120));
        let cases = [
            "1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu",
            "3CWFddi6m4ndiGyKqzYvsFYagqDLPVMTzC",
            "",
            long.as_str(),
        ];
        for case in cases.iter() {
            match classifier.validation_error((*case).into(), None, None) {
                Some(AddressError::EncodingError(EncodingError::InvalidAddressString(_))) => {}
                other => panic!("expected InvalidAddressString for {}, got {:?}", case, other),
            }
        }
    }

    #[test]
    fn it_trims_text() {
        let classifier = Classifier::default();
        let address = classifier
            .classify(
                " bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a\n".into(),
                None,
                None,
            )
            .unwrap();
        assert_eq!(address.hash(), &hash()[..]);
    }

    #[test]
    fn it_rejects_unregistered_prefixes() {
        match Classifier::default().classify(
            "pref:pr6m7j9njldwwzlg9v7v53unlr4jkmx6ey65nvtks5".into(),
            None,
            None,
        ) {
            Err(AddressError::UnknownNetwork(prefix)) => assert_eq!(prefix, "pref"),
            other => panic!("expected UnknownNetwork, got {:?}", other),
        }
    }

    #[test]
    fn it_refuses_scripts_without_an_address() {
        let script = Script::new(hex::decode("6a0401020304").unwrap());
        match Classifier::default().classify((&script).into(), None, None) {
            Err(AddressError::CannotDeriveAddress(s)) => assert_eq!(s, "6a0401020304"),
            other => panic!("expected CannotDeriveAddress, got {:?}", other),
        }
    }

    #[test]
    fn it_reads_records() {
        let classifier = Classifier::new(&REGTEST);
        let value = serde_json::json!({"hash": HASH, "type": "scripthash"});
        let address = classifier
            .classify(AddressData::from_json(&value).unwrap(), None, None)
            .unwrap();
        assert_eq!(address.network(), &REGTEST);
        assert_eq!(address.kind(), AddressType::PayToScriptHash);

        let value = serde_json::json!({"hashBuffer": hash(), "type": "pubkeyhash", "network": "testnet"});
        let address = classifier
            .classify(AddressData::from_json(&value).unwrap(), None, None)
            .unwrap();
        assert_eq!(address.network(), &TESTNET);

        let cases = [
            serde_json::json!({"hash": HASH}),
            serde_json::json!({"type": "pubkeyhash"}),
        ];
        for value in cases.iter() {
            assert!(matches!(
                classifier.classify(AddressData::from_json(value).unwrap(), None, None),
                Err(AddressError::UnrecognizedDataFormat(_))
            ));
        }

        let value = serde_json::json!({"hash": HASH, "type": "pubkeyhash", "network": "signet"});
        assert!(matches!(
            classifier.classify(AddressData::from_json(&value).unwrap(), None, None),
            Err(AddressError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn it_rejects_bad_hash_lengths() {
        let classifier = Classifier::default();
        for len in [19usize, 21].iter() {
            let h = vec![0u8; *len];
            assert!(matches!(
                classifier.classify(AddressData::RawHash(&h), None, None),
                Err(AddressError::EncodingError(EncodingError::InvalidHashLength(_)))
            ));
        }
        let h = vec![0u8; 32];
        assert!(classifier.is_valid(AddressData::RawHash(&h), None, None));
    }
}
