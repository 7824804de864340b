//! The structured record form of an address, e.g.
//!
//! ```json
//! {"hash": "76a04053bda0a88bda5177b86a15c3b29f559873", "type": "pubkeyhash", "network": "livenet"}
//! ```

use serde::{Deserialize, Serialize};

use crate::{nets, nets::Network, types::AddressType, AddressError, AddressResult};

/// A plain record describing an address. Every field is optional at the type level so that
/// partial records can be parsed and then rejected with a precise error.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressRecord {
    /// The hash, hex encoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// The hash as raw bytes. Used when `hash` is absent.
    #[serde(
        default,
        rename = "hashBuffer",
        skip_serializing_if = "Option::is_none"
    )]
    pub hash_buffer: Option<Vec<u8>>,
    /// "pubkeyhash" or "scripthash"
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// A network name or alias.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

impl AddressRecord {
    /// The hash bytes. `hash` wins over `hashBuffer`. Fails with `UnrecognizedDataFormat` if
    /// neither is present.
    pub fn hash_bytes(&self) -> AddressResult<Vec<u8>> {
        match (&self.hash, &self.hash_buffer) {
            (Some(h), _) => Ok(hex::decode(h)?),
            (None, Some(b)) => Ok(b.clone()),
            (None, None) => Err(AddressError::UnrecognizedDataFormat(
                "record has neither hash nor hashBuffer".to_owned(),
            )),
        }
    }

    /// The address type. Required.
    pub fn address_type(&self) -> AddressResult<AddressType> {
        self.kind
            .as_deref()
            .ok_or_else(|| AddressError::UnrecognizedDataFormat("record has no type".to_owned()))?
            .parse()
    }

    /// The registry entry of the named network, or `None` if the record names none.
    pub fn network(&self) -> AddressResult<Option<&'static Network>> {
        self.network.as_deref().map(nets::lookup).transpose()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::nets::LIVENET;

    #[test]
    fn it_reads_records() {
        let record: AddressRecord = serde_json::from_str(
            r#"{"hash":"76a04053bda0a88bda5177b86a15c3b29f559873","type":"scripthash","network":"mainnet"}"#,
        )
        .unwrap();
        assert_eq!(
            hex::encode(record.hash_bytes().unwrap()),
            "76a04053bda0a88bda5177b86a15c3b29f559873"
        );
        assert_eq!(record.address_type().unwrap(), AddressType::PayToScriptHash);
        assert_eq!(record.network().unwrap(), Some(&LIVENET));

        let record: AddressRecord =
            serde_json::from_str(r#"{"hashBuffer":[1,2,3],"type":"pubkeyhash"}"#).unwrap();
        assert_eq!(record.hash_bytes().unwrap(), vec![1, 2, 3]);
        assert_eq!(record.network().unwrap(), None);
    }

    #[test]
    fn it_rejects_incomplete_records() {
        let record = AddressRecord::default();
        match record.hash_bytes() {
            Err(AddressError::UnrecognizedDataFormat(_)) => {}
            other => panic!("expected UnrecognizedDataFormat, got {:?}", other),
        }
        match record.address_type() {
            Err(AddressError::UnrecognizedDataFormat(_)) => {}
            other => panic!("expected UnrecognizedDataFormat, got {:?}", other),
        }

        let record = AddressRecord {
            hash: Some("not hex".to_owned()),
            kind: Some("multisig".to_owned()),
            network: Some("dogecoin".to_owned()),
            ..Default::default()
        };
        assert!(matches!(
            record.hash_bytes(),
            Err(AddressError::FromHexError(_))
        ));
        assert!(matches!(
            record.address_type(),
            Err(AddressError::InvalidAddressType(_))
        ));
        assert!(matches!(record.network(), Err(AddressError::UnknownNetwork(_))));
    }

    #[test]
    fn it_skips_absent_fields_when_writing() {
        let record = AddressRecord {
            hash: Some("00".to_owned()),
            kind: Some("pubkeyhash".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"hash":"00","type":"pubkeyhash"}"#
        );
    }
}
