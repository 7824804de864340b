//! Re-exports the commonly used types and traits.

pub use crate::{
    classify::{AddressData, Classifier},
    enc::*,
    keys::{PrivateKey, PublicKey},
    nets::{Network, NetworkParams},
    types::*,
    AddressError, AddressResult,
};

pub use bchaddr_core::{enc::AddressEncoder, ser::ByteFormat};

pub use crate::defaults::network::*;
