//! The default network and encoder, selected by cargo feature. When several network features
//! are on, regtest wins over testnet, and testnet over mainnet.
//!
//! Also implements `FromStr` and serde for `Address` in terms of the default `Classifier`.

use crate::{
    classify::{AddressData, Classifier},
    nets::{Network, NetworkParams},
    types::Address,
    AddressError,
};

/// Mainnet types, used unless the `testnet` or `regtest` feature is on.
#[cfg(not(any(feature = "testnet", feature = "regtest")))]
pub mod network {
    /// The default network, selected by feature flag
    pub type Net = crate::nets::Main;
    /// The default encoder, selected by feature flag
    pub type Encoder = crate::enc::MainnetEncoder;
}

/// Testnet types, selected by the `testnet` feature.
#[cfg(all(feature = "testnet", not(feature = "regtest")))]
pub mod network {
    /// The default network, selected by feature flag
    pub type Net = crate::nets::Test;
    /// The default encoder, selected by feature flag
    pub type Encoder = crate::enc::TestnetEncoder;
}

/// Regtest types, selected by the `regtest` feature.
#[cfg(feature = "regtest")]
pub mod network {
    /// The default network, selected by feature flag
    pub type Net = crate::nets::Reg;
    /// The default encoder, selected by feature flag
    pub type Encoder = crate::enc::RegtestEncoder;
}

/// The registry entry of the default network.
pub fn network() -> &'static Network {
    network::Net::network()
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    /// Parse CashAddr text. The network is whatever the text encodes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Classifier::default().classify(AddressData::Text(s), None, None)
    }
}

impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let s = self
            .to_cash_address(false)
            .map_err(|e| serde::ser::Error::custom(e.to_string()))?;
        serializer.serialize_str(&s)
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        s.parse().map_err(|e: AddressError| serde::de::Error::custom(e.to_string()))
    }
}
