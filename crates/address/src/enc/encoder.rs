//! Defines parameterized encoders for mainnet, testnet and regtest.

use std::marker::PhantomData;

use bchaddr_core::enc::AddressEncoder;

use crate::{
    nets::{Main, NetworkParams, Reg, Test},
    types::{Address, Script},
    AddressError,
};

/// The standard encoder for Bitcoin Cash networks. Parameterized by a `NetworkParams` type.
///
/// Strings are decoded against the encoder's network. A string carrying another network's
/// prefix fails with `NetworkMismatch`.
#[derive(Debug, Clone)]
pub struct CashAddrEncoder<P: NetworkParams>(PhantomData<fn(P) -> P>);

impl<P: NetworkParams> AddressEncoder for CashAddrEncoder<P> {
    type Address = Address;
    type Error = AddressError;
    type RecipientIdentifier = Script;

    fn encode_address(s: &Script) -> Result<Address, AddressError> {
        Address::from_script(s, Some(P::network()))
    }

    fn decode_address(addr: &Address) -> Script {
        addr.to_script()
    }

    fn string_to_address(s: &str) -> Result<Address, AddressError> {
        Address::from_string(s, Some(P::network()), None)
    }
}

/// An encoder for Bitcoin Cash mainnet
pub type MainnetEncoder = CashAddrEncoder<Main>;

/// An encoder for Bitcoin Cash testnet
pub type TestnetEncoder = CashAddrEncoder<Test>;

/// An encoder for Bitcoin Cash regtest
pub type RegtestEncoder = CashAddrEncoder<Reg>;
