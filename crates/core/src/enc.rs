//! The `enc` module defines the `AddressEncoder` trait, which is implemented once per network by
//! the address crate.

/// An AddressEncoder encodes and decodes addresses. It handles converting addresses to the
/// protocol-level recipient (usually an output script) and vice versa. It also contains a
/// function that parses a string into the network's address type.
///
/// The associated type defines what the encoder considers to be an "address."
pub trait AddressEncoder {
    /// A type representing the encoded address
    type Address;
    /// An error type that will be returned in case of encoding errors
    type Error;
    /// A type representing the in-protocol recipient. This is usually different from the
    /// Address type.
    type RecipientIdentifier;

    /// Encode a recipient (e.g. a script) as an address.
    fn encode_address(s: &Self::RecipientIdentifier) -> Result<Self::Address, Self::Error>;

    /// Produce the recipient an address stands for.
    fn decode_address(addr: &Self::Address) -> Self::RecipientIdentifier;

    /// Attempt to convert a string into an `Address`.
    fn string_to_address(s: &str) -> Result<Self::Address, Self::Error>;
}
