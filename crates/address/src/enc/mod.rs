//! Contains the two serializations of an address and the per-network encoders.
//!
//! `cashaddr` is the checksummed text form, built from the base-32 alphabet and bit regrouping
//! in `bases` and the checksum in `checksum`. `version` is the 21-byte binary form.

pub mod bases;
pub mod cashaddr;
pub mod checksum;
pub mod encoder;
pub mod version;

pub use bases::{EncodingError, EncodingResult};
pub use cashaddr::CashAddrPayload;
pub use encoder::*;
pub use version::VersionedPayload;
