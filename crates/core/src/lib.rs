//! # bchaddr core
//!
//! `bchaddr-core` contains utilities and traits used by the `bchaddr` crate.
//!
//! ## Crate Layout
//!
//! ### Hashes
//!
//! The hashes module provides the digests used to derive address payloads. `Hash160` is
//! Bitcoin's `ripemd160(sha2(x))`, exposed both as a one-shot function and as a
//! `std::io::Write` sink so that serializable types can be hashed in place.
//!
//! ### ByteFormat trait
//!
//! The `ByteFormat` trait is a simple serialization API using `std::io::{Read, Write}`.
//! Implementers define the binary serialization format of the type, and get hex
//! (de)serialization for free.
//!
//! `ByteFormat` has an associated `Error` type. Most basic types can simply use the provided
//! `SerError`. More complex (de)serialization will want a custom error type to handle (e.g.)
//! unknown version bytes. These types must be easily instantiated from a `SerError` or an
//! `std::io::Error`.
//!
//! ### AddressEncoder trait
//!
//! The `AddressEncoder` trait ties an address type to the protocol-level recipient it stands
//! for (usually an output script), and to the error type its codec returns.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

#[macro_use]
pub mod macros;

pub mod enc;
pub mod hashes;
pub mod ser;
