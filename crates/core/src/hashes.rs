//! Holds utilites for the digests used by address derivation.
//!
//! Address payloads are `Hash160` digests: `ripemd160(sha256(x))` of a public key or of a
//! serialized script.

use std::io::{Result as IOResult, Write};

pub use digest::Digest;
pub use ripemd::Ripemd160;
pub use sha2::Sha256;

/// A ripemd160(sha256(x)) digest.
pub type Hash160Digest = [u8; 20];

/// A struct that exposes a Bitcoin-style Hash160 `Write` interface by wrapping an internal SHA2
/// instance.
///
/// ```
/// # use std::io::{Result};
/// use std::io::Write;
/// use bchaddr_core::hashes::Hash160Writer;
///
/// # fn main() -> Result<()> {
/// let mut w = Hash160Writer::default();
/// # let data = [0u8; 32];
///
/// // Writing more than once will update the hasher.
/// w.write_all(&data)?;
///
/// // Call finish to consume the hasher and produce the digest.
/// let digest = w.finish();
/// # Ok(())
/// }
/// ```
#[derive(Default, Clone)]
pub struct Hash160Writer {
    internal: Sha256,
}

impl Write for Hash160Writer {
    fn write(&mut self, buf: &[u8]) -> IOResult<usize> {
        Digest::update(&mut self.internal, buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> IOResult<()> {
        Ok(())
    }
}

impl Hash160Writer {
    /// Consume the writer and produce the digest.
    pub fn finish(self) -> Hash160Digest {
        let first = self.internal.finalize();
        let second = Ripemd160::digest(first);
        let mut digest = Hash160Digest::default();
        digest.copy_from_slice(&second[..]);
        digest
    }
}

/// Compute `ripemd160(sha256(data))`.
pub fn hash160(data: &[u8]) -> Hash160Digest {
    let mut w = Hash160Writer::default();
    Digest::update(&mut w.internal, data);
    w.finish()
}
