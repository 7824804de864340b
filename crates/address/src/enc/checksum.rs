//! The CashAddr checksum: a 40-bit BCH code over 5-bit symbols.
//!
//! The checksummed message is the prefix (lower 5 bits of each character), a zero separator,
//! and the payload symbols. A message carrying a valid checksum has a polymod of zero.

use bech32::u5;

use crate::enc::bases::EncodingResult;

/// Number of checksum symbols appended to the payload.
pub const CHECKSUM_LENGTH: usize = 8;

/// Generator constants of the code.
const GENERATORS: [u64; 5] = [
    0x98_f2bc_8e61,
    0x79_b76d_99e2,
    0xf3_3e5f_b3c4,
    0xae_2eab_e2a8,
    0x1e_4f43_e470,
];

/// Evaluate the checksum polynomial over a sequence of 5-bit values.
///
/// The register holds 40 significant bits; `u64` arithmetic never overflows.
pub fn polymod<I>(values: I) -> u64
where
    I: IntoIterator<Item = u8>,
{
    let mut c: u64 = 1;
    for d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x07_ffff_ffff) << 5) ^ (d as u64);
        for (i, g) in GENERATORS.iter().enumerate() {
            if (c0 >> i) & 1 != 0 {
                c ^= g;
            }
        }
    }
    c ^ 1
}

/// Expand a prefix into the values it contributes to the checksum, including the separator.
pub fn expand_prefix(prefix: &str) -> Vec<u8> {
    let mut v: Vec<u8> = prefix.bytes().map(|b| b & 0x1f).collect();
    v.push(0);
    v
}

/// Compute the checksum symbols for `payload` under `prefix`.
pub fn create_checksum(prefix: &str, payload: &[u5]) -> EncodingResult<Vec<u5>> {
    let values = expand_prefix(prefix)
        .into_iter()
        .chain(payload.iter().map(|s| s.to_u8()))
        .chain(std::iter::repeat(0).take(CHECKSUM_LENGTH));
    let checksum = polymod(values);

    (0..CHECKSUM_LENGTH)
        .map(|i| {
            let digit = ((checksum >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
            u5::try_from_u8(digit).map_err(Into::into)
        })
        .collect()
}

/// True if `symbols` (payload followed by checksum) checks out under `prefix`.
pub fn verify_checksum(prefix: &str, symbols: &[u5]) -> bool {
    let values = expand_prefix(prefix)
        .into_iter()
        .chain(symbols.iter().map(|s| s.to_u8()));
    polymod(values) == 0
}
