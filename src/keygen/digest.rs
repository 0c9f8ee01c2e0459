//! SHA-256 + base62 digest encoding.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use sha2::{Digest, Sha256};

/// Base62 alphabet (0-9, a-z, A-Z).
pub const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Upper bound on digest length: 62^43 > 2^256.
pub const DIGEST_MAX_LEN: usize = 43;

/// Encode `input` as the base62 form of its SHA-256 hash, most significant
/// digit first.
///
/// A zero hash value encodes to the alphabet's first character rather than
/// an empty string.
pub fn encode(input: &str) -> String {
    let hash = Sha256::digest(input.as_bytes());
    encode_base62(&hash)
}

/// Convert a big-endian byte string to base62.
pub(crate) fn encode_base62(bytes: &[u8]) -> String {
    let mut num = BigUint::from_bytes_be(bytes);
    if num.is_zero() {
        return (BASE62_ALPHABET[0] as char).to_string();
    }

    let base = BigUint::from(62u32);
    let mut chars: Vec<u8> = Vec::with_capacity(DIGEST_MAX_LEN);
    while !num.is_zero() {
        let rem = (&num % &base).to_usize().unwrap_or(0);
        num /= &base;
        chars.push(BASE62_ALPHABET[rem]);
    }
    chars.reverse();

    chars.into_iter().map(char::from).collect()
}

/// First `length` characters of `digest`, or the whole digest when it is
/// shorter than `length`.
pub fn prefix(digest: &str, length: usize) -> &str {
    // base62 输出全是 ASCII，按字节切分安全
    &digest[..length.min(digest.len())]
}
