//! Key assignment
//!
//! Turns a target string into a short key that is a prefix of the target's
//! digest. Keys start at a prime length derived from the store size and
//! grow to the next prime on every collision.
//!
//! - `digest`: SHA-256 re-encoded in base62
//! - `length`: prime length selection
//! - `prober`: collision probing against a [`LinkGateway`](crate::storage::LinkGateway)

pub mod digest;
pub mod length;
pub mod prober;

pub use digest::{BASE62_ALPHABET, DIGEST_MAX_LEN, encode, prefix};
pub use length::{is_prime, next_prime_after, select_length};
pub use prober::{Claim, CollisionProber, DEFAULT_MAX_ATTEMPTS};
