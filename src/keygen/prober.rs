//! Collision probing.
//!
//! Walks prime-length prefixes of a digest until one is free to claim or
//! already belongs to the same target. A lost insert race is handled like
//! any other collision: the length escalates and the loop continues.

use tracing::{debug, trace, warn};

use super::digest::prefix;
use super::length::next_prime_after;
use crate::errors::{LinksyError, Result};
use crate::storage::{InsertOutcome, LinkGateway, ShortLink};

/// Default attempt budget per claim.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Result of a successful claim.
#[derive(Debug, Clone)]
pub struct Claim {
    pub link: ShortLink,
    /// `false` when an existing record for the same target was reused
    pub created: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct CollisionProber {
    max_attempts: u32,
}

impl Default for CollisionProber {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl CollisionProber {
    /// Budgets below one attempt are raised to one.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Find or claim a key for `target`, starting at `start_length`.
    ///
    /// Gateway errors are returned as-is; only the conflict branch loops.
    /// On [`LinksyError::Exhausted`] nothing has been written.
    pub async fn claim(
        &self,
        gateway: &dyn LinkGateway,
        digest: &str,
        start_length: usize,
        target: &str,
    ) -> Result<Claim> {
        let mut length = start_length;

        for attempt in 1..=self.max_attempts {
            let candidate = prefix(digest, length);
            trace!(
                "Probe attempt {}/{}: candidate '{}' (length {})",
                attempt, self.max_attempts, candidate, length
            );

            match gateway.find_by_key(candidate).await? {
                None => match gateway.insert_if_absent(candidate, target).await? {
                    InsertOutcome::Inserted(link) => {
                        return Ok(Claim {
                            link,
                            created: true,
                        });
                    }
                    InsertOutcome::Conflict => {
                        debug!(
                            "Key '{}' claimed concurrently by another writer, escalating",
                            candidate
                        );
                    }
                },
                Some(existing) if existing.target == target => {
                    return Ok(Claim {
                        link: existing,
                        created: false,
                    });
                }
                Some(_) => {
                    debug!(
                        "Key '{}' already maps to a different target, escalating",
                        candidate
                    );
                }
            }

            length = next_prime_after(length as u64) as usize;
        }

        warn!(
            "Probe budget of {} attempts exhausted (started at length {})",
            self.max_attempts, start_length
        );
        Err(LinksyError::exhausted(format!(
            "Failed to generate unique short code after {} attempts",
            self.max_attempts
        )))
    }
}
