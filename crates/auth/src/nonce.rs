//! Per-client nonce sequence for private endpoints.

use std::time::{SystemTime, UNIX_EPOCH};

/// Strictly increasing nonce generator.
///
/// The sequence starts from the current Unix time in seconds on first use
/// and advances by one on every call, so two nonces from the same counter
/// never repeat even when issued within the same second.
///
/// `next` takes `&mut self`: a counter belongs to exactly one client and must
/// not be shared between concurrent requests. Wrap it in a lock if a client
/// is ever used from several tasks.
#[derive(Debug, Default)]
pub struct NonceCounter {
    last: Option<i64>,
}

impl NonceCounter {
    /// Counter that seeds itself from the clock on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter whose first nonce will be `seed + 1`.
    pub fn starting_at(seed: i64) -> Self {
        Self { last: Some(seed) }
    }

    /// Return the next nonce.
    pub fn next(&mut self) -> i64 {
        let next = match self.last {
            Some(last) => last + 1,
            None => unix_seconds() + 1,
        };
        self.last = Some(next);
        next
    }

    /// Last nonce handed out, if any.
    pub fn last(&self) -> Option<i64> {
        self.last
    }
}

fn unix_seconds() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
