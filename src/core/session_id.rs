//! Session identifiers.
//!
//! Ids are drawn from a seeded ChaCha stream so a test harness can predict
//! them, while production engines seed from entropy. The generator never
//! hands out the same id twice in a row, which is what a restart relies on.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Opaque identifier for one play-through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// Create a session id from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({:016x})", self.0)
    }
}

/// Deterministic session id generator.
#[derive(Clone, Debug)]
pub struct SessionIdGen {
    inner: ChaCha8Rng,
    last: Option<SessionId>,
}

impl SessionIdGen {
    /// Create a generator with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            last: None,
        }
    }

    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
            last: None,
        }
    }

    /// Draw the next id. Never equal to the previous one.
    pub fn next_id(&mut self) -> SessionId {
        loop {
            let id = SessionId(self.inner.gen());
            if self.last != Some(id) {
                self.last = Some(id);
                return id;
            }
        }
    }
}
