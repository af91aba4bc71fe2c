//! Producer identities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PRODUCER_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of an event producer.
///
/// A `ProducerId` is only a lookup key: nothing in this crate owns or tracks
/// the producer it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProducerId(u64);

impl ProducerId {
    /// Allocate a fresh identity, unique within this process
    pub fn next() -> Self {
        Self(NEXT_PRODUCER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap an externally managed identifier.
    ///
    /// Raw ids share the key space with [`ProducerId::next`]; callers mixing
    /// both schemes are responsible for keeping them apart.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The underlying numeric identifier
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProducerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "producer#{}", self.0)
    }
}
