//! Explicit read-cache bookkeeping, replacing an ambient query-cache.
//!
//! The cache never stores response data; fetched lists live in the resources
//! that requested them. What it tracks is staleness: each logical resource
//! has an epoch, and a successful write bumps the epoch of the reads it
//! stales. Resources key their fetcher on the epoch, so an `invalidate`
//! forces exactly the affected resource to refetch on next read.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;

/// Logical resource names for cached reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Voyages,
    Vessels,
    UnitTypes,
}

impl QueryKey {
    /// Stable name, matching the backend resource it mirrors.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Voyages => "voyages",
            Self::Vessels => "vessels",
            Self::UnitTypes => "unitTypes",
        }
    }
}

/// Injectable staleness tracker for the three cached reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryCache {
    epochs: HashMap<QueryKey, u64>,
}

impl QueryCache {
    /// Current epoch for a key. Starts at 0 and only moves forward.
    pub fn epoch(&self, key: QueryKey) -> u64 {
        self.epochs.get(&key).copied().unwrap_or(0)
    }

    /// Mark a cached read stale. The next resource read under this key
    /// refetches from the backend.
    pub fn invalidate(&mut self, key: QueryKey) {
        *self.epochs.entry(key).or_insert(0) += 1;
    }
}
