//! In-memory TTL cache
//!
//! Provides a `TtlCache` mapping string keys to values with an absolute expiry
//! timestamp. Entries past their expiry are treated exactly like absent keys
//! and removed by the `get` call that observes them.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

/// A single cached value with its expiry timestamp
struct CacheEntry<V> {
    /// The cached value
    value: V,
    /// When the entry stops being valid
    expires_at: DateTime<Utc>,
}

/// In-memory key-value cache with per-entry TTL
///
/// One instance is shared per process for each call site that caches. The
/// interior mutex makes single-key `get`/`put` atomic; concurrent requests for
/// the same key may at worst trigger a duplicate upstream fetch followed by a
/// redundant overwrite, which is harmless because entries are immutable once
/// constructed and replacement is whole-entry.
///
/// Growth is unbounded: keys derive from a bounded set of user queries in
/// practice, and nothing survives a restart.
pub struct TtlCache<V> {
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for TtlCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.entries.lock().map(|m| m.len()).unwrap_or(0);
        f.debug_struct("TtlCache").field("entries", &len).finish()
    }
}

impl<V> TtlCache<V> {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Inserts a value with the given TTL
    ///
    /// Overwrites any existing entry for the same key unconditionally and
    /// resets its expiry to `now + ttl`.
    pub fn put(&self, key: &str, value: V, ttl: Duration) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key.to_string(),
                CacheEntry {
                    value,
                    expires_at: Utc::now() + ttl,
                },
            );
        }
    }

    /// Number of entries currently stored, including not-yet-evicted expired ones
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// Whether the cache holds no entries
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone> TtlCache<V> {
    /// Reads a value from the cache
    ///
    /// Returns `None` for keys that were never inserted and for keys whose
    /// entry has expired; an expired entry is deleted on the way out so the
    /// two cases are indistinguishable to the caller.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.lock().ok()?;
        let expired = match entries.get(key) {
            Some(entry) => Utc::now() > entry.expires_at,
            None => return None,
        };
        if expired {
            entries.remove(key);
            return None;
        }
        entries.get(key).map(|entry| entry.value.clone())
    }
}
