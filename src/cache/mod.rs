//! Bounded record cache
//!
//! Maps detail URLs to parsed records with least-recently-used eviction. One
//! cache is shared by every candidate of every search a provider runs; the
//! lock is held only for the map operation itself, never across a fetch.

use crate::record::Record;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Default number of records kept
pub const DEFAULT_CAPACITY: usize = 500;

/// Capacity-bounded URL → record cache
#[derive(Debug)]
pub struct RecordCache {
    entries: Mutex<LruCache<String, Record>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl RecordCache {
    /// Creates a cache holding at most `capacity` records (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns a copy of the cached record and marks it recently used
    pub fn get(&self, url: &str) -> Option<Record> {
        let found = self.lock().get(url).cloned();
        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    /// Stores a record, evicting the least recently used entry when full
    pub fn insert(&self, url: &str, record: Record) {
        if let Some((evicted, _)) = self.lock().push(url.to_string(), record) {
            if evicted != url {
                tracing::debug!("Evicted {} from record cache", evicted);
            }
        }
    }

    pub fn contains(&self, url: &str) -> bool {
        self.lock().contains(url)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of lookups answered from the cache
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of lookups that had to fall through to a fetch
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<String, Record>> {
        // Entries are replaced whole, so a poisoned map is still consistent.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RecordCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
