//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides an LRU cache with O(1) operations for all common
//! cache operations. The cache keeps its entries in an arena of slots
//! addressed by stable handles: the lookup index maps each key to the
//! handle of its slot, and the slots themselves are threaded into a doubly
//! linked recency chain. Promotions and evictions are handle reassignments,
//! so no operation ever scans, sorts, or relocates more than the single
//! slot being touched.
//!
//! # Algorithm
//!
//! Every lookup and insertion consults the index first. A hit moves the
//! entry's slot to the head of the recency chain; an insertion at capacity
//! evicts the tail slot (the least recently used entry) before the new slot
//! is linked in at the head. The index and the chain are mutated together
//! inside each operation, so they always describe the same set of entries.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1)
//!   - Remove: O(1)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity of the cache
//!   - Each entry stores the key twice (index and slot) plus two chain
//!     links; evicted slots are recycled, so a warm cache allocates nothing
//!     on its hot path
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. For concurrent access, wrap the
//! whole cache in a synchronization primitive such as `Mutex`; a single
//! coarse lock is sufficient because every operation leaves the index and
//! the recency chain consistent with each other.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::error::CacheError;
use crate::list::{self, Handle, List};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::mem;
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and updating entries. When the cache reaches
/// capacity, the least recently used entry is evicted to make room for new
/// entries.
///
/// # Examples
///
/// ```
/// use lru_arena::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
///
/// // Add items to the cache
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// cache.put("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: List<(K, V)>,
    map: HashMap<K, Handle, S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is zero;
    /// there is no other construction failure mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use lru_arena::{CacheError, LruCache};
    ///
    /// let cache = LruCache::<&str, i32>::new(100);
    /// assert!(cache.is_ok());
    ///
    /// let cache = LruCache::<&str, i32>::new(0);
    /// assert_eq!(cache.unwrap_err(), CacheError::InvalidCapacity);
    /// ```
    pub fn new(capacity: usize) -> Result<LruCache<K, V>, CacheError> {
        Ok(Self::init(LruCacheConfig::from_capacity(capacity)?))
    }

    /// Creates a cache from an already-validated configuration.
    pub fn init(config: LruCacheConfig) -> LruCache<K, V> {
        Self::with_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a cache with the given configuration and hash builder.
    pub fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        let capacity = config.capacity();
        LruCache {
            config,
            list: List::new(capacity),
            map: HashMap::with_capacity_and_hasher(capacity.get(), hash_builder),
            metrics: LruCacheMetrics::new(),
        }
    }

    /// Returns the maximum number of entries the cache can hold.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.config.capacity()
    }

    /// Returns the number of entries currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns a reference to the value for `key` and marks the entry as
    /// most recently used.
    ///
    /// A miss returns `None` and leaves occupancy and recency untouched.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(handle) => {
                self.list.move_to_front(handle);
                self.metrics.core.record_hit();
                let (_, value) = self.list.get(handle);
                Some(value)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    /// Returns a mutable reference to the value for `key` and marks the
    /// entry as most recently used.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(handle) => {
                self.list.move_to_front(handle);
                self.metrics.core.record_hit();
                let (_, value) = self.list.get_mut(handle);
                Some(value)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    /// Returns a reference to the value for `key` without touching recency
    /// or metrics.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.map.get(key).copied()?;
        let (_, value) = self.list.get(handle);
        Some(value)
    }

    /// Returns true if the cache holds an entry for `key`, without touching
    /// recency or metrics.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns the least recently used entry without touching recency.
    ///
    /// This is the entry the next insertion would evict if the cache is
    /// full.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.list.back().map(|(key, value)| (key, value))
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.map.remove(key)?;
        let (_, value) = self.list.remove(handle);
        self.metrics.core.record_eviction();
        Some(value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.list.pop_back()?;
        self.map.remove(&key);
        self.metrics.core.record_eviction();
        Some((key, value))
    }

    /// Drops every entry. Capacity and accumulated metrics are retained.
    pub fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }

    /// Iterates over the entries from most to least recently used.
    ///
    /// Iteration does not count as access: recency and metrics are
    /// untouched.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts or updates the entry for `key` and marks it as most
    /// recently used.
    ///
    /// Returns the entry this insertion displaced: the previous pair when
    /// `key` was already present (occupancy unchanged), the evicted least
    /// recently used pair when the cache was full, and `None` otherwise.
    /// Occupancy never exceeds capacity.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&handle) = self.map.get(&key) {
            self.list.move_to_front(handle);
            let old = mem::replace(self.list.get_mut(handle), (key, value));
            return Some(old);
        }

        let mut evicted = None;
        if self.list.is_full() {
            if let Some((old_key, old_value)) = self.list.pop_back() {
                self.map.remove(&old_key);
                self.metrics.core.record_eviction();
                evicted = Some((old_key, old_value));
            }
        }

        let handle = self.list.push_front((key.clone(), value));
        self.map.insert(key, handle);
        self.metrics.core.record_insertion();

        evicted
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity())
            .field("len", &self.map.len())
            .finish()
    }
}

/// Iterator over cache entries from most to least recently used.
///
/// Returned by [`LruCache::iter`]. Yields `(&K, &V)` pairs without
/// affecting recency.
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}
