//! Correctness Tests for the LRU Cache
//!
//! This module validates the fundamental correctness of the eviction policy
//! using simple, predictable access patterns. Each test explicitly validates
//! which specific key gets evicted when a put causes an eviction.
//!
//! ## Test Strategy
//! - Small cache sizes (1-5 entries) for predictable behavior
//! - Simple, deterministic access patterns
//! - Explicit checks for which key was evicted after each put
//! - Occupancy checked against capacity after every phase

use lru_arena::config::LruCacheConfig;
use lru_arena::{CacheError, CacheMetrics, LruCache};
use std::num::NonZeroUsize;

/// Helper to create an LruCache with the given capacity
fn make_lru<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    };
    LruCache::init(config)
}

/// Keys from most to least recently used
fn recency_order<V>(cache: &LruCache<i32, V>) -> Vec<i32> {
    cache.iter().map(|(k, _)| *k).collect()
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn test_zero_capacity_is_rejected() {
    let result = LruCache::<i32, i32>::new(0);
    assert_eq!(result.unwrap_err(), CacheError::InvalidCapacity);
}

#[test]
fn test_capacity_is_fixed_at_construction() {
    let cache: LruCache<i32, i32> = make_lru(5);
    assert_eq!(cache.cap().get(), 5);
    assert_eq!(cache.len(), 0);
    assert!(cache.is_empty());
}

// ============================================================================
// EVICTION POLICY
// ============================================================================

#[test]
fn test_evicts_least_recently_used() {
    let mut cache = make_lru(3);
    cache.put(1, "one");
    cache.put(2, "two");
    cache.put(3, "three");

    // 1 is the LRU entry; inserting 4 must evict exactly 1.
    let evicted = cache.put(4, "four");
    assert_eq!(evicted, Some((1, "one")));
    assert_eq!(cache.len(), 3);
    assert!(!cache.contains(&1));
    assert!(cache.contains(&2));
    assert!(cache.contains(&3));
    assert!(cache.contains(&4));
}

#[test]
fn test_get_promotes_to_most_recent() {
    let mut cache = make_lru(3);
    cache.put(1, "one");
    cache.put(2, "two");
    cache.put(3, "three");

    // Touch 1 so that 2 becomes the LRU entry.
    assert_eq!(cache.get(&1), Some(&"one"));
    let evicted = cache.put(4, "four");
    assert_eq!(evicted, Some((2, "two")));
    assert_eq!(recency_order(&cache), [4, 1, 3]);
}

#[test]
fn test_reference_trace_capacity_two() {
    // The classic two-slot LRU trace, step by step.
    let mut cache = make_lru(2);

    assert_eq!(cache.get(&1), None); // miss on empty cache
    cache.put(1, 1);
    cache.put(2, 2);
    assert_eq!(cache.len(), 2);

    assert_eq!(cache.get(&1), Some(&1)); // 2 is now LRU
    assert_eq!(cache.put(3, 3), Some((2, 2))); // evicts 2
    assert_eq!(cache.get(&2), None);

    assert_eq!(cache.put(4, 4), Some((1, 1))); // evicts 1
    assert_eq!(cache.get(&1), None);
    assert_eq!(cache.get(&3), Some(&3));
    assert_eq!(cache.get(&4), Some(&4));
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_capacity_one_evicts_on_every_insert() {
    let mut cache = make_lru(1);
    assert_eq!(cache.put(1, "a"), None);
    assert_eq!(cache.put(2, "b"), Some((1, "a")));
    assert_eq!(cache.put(3, "c"), Some((2, "b")));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&3), Some(&"c"));
}

#[test]
fn test_occupancy_never_exceeds_capacity() {
    let mut cache = make_lru(4);
    for i in 0..100 {
        cache.put(i, i * 10);
        assert!(cache.len() <= 4);
        if i % 3 == 0 {
            let _ = cache.get(&(i / 2));
            assert!(cache.len() <= 4);
        }
    }
    assert_eq!(cache.len(), 4);
}

// ============================================================================
// RECENCY ORDERING
// ============================================================================

#[test]
fn test_every_access_repositions_exactly_one_key() {
    let mut cache = make_lru(4);
    for i in 1..=4 {
        cache.put(i, i);
    }
    assert_eq!(recency_order(&cache), [4, 3, 2, 1]);

    cache.get(&2);
    assert_eq!(recency_order(&cache), [2, 4, 3, 1]);

    cache.put(3, 30);
    assert_eq!(recency_order(&cache), [3, 2, 4, 1]);

    cache.get_mut(&1);
    assert_eq!(recency_order(&cache), [1, 3, 2, 4]);
}

#[test]
fn test_lru_key_has_longest_idle_interval() {
    let mut cache = make_lru(3);
    cache.put(1, 'a');
    cache.put(2, 'b');
    cache.put(3, 'c');
    cache.get(&1);
    cache.get(&2);
    // 3 has gone longest without a get or put.
    assert_eq!(cache.peek_lru(), Some((&3, &'c')));
}

#[test]
fn test_miss_does_not_mutate_ordering_or_occupancy() {
    let mut cache = make_lru(2);
    cache.put(1, "one");
    cache.put(2, "two");
    let before = recency_order(&cache);

    assert_eq!(cache.get(&99), None);
    assert_eq!(recency_order(&cache), before);
    assert_eq!(cache.len(), 2);

    // The next eviction is unaffected by the miss.
    assert_eq!(cache.put(3, "three"), Some((1, "one")));
}

// ============================================================================
// OVERWRITE
// ============================================================================

#[test]
fn test_overwrite_keeps_occupancy_and_updates_value() {
    let mut cache = make_lru(2);
    cache.put(1, "v1");
    cache.put(2, "v2");
    let displaced = cache.put(1, "v1-new");
    assert_eq!(displaced, Some((1, "v1")));
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(&1), Some(&"v1-new"));
}

#[test]
fn test_overwrite_promotes_to_most_recent() {
    let mut cache = make_lru(2);
    cache.put(1, 10);
    cache.put(2, 20);
    cache.put(1, 11); // 2 is now LRU
    assert_eq!(cache.put(3, 30), Some((2, 20)));
    assert_eq!(cache.get(&1), Some(&11));
}

// ============================================================================
// SUPPLEMENTARY OPERATIONS
// ============================================================================

#[test]
fn test_remove_frees_a_slot() {
    let mut cache = make_lru(2);
    cache.put(1, "one");
    cache.put(2, "two");
    assert_eq!(cache.remove(&1), Some("one"));
    assert_eq!(cache.len(), 1);
    // Inserting now evicts nothing.
    assert_eq!(cache.put(3, "three"), None);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_pop_lru_drains_in_recency_order() {
    let mut cache = make_lru(3);
    cache.put(1, 'a');
    cache.put(2, 'b');
    cache.put(3, 'c');
    cache.get(&1);

    assert_eq!(cache.pop_lru(), Some((2, 'b')));
    assert_eq!(cache.pop_lru(), Some((3, 'c')));
    assert_eq!(cache.pop_lru(), Some((1, 'a')));
    assert_eq!(cache.pop_lru(), None);
    assert!(cache.is_empty());
}

#[test]
fn test_clear_then_reuse() {
    let mut cache = make_lru(3);
    for i in 0..10 {
        cache.put(i, i);
    }
    cache.clear();
    assert!(cache.is_empty());

    cache.put(1, 100);
    cache.put(2, 200);
    assert_eq!(cache.len(), 2);
    assert_eq!(recency_order(&cache), [2, 1]);
}

// ============================================================================
// METRICS
// ============================================================================

#[test]
fn test_metrics_reflect_the_trace() {
    let mut cache = make_lru(2);
    cache.get(&1); // miss
    cache.put(1, 1);
    cache.put(2, 2);
    cache.get(&1); // hit
    cache.put(3, 3); // evicts 2
    cache.get(&2); // miss

    let report = cache.metrics();
    assert_eq!(report["requests"], 3.0);
    assert_eq!(report["cache_hits"], 1.0);
    assert_eq!(report["cache_misses"], 2.0);
    assert_eq!(report["insertions"], 3.0);
    assert_eq!(report["evictions"], 1.0);
    assert!((report["hit_rate"] - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(cache.algorithm_name(), "LRU");
}

#[test]
fn test_peek_leaves_metrics_untouched() {
    let mut cache = make_lru(2);
    cache.put(1, "one");
    cache.peek(&1);
    cache.peek(&2);
    let report = cache.metrics();
    assert_eq!(report["requests"], 0.0);
}
