//! Cache metrics.
//!
//! Counters are plain `u64` fields updated inline by cache operations and
//! reported through the [`CacheMetrics`] trait as a `BTreeMap`. BTreeMap is
//! used instead of HashMap so that metrics always appear in a consistent
//! order, which keeps test assertions, logs, and exports reproducible. The
//! O(log n) lookups are irrelevant at this handful of keys.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Counters common to every cache algorithm.
///
/// Misses are recorded directly, so `requests == cache_hits + cache_misses`
/// holds at every observation point.
#[derive(Debug, Default, Clone)]
pub struct CoreCacheMetrics {
    /// Total number of lookups made against the cache.
    pub requests: u64,

    /// Number of lookups that found their key.
    pub cache_hits: u64,

    /// Number of lookups that did not find their key.
    pub cache_misses: u64,

    /// Number of entries inserted into the cache.
    pub insertions: u64,

    /// Number of entries removed to make room or by explicit removal.
    pub evictions: u64,
}

impl CoreCacheMetrics {
    /// Creates a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found its key.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that did not find its key.
    pub fn record_miss(&mut self) {
        self.requests += 1;
        self.cache_misses += 1;
    }

    /// Records an entry leaving the cache.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records a new entry entering the cache.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Fraction of lookups that hit, 0.0 when no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that missed, 0.0 when no lookups have been made.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a `BTreeMap` for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("requests".to_string(), self.requests as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        if self.requests > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.requests as f64,
            );
        }

        metrics
    }
}

/// LRU-specific metrics (extends [`CoreCacheMetrics`]).
///
/// LRU tracks nothing beyond the core counters today; the wrapper exists so
/// that algorithm-specific counters can be added without touching the cache
/// API.
#[derive(Debug, Default, Clone)]
pub struct LruCacheMetrics {
    /// Core counters common to all cache algorithms.
    pub core: CoreCacheMetrics,
}

impl LruCacheMetrics {
    /// Creates a zeroed set of LRU metrics.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.core.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}

/// Uniform metrics reporting interface for cache implementations.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Short identifier for the eviction algorithm (e.g. "LRU").
    fn algorithm_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_track_operations() {
        let mut metrics = CoreCacheMetrics::new();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_miss();
        metrics.record_insertion();
        metrics.record_eviction();

        assert_eq!(metrics.requests, 3);
        assert_eq!(metrics.cache_hits, 2);
        assert_eq!(metrics.cache_misses, 1);
        assert_eq!(metrics.insertions, 1);
        assert_eq!(metrics.evictions, 1);
    }

    #[test]
    fn test_rates_with_no_requests() {
        let metrics = CoreCacheMetrics::new();
        assert_eq!(metrics.hit_rate(), 0.0);
        assert_eq!(metrics.miss_rate(), 0.0);
        assert!(!metrics.to_btreemap().contains_key("eviction_rate"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let mut metrics = LruCacheMetrics::new();
        metrics.core.record_hit();
        metrics.core.record_miss();

        let report = metrics.metrics();
        assert_eq!(report["cache_hits"], 1.0);
        assert_eq!(report["cache_misses"], 1.0);
        assert_eq!(report["requests"], 2.0);
        assert_eq!(report["hit_rate"], 0.5);
        assert_eq!(metrics.algorithm_name(), "LRU");
    }
}
