#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`config`]: Configuration structure for the cache
//! - [`error`]: Construction-time error type
//! - [`metrics`]: Metrics collection for cache performance monitoring
//!
//! ## Complexity
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `get` / `get_mut` | O(1) | hit promotes to MRU |
//! | `put` | O(1) | evicts exactly the LRU entry when full |
//! | `remove` / `pop_lru` | O(1) | slot handle recycled |
//! | `peek` / `contains` / `peek_lru` | O(1) | recency untouched |
//!
//! Each operation touches a fixed number of chain links: one index lookup,
//! at most one detach, one attach. Nothing ever scans or reorders more than
//! the single slot being accessed.

#![no_std]

#[cfg(not(feature = "hashbrown"))]
extern crate std;

/// Arena-backed doubly linked list ordered by recency.
///
/// This module provides the slot arena and the recency chain threaded
/// through it by handle. It is internal infrastructure: handles are never
/// exposed outside the crate, and the cache implementation is the only
/// consumer.
pub(crate) mod list;

/// Cache configuration structure.
///
/// Provides [`LruCacheConfig`](config::LruCacheConfig) with capacity
/// validation.
pub mod config;

/// Construction-time error type.
pub mod error;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used entries
/// when the capacity is reached.
pub mod lru;

/// Cache metrics system.
///
/// Provides hit/miss/eviction counters and a uniform reporting trait.
pub mod metrics;

// Re-export the cache type and its iterator
pub use lru::{Iter, LruCache};

// Re-export configuration and error types
pub use config::LruCacheConfig;
pub use error::CacheError;

// Re-export metrics types
pub use metrics::{CacheMetrics, CoreCacheMetrics, LruCacheMetrics};
