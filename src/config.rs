//! Cache configuration.
//!
//! Configuration is a plain struct with public fields: create it directly
//! when you already hold a [`NonZeroUsize`], or go through
//! [`LruCacheConfig::from_capacity`] to validate a caller-supplied count.
//!
//! # Sizing guidance
//!
//! `capacity` bounds the number of entries, not bytes. Each occupied slot
//! costs the key (stored twice: once in the index, once in the slot), the
//! value, and two `Option<usize>` chain links; budget roughly 48-64 bytes
//! of overhead per entry beyond the key and value themselves.
//!
//! # Examples
//!
//! ```
//! use lru_arena::config::LruCacheConfig;
//! use lru_arena::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(1000).unwrap(),
//! };
//! let cache: LruCache<String, i32> = LruCache::init(config);
//! ```

use crate::error::CacheError;
use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an [`LruCache`](crate::LruCache).
///
/// # Fields
///
/// - `capacity`: maximum number of entries the cache can hold. Fixed for
///   the lifetime of the cache.
#[derive(Clone, Copy)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}

impl LruCacheConfig {
    /// Creates a configuration with the given capacity.
    pub fn new(capacity: NonZeroUsize) -> Self {
        LruCacheConfig { capacity }
    }

    /// Validates a caller-supplied entry count.
    ///
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lru_arena::config::LruCacheConfig;
    ///
    /// assert!(LruCacheConfig::from_capacity(8).is_ok());
    /// assert!(LruCacheConfig::from_capacity(0).is_err());
    /// ```
    pub fn from_capacity(capacity: usize) -> Result<Self, CacheError> {
        match NonZeroUsize::new(capacity) {
            Some(capacity) => Ok(LruCacheConfig { capacity }),
            None => Err(CacheError::InvalidCapacity),
        }
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
