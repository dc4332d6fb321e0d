use core::fmt;

/// Errors reported by cache construction.
///
/// The cache has exactly one failure mode, and it is construction-time
/// only: a capacity of zero. Lookups on absent keys are a normal outcome
/// signaled through `Option`, never through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// The requested capacity was zero. A cache must be able to hold at
    /// least one entry.
    InvalidCapacity,
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::InvalidCapacity => write!(f, "cache capacity must be greater than zero"),
        }
    }
}

impl core::error::Error for CacheError {}
