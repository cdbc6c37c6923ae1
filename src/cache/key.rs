//! Cache Key Module
//!
//! Derives the cache key for a top-news request from its item count.

use std::fmt;

// == Cache Key ==
/// Key for a cached top-news result.
///
/// The request has a single input, the item count, so the key wraps it
/// directly. Equal counts give equal keys and distinct counts distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(u32);

impl CacheKey {
    /// Builds the key for a request of `num_items` items.
    pub fn new(num_items: u32) -> Self {
        Self(num_items)
    }
}

impl From<u32> for CacheKey {
    fn from(num_items: u32) -> Self {
        Self::new(num_items)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "top-news:{}", self.0)
    }
}
