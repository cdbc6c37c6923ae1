//! Cache Module
//!
//! Provides a bounded in-memory cache with TTL expiration and oldest-first eviction.

mod clock;
mod entry;
mod fifo;
mod key;
mod stats;
mod store;


use std::sync::Arc;
use tokio::sync::RwLock;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use key::CacheKey;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default maximum number of cached results
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Default entry lifetime in seconds (10 minutes)
pub const DEFAULT_TTL_SECONDS: u64 = 600;

/// Cache handle shared by every request handler.
pub type SharedCache<K, V> = Arc<RwLock<CacheStore<K, V>>>;
