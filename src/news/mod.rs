//! News Module
//!
//! Aggregates the top-ranked stories of the news API behind the shared cache.

mod aggregator;
mod client;
mod types;

pub use aggregator::{Aggregator, DEFAULT_LOOKUP_CONCURRENCY};
pub use client::{HackerNewsClient, NewsSource, SourceError, DEFAULT_BASE_URL};
pub use types::{collect_resolved, ItemId, ItemLookup, ItemRecord, TopIdList};

use crate::cache::{CacheKey, SharedCache};

/// Cache of aggregated results keyed by item count.
pub type NewsCache = SharedCache<CacheKey, Vec<ItemRecord>>;
