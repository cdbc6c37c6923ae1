//! Top News Aggregator
//!
//! Fetch-and-cache pipeline: cache lookup, ranking fetch, per-item resolution, cache store.

use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info, warn};

use super::client::{NewsSource, SourceError};
use super::types::{collect_resolved, ItemLookup, ItemRecord, TopIdList};
use super::NewsCache;
use crate::cache::CacheKey;
use crate::error::{NewsError, Result};

/// Default number of detail lookups in flight per request.
pub const DEFAULT_LOOKUP_CONCURRENCY: usize = 16;

// == Aggregator ==
/// Resolves the top N stories, answering from the shared cache when possible.
#[derive(Clone)]
pub struct Aggregator {
    source: Arc<dyn NewsSource>,
    cache: NewsCache,
    lookup_concurrency: usize,
}

impl Aggregator {
    /// Creates an aggregator over `source` that stores results in `cache`.
    pub fn new(source: Arc<dyn NewsSource>, cache: NewsCache) -> Self {
        Self {
            source,
            cache,
            lookup_concurrency: DEFAULT_LOOKUP_CONCURRENCY,
        }
    }

    /// Limits how many detail lookups one request keeps in flight. Zero is treated as one.
    pub fn with_lookup_concurrency(mut self, limit: usize) -> Self {
        self.lookup_concurrency = limit.max(1);
        self
    }

    pub fn cache(&self) -> &NewsCache {
        &self.cache
    }

    // == Get Top News ==
    /// Returns the first `num_items` stories of the current ranking.
    ///
    /// On a cache hit no network call is made. On a miss the ranking is
    /// fetched, each identifier is resolved, and the result is cached even
    /// when some lookups failed. A failed ranking fetch, or a body that is
    /// not JSON, is an error and leaves the cache untouched.
    pub async fn get_top_news(&self, num_items: u32) -> Result<Vec<ItemRecord>> {
        let key = CacheKey::new(num_items);

        let cached = self.cache.write().await.get(&key);
        if let Some(stories) = cached {
            info!("Returning cached result for {} items", num_items);
            return Ok(stories);
        }
        debug!("Cache miss for {}", key);

        let ranking = self.source.fetch_top_ids().await?;
        let ids = TopIdList::from_ranking(ranking, num_items);

        let lookups = self.resolve_items(&ids).await?;
        let stories = collect_resolved(lookups);

        self.cache.write().await.put(key, stories.clone());
        info!(
            "Fetched and cached top {} items ({} of {} resolved)",
            num_items,
            stories.len(),
            ids.len()
        );

        Ok(stories)
    }

    // == Resolve Items ==
    /// Looks up every identifier, returning outcomes in ranking order.
    ///
    /// Lookups run concurrently up to the configured limit; output order
    /// follows `ids`, not completion order. Status and transport failures
    /// become `ItemLookup::Failed` and are logged here; an undecodable body
    /// aborts the whole batch as an internal error.
    pub async fn resolve_items(&self, ids: &TopIdList) -> Result<Vec<ItemLookup>> {
        stream::iter(ids.iter().copied())
            .map(|id| async move {
                match self.source.fetch_item(id).await {
                    Err(err @ SourceError::Decode(_)) => Err(NewsError::from(err)),
                    result => {
                        let lookup = ItemLookup::from_result(id, result);
                        if let ItemLookup::Failed { id, reason } = &lookup {
                            warn!("Dropping item {}: {}", id, reason);
                        }
                        Ok(lookup)
                    }
                }
            })
            .buffered(self.lookup_concurrency)
            .try_collect()
            .await
    }
}
