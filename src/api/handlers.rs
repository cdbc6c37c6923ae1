//! API Handlers
//!
//! HTTP request handlers for each service endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tokio::sync::RwLock;
use tracing::error;

use crate::cache::{CacheKey, CacheStore, SystemClock};
use crate::config::Config;
use crate::error::{NewsError, Result};
use crate::models::{HealthResponse, StatsResponse, TopNewsQuery};
use crate::news::{Aggregator, HackerNewsClient, ItemRecord, NewsCache, NewsSource};

/// Application state shared across all handlers.
///
/// Holds the aggregator and a handle on the cache it writes to.
#[derive(Clone)]
pub struct AppState {
    /// Fetch-and-cache pipeline
    pub aggregator: Arc<Aggregator>,
    /// Shared result cache
    pub cache: NewsCache,
}

impl AppState {
    /// Creates a new AppState around an aggregator.
    pub fn new(aggregator: Aggregator) -> Self {
        let cache = aggregator.cache().clone();
        Self {
            aggregator: Arc::new(aggregator),
            cache,
        }
    }

    /// Wires a fresh cache store to `source`.
    pub fn with_source(source: Arc<dyn NewsSource>, store: CacheStore<CacheKey, Vec<ItemRecord>>) -> Self {
        let cache: NewsCache = Arc::new(RwLock::new(store));
        Self::new(Aggregator::new(source, cache))
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the Hacker News client and a system-clock cache from the Config.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = HackerNewsClient::new(config.api_base_url.clone(), config.upstream_timeout())?;
        let store = CacheStore::with_clock(config.max_entries, config.cache_ttl, Arc::new(SystemClock));
        let cache: NewsCache = Arc::new(RwLock::new(store));
        let aggregator = Aggregator::new(Arc::new(client), cache)
            .with_lookup_concurrency(config.lookup_concurrency);

        Ok(Self::new(aggregator))
    }
}

/// Handler for GET /top-news/
///
/// Returns the first `num` stories (default 10) as upstream JSON records.
/// Every server-side failure is reported with the same generic 500 body.
pub async fn top_news_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<TopNewsQuery>, QueryRejection>,
) -> Result<Json<Vec<ItemRecord>>> {
    let Query(query) = query.map_err(|e| NewsError::InvalidRequest(e.body_text()))?;
    if let Some(error_msg) = query.validate() {
        return Err(NewsError::InvalidRequest(error_msg));
    }

    match state.aggregator.get_top_news(query.num).await {
        Ok(stories) => Ok(Json(stories)),
        Err(e) => {
            error!(
                upstream_status = ?e.upstream_status(),
                "Failed to fetch top news: {}", e
            );
            Err(e)
        }
    }
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.read().await.stats();
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
