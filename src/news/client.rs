//! News Source Client
//!
//! Outbound access to the ranking and detail endpoints of the news API.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::types::{ItemId, ItemRecord};
use crate::error::NewsError;

/// Default base URL of the Hacker News API.
pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

// == Source Error ==
/// Failure of a single call to the news API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The endpoint answered with a non-success status
    #[error("upstream returned status {0}")]
    Status(u16),

    /// The request never produced a response
    #[error("upstream unreachable: {0}")]
    Transport(String),

    /// The body could not be decoded
    #[error("invalid upstream body: {0}")]
    Decode(String),
}

impl From<SourceError> for NewsError {
    /// Maps a failure that aborts the request. Undecodable bodies count as internal errors.
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Status(status) => NewsError::UpstreamList {
                status: Some(status),
                message: err.to_string(),
            },
            SourceError::Transport(_) => NewsError::UpstreamList {
                status: None,
                message: err.to_string(),
            },
            SourceError::Decode(_) => NewsError::Internal(err.to_string()),
        }
    }
}

// == News Source Trait ==
/// The remote news API: one ranking endpoint and one detail endpoint.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetches the current ranking of item identifiers, best first.
    async fn fetch_top_ids(&self) -> Result<Vec<ItemId>, SourceError>;

    /// Fetches the detail record of one item.
    async fn fetch_item(&self, id: ItemId) -> Result<ItemRecord, SourceError>;
}

// == Hacker News Client ==
/// `NewsSource` backed by the Hacker News Firebase API.
#[derive(Debug, Clone)]
pub struct HackerNewsClient {
    client: reqwest::Client,
    base_url: String,
}

impl HackerNewsClient {
    /// Creates a client for `base_url` (without trailing slash) with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Wraps an already configured reqwest client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn top_stories_url(&self) -> String {
        format!("{}/topstories.json", self.base_url)
    }

    pub fn item_url(&self, id: ItemId) -> String {
        format!("{}/item/{}.json", self.base_url, id)
    }

    async fn get_json(&self, url: &str) -> Result<Value, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!("GET {} returned {}", url, status);
            return Err(SourceError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl NewsSource for HackerNewsClient {
    async fn fetch_top_ids(&self) -> Result<Vec<ItemId>, SourceError> {
        let body = self.get_json(&self.top_stories_url()).await?;
        serde_json::from_value(body).map_err(|e| SourceError::Decode(e.to_string()))
    }

    async fn fetch_item(&self, id: ItemId) -> Result<ItemRecord, SourceError> {
        // Any JSON body is the record, `null` included
        self.get_json(&self.item_url(id)).await
    }
}
