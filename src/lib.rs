//! Top News - Hacker News aggregation service
//!
//! Resolves the current top stories through the Hacker News API and keeps
//! the aggregated lists in a bounded TTL cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod news;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::NewsError;
pub use news::Aggregator;
pub use tasks::spawn_cleanup_task;
