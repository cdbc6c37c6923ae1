//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{DEFAULT_MAX_ENTRIES, DEFAULT_TTL_SECONDS};
use crate::news::{DEFAULT_BASE_URL, DEFAULT_LOOKUP_CONCURRENCY};

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of cached results
    pub max_entries: usize,
    /// Lifetime of a cached result in seconds
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Base URL of the news API
    pub api_base_url: String,
    /// Timeout for each outbound request in seconds
    pub upstream_timeout: u64,
    /// Detail lookups kept in flight per request
    pub lookup_concurrency: usize,
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cached results (default: 100)
    /// - `CACHE_TTL` - Result lifetime in seconds (default: 600)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `HN_API_BASE_URL` - News API base URL (default: Hacker News v0)
    /// - `UPSTREAM_TIMEOUT` - Outbound request timeout in seconds (default: 10)
    /// - `LOOKUP_CONCURRENCY` - Detail lookups in flight per request (default: 16)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: env_or("MAX_ENTRIES", defaults.max_entries),
            cache_ttl: env_or("CACHE_TTL", defaults.cache_ttl),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            api_base_url: env::var("HN_API_BASE_URL").unwrap_or(defaults.api_base_url),
            upstream_timeout: env_or("UPSTREAM_TIMEOUT", defaults.upstream_timeout),
            lookup_concurrency: env_or("LOOKUP_CONCURRENCY", defaults.lookup_concurrency),
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }

    /// Cleanup interval, never shorter than one second.
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            cache_ttl: DEFAULT_TTL_SECONDS,
            server_port: 8000,
            cleanup_interval: 60,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            upstream_timeout: 10,
            lookup_concurrency: DEFAULT_LOOKUP_CONCURRENCY,
        }
    }
}
