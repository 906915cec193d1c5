//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Signing secret used when `TOKEN_SECRET` is not set. Only suitable for local
/// development.
pub const DEV_TOKEN_SECRET: &str = "mini-blog-dev-secret-change-me";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of per-user post lists kept in the cache
    pub cache_capacity: usize,
    /// Lifetime of a cached post list in seconds
    pub cache_ttl: u64,
    /// Interval in seconds between expired-entry sweeps
    pub cleanup_interval: u64,
    /// HS256 secret for access tokens
    pub token_secret: String,
    /// Access token lifetime in minutes
    pub token_ttl_minutes: i64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_CAPACITY` - Cached post lists (default: 100)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 60)
    /// - `TOKEN_SECRET` - Token signing secret (default: development secret)
    /// - `TOKEN_TTL_MINUTES` - Token lifetime in minutes (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_capacity: parse_var("CACHE_CAPACITY").unwrap_or(defaults.cache_capacity),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            token_secret: env::var("TOKEN_SECRET")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.token_secret),
            token_ttl_minutes: parse_var("TOKEN_TTL_MINUTES").unwrap_or(defaults.token_ttl_minutes),
        }
    }

    /// True when tokens are signed with the built-in development secret.
    pub fn uses_dev_secret(&self) -> bool {
        self.token_secret == DEV_TOKEN_SECRET
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_capacity: crate::cache::DEFAULT_CAPACITY,
            cache_ttl: crate::cache::DEFAULT_TTL_SECONDS,
            cleanup_interval: 60,
            token_secret: DEV_TOKEN_SECRET.to_string(),
            token_ttl_minutes: 30,
        }
    }
}
