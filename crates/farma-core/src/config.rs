//! Startup configuration for the farma-access server.

use std::net::SocketAddr;

use url::Url;

use crate::error::ConfigError;

/// Default listen address; override with `FARMA_BIND_ADDR`.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:6937";

/// Validated connection settings for both backing services.
///
/// Construct with the raw environment values and call [`Config::validate`]
/// before handing the settings to any client constructor.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL (`redis://[:password@]host[:port][/db]`).
    pub redis_url: String,
    /// API key for the vector index data plane.
    pub index_api_key: String,
    /// Data-plane host URL of the vector index.
    pub index_host: String,
    /// Address the SSE endpoint binds to.
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Check every setting a backing client will be built from.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered. Validation order is
    /// redis url, index host, api key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let redis = self.redis_url.trim();
        if redis.is_empty() {
            return Err(ConfigError::EmptyValue { name: "REDIS_URL" });
        }
        let url = Url::parse(redis).map_err(|e| ConfigError::InvalidRedisUrl(e.to_string()))?;
        let scheme = url.scheme();
        if scheme != "redis" && scheme != "rediss" {
            return Err(ConfigError::UnsupportedRedisScheme(scheme.to_string()));
        }
        if url.host().is_none() {
            return Err(ConfigError::MissingRedisHost);
        }

        let host = self.index_host.trim();
        if host.is_empty() {
            return Err(ConfigError::EmptyValue {
                name: "PINECONE_INDEX_HOST_URL",
            });
        }
        let url = Url::parse(host).map_err(|e| ConfigError::InvalidIndexHost(e.to_string()))?;
        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::UnsupportedIndexScheme(scheme.to_string()));
        }

        if self.index_api_key.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: "PINECONE_API_KEY",
            });
        }

        Ok(())
    }
}
