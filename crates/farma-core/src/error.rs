//! Error types for farma-access startup configuration.

use thiserror::Error;

/// Errors raised while validating startup configuration.
///
/// Every variant is fatal: the server refuses to bind or construct backing
/// clients from a configuration that fails validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required setting '{name}' is empty")]
    EmptyValue { name: &'static str },

    #[error("invalid redis url: {0}")]
    InvalidRedisUrl(String),

    #[error("unsupported redis url scheme: {0}")]
    UnsupportedRedisScheme(String),

    #[error("redis url must have a host")]
    MissingRedisHost,

    #[error("invalid index host url: {0}")]
    InvalidIndexHost(String),

    #[error("index host url must use http or https, got: {0}")]
    UnsupportedIndexScheme(String),
}
