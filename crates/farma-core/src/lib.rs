//! # farma-core
//!
//! Configuration and shared error types for the farma-access server.
//!
//! This crate defines the startup contract used by the other farma crates:
//! - [`Config`] — validated connection settings for both backing services
//! - [`ConfigError`] — typed startup failures, surfaced before any client
//!   handle is constructed

pub mod config;
pub mod error;

pub use config::Config;
pub use error::ConfigError;
