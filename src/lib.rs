//! Douban-Meta: catalog metadata discovery for books and movies
//!
//! This crate searches the Douban catalog for a free-text query, fetches the
//! candidate subject pages concurrently and extracts structured book or movie
//! records from their markup.

pub mod cache;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod provider;
pub mod record;
pub mod sink;
pub mod url;

use thiserror::Error;

/// Main error type for Douban-Meta operations
#[derive(Debug, Error)]
pub enum MetaError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Sink error: {0}")]
    Sink(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a single outbound request
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Candidate URL errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Not a subject detail URL: {0}")]
    NotSubject(String),

    #[error("Missing redirect target in {0}")]
    MissingRedirect(String),
}

/// Result type alias for Douban-Meta operations
pub type Result<T> = std::result::Result<T, MetaError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use cache::RecordCache;
pub use config::Config;
pub use provider::Provider;
pub use record::{BookRecord, Kind, MovieRecord, Record, SourceInfo};
pub use sink::RecordSink;
