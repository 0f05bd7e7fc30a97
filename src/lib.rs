//! Genre-Harvest: a catalog crawler that deduplicates across genres
//!
//! This crate implements a crawler for a catalog site organized by genre
//! search pages. It discovers every genre from a seed page, walks each
//! genre's pagination chain to exhaustion, extracts (title, year) records,
//! merges duplicates found under different genres, and writes the final
//! collection to JSON and CSV.

pub mod config;
pub mod crawler;
pub mod output;
pub mod store;

use thiserror::Error;

/// Main error type for Genre-Harvest operations
///
/// Nothing is caught and retried internally: every error surfaces to the
/// top level, is logged, and terminates the process.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("No genre links found on the seed page")]
    Discovery,

    #[error("Failed to fetch {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
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

/// Result type alias for Genre-Harvest operations
pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, Crawler, GenreRef, RawRecord};
pub use store::{MergeStore, TitleRecord};
