//! HTTP fetcher
//!
//! All network access goes through this module: building the HTTP client
//! with a proper user agent string and fetching page bodies. There is no
//! retry logic and no per-request timeout; a failed fetch is fatal to the
//! whole crawl.

use crate::config::UserAgentConfig;
use crate::{Result, ScrapeError};
use reqwest::Client;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use genre_harvest::config::UserAgentConfig;
/// use genre_harvest::crawler::build_http_client;
///
/// let config = UserAgentConfig {
///     crawler_name: "GenreHarvest".to_string(),
///     crawler_version: "1.0".to_string(),
///     contact_url: "https://example.com/about".to_string(),
///     contact_email: "admin@example.com".to_string(),
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the response body text
///
/// A non-success status code maps to `ScrapeError::HttpStatus`; a transport
/// failure (DNS, connect, body read) maps to `ScrapeError::Fetch`. Both are
/// fatal to the caller's crawl. Redirects are followed by the client.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScrapeError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| ScrapeError::Fetch {
        url: url.to_string(),
        source,
    })
}
