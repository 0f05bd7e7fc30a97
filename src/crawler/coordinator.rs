//! Crawl coordinator - top-level control flow
//!
//! Fetches the seed page, discovers genres, and runs one pagination walk
//! per genre in discovery order, folding every extracted record into the
//! merge store. Strictly sequential: one genre at a time, one page at a
//! time. Any error anywhere aborts the entire run; no genre is retried or
//! skipped.

use crate::config::Config;
use crate::crawler::discover::discover_genres;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::walker::PageWalker;
use crate::store::{MergeStore, TitleRecord};
use crate::Result;
use reqwest::Client;
use url::Url;

/// Main crawler structure
pub struct Crawler {
    config: Config,
    client: Client,
    store: MergeStore,
}

impl Crawler {
    /// Creates a new crawler from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        let client = build_http_client(&config.user_agent)?;

        Ok(Self {
            config,
            client,
            store: MergeStore::new(),
        })
    }

    /// Runs the full crawl and returns the deduplicated collection
    ///
    /// Fails with [`ScrapeError::Discovery`] when the seed page contains no
    /// genre links, and with a fetch error when any page of any genre cannot
    /// be retrieved. On success the returned snapshot holds one record per
    /// unique (title, year), in first-seen order.
    pub async fn run(&mut self) -> Result<&[TitleRecord]> {
        let base_url = Url::parse(&self.config.site.base_url)?;

        tracing::info!("Fetching seed page: {}", self.config.site.seed_url);
        let seed_page = fetch_page(&self.client, &self.config.site.seed_url).await?;

        let genres = discover_genres(&seed_page, &self.config.site.base_url)?;
        tracing::info!(
            "Discovered {} genres: {}",
            genres.len(),
            genres
                .iter()
                .map(|g| g.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        for genre in &genres {
            tracing::info!("Scraping genre '{}': {}", genre.id, genre.start_url);

            let mut walker = PageWalker::begin(&self.client, &base_url, genre);
            while let Some(batch) = walker.next_batch().await? {
                for record in batch {
                    self.store.upsert(record, &genre.id);
                }
            }

            tracing::info!(
                "Genre '{}' done: {} pages, {} unique titles so far",
                genre.id,
                walker.pages_fetched(),
                self.store.len()
            );
        }

        tracing::info!("Crawl complete: {} unique titles", self.store.len());
        Ok(self.store.snapshot())
    }

    /// Read-only view of everything collected so far
    pub fn snapshot(&self) -> &[TitleRecord] {
        self.store.snapshot()
    }
}

/// Runs a complete crawl and returns the collected records
///
/// Convenience wrapper over [`Crawler`] for callers that do not need to
/// observe intermediate state.
pub async fn crawl(config: Config) -> Result<Vec<TitleRecord>> {
    let mut crawler = Crawler::new(config)?;
    crawler.run().await?;
    Ok(crawler.snapshot().to_vec())
}
