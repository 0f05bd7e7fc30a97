//! Pagination walker
//!
//! One walker drives the fetch/extract/next-link loop for a single genre.
//! It produces one batch of records per page, on demand: the next page is
//! only fetched when the consumer asks for another batch, because the next
//! page's URL is only discoverable from the current page's content.
//!
//! A walker is finite and not restartable. A fetch failure at any step
//! aborts the walk and propagates to the caller.

use crate::crawler::discover::GenreRef;
use crate::crawler::extract::{extract_records, title_count, RawRecord};
use crate::crawler::fetcher::fetch_page;
use crate::Result;
use regex::Regex;
use reqwest::Client;
use url::Url;

/// Marker a result page embeds in its next-page link
const NEXT_LINK_PATTERN: &str = r#"a href="([^"]*adv_nxt)"#;

/// Produce-on-demand walk over one genre's pagination chain
pub struct PageWalker<'a> {
    client: &'a Client,
    base_url: &'a Url,
    genre: &'a GenreRef,

    /// URL to fetch on the next call; None once the chain is exhausted
    pending: Option<String>,
    page_number: u32,
}

impl<'a> PageWalker<'a> {
    /// Positions a walker at the start of the genre's pagination chain
    ///
    /// No fetching happens until the first [`next_batch`](Self::next_batch)
    /// call.
    pub fn begin(client: &'a Client, base_url: &'a Url, genre: &'a GenreRef) -> Self {
        Self {
            client,
            base_url,
            genre,
            pending: Some(genre.start_url.clone()),
            page_number: 0,
        }
    }

    /// Fetches the next page and returns its records
    ///
    /// Returns `Ok(Some(batch))` once per page, in chain order, and
    /// `Ok(None)` after the page that carries no next-page link. The only
    /// termination condition is that missing link; the total-title count
    /// observed on the first page is logged but never enforced as a cap.
    pub async fn next_batch(&mut self) -> Result<Option<Vec<RawRecord>>> {
        let url = match self.pending.take() {
            Some(url) => url,
            None => return Ok(None),
        };

        let body = fetch_page(self.client, &url).await?;
        self.page_number += 1;

        if self.page_number == 1 {
            tracing::info!(
                "Genre '{}': {} titles listed",
                self.genre.id,
                title_count(&body)
            );
        }

        let records = extract_records(&body);
        tracing::debug!(
            "Genre '{}' page {}: {} records",
            self.genre.id,
            self.page_number,
            records.len()
        );

        match find_next_link(&body, self.base_url) {
            Some(next) => {
                tracing::debug!("Next page #{}: {}", self.page_number + 1, next);
                self.pending = Some(next);
            }
            None => {
                tracing::info!(
                    "Genre '{}': no next page after page {}, finishing",
                    self.genre.id,
                    self.page_number
                );
            }
        }

        Ok(Some(records))
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> u32 {
        self.page_number
    }
}

/// Searches a page body for the next-page link and qualifies it
///
/// The captured href is resolved against the base URL, so both relative and
/// absolute links work. Returns None when the page has no next-page marker.
fn find_next_link(body: &str, base_url: &Url) -> Option<String> {
    let pattern = Regex::new(NEXT_LINK_PATTERN).ok()?;
    let caps = pattern.captures(body)?;
    let resolved = base_url.join(&caps[1]).ok()?;
    Some(resolved.to_string())
}
