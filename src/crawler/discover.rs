//! Genre discovery
//!
//! The seed page is a genre directory: it embeds one search link per genre.
//! This module finds every such link, derives the genre id from its query
//! parameter, and builds the fully qualified URL the pagination walk starts
//! from. Pure text processing; no fetching happens here.

use crate::{Result, ScrapeError};
use regex::Regex;

/// Path pattern of a genre search link as it appears in the seed page body
const GENRE_LINK_PATTERN: &str = r"/search/title\?genres=(\w+)&title_type=feature&explore=genres";

/// Sort and display parameters appended to every start URL so that
/// pagination order is stable across runs
const STABLE_PARAMS: &str = "&sort=alpha,asc&view=simple";

/// A discovered genre and the URL its crawl starts from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreRef {
    /// Genre identifier, taken from the link's `genres` query parameter
    pub id: String,

    /// Fully qualified first-page URL with stable sort/display parameters
    pub start_url: String,
}

/// Discovers every genre linked from the seed page
///
/// Each match of the genre-search link pattern yields one [`GenreRef`], in
/// document order. Zero matches is fatal: the crawl has nothing to do
/// without at least one genre.
///
/// # Arguments
///
/// * `seed_page` - Body text of the genre directory page
/// * `base_url` - Origin prepended to the matched (relative) link
///
/// # Returns
///
/// * `Ok(Vec<GenreRef>)` - At least one genre, in order of appearance
/// * `Err(ScrapeError::Discovery)` - No genre links found
pub fn discover_genres(seed_page: &str, base_url: &str) -> Result<Vec<GenreRef>> {
    let pattern = Regex::new(GENRE_LINK_PATTERN).map_err(|_| ScrapeError::Discovery)?;

    let genres: Vec<GenreRef> = pattern
        .captures_iter(seed_page)
        .map(|caps| GenreRef {
            id: caps[1].to_string(),
            start_url: format!("{}{}{}", base_url, &caps[0], STABLE_PARAMS),
        })
        .collect();

    if genres.is_empty() {
        return Err(ScrapeError::Discovery);
    }

    Ok(genres)
}
