//! Crawler module for page fetching and processing
//!
//! This module contains the core crawling logic:
//! - HTTP fetching (fatal on failure, no retries)
//! - Genre discovery from the seed page
//! - Record extraction from result pages
//! - Pagination walking, one genre at a time
//! - Overall crawl coordination

mod coordinator;
mod discover;
mod extract;
mod fetcher;
mod walker;

pub use coordinator::{crawl, Crawler};
pub use discover::{discover_genres, GenreRef};
pub use extract::{extract_records, title_count, RawRecord};
pub use fetcher::{build_http_client, fetch_page};
pub use walker::PageWalker;
