//! Deduplicating record store
//!
//! The crawl visits every genre independently, so the same title shows up
//! once per genre it is listed under. This module folds those sightings into
//! one canonical record per (title, year) identity, accumulating the set of
//! genres the title was seen in.

use crate::crawler::RawRecord;
use serde::Serialize;
use std::collections::HashMap;

/// A deduplicated title with the genres it was observed under
///
/// Identity is the exact (title, year) string pair. No normalization is
/// applied to either field: `"A"` and `"a"` are different titles, and a
/// trailing space makes a different identity.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TitleRecord {
    pub title: String,
    pub year: String,

    /// Genres this title was seen under, in first-seen order, no duplicates
    pub genres: Vec<String>,
}

/// Accumulating collection of canonical records, unique by (title, year)
///
/// Records are kept in first-seen order. The position index gives O(1)
/// identity lookup without disturbing that order. Entries are never removed
/// and never move; the only mutation after insertion is widening a record's
/// genre list.
#[derive(Debug, Default)]
pub struct MergeStore {
    records: Vec<TitleRecord>,
    index: HashMap<(String, String), usize>,
}

impl MergeStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one raw record, seen under `genre`, into the store
    ///
    /// If a record with the same (title, year) already exists, its genre
    /// list is widened to include `genre`; adding an already-present genre
    /// is a no-op. Otherwise a new record is appended with `genre` as its
    /// only genre.
    pub fn upsert(&mut self, raw: RawRecord, genre: &str) {
        let key = (raw.title.clone(), raw.year.clone());

        match self.index.get(&key) {
            Some(&pos) => {
                let record = &mut self.records[pos];
                if !record.genres.iter().any(|g| g == genre) {
                    record.genres.push(genre.to_string());
                }
            }
            None => {
                self.records.push(TitleRecord {
                    title: raw.title,
                    year: raw.year,
                    genres: vec![genre.to_string()],
                });
                self.index.insert(key, self.records.len() - 1);
            }
        }
    }

    /// Read-only view of the current contents, in first-seen order
    ///
    /// Safe to call at any point, including mid-crawl.
    pub fn snapshot(&self) -> &[TitleRecord] {
        &self.records
    }

    /// Number of unique identities in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no records have been stored yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: &str, year: &str) -> RawRecord {
        RawRecord {
            title: title.to_string(),
            year: year.to_string(),
        }
    }

    #[test]
    fn test_insert_new_record() {
        let mut store = MergeStore::new();
        store.upsert(raw("Alien", "1979"), "horror");

        assert_eq!(store.len(), 1);
        let record = &store.snapshot()[0];
        assert_eq!(record.title, "Alien");
        assert_eq!(record.year, "1979");
        assert_eq!(record.genres, vec!["horror"]);
    }

    #[test]
    fn test_merge_widens_genres() {
        let mut store = MergeStore::new();
        store.upsert(raw("Alien", "1979"), "horror");
        store.upsert(raw("Alien", "1979"), "sci-fi");

        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].genres, vec!["horror", "sci-fi"]);
    }

    #[test]
    fn test_repeat_genre_is_noop() {
        let mut store = MergeStore::new();
        store.upsert(raw("Alien", "1979"), "horror");
        store.upsert(raw("Alien", "1979"), "horror");

        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].genres, vec!["horror"]);
    }

    #[test]
    fn test_identity_uniqueness() {
        let mut store = MergeStore::new();
        store.upsert(raw("Alien", "1979"), "horror");
        store.upsert(raw("Aliens", "1986"), "action");
        store.upsert(raw("Alien", "1979"), "sci-fi");
        store.upsert(raw("Aliens", "1986"), "sci-fi");

        let snapshot = store.snapshot();
        for (i, a) in snapshot.iter().enumerate() {
            for b in &snapshot[i + 1..] {
                assert!(
                    a.title != b.title || a.year != b.year,
                    "duplicate identity ({}, {})",
                    a.title,
                    a.year
                );
            }
        }
    }

    #[test]
    fn test_same_title_different_year_is_distinct() {
        let mut store = MergeStore::new();
        store.upsert(raw("King Kong", "1933"), "adventure");
        store.upsert(raw("King Kong", "2005"), "adventure");

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_identity_is_exact_no_normalization() {
        let mut store = MergeStore::new();
        store.upsert(raw("Alien", "1979"), "horror");
        store.upsert(raw("alien", "1979"), "horror");
        store.upsert(raw("Alien ", "1979"), "horror");

        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_empty_fields_merge_together() {
        // Records that extracted as ("", "") share an identity and collapse
        // into one entry. Exact-equality matching makes this the deliberate
        // outcome for fully malformed rows.
        let mut store = MergeStore::new();
        store.upsert(raw("", ""), "comedy");
        store.upsert(raw("", ""), "drama");

        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].genres, vec!["comedy", "drama"]);
    }

    #[test]
    fn test_insertion_order_is_stable_across_merges() {
        let mut store = MergeStore::new();
        store.upsert(raw("A", "2000"), "comedy");
        store.upsert(raw("B", "2001"), "comedy");
        store.upsert(raw("C", "2002"), "comedy");

        // Merging into A from a later genre must not reorder it
        store.upsert(raw("A", "2000"), "drama");

        let titles: Vec<&str> = store.snapshot().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_snapshot_mid_crawl() {
        let mut store = MergeStore::new();
        store.upsert(raw("A", "2000"), "comedy");
        assert_eq!(store.snapshot().len(), 1);

        store.upsert(raw("B", "2001"), "comedy");
        assert_eq!(store.snapshot().len(), 2);
    }

    #[test]
    fn test_genre_union_across_many_genres() {
        let mut store = MergeStore::new();
        let genres = ["comedy", "drama", "horror", "comedy", "thriller", "drama"];
        for genre in genres {
            store.upsert(raw("A", "2000"), genre);
        }

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.snapshot()[0].genres,
            vec!["comedy", "drama", "horror", "thriller"]
        );
    }
}
