//! Record extraction from result pages
//!
//! A result page lists items in a common container: each item has a title
//! anchor and, next to it, a year span whose text is parenthesized. The two
//! element lists are correlated by position: title i pairs with year i. That
//! pairing is fragile by construction, so a missing element on either side
//! yields an empty string for that field rather than dropping the record.

use regex::Regex;
use scraper::{Html, Selector};

/// Title anchor inside the per-item header
const TITLE_SELECTOR: &str = ".lister-item-header a";

/// Year span inside the same per-item header, text like "(1979)"
const YEAR_SELECTOR: &str = ".lister-item-header .lister-item-year";

/// One record as extracted from a single page, genre-agnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub title: String,
    pub year: String,
}

/// Extracts all records from a result page, in document order
///
/// Titles and years are read as two positional lists; the output length is
/// the longer of the two, with `""` filling the short side.
pub fn extract_records(page: &str) -> Vec<RawRecord> {
    let document = Html::parse_document(page);

    let titles = select_texts(&document, TITLE_SELECTOR);
    let years: Vec<String> = select_texts(&document, YEAR_SELECTOR)
        .into_iter()
        .map(|text| strip_parens(&text))
        .collect();

    let count = titles.len().max(years.len());
    (0..count)
        .map(|i| RawRecord {
            title: titles.get(i).cloned().unwrap_or_default(),
            year: years.get(i).cloned().unwrap_or_default(),
        })
        .collect()
}

/// Reads the total-title count a result page displays (e.g. "1,234 titles")
///
/// Diagnostic only: the walk never uses it as a cap. Returns 0 when the
/// marker is absent or unparsable.
pub fn title_count(page: &str) -> u64 {
    let Ok(pattern) = Regex::new(r"([0-9][0-9,]*) titles") else {
        return 0;
    };

    pattern
        .captures(page)
        .and_then(|caps| caps[1].replace(',', "").parse().ok())
        .unwrap_or(0)
}

/// Collects the trimmed text content of every element matching `selector`
fn select_texts(document: &Html, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect()
}

/// Strips the enclosing parentheses from a year span's text
fn strip_parens(text: &str) -> String {
    text.trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, year: &str) -> String {
        format!(
            r#"<div class="lister-item">
                 <span class="lister-item-header">
                   <a href="/title/x/">{}</a>
                   <span class="lister-item-year">({})</span>
                 </span>
               </div>"#,
            title, year
        )
    }

    #[test]
    fn test_extract_single_record() {
        let page = format!("<html><body>{}</body></html>", item("Alien", "1979"));
        let records = extract_records(&page);

        assert_eq!(
            records,
            vec![RawRecord {
                title: "Alien".to_string(),
                year: "1979".to_string(),
            }]
        );
    }

    #[test]
    fn test_extract_preserves_document_order() {
        let page = format!(
            "<html><body>{}{}{}</body></html>",
            item("A", "2000"),
            item("B", "2001"),
            item("C", "2002")
        );
        let records = extract_records(&page);

        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_missing_year_yields_empty_string() {
        // Three titles, two years: the third record is still emitted
        let page = format!(
            r#"<html><body>
                 {}{}
                 <div class="lister-item">
                   <span class="lister-item-header"><a href="/title/x/">C</a></span>
                 </div>
               </body></html>"#,
            item("A", "2000"),
            item("B", "2001")
        );
        let records = extract_records(&page);

        assert_eq!(records.len(), 3);
        assert_eq!(records[2].title, "C");
        assert_eq!(records[2].year, "");
    }

    #[test]
    fn test_more_years_than_titles() {
        let page = r#"<html><body>
            <div class="lister-item">
              <span class="lister-item-header">
                <span class="lister-item-year">(2000)</span>
              </span>
            </div>
        </body></html>"#;
        let records = extract_records(page);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "");
        assert_eq!(records[0].year, "2000");
    }

    #[test]
    fn test_empty_page_yields_no_records() {
        assert!(extract_records("<html><body></body></html>").is_empty());
    }

    #[test]
    fn test_year_parens_are_stripped() {
        let page = format!("<html><body>{}</body></html>", item("Alien", "1979"));
        assert_eq!(extract_records(&page)[0].year, "1979");
    }

    #[test]
    fn test_title_count() {
        assert_eq!(title_count("Showing 1-50 of 12,345 titles"), 12_345);
        assert_eq!(title_count("42 titles"), 42);
    }

    #[test]
    fn test_title_count_absent() {
        assert_eq!(title_count("<html><body>no counter</body></html>"), 0);
    }
}
