//! Data models flowing through the scrape → score → export pipeline.
//!
//! - [`ArticleStub`]: a listing-page reference (title + URL)
//! - [`ArticleContent`]: the parsed article page
//! - [`MetricsRecord`]: sentiment, SEO, and readability scores for one article
//! - [`ResultRecord`]: the three above, tagged with their [`Category`]
//! - [`Report`]: every record from one run, plus the categories that had no data
//!
//! Nothing here outlives a single run; each run recomputes from scratch.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A news section with its own listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Politics,
    Business,
    Tech,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Politics, Category::Business, Category::Tech];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Politics => "politics",
            Category::Business => "business",
            Category::Tech => "tech",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A listing-page reference to an article, before its page is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleStub {
    /// Headline text of the listing link.
    pub title: String,
    /// Absolute article URL; unique within a listing.
    pub url: String,
}

/// Text and SEO meta fields parsed from one article page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleContent {
    pub url: String,
    /// Paragraph text in document order, joined by single spaces.
    pub body_text: String,
    /// `<title>` text, or `og:title` when the page has no title element.
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    /// Comma-separated `keywords` meta content, trimmed and deduplicated.
    pub meta_keywords: Vec<String>,
}

/// Scores derived purely from an article's body text and meta keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// Lexicon polarity in `[-1.0, 1.0]`.
    pub sentiment_polarity: f64,
    /// Lexicon subjectivity in `[0.0, 1.0]`.
    pub sentiment_subjectivity: f64,
    /// Meta keyword (lowercased) → fraction of filtered body tokens it matches.
    pub keyword_density: BTreeMap<String, f64>,
    /// Body terms that recur often enough to matter → fraction of filtered tokens.
    pub frequent_terms: BTreeMap<String, f64>,
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
}

/// One scored article; the unit handed to CSV/JSON/Markdown outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub category: Category,
    pub stub: ArticleStub,
    pub content: ArticleContent,
    pub metrics: MetricsRecord,
}

/// Everything produced by one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Display name of the scraped site.
    pub site: String,
    /// The run date in `YYYY-MM-DD` format.
    pub local_date: String,
    pub local_time: String,
    pub categories: Vec<Category>,
    pub filter: Option<String>,
    /// Categories whose listing page could not be fetched or parsed.
    pub unavailable: Vec<Category>,
    pub records: Vec<ResultRecord>,
}

impl Report {
    /// An empty report stamped with the current local date and time.
    pub fn new(site: &str, categories: Vec<Category>, filter: Option<String>) -> Self {
        let now = Local::now();
        Self {
            site: site.to_string(),
            local_date: now.date_naive().to_string(),
            local_time: now.time().format("%H:%M:%S").to_string(),
            categories,
            filter,
            unavailable: Vec::new(),
            records: Vec::new(),
        }
    }

    /// Records belonging to `category`, in run order.
    pub fn records_for(&self, category: Category) -> impl Iterator<Item = &ResultRecord> {
        self.records.iter().filter(move |r| r.category == category)
    }

    /// Slug used for output file names, e.g. `politics-tech`.
    pub fn slug(&self) -> String {
        if self.categories.is_empty() {
            return "empty".to_string();
        }
        self.categories
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join("-")
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{record, report};
    use super::*;

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Tech).unwrap();
        assert_eq!(json, "\"tech\"");
        let back: Category = serde_json::from_str("\"business\"").unwrap();
        assert_eq!(back, Category::Business);
    }

    #[test]
    fn report_slug_joins_categories() {
        let r = report(vec![]);
        assert_eq!(r.slug(), "politics-business");
    }

    #[test]
    fn new_report_is_empty_and_dated() {
        let r = Report::new("ABC News", vec![Category::Tech], Some("ai".to_string()));
        assert!(r.records.is_empty());
        assert!(r.unavailable.is_empty());
        assert_eq!(r.local_date.len(), 10);
        assert_eq!(r.local_time.len(), 8);
        assert_eq!(r.slug(), "tech");
    }

    #[test]
    fn report_slug_for_no_categories() {
        let mut r = report(vec![]);
        r.categories.clear();
        assert_eq!(r.slug(), "empty");
    }

    #[test]
    fn records_for_filters_by_category() {
        let r = report(vec![
            record(Category::Politics, "A", "https://abcnews.go.com/a"),
            record(Category::Business, "B", "https://abcnews.go.com/b"),
            record(Category::Politics, "C", "https://abcnews.go.com/c"),
        ]);
        let titles: Vec<_> = r
            .records_for(Category::Politics)
            .map(|rec| rec.stub.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn report_json_roundtrip_keeps_records() {
        let r = report(vec![record(
            Category::Business,
            "Markets rally",
            "https://abcnews.go.com/Business/markets",
        )]);
        let json = serde_json::to_string(&r).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back.records, r.records);
        assert_eq!(back.local_date, "2025-05-06");
    }
}
