//! CSV export of scored articles, one row per [`ResultRecord`].
//!
//! Nested values are flattened so every row has the same columns:
//! meta keywords are joined with `"; "`, and the density and frequent-term
//! maps are written as JSON objects. [`read_csv`] reverses this so an export
//! can be loaded back and re-rendered without scraping again.

use crate::models::{ArticleContent, ArticleStub, Category, MetricsRecord, ResultRecord};
use crate::utils::preview;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{info, instrument};

pub const KEYWORD_SEPARATOR: &str = "; ";
pub const PREVIEW_CHARS: usize = 500;

/// The flat shape of one exported row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRow {
    pub category: Category,
    pub title: String,
    pub url: String,
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub sentiment_polarity: f64,
    pub sentiment_subjectivity: f64,
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub keyword_density: String,
    pub frequent_terms: String,
    pub content_preview: String,
}

impl CsvRow {
    pub fn from_record(record: &ResultRecord) -> Result<Self, serde_json::Error> {
        Ok(Self {
            category: record.category,
            title: record.stub.title.clone(),
            url: record.stub.url.clone(),
            meta_title: record.content.meta_title.clone().unwrap_or_default(),
            meta_description: record.content.meta_description.clone().unwrap_or_default(),
            meta_keywords: record.content.meta_keywords.join(KEYWORD_SEPARATOR),
            sentiment_polarity: record.metrics.sentiment_polarity,
            sentiment_subjectivity: record.metrics.sentiment_subjectivity,
            flesch_reading_ease: record.metrics.flesch_reading_ease,
            flesch_kincaid_grade: record.metrics.flesch_kincaid_grade,
            keyword_density: serde_json::to_string(&record.metrics.keyword_density)?,
            frequent_terms: serde_json::to_string(&record.metrics.frequent_terms)?,
            content_preview: preview(&record.content.body_text, PREVIEW_CHARS),
        })
    }

    /// Split `meta_keywords` back into its parts.
    pub fn keywords(&self) -> Vec<String> {
        if self.meta_keywords.is_empty() {
            return Vec::new();
        }
        self.meta_keywords
            .split(KEYWORD_SEPARATOR)
            .map(str::to_string)
            .collect()
    }

    pub fn density(&self) -> Result<BTreeMap<String, f64>, serde_json::Error> {
        serde_json::from_str(&self.keyword_density)
    }

    pub fn terms(&self) -> Result<BTreeMap<String, f64>, serde_json::Error> {
        serde_json::from_str(&self.frequent_terms)
    }

    /// Rebuild a record from this row. The body text is only the exported
    /// preview, and empty meta cells come back as `None`.
    pub fn into_record(self) -> Result<ResultRecord, serde_json::Error> {
        let meta_keywords = self.keywords();
        let keyword_density = self.density()?;
        let frequent_terms = self.terms()?;
        let non_empty = |s: String| (!s.is_empty()).then_some(s);
        Ok(ResultRecord {
            category: self.category,
            stub: ArticleStub {
                title: self.title,
                url: self.url.clone(),
            },
            content: ArticleContent {
                url: self.url,
                body_text: self.content_preview,
                meta_title: non_empty(self.meta_title),
                meta_description: non_empty(self.meta_description),
                meta_keywords,
            },
            metrics: MetricsRecord {
                sentiment_polarity: self.sentiment_polarity,
                sentiment_subjectivity: self.sentiment_subjectivity,
                keyword_density,
                frequent_terms,
                flesch_reading_ease: self.flesch_reading_ease,
                flesch_kincaid_grade: self.flesch_kincaid_grade,
            },
        })
    }
}

/// Write a header row plus one row per record.
pub fn write_csv<W: Write>(records: &[ResultRecord], writer: W) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(writer);
    if records.is_empty() {
        wtr.write_record([
            "category",
            "title",
            "url",
            "meta_title",
            "meta_description",
            "meta_keywords",
            "sentiment_polarity",
            "sentiment_subjectivity",
            "flesch_reading_ease",
            "flesch_kincaid_grade",
            "keyword_density",
            "frequent_terms",
            "content_preview",
        ])?;
    }
    for record in records {
        wtr.serialize(CsvRow::from_record(record)?)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn read_csv<R: Read>(reader: R) -> Result<Vec<CsvRow>, csv::Error> {
    csv::Reader::from_reader(reader).deserialize().collect()
}

/// Load an earlier export back into records.
#[instrument(level = "info", fields(path = %path.display()))]
pub fn read_csv_file(path: &Path) -> Result<Vec<ResultRecord>, Box<dyn Error>> {
    let file = std::fs::File::open(path)?;
    let records = read_csv(file)?
        .into_iter()
        .map(CsvRow::into_record)
        .collect::<Result<Vec<_>, _>>()?;
    info!(rows = records.len(), "Loaded CSV export");
    Ok(records)
}

#[instrument(level = "info", skip(records), fields(path = %path.display()))]
pub fn write_csv_file(records: &[ResultRecord], path: &Path) -> Result<(), Box<dyn Error>> {
    let file = std::fs::File::create(path)?;
    write_csv(records, file)?;
    info!(rows = records.len(), "Wrote CSV export");
    Ok(())
}
