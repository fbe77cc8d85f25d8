//! Run orchestration: listing → stubs → per-article fetch + metrics → [`Report`].
//!
//! Failure isolation:
//! - a listing that can't be fetched (or whose selector is broken) marks its
//!   category unavailable; the other categories still run
//! - an article that can't be fetched is logged and omitted
//!
//! Articles are fetched one at a time. Each [`ResultRecord`] is built only
//! from its own stub and page; the one piece of run state is the set of URLs
//! already seen, which keeps a story listed in two categories from being
//! fetched twice.

use crate::config::Config;
use crate::error::ListingError;
use crate::fetch::PageFetcher;
use crate::metrics::MetricsEngine;
use crate::models::{ArticleStub, Category, Report, ResultRecord};
use crate::scrapers::{fetch_article, index_articles};
use futures::future;
use futures::stream::{self, StreamExt};
use itertools::Itertools;
use std::collections::HashSet;
use tracing::{debug, error, info, instrument, warn};

/// What to scrape: categories in order, and an optional title filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub categories: Vec<Category>,
    pub filter: Option<String>,
}

impl RunRequest {
    /// Build a request, dropping repeated categories and blank filters.
    pub fn new(categories: impl IntoIterator<Item = Category>, filter: Option<String>) -> Self {
        Self {
            categories: categories.into_iter().unique().collect(),
            filter: filter
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty()),
        }
    }
}

/// Case-insensitive substring match; no filter matches everything.
pub fn title_matches(title: &str, filter: Option<&str>) -> bool {
    match filter.map(str::trim).filter(|f| !f.is_empty()) {
        None => true,
        Some(f) => title.to_lowercase().contains(&f.to_lowercase()),
    }
}

/// A report over records loaded from elsewhere (a CSV export), narrowed to
/// the request's categories and title filter.
pub fn report_from_records(site: &str, request: &RunRequest, records: Vec<ResultRecord>) -> Report {
    let mut report = Report::new(site, request.categories.clone(), request.filter.clone());
    report.records = records
        .into_iter()
        .filter(|r| request.categories.contains(&r.category))
        .filter(|r| title_matches(&r.stub.title, request.filter.as_deref()))
        .unique_by(|r| r.stub.url.clone())
        .collect();
    report
}

pub struct Pipeline<F> {
    fetcher: F,
    config: Config,
    engine: MetricsEngine,
}

impl<F: PageFetcher> Pipeline<F> {
    pub fn new(fetcher: F, config: Config, engine: MetricsEngine) -> Self {
        Self {
            fetcher,
            config,
            engine,
        }
    }

    /// Run every requested category and collect the records into a [`Report`].
    ///
    /// Never fails: unavailable categories are listed in
    /// [`Report::unavailable`] and failed articles are simply absent.
    #[instrument(level = "info", skip(self))]
    pub async fn run(&self, request: &RunRequest) -> Report {
        let mut report = Report::new(
            &self.config.site_name,
            request.categories.clone(),
            request.filter.clone(),
        );

        let mut seen = HashSet::new();
        for &category in &request.categories {
            match self
                .collect_category(category, request.filter.as_deref(), &mut seen)
                .await
            {
                Ok(records) => report.records.extend(records),
                Err(e) => {
                    warn!(
                        %category,
                        listing = self.config.listing_url(category).unwrap_or("-"),
                        error = %e,
                        "No data for this category"
                    );
                    report.unavailable.push(category);
                }
            }
        }

        info!(
            records = report.records.len(),
            unavailable = report.unavailable.len(),
            "Run complete"
        );
        report
    }

    /// Records for a single category. URLs already in `seen` are skipped, and
    /// every URL this category selects is added to it.
    ///
    /// # Errors
    ///
    /// Returns the [`ListingError`] if the category's listing is unusable.
    #[instrument(level = "info", skip(self, seen))]
    pub async fn collect_category(
        &self,
        category: Category,
        filter: Option<&str>,
        seen: &mut HashSet<String>,
    ) -> Result<Vec<ResultRecord>, ListingError> {
        let indexed = index_articles(&self.fetcher, &self.config, category).await?;
        let indexed_count = indexed.len();

        let stubs: Vec<ArticleStub> = indexed
            .into_iter()
            .filter(|stub| title_matches(&stub.title, filter))
            .filter(|stub| seen.insert(stub.url.clone()))
            .collect();
        debug!(
            indexed = indexed_count,
            selected = stubs.len(),
            "Applied title filter and cross-category dedupe"
        );

        let total = stubs.len();
        let records: Vec<ResultRecord> = stream::iter(stubs)
            .then(|stub| self.build_record(category, stub))
            .filter_map(future::ready)
            .collect()
            .await;

        info!(
            %category,
            total,
            successful = records.len(),
            failed = total - records.len(),
            "Scored category articles"
        );
        Ok(records)
    }

    async fn build_record(&self, category: Category, stub: ArticleStub) -> Option<ResultRecord> {
        match fetch_article(&self.fetcher, &stub.url, self.config.min_paragraph_chars).await {
            Ok(content) => {
                let metrics = self.engine.score(&content);
                debug!(url = %stub.url, polarity = metrics.sentiment_polarity, "Scored article");
                Some(ResultRecord {
                    category,
                    stub,
                    content,
                    metrics,
                })
            }
            Err(e) => {
                error!(error = %e, url = %stub.url, "Article fetch failed; skipping");
                None
            }
        }
    }
}
