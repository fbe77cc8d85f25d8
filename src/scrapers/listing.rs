//! Category listing pages → ordered, deduplicated [`ArticleStub`]s.
//!
//! Each category has a CSS selector for its headline links. Relative `href`s
//! are resolved against the listing URL, fragments are dropped, and the first
//! occurrence of a URL wins.

use crate::config::Config;
use crate::error::{ListingError, ParseError};
use crate::fetch::PageFetcher;
use crate::models::{ArticleStub, Category};
use itertools::Itertools;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Parse listing markup into at most `limit` stubs, in document order.
///
/// Links with no visible text, no `href`, or a non-HTTP target are skipped.
///
/// # Errors
///
/// - [`ParseError::Selector`] if `link_selector` isn't valid CSS
/// - [`ParseError::NoArticleLinks`] if nothing on the page matches it
pub fn parse_listing(
    markup: &str,
    listing_url: &str,
    link_selector: &str,
    limit: usize,
) -> Result<Vec<ArticleStub>, ParseError> {
    let selector = Selector::parse(link_selector).map_err(|e| ParseError::Selector {
        selector: link_selector.to_string(),
        reason: format!("{e:?}"),
    })?;
    let base = Url::parse(listing_url).ok();
    let document = Html::parse_document(markup);

    let mut matched = 0usize;
    let stubs = document
        .select(&selector)
        .inspect(|_| matched += 1)
        .filter_map(|element| {
            let title = element.text().flat_map(str::split_whitespace).join(" ");
            if title.is_empty() {
                return None;
            }
            let href = element.value().attr("href")?;
            let url = resolve_link(base.as_ref(), href)?;
            Some(ArticleStub { title, url })
        })
        .unique_by(|stub| stub.url.clone())
        .take(limit)
        .collect::<Vec<_>>();

    if matched == 0 {
        return Err(ParseError::NoArticleLinks {
            url: listing_url.to_string(),
        });
    }
    Ok(stubs)
}

/// Resolve `href` to an absolute http(s) URL without a fragment.
fn resolve_link(base: Option<&Url>, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    let mut url = match base {
        Some(base) => base.join(href).ok()?,
        None => Url::parse(href).ok()?,
    };
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    url.set_fragment(None);
    Some(url.to_string())
}

/// Fetch and parse the listing page for `category`.
///
/// Markup drift (no matching links) is logged and yields zero stubs.
///
/// # Errors
///
/// Returns [`ListingError`] if the category isn't configured, the page can't
/// be fetched, or the configured selector is invalid.
#[instrument(level = "info", skip(fetcher, config))]
pub async fn index_articles<F: PageFetcher>(
    fetcher: &F,
    config: &Config,
    category: Category,
) -> Result<Vec<ArticleStub>, ListingError> {
    let cat = config
        .category(category)
        .ok_or(ListingError::Unconfigured(category))?;

    let markup = fetcher.fetch(&cat.listing_url).await?;
    match parse_listing(
        &markup,
        &cat.listing_url,
        &cat.link_selector,
        config.max_articles,
    ) {
        Ok(stubs) => {
            info!(
                count = stubs.len(),
                source = %cat.listing_url,
                "Indexed article stubs"
            );
            debug!(urls = ?stubs.iter().map(|s| &s.url).collect::<Vec<_>>(), "Stub URLs");
            Ok(stubs)
        }
        Err(ParseError::NoArticleLinks { url }) => {
            warn!(%url, selector = %cat.link_selector, "No article links matched; markup may have changed");
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}
