//! Article pages → [`ArticleContent`].
//!
//! Body text comes from `<p>` elements, scoped to the first `<article>` when
//! the page has one. SEO fields come from `<title>` and head `<meta>` tags,
//! with Open Graph tags as fallbacks. Missing elements become `None` or an
//! empty keyword list; parsing never fails.

use crate::error::FetchError;
use crate::fetch::PageFetcher;
use crate::models::ArticleContent;
use crate::utils::truncate_for_log;
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument};

static ARTICLE: Lazy<Selector> = Lazy::new(|| Selector::parse("article").unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());

/// Collapse runs of whitespace in an element's text to single spaces.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().flat_map(str::split_whitespace).join(" ")
}

/// Trimmed `content` of the first `<meta>` matching `selector`, if non-empty.
fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .filter_map(|m| m.value().attr("content"))
        .map(|c| c.split_whitespace().join(" "))
        .find(|c| !c.is_empty())
}

fn first_of(document: &Html, selectors: &[&str]) -> Option<String> {
    selectors.iter().find_map(|s| meta_content(document, s))
}

/// Split a `keywords` meta value on commas; trim, drop empties, and dedupe
/// case-insensitively keeping the first spelling.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .unique_by(|k| k.to_lowercase())
        .map(str::to_string)
        .collect()
}

/// Parse an article page.
///
/// Paragraphs whose text is not longer than `min_paragraph_chars` are skipped
/// as boilerplate (captions, bylines, share prompts); pass `0` to keep them all.
pub fn parse_article(url: &str, markup: &str, min_paragraph_chars: usize) -> ArticleContent {
    let document = Html::parse_document(markup);

    let paragraphs: Vec<ElementRef<'_>> = match document.select(&ARTICLE).next() {
        Some(article) => article.select(&PARAGRAPH).collect(),
        None => document.select(&PARAGRAPH).collect(),
    };
    let body_text = paragraphs
        .into_iter()
        .map(element_text)
        .filter(|p| !p.is_empty() && p.chars().count() > min_paragraph_chars)
        .join(" ");

    let meta_title = document
        .select(&TITLE)
        .map(element_text)
        .find(|t| !t.is_empty())
        .or_else(|| meta_content(&document, r#"meta[property="og:title"]"#));

    let meta_description = first_of(
        &document,
        &[
            r#"meta[name="description"]"#,
            r#"meta[property="og:description"]"#,
        ],
    );

    let meta_keywords = first_of(
        &document,
        &[r#"meta[name="keywords"]"#, r#"meta[name="news_keywords"]"#],
    )
    .map(|raw| split_keywords(&raw))
    .unwrap_or_default();

    ArticleContent {
        url: url.to_string(),
        body_text,
        meta_title,
        meta_description,
        meta_keywords,
    }
}

/// Fetch and parse one article.
///
/// # Errors
///
/// Returns [`FetchError`] on network or status failure only.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_article<F: PageFetcher>(
    fetcher: &F,
    url: &str,
    min_paragraph_chars: usize,
) -> Result<ArticleContent, FetchError> {
    let markup = fetcher.fetch(url).await?;
    let content = parse_article(url, &markup, min_paragraph_chars);
    info!(
        bytes = content.body_text.len(),
        keywords = content.meta_keywords.len(),
        has_title = content.meta_title.is_some(),
        has_description = content.meta_description.is_some(),
        "Parsed article"
    );
    debug!(body = %truncate_for_log(&content.body_text, 200), "Article body");
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::fake::FakeFetcher;

    const URL: &str = "https://abcnews.go.com/Business/story?id=7";

    const PAGE: &str = r#"
        <html>
          <head>
            <title> Jobs report beats   forecast - ABC News </title>
            <meta name="description" content="Employers added more jobs than expected.">
            <meta name="keywords" content="economy, jobs , Economy, , labor market">
          </head>
          <body>
            <p>Outside the article element.</p>
            <article>
              <p>Employers added   jobs in <b>every</b> sector.</p>
              <p>Short.</p>
              <p>Wages also rose.</p>
            </article>
          </body>
        </html>
    "#;

    #[test]
    fn body_joins_article_paragraphs_in_order() {
        let content = parse_article(URL, PAGE, 0);
        assert_eq!(
            content.body_text,
            "Employers added jobs in every sector. Short. Wages also rose."
        );
    }

    #[test]
    fn short_paragraphs_are_dropped() {
        let content = parse_article(URL, PAGE, 10);
        assert_eq!(
            content.body_text,
            "Employers added jobs in every sector. Wages also rose."
        );
    }

    #[test]
    fn paragraph_at_threshold_is_dropped() {
        let fifty = "a".repeat(50);
        let fifty_one = "b".repeat(51);
        let markup = format!("<html><body><p>{fifty}</p><p>{fifty_one}</p></body></html>");
        let content = parse_article(URL, &markup, 50);
        assert_eq!(content.body_text, fifty_one);
    }

    #[test]
    fn falls_back_to_all_paragraphs_without_article() {
        let markup = "<html><body><p>First para.</p><div><p>Second para.</p></div></body></html>";
        let content = parse_article(URL, markup, 0);
        assert_eq!(content.body_text, "First para. Second para.");
    }

    #[test]
    fn extracts_meta_fields() {
        let content = parse_article(URL, PAGE, 0);
        assert_eq!(
            content.meta_title.as_deref(),
            Some("Jobs report beats forecast - ABC News")
        );
        assert_eq!(
            content.meta_description.as_deref(),
            Some("Employers added more jobs than expected.")
        );
        assert_eq!(
            content.meta_keywords,
            vec!["economy", "jobs", "labor market"]
        );
        assert_eq!(content.url, URL);
    }

    #[test]
    fn missing_meta_degrades_to_empty() {
        let content = parse_article(URL, "<html><body><p>Only text.</p></body></html>", 0);
        assert_eq!(content.meta_title, None);
        assert_eq!(content.meta_description, None);
        assert!(content.meta_keywords.is_empty());
        assert_eq!(content.body_text, "Only text.");
    }

    #[test]
    fn open_graph_fallbacks() {
        let markup = r#"
            <html><head>
              <meta property="og:title" content="OG headline">
              <meta property="og:description" content="OG summary">
              <meta name="news_keywords" content="tech, ai">
            </head><body></body></html>
        "#;
        let content = parse_article(URL, markup, 0);
        assert_eq!(content.meta_title.as_deref(), Some("OG headline"));
        assert_eq!(content.meta_description.as_deref(), Some("OG summary"));
        assert_eq!(content.meta_keywords, vec!["tech", "ai"]);
        assert!(content.body_text.is_empty());
    }

    #[test]
    fn empty_description_is_none() {
        let markup = r#"<html><head><meta name="description" content="   "></head></html>"#;
        assert_eq!(parse_article(URL, markup, 0).meta_description, None);
    }

    #[tokio::test]
    async fn fetch_article_parses_fetched_page() {
        let fetcher = FakeFetcher::new().page(URL, PAGE);
        let content = fetch_article(&fetcher, URL, 0).await.unwrap();
        assert_eq!(content.meta_keywords.len(), 3);
    }

    #[tokio::test]
    async fn fetch_article_surfaces_fetch_error() {
        let fetcher = FakeFetcher::new().status(URL, 502);
        let err = fetch_article(&fetcher, URL, 0).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 502, .. }));
    }
}
