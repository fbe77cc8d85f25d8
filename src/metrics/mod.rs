//! Per-article scoring: sentiment, SEO keyword density, and readability.
//!
//! [`MetricsEngine::compute`] is a pure function of the body text and meta
//! keywords. Every degenerate input (empty body, no sentences, no keywords)
//! maps to a defined sentinel rather than an error.

pub mod keywords;
pub mod readability;
pub mod sentiment;
pub mod stopwords;

use crate::config::Config;
use crate::models::{ArticleContent, MetricsRecord};
pub use stopwords::StopWords;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct MetricsEngine {
    stopwords: StopWords,
    min_term_count: usize,
}

impl MetricsEngine {
    pub fn new(stopwords: StopWords, min_term_count: usize) -> Self {
        Self {
            stopwords,
            min_term_count,
        }
    }

    /// English stopwords plus the config's extras.
    pub fn from_config(config: &Config) -> Self {
        let stopwords = StopWords::with_extra(&config.extra_stopwords);
        debug!(
            extra_stopwords = config.extra_stopwords.len(),
            min_term_count = config.min_term_count,
            "Metrics engine configured"
        );
        Self::new(stopwords, config.min_term_count)
    }

    pub fn compute(&self, body_text: &str, meta_keywords: &[String]) -> MetricsRecord {
        let sentiment = sentiment::score(body_text);
        let tokens = keywords::tokenize(body_text, &self.stopwords);
        let readability = readability::readability(body_text);

        MetricsRecord {
            sentiment_polarity: sentiment.polarity,
            sentiment_subjectivity: sentiment.subjectivity,
            keyword_density: keywords::keyword_density(&tokens, meta_keywords, &self.stopwords),
            frequent_terms: keywords::frequent_terms(&tokens, self.min_term_count),
            flesch_reading_ease: readability.flesch_reading_ease,
            flesch_kincaid_grade: readability.flesch_kincaid_grade,
        }
    }

    pub fn score(&self, content: &ArticleContent) -> MetricsRecord {
        self.compute(&content.body_text, &content.meta_keywords)
    }
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new(StopWords::english(), 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_sentinels() {
        let m = MetricsEngine::default().compute("", &[]);
        assert_eq!(m.sentiment_polarity, 0.0);
        assert_eq!(m.sentiment_subjectivity, 0.0);
        assert_eq!(m.flesch_reading_ease, 0.0);
        assert_eq!(m.flesch_kincaid_grade, 0.0);
        assert!(m.keyword_density.is_empty());
        assert!(m.frequent_terms.is_empty());
    }

    #[test]
    fn compute_is_deterministic() {
        let engine = MetricsEngine::default();
        let body = "Great gains lifted the economy. Analysts were not happy with inflation.";
        let kws = vec!["economy".to_string()];
        assert_eq!(engine.compute(body, &kws), engine.compute(body, &kws));
    }

    #[test]
    fn combines_all_metrics() {
        let engine = MetricsEngine::default();
        let m = engine.compute("Good news today. Great results.", &["news".to_string()]);
        assert!((m.sentiment_polarity - 0.75).abs() < 1e-9);
        assert!((m.flesch_reading_ease - 85.8575).abs() < 0.01);
        assert!((m.flesch_kincaid_grade - 1.905).abs() < 0.01);
        // good news today great results
        assert!((m.keyword_density["news"] - 0.2).abs() < 1e-9);
    }

    #[test]
    fn extra_stopwords_change_the_denominator() {
        let config = Config {
            extra_stopwords: vec!["abc".to_string()],
            ..Config::default()
        };
        let engine = MetricsEngine::from_config(&config);
        let m = engine.compute("ABC reports economy economy growth", &["economy".to_string()]);
        // reports economy economy growth
        assert!((m.keyword_density["economy"] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn score_uses_article_fields() {
        let content = ArticleContent {
            url: "https://abcnews.go.com/x".to_string(),
            body_text: "Jobs jobs jobs report".to_string(),
            meta_title: None,
            meta_description: None,
            meta_keywords: vec!["jobs".to_string()],
        };
        let m = MetricsEngine::default().score(&content);
        assert!((m.keyword_density["jobs"] - 0.75).abs() < 1e-9);
        assert!((m.frequent_terms["jobs"] - 0.75).abs() < 1e-9);
    }
}
