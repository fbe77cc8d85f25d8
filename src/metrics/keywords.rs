//! Keyword density and frequent-term extraction.
//!
//! Both work on the same token stream: lowercase alphabetic runs with
//! stopwords removed. Densities are `count / tokens` in `[0.0, 1.0]`.

use super::stopwords::StopWords;
use itertools::Itertools;
use std::collections::BTreeMap;

/// Split on every non-alphabetic character, lowercase, and drop stopwords.
pub fn tokenize(text: &str, stopwords: &StopWords) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .filter(|t| !stopwords.contains(t))
        .collect()
}

/// Occurrences of `needle` as a contiguous token run in `haystack`.
fn count_phrase(haystack: &[String], needle: &[String]) -> usize {
    match needle.len() {
        0 => 0,
        1 => haystack.iter().filter(|t| **t == needle[0]).count(),
        n => haystack.windows(n).filter(|w| *w == needle).count(),
    }
}

/// Density of each meta keyword in `tokens`.
///
/// Keywords are tokenized like the body, so `"Labor Market"` matches the
/// token pair `labor market`. Keywords that reduce to nothing (all stopwords)
/// or are absent from the body get `0.0`, as does every keyword when the body
/// has no tokens.
pub fn keyword_density(
    tokens: &[String],
    keywords: &[String],
    stopwords: &StopWords,
) -> BTreeMap<String, f64> {
    keywords
        .iter()
        .map(|kw| kw.trim().to_lowercase())
        .filter(|kw| !kw.is_empty())
        .map(|kw| {
            let density = if tokens.is_empty() {
                0.0
            } else {
                let needle = tokenize(&kw, stopwords);
                count_phrase(tokens, &needle) as f64 / tokens.len() as f64
            };
            (kw, density)
        })
        .collect()
}

/// Terms occurring at least `min_count` times, with their density.
pub fn frequent_terms(tokens: &[String], min_count: usize) -> BTreeMap<String, f64> {
    if tokens.is_empty() {
        return BTreeMap::new();
    }
    let total = tokens.len() as f64;
    tokens
        .iter()
        .counts()
        .into_iter()
        .filter(|(_, count)| *count >= min_count)
        .map(|(term, count)| (term.clone(), count as f64 / total))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sw() -> StopWords {
        StopWords::english()
    }

    #[test]
    fn tokenize_lowercases_and_drops_stopwords() {
        let tokens = tokenize("The Economy, and the JOBS-report don't lie!", &sw());
        assert_eq!(tokens, vec!["economy", "jobs", "report", "lie"]);
    }

    #[test]
    fn density_is_count_over_filtered_tokens() {
        // 20 non-stopword tokens, "economy" twice.
        let body = "Economy growth slowed while inflation cooled. \
                    Analysts expect economy rebound next quarter despite tariffs, \
                    weak exports, falling consumer confidence, rising unemployment.";
        let tokens = tokenize(body, &sw());
        assert_eq!(tokens.len(), 20);
        let density = keyword_density(&tokens, &["economy".to_string()], &sw());
        assert!((density["economy"] - 0.10).abs() < 1e-9);
    }

    #[test]
    fn density_is_case_insensitive_and_keyed_lowercase() {
        let tokens = tokenize("Tech stocks rallied. tech giants led.", &sw());
        let density = keyword_density(&tokens, &["TECH".to_string()], &sw());
        assert_eq!(density.len(), 1);
        assert!((density["tech"] - 2.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn absent_keyword_has_zero_density() {
        let tokens = tokenize("Senate passes budget", &sw());
        let density = keyword_density(&tokens, &["election".to_string()], &sw());
        assert_eq!(density["election"], 0.0);
    }

    #[test]
    fn multi_word_keyword_matches_token_runs() {
        let tokens = tokenize(
            "The labor market cooled. Labor costs rose; the labor market held.",
            &sw(),
        );
        // labor market cooled labor costs rose labor market held
        assert_eq!(tokens.len(), 9);
        let density = keyword_density(&tokens, &["Labor Market".to_string()], &sw());
        assert!((density["labor market"] - 2.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn empty_body_gives_zero_for_every_keyword() {
        let density = keyword_density(&[], &["economy".to_string(), "jobs".to_string()], &sw());
        assert_eq!(density.len(), 2);
        assert!(density.values().all(|d| *d == 0.0));
    }

    #[test]
    fn stopword_only_keyword_is_zero() {
        let tokens = tokenize("Markets opened higher", &sw());
        let density = keyword_density(&tokens, &["the".to_string()], &sw());
        assert_eq!(density["the"], 0.0);
    }

    #[test]
    fn frequent_terms_respects_min_count() {
        let tokens = tokenize(
            "vote vote vote senate senate budget vote",
            &sw(),
        );
        let terms = frequent_terms(&tokens, 3);
        assert_eq!(terms.len(), 1);
        assert!((terms["vote"] - 4.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn frequent_terms_empty_for_empty_tokens() {
        assert!(frequent_terms(&[], 1).is_empty());
    }
}
