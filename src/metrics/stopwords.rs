//! English stopword set used before keyword counting.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// NLTK's English list, minus the apostrophe forms the tokenizer never emits.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren",
    "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn",
    "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

static ENGLISH_SET: Lazy<HashSet<String>> =
    Lazy::new(|| ENGLISH.iter().map(|w| (*w).to_string()).collect());

/// A lowercase stopword set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords(HashSet<String>);

impl StopWords {
    pub fn english() -> Self {
        Self(ENGLISH_SET.clone())
    }

    /// The English set plus `extra` (lowercased, blanks ignored).
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = ENGLISH_SET.clone();
        set.extend(
            extra
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        Self(set)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}
