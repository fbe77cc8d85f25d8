//! Flesch Reading Ease and Flesch-Kincaid Grade.
//!
//! Counting heuristics:
//! - words: whitespace-separated tokens containing a letter or digit
//! - sentences: text segments ended by `.`, `!` or `?` (plus any closing
//!   quotes or brackets) followed by whitespace or end of text that contain a
//!   word; unterminated text is one sentence
//! - syllables: vowel groups (`aeiouy`) per word, dropping a silent final `e`,
//!   minimum one per word

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]+["'\u{201D}\u{2019})\]]*(?:\s+|$)"#).unwrap());
static VOWEL_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readability {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
}

impl Readability {
    /// Reported when the text has no words or no sentences.
    pub const EMPTY: Readability = Readability {
        flesch_reading_ease: 0.0,
        flesch_kincaid_grade: 0.0,
    };
}

fn is_word(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}

/// Syllables in one word.
pub fn syllables(word: &str) -> usize {
    let letters: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    let mut count = VOWEL_GROUP.find_iter(&letters).count();
    if count > 1
        && letters.ends_with('e')
        && !letters.ends_with("le")
        && !letters.ends_with("ee")
    {
        count -= 1;
    }
    count.max(1)
}

pub fn text_stats(text: &str) -> TextStats {
    let words: Vec<&str> = text.split_whitespace().filter(|t| is_word(t)).collect();
    if words.is_empty() {
        return TextStats::default();
    }
    let sentences = SENTENCE_END
        .split(text)
        .filter(|segment| segment.split_whitespace().any(is_word))
        .count();
    TextStats {
        words: words.len(),
        sentences,
        syllables: words.iter().map(|w| syllables(w)).sum(),
    }
}

pub fn flesch_reading_ease(stats: TextStats) -> f64 {
    if stats.words == 0 || stats.sentences == 0 {
        return 0.0;
    }
    let wps = stats.words as f64 / stats.sentences as f64;
    let spw = stats.syllables as f64 / stats.words as f64;
    206.835 - 1.015 * wps - 84.6 * spw
}

pub fn flesch_kincaid_grade(stats: TextStats) -> f64 {
    if stats.words == 0 || stats.sentences == 0 {
        return 0.0;
    }
    let wps = stats.words as f64 / stats.sentences as f64;
    let spw = stats.syllables as f64 / stats.words as f64;
    0.39 * wps + 11.8 * spw - 15.59
}

/// Both Flesch scores for `text`, or [`Readability::EMPTY`] for wordless text.
pub fn readability(text: &str) -> Readability {
    let stats = text_stats(text);
    if stats.words == 0 || stats.sentences == 0 {
        return Readability::EMPTY;
    }
    Readability {
        flesch_reading_ease: flesch_reading_ease(stats),
        flesch_kincaid_grade: flesch_kincaid_grade(stats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllable_heuristic() {
        assert_eq!(syllables("good"), 1);
        assert_eq!(syllables("today"), 2);
        assert_eq!(syllables("results."), 2);
        assert_eq!(syllables("make"), 1);
        assert_eq!(syllables("people"), 2);
        assert_eq!(syllables("agree"), 2);
        assert_eq!(syllables("the"), 1);
        assert_eq!(syllables("rhythm"), 1);
        assert_eq!(syllables("2025"), 1);
        assert_eq!(syllables("Economy"), 4);
    }

    #[test]
    fn counts_words_sentences_syllables() {
        let stats = text_stats("Good news today. Great results.");
        assert_eq!(
            stats,
            TextStats {
                words: 5,
                sentences: 2,
                syllables: 7,
            }
        );
    }

    #[test]
    fn decimal_points_do_not_split_sentences() {
        let stats = text_stats("Rates rose 3.5 percent! Markets fell?");
        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.words, 6);
    }

    #[test]
    fn closing_quotes_and_brackets_end_sentences() {
        for text in [
            "\u{201C}We will win.\u{201D} Markets rallied.",
            "\"We will win.\" Markets rallied.",
            "'We will win.' Markets rallied.",
            "Prices rose (again.) Markets rallied.",
        ] {
            let stats = text_stats(text);
            assert_eq!(stats.sentences, 2, "{text}");
            assert_eq!(stats.words, 5, "{text}");
        }
    }

    #[test]
    fn unterminated_text_is_one_sentence() {
        assert_eq!(text_stats("breaking news from the capitol").sentences, 1);
    }

    #[test]
    fn reference_scores() {
        // W=5, S=2, Sy=7
        // FRE = 206.835 - 1.015*2.5 - 84.6*1.4 = 85.8575
        // FKG = 0.39*2.5 + 11.8*1.4 - 15.59 = 1.905
        let r = readability("Good news today. Great results.");
        assert!((r.flesch_reading_ease - 85.8575).abs() < 0.01);
        assert!((r.flesch_kincaid_grade - 1.905).abs() < 0.01);
    }

    #[test]
    fn empty_and_punctuation_only_text_is_sentinel() {
        assert_eq!(readability(""), Readability::EMPTY);
        assert_eq!(readability("... !!! ?"), Readability::EMPTY);
    }

    #[test]
    fn formulas_guard_zero_counts() {
        let stats = TextStats {
            words: 4,
            sentences: 0,
            syllables: 6,
        };
        assert_eq!(flesch_reading_ease(stats), 0.0);
        assert_eq!(flesch_kincaid_grade(stats), 0.0);
    }
}
