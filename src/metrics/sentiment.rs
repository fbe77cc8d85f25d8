//! Lexicon-based sentiment scorer.
//!
//! Each lexicon word carries a polarity in `[-1.0, 1.0]` and a subjectivity in
//! `[0.0, 1.0]`. An intensifier directly before a word scales both values; a
//! negator directly before it (or before its intensifier) multiplies polarity
//! by `-0.5`. The article score is the mean over every matched word.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Word → (polarity, subjectivity).
const LEXICON: &[(&str, f64, f64)] = &[
    // Positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("positive", 0.23, 0.55),
    ("strong", 0.43, 0.73),
    ("success", 0.3, 0.2),
    ("successful", 0.75, 0.95),
    ("win", 0.8, 0.4),
    ("wins", 0.8, 0.4),
    ("won", 0.8, 0.4),
    ("gain", 0.3, 0.4),
    ("gains", 0.3, 0.4),
    ("growth", 0.2, 0.3),
    ("improve", 0.4, 0.5),
    ("improved", 0.4, 0.5),
    ("record", 0.1, 0.2),
    ("happy", 0.8, 1.0),
    ("hope", 0.3, 0.5),
    ("hopeful", 0.5, 0.6),
    ("optimistic", 0.6, 0.7),
    ("safe", 0.5, 0.5),
    ("support", 0.2, 0.3),
    ("agreement", 0.2, 0.3),
    ("innovative", 0.5, 0.8),
    ("popular", 0.6, 0.8),
    ("important", 0.4, 1.0),
    ("significant", 0.38, 0.88),
    ("new", 0.14, 0.45),
    ("free", 0.4, 0.8),
    ("easy", 0.43, 0.83),
    ("clear", 0.1, 0.38),
    ("nice", 0.6, 1.0),
    ("wonderful", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("love", 0.5, 0.6),
    ("boost", 0.3, 0.4),
    ("rally", 0.3, 0.4),
    ("surge", 0.2, 0.5),
    ("recovery", 0.3, 0.4),
    ("stable", 0.2, 0.4),
    // Negative
    ("bad", -0.7, 0.67),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("negative", -0.3, 0.4),
    ("weak", -0.38, 0.63),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("failure", -0.5, 0.4),
    ("loss", -0.3, 0.3),
    ("losses", -0.3, 0.3),
    ("lose", -0.4, 0.3),
    ("crisis", -0.5, 0.5),
    ("decline", -0.3, 0.3),
    ("fall", -0.2, 0.3),
    ("fell", -0.2, 0.3),
    ("drop", -0.2, 0.3),
    ("risk", -0.2, 0.4),
    ("fear", -0.5, 0.6),
    ("fears", -0.5, 0.6),
    ("concern", -0.3, 0.5),
    ("concerns", -0.3, 0.5),
    ("threat", -0.5, 0.5),
    ("attack", -0.6, 0.4),
    ("violence", -0.7, 0.5),
    ("dead", -0.2, 0.4),
    ("death", -0.5, 0.4),
    ("killed", -0.2, 0.0),
    ("angry", -0.5, 1.0),
    ("sad", -0.5, 1.0),
    ("wrong", -0.5, 0.9),
    ("difficult", -0.5, 1.0),
    ("hard", -0.29, 0.54),
    ("dangerous", -0.6, 0.9),
    ("illegal", -0.5, 0.5),
    ("scandal", -0.6, 0.6),
    ("controversial", -0.2, 0.7),
    ("recession", -0.5, 0.4),
    ("slump", -0.4, 0.4),
    ("uncertain", -0.2, 0.6),
    ("uncertainty", -0.2, 0.6),
    ("chaos", -0.6, 0.7),
];

/// Word → multiplier applied to the next lexicon word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.4),
    ("particularly", 1.2),
    ("especially", 1.2),
    ("remarkably", 1.3),
    ("deeply", 1.3),
    ("quite", 1.1),
];

const NEGATORS: &[&str] = &["not", "no", "never", "nor", "neither", "without", "cannot"];

const NEGATION_FACTOR: f64 = -0.5;

static LEXICON_MAP: Lazy<HashMap<&'static str, (f64, f64)>> =
    Lazy::new(|| LEXICON.iter().map(|&(w, p, s)| (w, (p, s))).collect());

static INTENSIFIER_MAP: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| INTENSIFIERS.iter().copied().collect());

/// Polarity and subjectivity of a text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Sentiment {
    pub const NEUTRAL: Sentiment = Sentiment {
        polarity: 0.0,
        subjectivity: 0.0,
    };
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Score `text`. Returns [`Sentiment::NEUTRAL`] when no lexicon word occurs.
pub fn score(text: &str) -> Sentiment {
    let mut hits: Vec<(f64, f64)> = Vec::new();
    let mut negated = false;
    let mut intensity = 1.0_f64;

    for raw in text.split_whitespace() {
        let clause_ends = raw
            .trim_end_matches(['"', '\'', '\u{201D}', '\u{2019}', ')'])
            .ends_with(['.', '!', '?', ';', ',', ':']);
        let word = raw
            .replace('\u{2019}', "'")
            .trim_matches(|c: char| !c.is_alphabetic() && c != '\'')
            .trim_matches('\'')
            .to_lowercase();

        if is_negator(&word) {
            negated = !clause_ends;
            intensity = 1.0;
            continue;
        }
        if let Some(&factor) = INTENSIFIER_MAP.get(word.as_str()) {
            if clause_ends {
                negated = false;
                intensity = 1.0;
            } else {
                intensity *= factor;
            }
            continue;
        }
        if let Some(&(polarity, subjectivity)) = LEXICON_MAP.get(word.as_str()) {
            let mut p = (polarity * intensity).clamp(-1.0, 1.0);
            let s = (subjectivity * intensity).clamp(0.0, 1.0);
            if negated {
                p *= NEGATION_FACTOR;
            }
            hits.push((p, s));
        }
        negated = false;
        intensity = 1.0;
    }

    if hits.is_empty() {
        return Sentiment::NEUTRAL;
    }
    let n = hits.len() as f64;
    let polarity = hits.iter().map(|(p, _)| p).sum::<f64>() / n;
    let subjectivity = hits.iter().map(|(_, s)| s).sum::<f64>() / n;
    Sentiment {
        polarity: round3(polarity.clamp(-1.0, 1.0)),
        subjectivity: round3(subjectivity.clamp(0.0, 1.0)),
    }
}
