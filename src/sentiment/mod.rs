/*!
 * Sentiment analysis for quotes.
 *
 * `LexiconAnalyzer` scores text word by word against a polarity/subjectivity
 * lexicon and averages the hits:
 * - an intensifier ("very", "slightly") scales the next scored word
 * - a negation ("not", "never") multiplies the next scored word's polarity by -0.5
 * - text with no scored words is neutral and objective (0.0, 0.0)
 */

mod lexicon;

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::io::{self, Write};

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("word pattern is valid")
});

/// Polarity above which a quote reads as positive
pub const POSITIVE_THRESHOLD: f64 = 0.3;

/// Polarity below which a quote reads as negative
pub const NEGATIVE_THRESHOLD: f64 = -0.3;

/// Overall tone of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    /// Classify a polarity value. Both thresholds are strict.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Self::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Human-readable interpretation line
    pub fn interpretation(&self) -> &'static str {
        match self {
            Self::Positive => "The quote generally conveys a positive tone.",
            Self::Negative => "The quote generally conveys a negative tone.",
            Self::Neutral => "The quote generally conveys a neutral or mixed tone.",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        };
        f.write_str(name)
    }
}

/// Sentiment of a text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    /// -1.0 (negative) to 1.0 (positive)
    pub polarity: f64,
    /// 0.0 (factual) to 1.0 (opinionated)
    pub subjectivity: f64,
}

impl SentimentScore {
    /// Build a score, clamping both values into their bounds
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    pub fn neutral() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn tone(&self) -> Tone {
        Tone::from_polarity(self.polarity)
    }

    /// Print the report block shown after the explanation
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n  Sentiment Analysis Results:")?;
        writeln!(
            out,
            "- Polarity (Tone): {:.2} (closer to -1 is negative, +1 is positive, 0 is neutral)",
            self.polarity
        )?;
        writeln!(
            out,
            "- Subjectivity: {:.2} (closer to 0 is factual, closer to 1 is opinionated)",
            self.subjectivity
        )?;
        writeln!(out, "  Interpretation: {}", self.tone().interpretation())
    }
}

/// Lexicon-based polarity and subjectivity scorer
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Score `text`
    pub fn analyze(&self, text: &str) -> SentimentScore {
        let lowered = text.to_lowercase().replace('’', "'");

        let mut hits: Vec<(f64, f64)> = Vec::new();
        let mut intensity = 1.0;
        let mut negated = false;

        for token in WORD_PATTERN.find_iter(&lowered) {
            let word = token.as_str();

            if lexicon::NEGATIONS.contains(&word) || word.ends_with("n't") {
                negated = !negated;
                continue;
            }
            if let Some(factor) = lexicon::INTENSIFIERS.get(word) {
                intensity *= factor;
                continue;
            }

            if let Some(&(polarity, subjectivity)) = lexicon::WORDS.get(word) {
                let mut polarity = (polarity * intensity).clamp(-1.0, 1.0);
                if negated {
                    polarity *= -0.5;
                }
                hits.push((polarity, (subjectivity * intensity).clamp(0.0, 1.0)));
            }

            // Modifiers only reach the next word
            intensity = 1.0;
            negated = false;
        }

        if hits.is_empty() {
            return SentimentScore::neutral();
        }

        let count = hits.len() as f64;
        let polarity = hits.iter().map(|(p, _)| p).sum::<f64>() / count;
        let subjectivity = hits.iter().map(|(_, s)| s).sum::<f64>() / count;
        SentimentScore::new(polarity, subjectivity)
    }
}
