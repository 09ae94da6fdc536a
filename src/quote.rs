/*!
 * Quote input and matching.
 *
 * - `Quote`: a trimmed, non-empty quote. The only constructor enforces both.
 * - `QuoteCollector`: prompts until a non-empty line is entered, up to a
 *   bounded number of attempts.
 * - `is_quote_in_text`: case-insensitive substring check against a document.
 */

use log::debug;
use std::fmt;
use std::io::{BufRead, Write};

use crate::errors::AppError;

/// A user-supplied quote, trimmed and never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote(String);

impl Quote {
    /// Trim `raw`; returns `None` when nothing is left
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Quote {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Case-insensitive substring check. No punctuation or whitespace
/// normalization is done, so reformatted quotes will not match.
pub fn is_quote_in_text(quote: &str, text: &str) -> bool {
    text.to_lowercase().contains(&quote.to_lowercase())
}

/// Reads a quote from an interactive source
#[derive(Debug, Clone)]
pub struct QuoteCollector {
    work_title: String,
    max_attempts: u32,
}

impl QuoteCollector {
    /// Create a collector. `max_attempts` is raised to 1 if zero.
    pub fn new(work_title: impl Into<String>, max_attempts: u32) -> Self {
        Self {
            work_title: work_title.into(),
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Prompt on `output` and read lines from `input` until a non-empty quote
    /// is entered.
    ///
    /// Fails with `InputClosed` at end of input and with `NoQuoteEntered`
    /// once every attempt came back empty.
    pub fn collect<R, W>(&self, input: &mut R, output: &mut W) -> Result<Quote, AppError>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "\n--- Quote Input ---")?;
        writeln!(output, "📜 Please enter a quote from '{}':", self.work_title)?;

        for attempt in 1..=self.max_attempts {
            write!(output, ">>> ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(AppError::InputClosed);
            }

            if let Some(quote) = Quote::new(&line) {
                debug!("Quote accepted on attempt {}", attempt);
                return Ok(quote);
            }

            writeln!(output, "⚠️ No quote entered. Please try again.")?;
        }

        Err(AppError::NoQuoteEntered {
            attempts: self.max_attempts,
        })
    }
}
