/*!
 * # quotescope - a literary quote study aid
 *
 * Loads a book from a PDF, asks for a quote, checks the quote against the
 * book, asks an LLM to explain it, scores its sentiment and prints the
 * book's citation.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration loading, validation and credential lookup
 * - `document`: Page extraction and document text assembly
 * - `quote`: Quote input and the case-insensitive match check
 * - `explanation`: Explanation requests and their fallback outcomes
 * - `providers`: Client implementations for LLM providers:
 *   - `providers::openai`: OpenAI chat completions client
 * - `sentiment`: Lexicon-based polarity and subjectivity scoring
 * - `citation`: Citation of the studied work
 * - `app_controller`: Runs a study session end to end
 * - `file_utils`: File system helpers
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod citation;
pub mod document;
pub mod errors;
pub mod explanation;
pub mod file_utils;
pub mod providers;
pub mod quote;
pub mod sentiment;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary};
pub use document::{DocumentLoader, DocumentText, PageExtractor, PdfExtractor};
pub use errors::{AppError, ProviderError};
pub use explanation::{ExplanationOutcome, ExplanationRequester};
pub use quote::{Quote, QuoteCollector, is_quote_in_text};
pub use sentiment::{LexiconAnalyzer, SentimentScore, Tone};
