use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::citation::Citation;
use crate::document::{DocumentLoader, PageExtractor, PdfExtractor};
use crate::errors::AppError;
use crate::explanation::{ExplanationOutcome, ExplanationRequester};
use crate::providers::Provider;
use crate::providers::openai::{OpenAIRequest, OpenAIResponse};
use crate::quote::{Quote, QuoteCollector, is_quote_in_text};
use crate::sentiment::{LexiconAnalyzer, SentimentScore};

// @module: Application controller for a quote study session

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// The quote that was studied
    pub quote: Quote,
    /// Whether the quote appears verbatim (ignoring case) in the document
    pub quote_found: bool,
    /// Explanation or fallback
    pub explanation: ExplanationOutcome,
    /// Sentiment of the quote
    pub sentiment: SentimentScore,
}

/// Main application controller: runs every stage in order, once
pub struct Controller<P, E = PdfExtractor> {
    // @field: App configuration
    config: Config,
    loader: DocumentLoader<E>,
    collector: QuoteCollector,
    requester: ExplanationRequester<P>,
    analyzer: LexiconAnalyzer,
    citation: Citation,
}

impl<P> Controller<P, PdfExtractor>
where
    P: Provider<Request = OpenAIRequest, Response = OpenAIResponse>,
{
    // @method: Create a controller reading PDF documents
    pub fn with_config(config: Config, provider: P) -> Self {
        Self::with_extractor(config, provider, PdfExtractor)
    }
}

impl<P, E> Controller<P, E>
where
    P: Provider<Request = OpenAIRequest, Response = OpenAIResponse>,
    E: PageExtractor,
{
    // @method: Create a controller with a custom page extractor
    pub fn with_extractor(config: Config, provider: P, extractor: E) -> Self {
        let collector = QuoteCollector::new(config.citation.title.clone(), config.quote.max_attempts);
        let requester = ExplanationRequester::new(provider, config.explanation.clone());
        let citation = Citation::from(&config.citation);

        Self {
            loader: DocumentLoader::new(extractor),
            collector,
            requester,
            analyzer: LexiconAnalyzer::new(),
            citation,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn requester(&self) -> &ExplanationRequester<P> {
        &self.requester
    }

    /// Run the whole session: load, ask, check, explain, analyze, cite.
    ///
    /// Every stage runs regardless of the match result. Only fatal errors
    /// (document, quote input, console output) stop the run.
    pub async fn run<R, W>(&self, input: &mut R, out: &mut W) -> Result<RunSummary, AppError>
    where
        R: BufRead,
        W: Write,
    {
        let start_time = Instant::now();
        let document_path = &self.config.document_path;

        writeln!(out, "Attempting to load text from: {}", document_path.display())?;
        let document = self.loader.load(document_path)?;
        writeln!(out, "✅ PDF text loaded successfully.")?;
        info!("Loaded {} page(s) of text", document.page_count());

        let quote = self.collector.collect(input, out)?;

        let quote_found = is_quote_in_text(quote.as_str(), document.as_str());
        if quote_found {
            writeln!(out, "\n✅ Quote found in the loaded PDF text (case-insensitive match).")?;
        } else {
            warn!("Quote not found verbatim in {}", document_path.display());
            writeln!(out, "\n⚠️ Warning: The exact quote was not found in the PDF.")?;
            writeln!(out, "   This might be due to typos, variations, or the quote not being in the document.")?;
        }

        writeln!(out, "\n--- OpenAI Explanation ---")?;
        writeln!(out, "🔍 Generating explanation via OpenAI (this might take a moment)...")?;
        out.flush()?;
        let explanation = self.explain_with_spinner(&quote).await;
        writeln!(out, "\n--- OpenAI Explanation Result ---")?;
        writeln!(out, "{}", explanation.text())?;

        writeln!(out, "\n--- NLP Diagnostics ---")?;
        writeln!(out, " Running NLP diagnostics...")?;
        let sentiment = self.analyzer.analyze(quote.as_str());
        sentiment.write_report(out)?;

        self.citation.write_to(out)?;
        writeln!(out, "\n--- Program Finished ---")?;
        out.flush()?;

        debug!("Session finished in {:.2?}", start_time.elapsed());

        Ok(RunSummary {
            quote,
            quote_found,
            explanation,
            sentiment,
        })
    }

    async fn explain_with_spinner(&self, quote: &Quote) -> ExplanationOutcome {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Waiting for {}", self.config.explanation.model));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let outcome = self.requester.request(quote).await;

        // Diagnostics go to stderr only once the spinner line is gone
        spinner.finish_and_clear();
        self.requester.report(&outcome);
        outcome
    }
}
