/*!
 * End-to-end tests for a full study session
 */

use anyhow::Result;
use std::io::Cursor;

use quotescope::app_config::Config;
use quotescope::app_controller::{Controller, RunSummary};
use quotescope::errors::AppError;
use quotescope::explanation::{API_ERROR_FALLBACK, ExplanationOutcome, TIMEOUT_FALLBACK};
use crate::common::{self, FormFeedExtractor};
use crate::common::mock_providers::{MockErrorType, MockOpenAI};

const MLA: &str = "Douglass, Frederick. *Narrative of the Life of Frederick Douglass, an American Slave.* Anti-Slavery Office, 1845.";

async fn run_session(
    config: Config,
    provider: MockOpenAI,
    input: &str,
) -> (Result<RunSummary, AppError>, String, usize) {
    let controller = Controller::with_extractor(config, provider, FormFeedExtractor);
    let mut reader = Cursor::new(input.as_bytes().to_vec());
    let mut output = Vec::new();

    let result = controller.run(&mut reader, &mut output).await;
    let calls = controller.requester().provider().call_count();
    (result, String::from_utf8(output).unwrap(), calls)
}

#[tokio::test]
async fn test_run_withQuoteInDocument_shouldCompleteEveryStage() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let book = common::create_test_file(temp_dir.path(), "narrative.txt", common::SAMPLE_BOOK)?;

    let (result, output, calls) = run_session(
        common::config_for(&book),
        MockOpenAI::replying("  Douglass describes escaping by his own effort.  "),
        "\n   \ni PRAYED for freedom for twenty years\n",
    ).await;
    let summary = result?;

    assert_eq!(summary.quote.as_str(), "i PRAYED for freedom for twenty years");
    assert!(summary.quote_found);
    assert_eq!(
        summary.explanation,
        ExplanationOutcome::Explained("Douglass describes escaping by his own effort.".to_string())
    );
    assert!((-1.0..=1.0).contains(&summary.sentiment.polarity));
    assert!((0.0..=1.0).contains(&summary.sentiment.subjectivity));
    assert_eq!(calls, 1);

    assert!(output.contains("PDF text loaded successfully"));
    assert_eq!(output.matches("No quote entered").count(), 2);
    assert!(output.contains("Quote found in the loaded PDF text"));
    assert!(output.contains("Douglass describes escaping by his own effort."));
    assert!(output.contains("Polarity (Tone):"));
    assert!(output.contains(MLA));
    assert!(output.trim_end().ends_with("--- Program Finished ---"));
    Ok(())
}

#[tokio::test]
async fn test_run_withQuoteMissingFromDocument_shouldWarnAndStillExplain() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let book = common::create_test_file(temp_dir.path(), "narrative.txt", common::SAMPLE_BOOK)?;

    let (result, output, calls) = run_session(
        common::config_for(&book),
        MockOpenAI::replying("An explanation."),
        "Call me Ishmael.\n",
    ).await;
    let summary = result?;

    assert!(!summary.quote_found);
    assert!(summary.explanation.is_success());
    assert_eq!(calls, 1);
    assert!(output.contains("Warning: The exact quote was not found in the PDF."));
    assert!(output.contains(MLA));
    Ok(())
}

#[tokio::test]
async fn test_run_withAuthFailure_shouldPrintFallbackAndFinish() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let book = common::create_test_file(temp_dir.path(), "narrative.txt", common::SAMPLE_BOOK)?;

    let (result, output, _) = run_session(
        common::config_for(&book),
        MockOpenAI::failing(MockErrorType::Auth),
        "a slave was made a man\n",
    ).await;
    let summary = result?;

    assert!(summary.quote_found);
    assert_eq!(summary.explanation.text(), API_ERROR_FALLBACK);
    assert!(output.contains(&format!("--- OpenAI Explanation Result ---\n{}\n", API_ERROR_FALLBACK)));
    assert!(output.contains("--- Program Finished ---"));
    Ok(())
}

#[tokio::test]
async fn test_run_withTimeout_shouldPrintTimeoutFallback() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let book = common::create_test_file(temp_dir.path(), "narrative.txt", common::SAMPLE_BOOK)?;

    let (result, output, _) = run_session(
        common::config_for(&book),
        MockOpenAI::failing(MockErrorType::Timeout),
        "a slave was made a man\n",
    ).await;

    assert_eq!(result?.explanation.text(), TIMEOUT_FALLBACK);
    assert!(output.contains(TIMEOUT_FALLBACK));
    Ok(())
}

#[tokio::test]
async fn test_run_withMissingDocument_shouldStopBeforeAskingForQuote() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("missing.pdf");

    let (result, output, calls) = run_session(
        common::config_for(&missing),
        MockOpenAI::replying("unused"),
        "a slave was made a man\n",
    ).await;

    assert!(matches!(result, Err(AppError::DocumentNotFound(_))));
    assert!(!output.contains("Quote Input"));
    assert_eq!(calls, 0);
    Ok(())
}

#[tokio::test]
async fn test_run_withClosedInput_shouldFailWithoutCallingProvider() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let book = common::create_test_file(temp_dir.path(), "narrative.txt", common::SAMPLE_BOOK)?;

    let (result, _, calls) = run_session(common::config_for(&book), MockOpenAI::replying("unused"), "").await;

    assert!(matches!(result, Err(AppError::InputClosed)));
    assert_eq!(calls, 0);
    Ok(())
}

#[tokio::test]
async fn test_run_withCustomCitation_shouldPrintItVerbatim() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let book = common::create_test_file(temp_dir.path(), "narrative.txt", common::SAMPLE_BOOK)?;
    let mut config = common::config_for(&book);
    config.citation.title = "My Bondage and My Freedom".to_string();
    config.citation.mla = "Douglass, Frederick. *My Bondage and My Freedom.* Miller, Orton & Mulligan, 1855.".to_string();

    let (result, output, _) = run_session(config, MockOpenAI::replying("ok"), "freedom\n").await;
    result?;

    assert!(output.contains("Please enter a quote from 'My Bondage and My Freedom'"));
    assert!(output.contains("Douglass, Frederick. *My Bondage and My Freedom.* Miller, Orton & Mulligan, 1855."));
    Ok(())
}
