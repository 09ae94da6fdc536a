/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;

use quotescope::errors::{API_KEY_VAR, AppError, ProviderError};

#[test]
fn test_providerError_authenticationError_shouldDisplayStatusAndMessage() {
    let error = ProviderError::AuthenticationError {
        status_code: 401,
        message: "Invalid API key".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("Authentication error"));
    assert!(display.contains("401"));
    assert!(display.contains("Invalid API key"));
}

#[test]
fn test_providerError_timeout_shouldDisplayCorrectly() {
    let error = ProviderError::Timeout("operation timed out".to_string());
    assert!(error.to_string().contains("timed out"));
}

#[test]
fn test_providerError_statusCode_shouldOnlyExistForHttpAnswers() {
    let api = ProviderError::ApiError { status_code: 502, message: "Bad gateway".to_string() };
    let auth = ProviderError::AuthenticationError { status_code: 403, message: String::new() };
    let connection = ProviderError::ConnectionError("refused".to_string());

    assert_eq!(api.status_code(), Some(502));
    assert_eq!(auth.status_code(), Some(403));
    assert_eq!(connection.status_code(), None);
}

#[test]
fn test_appError_missingCredential_shouldGuideTowardsEnvFile() {
    let error = AppError::MissingCredential(API_KEY_VAR.to_string());
    assert!(error.to_string().contains(API_KEY_VAR));

    let guidance = error.guidance();
    assert_eq!(guidance.len(), 3);
    assert!(guidance[0].contains(".env"));
    assert!(guidance[2].starts_with("OPENAI_API_KEY="));
}

#[test]
fn test_appError_documentNotFound_shouldIncludePath() {
    let error = AppError::DocumentNotFound(PathBuf::from("/books/missing.pdf"));
    assert!(error.to_string().contains("/books/missing.pdf"));
    assert!(!error.guidance().is_empty());
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("pipe closed"));
}
