/*!
 * Error types for the quotescope application.
 *
 * Provider failures never escape the explanation step; they are converted
 * into an `ExplanationOutcome`. Application errors are fatal and end the run
 * with a diagnostic and some guidance for the user.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Name of the environment variable holding the API key
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The request did not complete within the client timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication (HTTP 401 or 403)
    #[error("Authentication error ({status_code}): {message}")]
    AuthenticationError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },
}

impl ProviderError {
    /// HTTP status code carried by the error, if the API answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status_code, .. } | Self::AuthenticationError { status_code, .. } => {
                Some(*status_code)
            }
            Self::RateLimitExceeded(_) => Some(429),
            _ => None,
        }
    }
}

/// Main application error type. Every variant terminates the run.
#[derive(Error, Debug)]
pub enum AppError {
    /// No API key in the environment, `.env` file or configuration
    #[error("API key missing: {0} is not set")]
    MissingCredential(String),

    /// The document path does not point to a file
    #[error("Document not found at: {}", .0.display())]
    DocumentNotFound(PathBuf),

    /// The document exists but could not be read or parsed
    #[error("Error reading document {}: {}", path.display(), message)]
    DocumentUnreadable {
        /// Path of the document
        path: PathBuf,
        /// Underlying reader or parser error
        message: String,
    },

    /// Standard input was closed before a quote was entered
    #[error("Input closed before a quote was entered")]
    InputClosed,

    /// Every allowed attempt produced an empty quote
    #[error("No quote entered after {attempts} attempt(s)")]
    NoQuoteEntered {
        /// Number of attempts made
        attempts: u32,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a file or console operation
    #[error("File error: {0}")]
    File(String),
}

impl AppError {
    /// Follow-up lines printed after the error itself
    pub fn guidance(&self) -> Vec<String> {
        match self {
            Self::MissingCredential(var) => vec![
                "Please make sure your .env file is correctly set up.".to_string(),
                "It should be in the working directory and contain:".to_string(),
                format!("{}='your_actual_openai_api_key_here'", var),
            ],
            Self::DocumentNotFound(_) => vec![
                "Please ensure the path is correct and the file exists.".to_string(),
            ],
            Self::DocumentUnreadable { .. } => vec![
                "Please ensure the PDF is not corrupted and is readable.".to_string(),
            ],
            Self::InputClosed | Self::NoQuoteEntered { .. } => vec![
                "Run the program again and type a quote at the prompt.".to_string(),
            ],
            Self::Config(_) => vec![
                "Fix the configuration file or remove it to use the defaults.".to_string(),
            ],
            Self::File(_) => Vec::new(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
