/*!
 * Quote explanation via a chat completion provider.
 *
 * A single attempt is made. Whatever happens, the caller gets an
 * `ExplanationOutcome` back; failures carry a fallback text and the
 * diagnostic lines that were logged for them.
 */

use log::{error, info};

use crate::app_config::ExplanationConfig;
use crate::errors::{API_KEY_VAR, ProviderError};
use crate::providers::Provider;
use crate::providers::openai::{OpenAIRequest, OpenAIResponse};
use crate::quote::Quote;

/// Fallback when the API answered with an error status
pub const API_ERROR_FALLBACK: &str = "Could not generate explanation due to an API error.";

/// Fallback when the request timed out
pub const TIMEOUT_FALLBACK: &str = "Could not generate explanation due to a timeout.";

/// Fallback for any other failure
pub const UNEXPECTED_FALLBACK: &str = "Could not generate explanation due to an unexpected error.";

/// Result of one explanation request
#[derive(Debug, Clone, PartialEq)]
pub enum ExplanationOutcome {
    /// Trimmed text generated by the model
    Explained(String),
    /// The API rejected the credentials (401 or 403)
    AuthFailure { status_code: u16, detail: String },
    /// The request did not complete in time
    Timeout { detail: String },
    /// Any other failure, with the HTTP status when the API answered
    OtherError { status_code: Option<u16>, detail: String },
}

impl ExplanationOutcome {
    /// Classify a provider error
    pub fn from_error(error: &ProviderError) -> Self {
        match error {
            ProviderError::AuthenticationError { status_code, message } => Self::AuthFailure {
                status_code: *status_code,
                detail: message.clone(),
            },
            ProviderError::Timeout(detail) => Self::Timeout {
                detail: detail.clone(),
            },
            other => Self::OtherError {
                status_code: other.status_code(),
                detail: other.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Explained(_))
    }

    /// The explanation, or the fallback text for a failure
    pub fn text(&self) -> &str {
        match self {
            Self::Explained(text) => text.as_str(),
            Self::AuthFailure { .. } | Self::OtherError { status_code: Some(_), .. } => API_ERROR_FALLBACK,
            Self::Timeout { .. } => TIMEOUT_FALLBACK,
            Self::OtherError { status_code: None, .. } => UNEXPECTED_FALLBACK,
        }
    }

    /// Diagnostic lines for a failure; empty on success
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            Self::Explained(_) => Vec::new(),
            Self::AuthFailure { status_code, detail } => {
                let mut lines = vec![format!("OpenAI API Error (Status Code: {}): {}", status_code, detail)];
                if *status_code == 401 {
                    lines.push("This is likely an Authentication Error: your API key is invalid or expired.".to_string());
                    lines.push(format!("Please double-check {} in your environment or .env file.", API_KEY_VAR));
                } else {
                    lines.push("The API key is not allowed to use this model or endpoint.".to_string());
                }
                lines
            }
            Self::Timeout { detail } => vec![
                "OpenAI API Timeout Error: the request took too long to respond.".to_string(),
                detail.clone(),
            ],
            Self::OtherError { status_code: Some(code), detail } => {
                vec![format!("OpenAI API Error (Status Code: {}): {}", code, detail)]
            }
            Self::OtherError { status_code: None, detail } => {
                vec![format!("An unexpected error occurred during the OpenAI call: {}", detail)]
            }
        }
    }
}

/// Sends quotes to a chat completion provider for explanation
#[derive(Debug)]
pub struct ExplanationRequester<P> {
    provider: P,
    settings: ExplanationConfig,
}

impl<P> ExplanationRequester<P>
where
    P: Provider<Request = OpenAIRequest, Response = OpenAIResponse>,
{
    pub fn new(provider: P, settings: ExplanationConfig) -> Self {
        Self { provider, settings }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Build the two-message request for `quote`
    pub fn build_request(&self, quote: &Quote) -> OpenAIRequest {
        let user_message = self.settings.user_prompt.replace("{quote}", quote.as_str());

        OpenAIRequest::new(self.settings.model.clone())
            .add_message("system", self.settings.system_prompt.clone())
            .add_message("user", user_message)
            .temperature(self.settings.temperature)
            .max_tokens(self.settings.max_tokens)
    }

    /// Request an explanation and log the outcome. Never fails: errors become
    /// fallback outcomes.
    pub async fn explain(&self, quote: &Quote) -> ExplanationOutcome {
        let outcome = self.request(quote).await;
        self.report(&outcome);
        outcome
    }

    /// Request an explanation without logging anything
    pub async fn request(&self, quote: &Quote) -> ExplanationOutcome {
        let request = self.build_request(quote);

        match self.provider.complete(request).await {
            Ok(response) => {
                let text = P::extract_text(&response).trim().to_string();
                if text.is_empty() {
                    ExplanationOutcome::OtherError {
                        status_code: None,
                        detail: "the model returned an empty explanation".to_string(),
                    }
                } else {
                    ExplanationOutcome::Explained(text)
                }
            }
            Err(e) => ExplanationOutcome::from_error(&e),
        }
    }

    /// Log a success line, or every diagnostic line of a failure
    pub fn report(&self, outcome: &ExplanationOutcome) {
        if outcome.is_success() {
            info!("Explanation received from {}", self.settings.model);
        } else {
            for line in outcome.diagnostics() {
                error!("{}", line);
            }
        }
    }
}
