use anyhow::{Context, Result, anyhow};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{API_KEY_VAR, AppError};
use crate::file_utils::FileManager;

/// Application configuration module
/// This module handles loading and validating configuration settings.
/// Every field has a serde default, so a partial file is enough.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path of the document quotes are checked against
    #[serde(default = "default_document_path")]
    pub document_path: PathBuf,

    /// Citation printed at the end of a run
    #[serde(default)]
    pub citation: CitationConfig,

    /// Remote explanation settings
    #[serde(default)]
    pub explanation: ExplanationConfig,

    /// Quote input settings
    #[serde(default)]
    pub quote: QuoteConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Work being studied and its citation
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CitationConfig {
    /// Title shown in prompts and above the citation
    #[serde(default = "default_work_title")]
    pub title: String,

    /// MLA citation string
    #[serde(default = "default_mla_citation")]
    pub mla: String,
}

impl Default for CitationConfig {
    fn default() -> Self {
        Self {
            title: default_work_title(),
            mla: default_mla_citation(),
        }
    }
}

/// Chat completion settings for the explanation request
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExplanationConfig {
    /// Model name (e.g., "gpt-3.5-turbo", "gpt-4o-mini")
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL (OpenAI or any compatible server)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key used when the environment does not provide one
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Temperature parameter for text generation (0.0 to 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum number of tokens in the explanation
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Persona given to the model
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// User message template
    /// Placeholders: {quote}
    #[serde(default = "default_user_prompt")]
    pub user_prompt: String,
}

impl Default for ExplanationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            system_prompt: default_system_prompt(),
            user_prompt: default_user_prompt(),
        }
    }
}

/// Quote input settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuoteConfig {
    /// Prompts shown before giving up on empty input
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching filter for the `log` crate
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_document_path() -> PathBuf {
    PathBuf::from("Douglass_Narrative.pdf")
}

fn default_work_title() -> String {
    "Narrative of the Life of Frederick Douglass, an American Slave".to_string()
}

fn default_mla_citation() -> String {
    "Douglass, Frederick. *Narrative of the Life of Frederick Douglass, an American Slave.* \
     Anti-Slavery Office, 1845."
        .to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    300
}

fn default_system_prompt() -> String {
    "You are a helpful literature assistant, specializing in 19th-century American literature. \
     Explain quotes clearly and concisely."
        .to_string()
}

fn default_user_prompt() -> String {
    "Explain this quote from Frederick Douglass's 'Narrative' in simple terms, \
     focusing on its meaning and significance: \"{quote}\""
        .to_string()
}

fn default_max_attempts() -> u32 {
    5
}

impl Config {
    /// Load the configuration file, falling back to defaults when it is missing.
    /// The file is never created.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !FileManager::file_exists(path) {
            warn!("Config file not found at '{}', using defaults.", path.display());
            return Ok(Self::default());
        }

        let content = FileManager::read_to_string(path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let explanation = &self.explanation;

        if explanation.model.trim().is_empty() {
            return Err(anyhow!("Explanation model must not be empty"));
        }
        if !(0.0..=2.0).contains(&explanation.temperature) {
            return Err(anyhow!(
                "Temperature must be between 0.0 and 2.0, got {}",
                explanation.temperature
            ));
        }
        if explanation.max_tokens == 0 {
            return Err(anyhow!("max_tokens must be greater than zero"));
        }
        if explanation.timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be greater than zero"));
        }
        if !explanation.user_prompt.contains("{quote}") {
            return Err(anyhow!("user_prompt must contain the {{quote}} placeholder"));
        }
        if self.quote.max_attempts == 0 {
            return Err(anyhow!("quote.max_attempts must be at least 1"));
        }
        if self.citation.mla.trim().is_empty() {
            return Err(anyhow!("citation.mla must not be empty"));
        }

        Ok(())
    }

    /// Resolve the API key, preferring the environment over the config file.
    ///
    /// `lookup` reads a variable from the environment; it is a parameter so
    /// callers decide where variables come from.
    pub fn resolve_api_key<F>(&self, lookup: F) -> Result<String, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_VAR).filter(|k| !k.trim().is_empty()) {
            return Ok(key.trim().to_string());
        }

        let configured = self.explanation.api_key.trim();
        if !configured.is_empty() {
            return Ok(configured.to_string());
        }

        Err(AppError::MissingCredential(API_KEY_VAR.to_string()))
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            document_path: default_document_path(),
            citation: CitationConfig::default(),
            explanation: ExplanationConfig::default(),
            quote: QuoteConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
