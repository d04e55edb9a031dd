use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::errors::AppError;

// @module: Application configuration
// Loading, validating and saving the TOML configuration file with its
// `[openai]` and `[translation]` sections.

/// File name used when no explicit configuration path is given
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Remote service settings
    #[serde(default)]
    pub openai: OpenAIConfig,

    /// Batching settings
    #[serde(default)]
    pub translation: TranslationConfig,
}

/// OpenAI service configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OpenAIConfig {
    /// API key for the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Chat model name (e.g., "gpt-4o-mini")
    #[serde(default = "default_openai_model")]
    pub model: String,

    /// Service endpoint URL, without the `/chat/completions` suffix
    #[serde(default = "default_openai_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sampling temperature; not sent when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_openai_model(),
            endpoint: default_openai_endpoint(),
            timeout_secs: default_timeout_secs(),
            temperature: None,
        }
    }
}

impl OpenAIConfig {
    /// The stored API key, if present and not blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Translation batching configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TranslationConfig {
    /// Number of subtitle blocks sent per request
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Maximum number of earlier exchanges resent with each request.
    /// Unset means the whole conversation is resent every time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_context_batches: Option<usize>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            max_context_batches: None,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
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
    /// Matching filter for the `log` facade
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_batch_size() -> usize {
    35
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_openai_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::default(),
            openai: OpenAIConfig::default(),
            translation: TranslationConfig::default(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        toml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load the configuration stored at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read {:?}: {}", path, e)))?;

        Self::from_toml_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse {:?}: {}", path, e)))
    }

    /// Write the configuration to `path`, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), AppError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| AppError::Config(format!("Failed to write {:?}: {}", path, e)))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.translation.batch_size == 0 {
            return Err(AppError::Config("translation.batch_size must be at least 1".into()));
        }

        if self.translation.max_context_batches == Some(0) {
            return Err(AppError::Config(
                "translation.max_context_batches must be at least 1 when set".into(),
            ));
        }

        if self.openai.model.trim().is_empty() {
            return Err(AppError::Config("openai.model must not be empty".into()));
        }

        if self.openai.timeout_secs == 0 {
            return Err(AppError::Config("openai.timeout_secs must be at least 1".into()));
        }

        Url::parse(&self.openai.endpoint).map_err(|e| {
            AppError::Config(format!("openai.endpoint {:?} is not a valid URL: {}", self.openai.endpoint, e))
        })?;

        if let Some(temperature) = self.openai.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(AppError::Config(format!(
                    "openai.temperature must be between 0.0 and 2.0, got {}",
                    temperature
                )));
            }
        }

        Ok(())
    }
}

/// Location of the configuration file when none is given on the command line:
/// next to the executable, or the user config directory if that is unknown.
pub fn default_config_path() -> PathBuf {
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        return dir.join(CONFIG_FILE_NAME);
    }

    dirs::config_dir()
        .map(|dir| dir.join("srtlingo").join(CONFIG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}
