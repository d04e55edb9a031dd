/*!
 * Error types for the srtlingo application.
 *
 * This module contains custom error types for the different stages of a run,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when talking to a provider API
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

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),
}

impl ProviderError {
    /// Map a non-success HTTP status and its body to a provider error
    pub fn from_status(status_code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status_code {
            401 | 403 => Self::AuthenticationError(message),
            429 => Self::RateLimitExceeded(message),
            _ => Self::ApiError { status_code, message },
        }
    }
}

/// Errors that can occur while loading a subtitle file
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// Nothing exists at the given path
    #[error("Subtitle file not found: {0:?}")]
    NotFound(PathBuf),

    /// The path exists but is a directory or another non-file entry
    #[error("Not a regular file: {0:?}")]
    NotAFile(PathBuf),

    /// The file does not carry the `.srt` extension
    #[error("Not an .srt file: {0:?}")]
    UnsupportedExtension(PathBuf),

    /// The file could not be read
    #[error("Failed to read {path:?}: {message}")]
    Unreadable {
        /// Path of the subtitle file
        path: PathBuf,
        /// Underlying I/O error message
        message: String,
    },

    /// The file is not valid UTF-8
    #[error("Subtitle file is not valid UTF-8: {0:?}")]
    InvalidEncoding(PathBuf),
}

/// Errors that can occur during batch translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// A batch request failed; later batches were not attempted
    #[error("Error translating batch {batch_number} of {total_batches}: {source}")]
    RemoteRequestFailure {
        /// 1-based number of the failing batch
        batch_number: usize,
        /// Number of batches in the run
        total_batches: usize,
        /// Underlying provider error
        #[source]
        source: ProviderError,
    },

    /// A translated batch could not be written to the output
    #[error("Failed to write batch {batch_number} to output: {message}")]
    Output {
        /// 1-based number of the batch being written
        batch_number: usize,
        /// Underlying I/O error message
        message: String,
    },
}

impl TranslationError {
    /// 1-based number of the batch the run stopped at
    pub fn batch_number(&self) -> usize {
        match self {
            Self::RemoteRequestFailure { batch_number, .. } => *batch_number,
            Self::Output { batch_number, .. } => *batch_number,
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad input file or unusable argument; raised before any output exists
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] SubtitleError),

    /// Bad command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The configuration file exists but holds no API key
    #[error("API key not found in {path:?} (expected `api_key` under [openai])")]
    MissingCredential {
        /// Path of the configuration file
        path: PathBuf,
    },

    /// Unreadable or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider outside of a batch, e.g. while building the client
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from translation
    #[error(transparent)]
    Translation(#[from] TranslationError),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
