/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;
use srtlingo::errors::{AppError, ProviderError, SubtitleError, TranslationError};

#[test]
fn test_providerError_fromStatus_shouldMapStatusCodes() {
    assert!(matches!(
        ProviderError::from_status(401, "bad key"),
        ProviderError::AuthenticationError(_)
    ));
    assert!(matches!(
        ProviderError::from_status(403, "forbidden"),
        ProviderError::AuthenticationError(_)
    ));
    assert!(matches!(
        ProviderError::from_status(429, "slow down"),
        ProviderError::RateLimitExceeded(_)
    ));
    assert!(matches!(
        ProviderError::from_status(500, "boom"),
        ProviderError::ApiError { status_code: 500, .. }
    ));
}

#[test]
fn test_providerError_apiError_shouldDisplayStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 502,
        message: "Bad gateway".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("502"));
    assert!(display.contains("Bad gateway"));
}

#[test]
fn test_providerError_timeout_shouldMentionSeconds() {
    let display = ProviderError::Timeout(30).to_string();
    assert!(display.contains("timed out"));
    assert!(display.contains("30s"));
}

#[test]
fn test_translationError_remoteRequestFailure_shouldReportBatchNumber() {
    let error = TranslationError::RemoteRequestFailure {
        batch_number: 2,
        total_batches: 3,
        source: ProviderError::ConnectionError("Host unreachable".to_string()),
    };

    assert_eq!(error.batch_number(), 2);
    let display = error.to_string();
    assert!(display.contains("batch 2 of 3"));
    assert!(display.contains("Host unreachable"));
}

#[test]
fn test_appError_fromSubtitleError_shouldBeInvalidInput() {
    let error: AppError = SubtitleError::UnsupportedExtension(PathBuf::from("movie.txt")).into();

    assert!(matches!(error, AppError::InvalidInput(_)));
    assert!(error.to_string().contains("movie.txt"));
}

#[test]
fn test_appError_fromTranslationError_shouldKeepBatchMessage() {
    let error: AppError = TranslationError::Output {
        batch_number: 4,
        message: "disk full".to_string(),
    }
    .into();

    let display = error.to_string();
    assert!(display.contains("batch 4"));
    assert!(display.contains("disk full"));
}

#[test]
fn test_appError_fromIoError_shouldBeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error: AppError = io_error.into();
    assert!(matches!(error, AppError::File(_)));
}
