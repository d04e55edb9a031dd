/*!
 * Integration tests for the configuration, credential and controller lifecycle
 */

use anyhow::Result;
use std::fs;
use std::net::TcpListener;

use srtlingo::app_config::Config;
use srtlingo::app_controller::Controller;
use srtlingo::credentials::{KeyPrompt, resolve_api_key};
use srtlingo::errors::{AppError, TranslationError};
use crate::common;
use crate::common::mock_providers::MockOpenAI;

struct FixedPrompt(&'static str);

impl KeyPrompt for FixedPrompt {
    fn prompt_api_key(&self) -> Result<String, AppError> {
        Ok(self.0.to_string())
    }
}

/// First run creates the config; its settings then drive the controller
#[tokio::test]
async fn test_firstRun_shouldCreateConfigAndTranslate() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("config.toml");
    let input = common::create_numbered_subtitle(temp_dir.path(), "pilot.srt", 40)?;

    let api_key = resolve_api_key(&config_path, &FixedPrompt("sk-lifecycle"))?;
    assert_eq!(api_key, "sk-lifecycle");

    let config = Config::from_file(&config_path)?;
    config.validate()?;
    let controller = Controller::with_config(config).without_progress();
    assert_eq!(controller.translation_options().batch_size, 35);

    let provider = MockOpenAI::echo();
    let tracker = provider.tracker();
    let report = controller.run_with_provider(provider, &input, "Spanish").await?;

    assert_eq!(tracker.lock().unwrap().call_count, 2);
    assert_eq!(report.output_path, temp_dir.path().join("pilot.Spanish.srt"));
    Ok(())
}

/// Edited settings in the config file reach the requests
#[tokio::test]
async fn test_configuredModelAndBatchSize_shouldShapeRequests() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(
        temp_dir.path(),
        "config.toml",
        "[openai]\napi_key = \"sk-x\"\nmodel = \"gpt-4o\"\n\n[translation]\nbatch_size = 4\n",
    )?;
    let input = common::create_numbered_subtitle(temp_dir.path(), "pilot.srt", 9)?;

    let controller = Controller::with_config(Config::from_file(&config_path)?).without_progress();
    let provider = MockOpenAI::echo();
    let tracker = provider.tracker();
    controller.run_with_provider(provider, &input, "Dutch").await?;

    let tracker = tracker.lock().unwrap();
    assert_eq!(tracker.call_count, 3);
    assert!(tracker.requests.iter().all(|r| r.model() == "gpt-4o"));
    Ok(())
}

/// The OpenAI client honours the configured endpoint
#[test]
fn test_openaiProvider_shouldUseConfiguredEndpoint() -> Result<()> {
    let mut config = Config::default();
    config.openai.endpoint = "http://localhost:1234/v1".to_string();

    let provider = Controller::with_config(config).openai_provider("sk-test")?;

    assert_eq!(provider.completions_url(), "http://localhost:1234/v1/chat/completions");
    Ok(())
}

/// An unreachable endpoint fails the first batch and leaves an empty output
#[tokio::test]
async fn test_run_withUnreachableEndpoint_shouldFailFirstBatch() -> Result<()> {
    // Reserve a free port, then close it so connections are refused
    let port = TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();

    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "original.srt", common::TWO_BLOCK_SRT)?;
    let mut config = Config::default();
    config.openai.endpoint = format!("http://127.0.0.1:{}/v1", port);
    config.openai.timeout_secs = 5;

    let result = Controller::with_config(config)
        .without_progress()
        .run(&input, "French", "sk-test")
        .await;

    match result {
        Err(AppError::Translation(TranslationError::RemoteRequestFailure { batch_number, total_batches, .. })) => {
            assert_eq!(batch_number, 1);
            assert_eq!(total_batches, 1);
        }
        other => panic!("expected failure on batch 1, got {:?}", other),
    }

    let output = temp_dir.path().join("original.French.srt");
    assert_eq!(fs::read_to_string(output)?, "");
    Ok(())
}
