use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app_config::Config;
use crate::errors::{AppError, ProviderError};
use crate::file_utils::FileManager;
use crate::output_writer;
use crate::providers::Provider;
use crate::providers::openai::{OpenAI, OpenAIRequest, OpenAIResponse};
use crate::subtitle_processor::SubtitleCollection;
use crate::translation::{BatchTranslator, TranslationOptions, TranslationSummary, batch_count};

// @module: Application controller for subtitle translation

/// Result of translating one subtitle file
#[derive(Debug, Clone)]
pub struct TranslationReport {
    /// Where the translated subtitles were written
    pub output_path: PathBuf,
    /// Batch and token statistics
    pub summary: TranslationSummary,
}

/// Main application controller for subtitle translation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Draw a progress bar on stderr
    show_progress: bool,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            show_progress: true,
        }
    }

    /// Disable the progress bar, e.g. for tests
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Translation tunables taken from the configuration
    pub fn translation_options(&self) -> TranslationOptions {
        TranslationOptions {
            model: self.config.openai.model.clone(),
            batch_size: self.config.translation.batch_size,
            max_context_batches: self.config.translation.max_context_batches,
            temperature: self.config.openai.temperature,
        }
    }

    /// Build the OpenAI client for `api_key` from the configuration
    pub fn openai_provider(&self, api_key: &str) -> Result<OpenAI, ProviderError> {
        OpenAI::new(
            api_key,
            self.config.openai.endpoint.clone(),
            self.config.openai.timeout_secs,
        )
    }

    /// Translate `input_file` into `target_language` with the OpenAI API
    pub async fn run(
        &self,
        input_file: &Path,
        target_language: &str,
        api_key: &str,
    ) -> Result<TranslationReport, AppError> {
        let provider = self.openai_provider(api_key)?;
        self.run_with_provider(provider, input_file, target_language).await
    }

    /// Translate `input_file` into `target_language` with the given provider.
    ///
    /// Input problems are reported before the output file is touched; once
    /// translation starts, batches written before a failure stay on disk.
    pub async fn run_with_provider<P>(
        &self,
        provider: P,
        input_file: &Path,
        target_language: &str,
    ) -> Result<TranslationReport, AppError>
    where
        P: Provider<Request = OpenAIRequest, Response = OpenAIResponse>,
    {
        if !FileManager::is_valid_filename_component(target_language) {
            return Err(AppError::InvalidArgument(format!(
                "target language {:?} cannot be used in a file name",
                target_language
            )));
        }

        let subtitles = SubtitleCollection::load(input_file)?;
        let output_path = FileManager::sibling_output_path(input_file, target_language);
        debug!("Writing translation to {:?}", output_path);

        let mut output = output_writer::open_output(&output_path).map_err(|e| {
            AppError::File(format!("Failed to open output file {:?}: {}", output_path, e))
        })?;

        let options = self.translation_options();
        let total_batches = batch_count(subtitles.len(), options.batch_size);
        info!(
            "Translating {} subtitle blocks to {} in {} batches",
            subtitles.len(),
            target_language,
            total_batches
        );

        let progress_bar = self.create_progress_bar(total_batches as u64);
        let translator = BatchTranslator::new(provider, options);

        let result = translator
            .translate(&subtitles.blocks, target_language, &mut output, |batch_number, total| {
                progress_bar.set_position((batch_number - 1) as u64);
                progress_bar.suspend(|| info!("Translating batch {} of {}...", batch_number, total));
            })
            .await;

        match result {
            Ok(summary) => {
                progress_bar.finish_and_clear();
                info!(
                    "Translation complete in {}. File saved at: {}",
                    Self::format_duration(summary.elapsed),
                    output_path.display()
                );
                Ok(TranslationReport {
                    output_path,
                    summary,
                })
            }
            Err(e) => {
                progress_bar.abandon();
                error!(
                    "Stopped at batch {} of {}; partial translation kept at {}",
                    e.batch_number(),
                    total_batches,
                    output_path.display()
                );
                Err(e.into())
            }
        }
    }

    fn create_progress_bar(&self, total_batches: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(total_batches);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} batches")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        progress_bar
    }

    /// Format a duration as `1h 02m 03s`, `2m 03s` or `3.4s`
    pub fn format_duration(duration: Duration) -> String {
        let total_secs = duration.as_secs();
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let seconds = total_secs % 60;

        if hours > 0 {
            format!("{}h {:02}m {:02}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {:02}s", minutes, seconds)
        } else {
            format!("{:.1}s", duration.as_secs_f64())
        }
    }
}
