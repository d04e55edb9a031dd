/*!
 * Batch translation processing.
 *
 * Subtitle blocks are sent to the provider in fixed-size batches, strictly
 * one after another. Each reply is written to the output before the next
 * batch starts, and the first failure ends the run.
 */

use log::{debug, info};
use std::time::{Duration, Instant};

use crate::errors::{ProviderError, TranslationError};
use crate::output_writer::OutputSink;
use crate::providers::Provider;
use crate::providers::openai::{OpenAIRequest, OpenAIResponse};
use crate::subtitle_processor::{BLOCK_SEPARATOR, SubtitleBlock, SubtitleCollection};

use super::conversation::Conversation;
use super::prompts;

/// Blocks per request unless configured otherwise
pub const DEFAULT_BATCH_SIZE: usize = 35;

/// Tunables of a translation run
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationOptions {
    /// Chat model to request
    pub model: String,
    /// Number of subtitle blocks per request, at least 1
    pub batch_size: usize,
    /// Cap on earlier exchanges resent with each request
    pub max_context_batches: Option<usize>,
    /// Sampling temperature; provider default when unset
    pub temperature: Option<f32>,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            max_context_batches: None,
            temperature: None,
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationSummary {
    /// Number of batches the input was split into
    pub total_batches: usize,
    /// Number of batches translated and written
    pub translated_batches: usize,
    /// Prompt tokens reported by the API
    pub prompt_tokens: u64,
    /// Completion tokens reported by the API
    pub completion_tokens: u64,
    /// Wall-clock time spent translating
    pub elapsed: Duration,
}

/// Number of batches `block_count` blocks produce with `batch_size`
pub fn batch_count(block_count: usize, batch_size: usize) -> usize {
    block_count.div_ceil(batch_size.max(1))
}

/// Batch translator for processing subtitle blocks in order
#[derive(Debug)]
pub struct BatchTranslator<P> {
    /// The provider answering each batch
    provider: P,
    options: TranslationOptions,
}

impl<P> BatchTranslator<P>
where
    P: Provider<Request = OpenAIRequest, Response = OpenAIResponse>,
{
    /// Create a new batch translator
    pub fn new(provider: P, options: TranslationOptions) -> Self {
        Self { provider, options }
    }

    /// Translate `blocks` into `target_language`, appending each translated
    /// batch to `sink` followed by a blank line.
    ///
    /// `progress` is called with the 1-based batch number and the batch count
    /// right before each request.
    pub async fn translate<S, F>(
        &self,
        blocks: &[SubtitleBlock],
        target_language: &str,
        sink: &mut S,
        progress: F,
    ) -> Result<TranslationSummary, TranslationError>
    where
        S: OutputSink + ?Sized,
        F: Fn(usize, usize),
    {
        let start_time = Instant::now();
        let batch_size = self.options.batch_size.max(1);
        let total_batches = batch_count(blocks.len(), batch_size);

        let mut summary = TranslationSummary {
            total_batches,
            ..Default::default()
        };
        let mut conversation = Conversation::new(prompts::system_prompt(target_language))
            .with_context_window(self.options.max_context_batches);

        for (batch_index, batch) in blocks.chunks(batch_size).enumerate() {
            let batch_number = batch_index + 1;
            progress(batch_number, total_batches);
            debug!(
                "Batch {} of {}: {} blocks, {} messages in history",
                batch_number,
                total_batches,
                batch.len(),
                conversation.len()
            );

            conversation.push_user(SubtitleCollection::join_blocks(batch));
            let request = conversation.to_request(&self.options.model, self.options.temperature);

            let translated = match self.request_batch(request).await {
                Ok((text, response)) => {
                    if let Some(usage) = response.usage {
                        summary.prompt_tokens += u64::from(usage.prompt_tokens);
                        summary.completion_tokens += u64::from(usage.completion_tokens);
                    }
                    text
                }
                Err(source) => {
                    return Err(TranslationError::RemoteRequestFailure {
                        batch_number,
                        total_batches,
                        source,
                    });
                }
            };

            conversation.push_assistant(translated.as_str());

            let mut chunk = translated;
            chunk.push_str(BLOCK_SEPARATOR);
            sink.append(&chunk).map_err(|e| TranslationError::Output {
                batch_number,
                message: e.to_string(),
            })?;

            summary.translated_batches += 1;
        }

        summary.elapsed = start_time.elapsed();
        info!(
            "Translated {} batches ({} prompt / {} completion tokens)",
            summary.translated_batches, summary.prompt_tokens, summary.completion_tokens
        );

        Ok(summary)
    }

    async fn request_batch(
        &self,
        request: OpenAIRequest,
    ) -> Result<(String, OpenAIResponse), ProviderError> {
        let response = self.provider.complete(request).await?;
        let text = P::extract_text(&response)?;
        Ok((text, response))
    }
}
