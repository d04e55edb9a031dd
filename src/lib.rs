/*!
 * # srtlingo - subtitle translation through an OpenAI chat model
 *
 * A Rust library for translating `.srt` subtitle files batch by batch.
 *
 * ## Features
 *
 * - Splits subtitle files into blank-line separated blocks
 * - Sends fixed-size batches of blocks to the OpenAI chat completions API
 * - Keeps the running conversation so later batches see earlier ones
 * - Appends every translated batch to the output as soon as it arrives
 * - Stores the API key in a TOML configuration created on first run
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration model, defaults and validation
 * - `credentials`: API key lookup and first-run prompt
 * - `subtitle_processor`: Subtitle file loading and block splitting
 * - `translation`: Batch loop, conversation history and prompt
 * - `output_writer`: Incremental, durable output file
 * - `providers`: Provider trait and the OpenAI client
 * - `app_controller`: Runs the pipeline for one file
 * - `file_utils`: Path helpers
 * - `language_utils`: ISO language code to name resolution
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod credentials;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod output_writer;
pub mod providers;
pub mod subtitle_processor;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, TranslationReport};
pub use credentials::resolve_api_key;
pub use errors::{AppError, ProviderError, SubtitleError, TranslationError};
pub use output_writer::{OutputFile, OutputSink, open_output};
pub use subtitle_processor::{SubtitleBlock, SubtitleCollection, load_blocks};
pub use translation::{BatchTranslator, TranslationOptions, TranslationSummary};
