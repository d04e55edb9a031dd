// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error};
use std::io::Write;
use std::path::PathBuf;

use srtlingo::app_config::{self, Config, LogLevel};
use srtlingo::app_controller::Controller;
use srtlingo::credentials::{self, TerminalPrompt};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// srtlingo - translate .srt subtitles with an OpenAI chat model
#[derive(Parser, Debug)]
#[command(name = "srtlingo")]
#[command(version)]
#[command(about = "Translate .srt subtitle files with an OpenAI chat model")]
#[command(long_about = "srtlingo sends the blocks of an .srt file to an OpenAI chat model in batches \
and writes the translation next to the input as <name>.<language>.srt.

EXAMPLES:
    srtlingo movie.srt French                  # Writes movie.French.srt
    srtlingo -b 20 movie.srt German            # Smaller batches
    srtlingo -m gpt-4o movie.srt Japanese      # Use another model

CONFIGURATION:
    The API key and settings are stored in config.toml next to the executable.
    On first run the key is asked for interactively and saved there.")]
struct CommandLineOptions {
    /// Subtitle file to translate
    #[arg(value_name = "SRT_FILE")]
    input_path: PathBuf,

    /// Target language name, e.g. "French"
    #[arg(value_name = "LANGUAGE")]
    target_language: String,

    /// Configuration file path
    #[arg(short, long)]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Subtitle blocks per request
    #[arg(short, long)]
    batch_size: Option<usize>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

// @struct: Custom logger implementation, filtered by the global max level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI color for log level
    fn decoration(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => ("", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::decoration(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {}{}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() {
    // Info until the configuration says otherwise
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    // Wrong argument counts print usage and exit here
    let options = CommandLineOptions::parse();

    if let Err(e) = run(options).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(options: CommandLineOptions) -> Result<()> {
    if let Some(level) = &options.log_level {
        log::set_max_level(LogLevel::from(level.clone()).to_level_filter());
    }

    let config_path = options
        .config_path
        .clone()
        .unwrap_or_else(app_config::default_config_path);

    // Prompting blocks on the terminal, before any request is made
    let api_key = credentials::resolve_api_key(&config_path, &TerminalPrompt)?;

    let mut config = Config::from_file(&config_path)?;
    apply_overrides(&mut config, &options);
    config.validate()?;

    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let controller = Controller::with_config(config);
    controller
        .run(&options.input_path, &options.target_language, &api_key)
        .await?;

    Ok(())
}

// @applies: Command line values over the stored configuration
fn apply_overrides(config: &mut Config, options: &CommandLineOptions) {
    if let Some(level) = &options.log_level {
        config.log_level = level.clone().into();
    }

    if let Some(model) = &options.model {
        config.openai.model = model.clone();
    }

    if let Some(batch_size) = options.batch_size {
        config.translation.batch_size = batch_size;
    }

    if let Some(timeout_secs) = options.timeout_secs {
        config.openai.timeout_secs = timeout_secs;
    }
}
