/*!
 * API credential resolution.
 *
 * The credential lives in the configuration file under `openai.api_key`.
 * A missing file triggers an interactive prompt and a freshly written
 * configuration; an existing file is never rewritten.
 */

use dialoguer::Password;
use log::info;
use std::path::Path;

use crate::app_config::Config;
use crate::errors::AppError;

/// Source of an API key when no configuration exists yet
pub trait KeyPrompt {
    /// Ask the operator for a key
    fn prompt_api_key(&self) -> Result<String, AppError>;
}

/// Prompts on the controlling terminal with hidden input
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl KeyPrompt for TerminalPrompt {
    fn prompt_api_key(&self) -> Result<String, AppError> {
        eprintln!("Config file not found. Please provide your OpenAI API key.");
        let key = Password::new()
            .with_prompt("Enter your OpenAI API key")
            .interact()
            .map_err(|e| AppError::Config(format!("Failed to read API key: {}", e)))?;

        Ok(key.trim().to_string())
    }
}

/// Return the API key stored at `config_path`, creating the configuration
/// through `prompt` when the file does not exist.
pub fn resolve_api_key<P: KeyPrompt + ?Sized>(
    config_path: &Path,
    prompt: &P,
) -> Result<String, AppError> {
    if !config_path.exists() {
        let api_key = prompt.prompt_api_key()?;
        if api_key.trim().is_empty() {
            return Err(AppError::MissingCredential {
                path: config_path.to_path_buf(),
            });
        }

        let mut config = Config::default();
        config.openai.api_key = Some(api_key.clone());
        config.save(config_path)?;

        info!("API key saved to {}", config_path.display());
        return Ok(api_key);
    }

    let config = Config::from_file(config_path)?;
    config
        .openai
        .api_key()
        .map(str::to_string)
        .ok_or_else(|| AppError::MissingCredential {
            path: config_path.to_path_buf(),
        })
}
