/*!
 * Provider implementations for remote translation services.
 *
 * This module contains the client for the OpenAI chat completions API,
 * which also covers OpenAI-compatible servers reachable through a custom
 * endpoint.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all LLM providers
///
/// The batch translator only talks to this trait, so tests can substitute
/// a scripted provider for the HTTP client.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// The request type for this provider
    type Request: Send + Sync;

    /// The response type for this provider
    type Response: Send + Sync;

    /// Complete a request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<Self::Response, ProviderError>` - The response from the provider or an error
    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError>;

    /// Extract the reply text from the provider response
    ///
    /// Fails with `ProviderError::ParseError` when the response carries no reply.
    fn extract_text(response: &Self::Response) -> Result<String, ProviderError>;
}

pub mod openai;
