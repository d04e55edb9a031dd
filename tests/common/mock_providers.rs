/*!
 * Mock provider implementation for testing
 *
 * The mock implements the Provider trait, records every request it
 * receives and answers from a script, so no test reaches the network.
 */

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use srtlingo::errors::ProviderError;
use srtlingo::providers::Provider;
use srtlingo::providers::openai::{
    OpenAIChoice, OpenAIMessage, OpenAIRequest, OpenAIResponse, TokenUsage,
};

/// Tracks API calls to ensure no actual external requests are made
#[derive(Debug, Default)]
pub struct ApiCallTracker {
    /// Count of mock API calls made
    pub call_count: usize,
    /// Every request received, in order
    pub requests: Vec<OpenAIRequest>,
}

/// Type of error to simulate
#[derive(Debug, Clone, Copy)]
pub enum MockErrorType {
    /// Authentication error (invalid API key)
    Auth,
    /// Connection error
    Connection,
    /// Non-2xx API error
    Api,
    /// Request timeout
    Timeout,
}

impl MockErrorType {
    fn to_error(self) -> ProviderError {
        match self {
            MockErrorType::Auth => ProviderError::AuthenticationError("Invalid API key".into()),
            MockErrorType::Connection => ProviderError::ConnectionError("Connection failed".into()),
            MockErrorType::Api => ProviderError::ApiError {
                status_code: 500,
                message: "Internal server error".into(),
            },
            MockErrorType::Timeout => ProviderError::Timeout(120),
        }
    }
}

/// How the mock builds a reply
#[derive(Debug, Clone)]
enum MockReply {
    /// Echo the pending user message, tagging every block
    Echo,
    /// Return the same text for every call
    Fixed(String),
}

/// Mock implementation of the OpenAI provider
#[derive(Debug)]
pub struct MockOpenAI {
    tracker: Arc<Mutex<ApiCallTracker>>,
    reply: MockReply,
    /// 1-based call number that fails, with the error to return
    fail_on_call: Option<(usize, MockErrorType)>,
}

impl MockOpenAI {
    /// A mock that echoes each batch back with every block tagged `[translated]`
    pub fn echo() -> Self {
        Self {
            tracker: Arc::new(Mutex::new(ApiCallTracker::default())),
            reply: MockReply::Echo,
            fail_on_call: None,
        }
    }

    /// A mock that answers every call with `text`
    pub fn fixed(text: impl Into<String>) -> Self {
        Self {
            reply: MockReply::Fixed(text.into()),
            ..Self::echo()
        }
    }

    /// Configure the mock to fail on the given 1-based call
    pub fn failing_on_call(mut self, call: usize, error_type: MockErrorType) -> Self {
        self.fail_on_call = Some((call, error_type));
        self
    }

    /// Get the API call tracker
    pub fn tracker(&self) -> Arc<Mutex<ApiCallTracker>> {
        self.tracker.clone()
    }

    /// Echo reply for a user message
    pub fn echo_reply(user_message: &str) -> String {
        user_message
            .split("\n\n")
            .map(|block| format!("{} [translated]", block))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[async_trait]
impl Provider for MockOpenAI {
    type Request = OpenAIRequest;
    type Response = OpenAIResponse;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        let mut tracker = self.tracker.lock().unwrap();
        tracker.call_count += 1;
        let call_number = tracker.call_count;

        let user_message = request
            .messages()
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        tracker.requests.push(request);

        if let Some((failing_call, error_type)) = self.fail_on_call {
            if failing_call == call_number {
                return Err(error_type.to_error());
            }
        }

        let content = match &self.reply {
            MockReply::Echo => Self::echo_reply(&user_message),
            MockReply::Fixed(text) => text.clone(),
        };

        Ok(OpenAIResponse {
            choices: vec![OpenAIChoice {
                message: OpenAIMessage {
                    role: "assistant".into(),
                    content,
                },
            }],
            usage: Some(TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 20,
                total_tokens: 30,
            }),
        })
    }

    fn extract_text(response: &Self::Response) -> Result<String, ProviderError> {
        response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| ProviderError::ParseError("no choices".into()))
    }
}
