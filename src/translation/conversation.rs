/*!
 * Running conversation with the remote model.
 *
 * The conversation starts with one system message and gains one user and
 * one assistant message per translated batch. Messages are never removed;
 * an optional context window only limits how much history goes into the
 * next request.
 */

use std::fmt;

use crate::providers::openai::{OpenAIMessage, OpenAIRequest};

/// Author of a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role-tagged message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl From<&Message> for OpenAIMessage {
    fn from(message: &Message) -> Self {
        OpenAIMessage {
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
        }
    }
}

/// Append-only message history for one run
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    max_context_batches: Option<usize>,
}

impl Conversation {
    /// Start a conversation with its system instruction
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message {
                role: Role::System,
                content: system_prompt.into(),
            }],
            max_context_batches: None,
        }
    }

    /// Limit each request to the last `max_batches` completed exchanges.
    /// `None` resends the whole history.
    pub fn with_context_window(mut self, max_batches: Option<usize>) -> Self {
        self.max_context_batches = max_batches;
        self
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message {
            role: Role::User,
            content: content.into(),
        });
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message {
            role: Role::Assistant,
            content: content.into(),
        });
    }

    /// Every message recorded so far
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages to send for the next request.
    ///
    /// Always the system message and the trailing pending user message, plus
    /// as many completed user/assistant exchanges as the window allows.
    pub fn context(&self) -> Vec<&Message> {
        let Some(max_batches) = self.max_context_batches else {
            return self.messages.iter().collect();
        };

        let (system, rest) = match self.messages.split_first() {
            Some(split) => split,
            None => return Vec::new(),
        };

        let pending = usize::from(rest.last().is_some_and(|m| m.role == Role::User));
        let history_len = rest.len() - pending;
        let keep = (max_batches * 2).min(history_len);

        std::iter::once(system)
            .chain(rest[history_len - keep..].iter())
            .collect()
    }

    /// Build a chat request for `model` from the current context
    pub fn to_request(&self, model: &str, temperature: Option<f32>) -> OpenAIRequest {
        let request = self
            .context()
            .into_iter()
            .fold(OpenAIRequest::new(model), |request, message| {
                request.add_message(message.role.as_str(), message.content.as_str())
            });

        match temperature {
            Some(temperature) => request.temperature(temperature),
            None => request,
        }
    }
}
