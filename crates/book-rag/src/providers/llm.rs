//! LLM provider trait for chat completion

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::error::Result;

/// Speaker of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message of a chat exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// System instruction message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// User message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Trait for chat-completion answer generation
///
/// Implementations:
/// - `OpenAiChat`: OpenAI chat completions API (gpt-3.5-turbo)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Complete an ordered list of messages, returning the reply text
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
