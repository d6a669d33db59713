//! OpenAI-backed providers for embeddings and chat completion
//!
//! One `OpenAiClient` is shared by the embedder and the chat provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::OpenAiConfig;
use crate::error::{Error, Result};

use super::embedding::EmbeddingProvider;
use super::http_client;
use super::llm::{ChatMessage, LlmProvider};

/// OpenAI REST API client
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    input: &'a str,
    model: &'a str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAiClient {
    /// Create a new OpenAI client
    pub fn new(config: &OpenAiConfig) -> Result<Self> {
        Ok(Self {
            client: http_client(config.connect_timeout_secs)?,
            config: config.clone(),
        })
    }

    /// Embed a single text with the configured embedding model
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let request = EmbedRequest {
            input: text,
            model: &self.config.embed_model,
        };

        let response = self
            .client
            .post(format!("{}/embeddings", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::embedding_request("OpenAI embeddings request failed", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::embedding(format!(
                "OpenAI embeddings failed ({}): {}",
                status, body
            )));
        }

        let embed_response: EmbedResponse = response
            .json()
            .await
            .map_err(|e| Error::embedding_request("Failed to parse embeddings response", e))?;

        embed_response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::embedding("No embedding in OpenAI response"))
    }

    /// Run a chat completion with the configured chat model
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.chat_model,
            messages,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::llm_request("OpenAI chat request failed", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!(
                "OpenAI chat completion failed ({}): {}",
                status, body
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::llm_request("Failed to parse chat response", e))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| Error::llm("No text in OpenAI chat response"))
    }

    /// Get configuration
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }
}

/// OpenAI embedding provider
pub struct OpenAiEmbedder {
    client: Arc<OpenAiClient>,
}

impl OpenAiEmbedder {
    /// Create from existing OpenAiClient
    pub fn from_client(client: Arc<OpenAiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.client.embed(text).await
    }

    fn name(&self) -> &str {
        "openai"
    }
}

/// OpenAI chat-completion provider
pub struct OpenAiChat {
    client: Arc<OpenAiClient>,
}

impl OpenAiChat {
    /// Create from existing OpenAiClient
    pub fn from_client(client: Arc<OpenAiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LlmProvider for OpenAiChat {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        self.client.chat(messages).await
    }

    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.client.config().chat_model
    }
}
