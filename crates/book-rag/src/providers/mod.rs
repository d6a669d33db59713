//! Provider abstractions for embeddings, vector search, and chat completion
//!
//! The chat pipeline only talks to these traits, so the OpenAI and Qdrant
//! clients can be swapped for in-process doubles.

pub mod embedding;
pub mod llm;
pub mod openai;
pub mod qdrant;
pub mod vector_store;

use reqwest::Client;
use std::time::Duration;

use crate::error::{Error, Result};

pub use embedding::EmbeddingProvider;
pub use llm::{ChatMessage, LlmProvider, Role};
pub use openai::{OpenAiChat, OpenAiClient, OpenAiEmbedder};
pub use qdrant::QdrantStore;
pub use vector_store::{ScoredPoint, VectorStoreProvider};

/// Build the HTTP client shared by a provider's requests
///
/// Only the connect phase is bounded; requests themselves have no timeout.
pub(crate) fn http_client(connect_timeout_secs: Option<u64>) -> Result<Client> {
    let mut builder = Client::builder().pool_max_idle_per_host(5);
    if let Some(secs) = connect_timeout_secs {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_with_and_without_timeout() {
        assert!(http_client(None).is_ok());
        assert!(http_client(Some(3)).is_ok());
    }
}
