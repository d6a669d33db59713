//! Application state for the chat server

use std::sync::Arc;

use crate::chat::ChatService;
use crate::config::RagConfig;
use crate::error::Result;
use crate::providers::{
    EmbeddingProvider, LlmProvider, VectorStoreProvider,
    openai::{OpenAiChat, OpenAiClient, OpenAiEmbedder},
    qdrant::QdrantStore,
};

/// Shared application state
///
/// Built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Chat pipelines over the provider handles
    chat: ChatService,
}

impl AppState {
    /// Create application state with the OpenAI and Qdrant providers
    pub fn new(config: &RagConfig) -> Result<Self> {
        tracing::info!("Initializing chat application state...");

        let openai = Arc::new(OpenAiClient::new(&config.openai)?);
        let embedding_provider: Arc<dyn EmbeddingProvider> =
            Arc::new(OpenAiEmbedder::from_client(Arc::clone(&openai)));
        let llm_provider: Arc<dyn LlmProvider> = Arc::new(OpenAiChat::from_client(openai));
        tracing::info!(
            "Embedding provider initialized: {} ({})",
            embedding_provider.name(),
            config.openai.embed_model
        );
        tracing::info!(
            "LLM provider initialized: {} ({})",
            llm_provider.name(),
            llm_provider.model()
        );

        let vector_store_provider: Arc<dyn VectorStoreProvider> =
            Arc::new(QdrantStore::new(&config.qdrant)?);
        tracing::info!(
            "Vector store initialized: {} (collection: {}, top_k: {})",
            vector_store_provider.name(),
            config.retrieval.collection,
            config.retrieval.top_k
        );

        let chat = ChatService::new(
            embedding_provider,
            vector_store_provider,
            llm_provider,
            config.retrieval.clone(),
        );

        Ok(Self::from_service(chat))
    }

    /// Create application state around an already-built chat service
    pub fn from_service(chat: ChatService) -> Self {
        Self {
            inner: Arc::new(AppStateInner { chat }),
        }
    }

    /// Get the chat service
    pub fn chat(&self) -> &ChatService {
        &self.inner.chat
    }
}
