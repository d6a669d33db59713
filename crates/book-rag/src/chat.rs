//! Chat pipelines: book-grounded answers and selection-grounded answers

use std::sync::Arc;

use crate::config::RetrievalConfig;
use crate::error::Result;
use crate::generation::{PromptBuilder, BOOK_REFUSAL};
use crate::providers::{ChatMessage, EmbeddingProvider, LlmProvider, VectorStoreProvider};

/// Answers questions using the injected providers
///
/// Holds no per-request state; share it behind an `Arc` or clone it.
#[derive(Clone)]
pub struct ChatService {
    embedding: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStoreProvider>,
    llm: Arc<dyn LlmProvider>,
    retrieval: RetrievalConfig,
}

impl ChatService {
    /// Create a chat service over the given providers
    pub fn new(
        embedding: Arc<dyn EmbeddingProvider>,
        vector_store: Arc<dyn VectorStoreProvider>,
        llm: Arc<dyn LlmProvider>,
        retrieval: RetrievalConfig,
    ) -> Self {
        Self {
            embedding,
            vector_store,
            llm,
            retrieval,
        }
    }

    /// Answer from the book: embed, retrieve, then generate
    ///
    /// Returns the fixed refusal without calling the LLM when retrieval
    /// yields no usable text.
    pub async fn answer(&self, query: &str) -> Result<String> {
        let query_embedding = self.embedding.embed(query).await?;

        let points = self
            .vector_store
            .search(&self.retrieval.collection, &query_embedding, self.retrieval.top_k)
            .await?;

        let Some(context) = PromptBuilder::build_context(&points) else {
            tracing::info!(
                "No usable chunks among {} hits from {}, refusing",
                points.len(),
                self.vector_store.name()
            );
            return Ok(BOOK_REFUSAL.to_string());
        };

        tracing::debug!("Assembled context from {} hits ({} chars)", points.len(), context.len());

        let messages = [
            ChatMessage::system(PromptBuilder::rag_system_prompt(&context)),
            ChatMessage::user(query),
        ];

        self.llm.complete(&messages).await
    }

    /// Answer strictly from the caller's selected text
    pub async fn answer_selective(&self, query: &str, selection: &str) -> Result<String> {
        let messages = [
            ChatMessage::system(PromptBuilder::selective_system_prompt(selection)),
            ChatMessage::user(query),
        ];

        self.llm.complete(&messages).await
    }
}
