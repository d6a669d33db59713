//! Vector store provider trait for similarity search

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::error::Result;

/// Search hit from the vector store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPoint {
    /// Point ID (integer or UUID, kept as returned)
    pub id: Value,
    /// Similarity score, higher is more similar
    #[serde(default)]
    pub score: f32,
    /// Stored payload, absent when the point carries none
    #[serde(default)]
    pub payload: Option<Map<String, Value>>,
}

impl ScoredPoint {
    /// The chunk text stored under the `text` payload key
    pub fn text(&self) -> Option<&str> {
        self.payload.as_ref()?.get("text")?.as_str()
    }
}

/// Trait for nearest-neighbor search over stored chunks
///
/// Implementations must not block the async runtime. A client built on a
/// blocking API has to run its calls through `tokio::task::spawn_blocking`.
///
/// Implementations:
/// - `QdrantStore`: Qdrant REST API
#[async_trait]
pub trait VectorStoreProvider: Send + Sync {
    /// Return up to `top_k` points nearest to `query_embedding`, most relevant first
    async fn search(
        &self,
        collection: &str,
        query_embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<ScoredPoint>>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}
