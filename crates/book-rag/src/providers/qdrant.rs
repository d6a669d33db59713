//! Qdrant vector search provider over the REST API

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::QdrantConfig;
use crate::error::{Error, Result};
use crate::providers::http_client;
use crate::providers::vector_store::{ScoredPoint, VectorStoreProvider};

/// Qdrant client for point queries
///
/// Uses the async reqwest client, so a slow search never holds up the
/// runtime thread serving other requests.
pub struct QdrantStore {
    client: Client,
    config: QdrantConfig,
}

#[derive(Serialize)]
struct QueryPointsRequest<'a> {
    query: &'a [f32],
    limit: usize,
    with_payload: bool,
}

#[derive(Deserialize)]
struct QueryPointsResponse {
    result: QueryResult,
}

#[derive(Deserialize)]
struct QueryResult {
    points: Vec<ScoredPoint>,
}

impl QdrantStore {
    /// Create a new Qdrant store
    pub fn new(config: &QdrantConfig) -> Result<Self> {
        Ok(Self {
            client: http_client(config.connect_timeout_secs)?,
            config: config.clone(),
        })
    }

    fn query_endpoint(&self, collection: &str) -> String {
        format!("{}/collections/{}/points/query", self.config.url, collection)
    }
}

#[async_trait]
impl VectorStoreProvider for QdrantStore {
    async fn search(
        &self,
        collection: &str,
        query_embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<ScoredPoint>> {
        let request = QueryPointsRequest {
            query: query_embedding,
            limit: top_k,
            with_payload: true,
        };

        let response = self
            .client
            .post(self.query_endpoint(collection))
            .header("api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::vector_db_request("Qdrant query request failed", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::vector_db(format!(
                "Qdrant query on '{}' failed ({}): {}",
                collection, status, body
            )));
        }

        let query_response: QueryPointsResponse = response
            .json()
            .await
            .map_err(|e| Error::vector_db_request("Failed to parse Qdrant response", e))?;

        tracing::debug!(
            "Qdrant returned {} points from '{}'",
            query_response.result.points.len(),
            collection
        );

        Ok(query_response.result.points)
    }

    fn name(&self) -> &str {
        "qdrant"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, State},
        http::{HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Option<(String, Option<String>, Value)>>>;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn config(url: String) -> QdrantConfig {
        QdrantConfig {
            url,
            api_key: "qd-test".to_string(),
            connect_timeout_secs: Some(5),
        }
    }

    /// Address of a port nothing listens on
    async fn closed_port() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_search_request_and_parse() {
        let captured: Captured = Arc::default();
        let router = Router::new()
            .route(
                "/collections/:name/points/query",
                post(
                    |State(c): State<Captured>,
                     Path(name): Path<String>,
                     headers: HeaderMap,
                     Json(body): Json<Value>| async move {
                        let key = headers
                            .get("api-key")
                            .and_then(|v| v.to_str().ok())
                            .map(String::from);
                        *c.lock().unwrap() = Some((name, key, body));
                        Json(json!({
                            "result": {"points": [
                                {"id": 1, "version": 3, "score": 0.91, "payload": {"text": "first"}},
                                {"id": "5c56c793-69f3-4fbf-87e6-c4bf54c28c26", "version": 3, "score": 0.77, "payload": null}
                            ]},
                            "status": "ok",
                            "time": 0.002
                        }))
                    },
                ),
            )
            .with_state(captured.clone());
        let store = QdrantStore::new(&config(spawn(router).await)).unwrap();

        let points = store
            .search("ai-spec-book-collection", &[0.5, -0.5], 4)
            .await
            .unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].text(), Some("first"));
        assert_eq!(points[1].payload, None);

        let (collection, key, body) = captured.lock().unwrap().clone().unwrap();
        assert_eq!(collection, "ai-spec-book-collection");
        assert_eq!(key.as_deref(), Some("qd-test"));
        assert_eq!(body, json!({"query": [0.5, -0.5], "limit": 4, "with_payload": true}));
    }

    #[tokio::test]
    async fn test_search_upstream_status_is_error() {
        let router = Router::new().route(
            "/collections/:name/points/query",
            post(|| async { (StatusCode::NOT_FOUND, "collection not found") }),
        );
        let store = QdrantStore::new(&config(spawn(router).await)).unwrap();

        let err = store.search("missing", &[0.1], 4).await.unwrap_err();
        assert!(matches!(err, Error::VectorDb { .. }));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_search_transport_failure_keeps_cause() {
        let store = QdrantStore::new(&config(closed_port().await)).unwrap();

        let err = store.search("ai-spec-book-collection", &[0.1], 4).await.unwrap_err();
        assert!(matches!(err, Error::VectorDb { source: Some(_), .. }));

        let report = err.report();
        assert!(report.contains("caused by:"), "{}", report);
        assert!(report.to_lowercase().contains("refused"), "{}", report);
    }
}
