//! Configuration for the RAG service

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Qdrant collection holding the book chunks
pub const COLLECTION_NAME: &str = "ai-spec-book-collection";
/// OpenAI embedding model used for queries
pub const EMBEDDING_MODEL: &str = "text-embedding-3-small";
/// OpenAI chat model used for answers
pub const LLM_MODEL: &str = "gpt-3.5-turbo";
/// Number of nearest chunks pulled per question
pub const TOP_K: usize = 4;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// OpenAI (embeddings + chat) configuration
    pub openai: OpenAiConfig,
    /// Qdrant configuration
    pub qdrant: QdrantConfig,
    /// Retrieval parameters
    pub retrieval: RetrievalConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// OpenAI configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API key, sent as a bearer token
    pub api_key: String,
    /// API base URL (no trailing slash)
    pub base_url: String,
    /// Embedding model name
    pub embed_model: String,
    /// Chat model name
    pub chat_model: String,
    /// TCP connect timeout in seconds (no limit when unset)
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("embed_model", &self.embed_model)
            .field("chat_model", &self.chat_model)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

/// Qdrant configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct QdrantConfig {
    /// Cluster URL
    pub url: String,
    /// API key, sent in the `api-key` header
    pub api_key: String,
    /// TCP connect timeout in seconds (no limit when unset)
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl std::fmt::Debug for QdrantConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QdrantConfig")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

/// Retrieval parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Collection to search
    pub collection: String,
    /// Neighbors per query
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            collection: COLLECTION_NAME.to_string(),
            top_k: TOP_K,
        }
    }
}

impl RagConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| {
                Error::Config(format!(
                    "Environment variable '{}' not set. Check your .env file.",
                    name
                ))
            })
        };

        let openai_api_key = required("OPENAI_API_KEY")?;
        let qdrant_url = required("QDRANT_URL")?;
        let qdrant_api_key = required("QDRANT_API_KEY")?;

        let mut server = ServerConfig::default();
        if let Some(host) = lookup("HOST") {
            server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            server.port = port
                .parse()
                .map_err(|e| Error::Config(format!("Invalid PORT '{}': {}", port, e)))?;
        }

        let connect_timeout_secs = match lookup("CONNECT_TIMEOUT_SECS") {
            Some(secs) => Some(secs.parse::<u64>().map_err(|e| {
                Error::Config(format!("Invalid CONNECT_TIMEOUT_SECS '{}': {}", secs, e))
            })?),
            None => None,
        };

        let base_url = lookup("OPENAI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());

        Ok(Self {
            server,
            openai: OpenAiConfig {
                api_key: openai_api_key,
                base_url: base_url.trim_end_matches('/').to_string(),
                embed_model: EMBEDDING_MODEL.to_string(),
                chat_model: LLM_MODEL.to_string(),
                connect_timeout_secs,
            },
            qdrant: QdrantConfig {
                url: qdrant_url.trim_end_matches('/').to_string(),
                api_key: qdrant_api_key,
                connect_timeout_secs,
            },
            retrieval: RetrievalConfig::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn required_env() -> HashMap<String, String> {
        env(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("QDRANT_URL", "https://qdrant.example.com/"),
            ("QDRANT_API_KEY", "qd-test"),
        ])
    }

    #[test]
    fn test_loads_required_with_defaults() {
        let vars = required_env();
        let config = RagConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.openai.base_url, "https://api.openai.com/v1");
        assert_eq!(config.openai.embed_model, "text-embedding-3-small");
        assert_eq!(config.openai.chat_model, "gpt-3.5-turbo");
        assert_eq!(config.qdrant.url, "https://qdrant.example.com");
        assert_eq!(config.retrieval.collection, "ai-spec-book-collection");
        assert_eq!(config.retrieval.top_k, 4);
        assert_eq!(config.openai.connect_timeout_secs, None);
        assert_eq!(config.qdrant.connect_timeout_secs, None);
    }

    #[test]
    fn test_missing_variable_is_named() {
        for missing in ["OPENAI_API_KEY", "QDRANT_URL", "QDRANT_API_KEY"] {
            let mut vars = required_env();
            vars.remove(missing);

            let err = RagConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
            assert!(matches!(err, Error::Config(_)));
            assert!(err.to_string().contains(missing), "{}", err);
        }
    }

    #[test]
    fn test_overrides() {
        let mut vars = required_env();
        vars.insert("HOST".into(), "127.0.0.1".into());
        vars.insert("PORT".into(), "9100".into());
        vars.insert("OPENAI_BASE_URL".into(), "http://localhost:1234/v1/".into());

        let config = RagConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.openai.base_url, "http://localhost:1234/v1");
    }

    #[test]
    fn test_connect_timeout() {
        let mut vars = required_env();
        vars.insert("CONNECT_TIMEOUT_SECS".into(), "5".into());

        let config = RagConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.openai.connect_timeout_secs, Some(5));
        assert_eq!(config.qdrant.connect_timeout_secs, Some(5));

        vars.insert("CONNECT_TIMEOUT_SECS".into(), "soon".into());
        let err = RagConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("CONNECT_TIMEOUT_SECS"));
    }

    #[test]
    fn test_bad_port() {
        let mut vars = required_env();
        vars.insert("PORT".into(), "eighty".into());

        let err = RagConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let vars = required_env();
        let config = RagConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("sk-test"));
        assert!(!printed.contains("qd-test"));
    }
}
