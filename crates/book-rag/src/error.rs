//! Error types for the RAG service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for RAG operations
pub type Result<T> = std::result::Result<T, Error>;

/// RAG service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Embedding error
    #[error("Embedding generation failed: {message}")]
    Embedding {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Vector database error
    #[error("Vector database error: {message}")]
    VectorDb {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// LLM error
    #[error("LLM error: {message}")]
    Llm {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an embedding error
    pub fn embedding(message: impl Into<String>) -> Self {
        Self::Embedding {
            message: message.into(),
            source: None,
        }
    }

    /// Create an embedding error caused by a failed HTTP exchange
    pub fn embedding_request(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Embedding {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a vector db error
    pub fn vector_db(message: impl Into<String>) -> Self {
        Self::VectorDb {
            message: message.into(),
            source: None,
        }
    }

    /// Create a vector db error caused by a failed HTTP exchange
    pub fn vector_db_request(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::VectorDb {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create an LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
            source: None,
        }
    }

    /// Create an LLM error caused by a failed HTTP exchange
    pub fn llm_request(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Llm {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Render the error together with every underlying cause
    pub fn report(&self) -> String {
        let mut report = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            report.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        report
    }
}

/// Client-visible failure: a status and a fixed detail message
///
/// Upstream error text never ends up in here.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    /// 500 with a generic detail
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.into(),
        }
    }

    /// 422 for a payload that parsed but failed validation
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_without_cause() {
        let err = Error::llm("No text in OpenAI chat response");

        assert_eq!(err.report(), "LLM error: No text in OpenAI chat response");
    }

    #[test]
    fn test_api_error_status() {
        assert_eq!(ApiError::internal("x").status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::unprocessable("x").status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
