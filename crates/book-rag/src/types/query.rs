//! Query request types

use serde::{Deserialize, Serialize};

/// Outcome of request validation; the error is the client-facing detail
pub type Validation = Result<(), String>;

/// Question answered against the book index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The question to answer
    pub query: String,
}

impl QueryRequest {
    /// Create a new query request
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }

    /// Reject blank questions before any provider is called
    pub fn validate(&self) -> Validation {
        require_text("query", &self.query)
    }
}

/// Question answered strictly from caller-selected text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectiveQueryRequest {
    /// The question to answer
    pub query: String,
    /// The text the answer must come from
    pub context: String,
}

impl SelectiveQueryRequest {
    /// Create a new selective query request
    pub fn new(query: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            context: context.into(),
        }
    }

    /// Reject a blank question or a blank selection
    pub fn validate(&self) -> Validation {
        require_text("query", &self.query)?;
        require_text("context", &self.context)
    }
}

fn require_text(field: &str, value: &str) -> Validation {
    if value.trim().is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    Ok(())
}
