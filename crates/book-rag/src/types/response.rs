//! Response types for chat queries

use serde::{Deserialize, Serialize};

/// Answer returned by both chat endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResponse {
    /// The generated (or refusal) answer
    pub answer: String,
}

impl AnswerResponse {
    /// Create a new answer response
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}
