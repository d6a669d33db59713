//! book-rag: question answering grounded in a single book
//!
//! Embeds the caller's question, pulls the nearest chunks from a Qdrant
//! collection and asks an OpenAI chat model to answer from those chunks only.
//! A second path answers strictly from caller-selected text.

pub mod chat;
pub mod config;
pub mod error;
pub mod generation;
pub mod providers;
pub mod server;
pub mod types;

pub use chat::ChatService;
pub use config::RagConfig;
pub use error::{ApiError, Error, Result};
pub use types::{
    query::{QueryRequest, SelectiveQueryRequest},
    response::AnswerResponse,
};
