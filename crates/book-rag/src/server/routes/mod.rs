//! API routes for the chat server

pub mod chat;

use axum::{routing::post, Router};
use crate::server::state::AppState;

/// Build all chat routes
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat::chat_handler))
        .route("/chat/selective", post(chat::selective_chat_handler))
}
