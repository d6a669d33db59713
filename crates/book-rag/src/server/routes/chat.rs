//! Chat endpoints

use axum::{extract::State, Json};
use std::time::Instant;

use crate::error::ApiError;
use crate::server::state::AppState;
use crate::types::{
    query::{QueryRequest, SelectiveQueryRequest},
    response::AnswerResponse,
};

/// Detail returned for any `/chat` failure
pub const CHAT_FAILURE_DETAIL: &str = "Failed to process chat request.";
/// Detail returned for any `/chat/selective` failure
pub const SELECTIVE_FAILURE_DETAIL: &str = "Failed to process selective chat request.";

/// POST /chat - Answer from the book
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<AnswerResponse>, ApiError> {
    request.validate().map_err(ApiError::unprocessable)?;

    let start = Instant::now();
    tracing::info!("Chat query: \"{}\"", request.query);

    match state.chat().answer(&request.query).await {
        Ok(answer) => {
            tracing::info!("Chat completed in {}ms", start.elapsed().as_millis());
            Ok(Json(AnswerResponse::new(answer)))
        }
        Err(e) => {
            tracing::error!("RAG chat failed:\n{}\n{:#?}", e.report(), e);
            Err(ApiError::internal(CHAT_FAILURE_DETAIL))
        }
    }
}

/// POST /chat/selective - Answer from caller-selected text only
pub async fn selective_chat_handler(
    State(state): State<AppState>,
    Json(request): Json<SelectiveQueryRequest>,
) -> Result<Json<AnswerResponse>, ApiError> {
    request.validate().map_err(ApiError::unprocessable)?;

    let start = Instant::now();
    tracing::info!(
        "Selective query: \"{}\" ({} chars selected)",
        request.query,
        request.context.len()
    );

    match state
        .chat()
        .answer_selective(&request.query, &request.context)
        .await
    {
        Ok(answer) => {
            tracing::info!("Selective chat completed in {}ms", start.elapsed().as_millis());
            Ok(Json(AnswerResponse::new(answer)))
        }
        Err(e) => {
            tracing::error!("An error occurred in selective chat: {}", e);
            Err(ApiError::internal(SELECTIVE_FAILURE_DETAIL))
        }
    }
}
