//! Chat server binary
//!
//! Run with: cargo run -p book-rag --bin book-rag-server

use book_rag::{config::RagConfig, server::RagServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the variables may come from the real environment
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_rag=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = RagConfig::from_env()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Embedding model: {}", config.openai.embed_model);
    tracing::info!("  - LLM model: {}", config.openai.chat_model);
    tracing::info!("  - Qdrant: {}", config.qdrant.url);
    tracing::info!("  - Collection: {} (top {})", config.retrieval.collection, config.retrieval.top_k);

    // Create and start server
    let server = RagServer::new(config)?;

    tracing::info!("Endpoints:");
    tracing::info!("  POST /chat           - Answer from the book");
    tracing::info!("  POST /chat/selective - Answer from selected text");
    tracing::info!("  GET  /health         - Liveness");

    server.start().await?;

    Ok(())
}
