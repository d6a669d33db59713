//! HTTP server for the chat service

pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::RagConfig;
use crate::error::{Error, Result};
use state::AppState;

/// Chat HTTP Server
pub struct RagServer {
    config: RagConfig,
    state: AppState,
}

impl RagServer {
    /// Create a new server with the OpenAI and Qdrant providers
    pub fn new(config: RagConfig) -> Result<Self> {
        let state = AppState::new(&config)?;
        Ok(Self { config, state })
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Bind the configured host and port
    ///
    /// The host may be a name such as `localhost`; it is resolved here.
    pub async fn bind(&self) -> Result<TcpListener> {
        let host = self.config.server.host.as_str();
        let port = self.config.server.port;

        TcpListener::bind((host, port))
            .await
            .map_err(|e| Error::Config(format!("Failed to bind {}:{}: {}", host, port, e)))
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let listener = self.bind().await?;
        let addr = listener
            .local_addr()
            .map_err(|e| Error::internal(format!("Listener has no local address: {}", e)))?;

        tracing::info!("Starting chat server on http://{}", addr);

        axum::serve(listener, self.router())
            .await
            .map_err(|e| Error::internal(format!("Server error: {}", e)))?;

        Ok(())
    }
}

/// Build the router over the given state
///
/// CORS is fully open with credentials, so origin, methods and headers are
/// mirrored from the request rather than sent as wildcards.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/health", get(health_check))
        .merge(routes::chat_routes())
        .with_state(state)
        // Middleware layers (order matters - applied bottom to top)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_resolves_host_name() {
        let config = RagConfig::from_lookup(|name| {
            match name {
                "OPENAI_API_KEY" => Some("sk-test"),
                "QDRANT_URL" => Some("http://localhost:6333"),
                "QDRANT_API_KEY" => Some("qd-test"),
                "HOST" => Some("localhost"),
                "PORT" => Some("0"),
                _ => None,
            }
            .map(String::from)
        })
        .unwrap();
        let server = RagServer::new(config).unwrap();

        let listener = server.bind().await.unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
    }
}
