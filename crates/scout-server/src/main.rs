//! wallet-scout HTTP Server
//!
//! Axum-based server exposing the wallet analysis pipeline over REST.
//!
//! One endpoint runs a full analysis (classify, prompt, gateway, normalize)
//! and commits the report under a session; a second returns the latest
//! committed report for that session.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scout_core::{AiGateway, SearchRegistry};
use scout_runtime::GeminiGateway;
use wallet_scout::WalletAnalyzer;

use crate::handlers::{analyze_handler, health_check, session_report};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Initialize AI gateway
    let gateway: Arc<dyn AiGateway> = Arc::new(GeminiGateway::from_env()?);

    // Verify gateway connection
    match gateway.health_check().await {
        Ok(true) => {
            tracing::info!("✓ Connected to {}", gateway.name());
        }
        Ok(false) | Err(_) => {
            tracing::warn!("⚠ {} not reachable - analyses will degrade or fail", gateway.name());
            tracing::warn!("  Set GEMINI_API_KEY in .env for live analysis");
        }
    }

    // Build application state
    let state = AppState {
        gateway: gateway.clone(),
        analyzer: Arc::new(WalletAnalyzer::new(gateway)),
        searches: Arc::new(SearchRegistry::new()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health & info
        .route("/health", get(health_check))

        // Analysis API
        .route("/api/analyze", post(analyze_handler))
        .route("/api/session/{id}", get(session_report))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 wallet-scout server running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health           - Health check");
    tracing::info!("  POST /api/analyze      - Run a wallet analysis");
    tracing::info!("  GET  /api/session/{{id}} - Latest committed report");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
