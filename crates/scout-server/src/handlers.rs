//! HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use scout_core::{CommittedSearch, SessionId};
use wallet_scout::{is_searchable, AnalysisMode, AnalysisReport, ReportLanguage};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub gateway: String,
    pub gateway_connected: bool,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub address: String,
    pub mode: AnalysisMode,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub session: Option<String>,
}

/// Report plus the session it was committed under
///
/// Flattening lifts the report's `mode` tag and fields to the top level.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub session: String,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let gateway_connected = state.gateway.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        gateway: state.gateway.name().to_string(),
        gateway_connected,
    })
}

/// Run one wallet analysis
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let address = payload.address.trim();

    if !is_searchable(address) {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "Address is too short to analyze.".into(),
                code: "ADDRESS_TOO_SHORT".into(),
            }),
        ));
    }

    let lang = payload
        .lang
        .as_deref()
        .map(ReportLanguage::from_code)
        .unwrap_or_default();
    let session = payload
        .session
        .map(SessionId::from_string)
        .unwrap_or_default();

    // Ticket is taken before the slow call so a late completion can be
    // recognized as superseded
    let ticket = state.searches.begin(&session);

    let report = state
        .analyzer
        .analyze(payload.mode, address, lang)
        .await
        .map_err(|e| {
            tracing::error!("Analysis failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: e.user_message(),
                    code: "GATEWAY_ERROR".into(),
                }),
            )
        })?;

    if !state.searches.commit(&ticket, report.clone()) {
        tracing::debug!("Search for session {} was superseded", session);
    }

    Ok(Json(AnalyzeResponse {
        session: session.to_string(),
        report,
    }))
}

/// Latest committed report for a session
pub async fn session_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CommittedSearch<AnalysisReport>>, (StatusCode, Json<ErrorResponse>)> {
    let session = SessionId::from_string(id);

    state.searches.latest(&session).map(Json).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No report committed for this session".into(),
                code: "SESSION_EMPTY".into(),
            }),
        )
    })
}
