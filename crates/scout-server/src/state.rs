//! Application State

use std::sync::Arc;

use scout_core::{AiGateway, SearchRegistry};
use wallet_scout::{AnalysisReport, WalletAnalyzer};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// AI gateway (Gemini, or a mock in tests)
    pub gateway: Arc<dyn AiGateway>,

    /// Analysis pipeline bound to the gateway
    pub analyzer: Arc<WalletAnalyzer>,

    /// Latest-wins search results per session
    pub searches: Arc<SearchRegistry<AnalysisReport>>,
}
