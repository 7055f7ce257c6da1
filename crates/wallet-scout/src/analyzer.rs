//! Wallet Analyzer
//!
//! Orchestrates one full analysis: classify the address, build the mode
//! prompt, call the AI gateway, normalize the reply. Failure visibility
//! differs by mode: airdrop analysis surfaces transport errors to the
//! caller, while security and portfolio analysis degrade to their fallback
//! reports and only log the cause.

use std::sync::Arc;

use scout_core::{AiGateway, GroundedReply, GroundedRequest, Result};

use crate::chain::{classify, ChainFamily};
use crate::normalize::{normalize_airdrops, normalize_portfolio, normalize_security};
use crate::prompt::{build_prompt, ReportLanguage};
use crate::report::{AirdropReport, AnalysisMode, AnalysisReport, PortfolioReport, SecurityReport};

/// Runs wallet analyses against a pluggable AI gateway
pub struct WalletAnalyzer {
    gateway: Arc<dyn AiGateway>,
}

impl WalletAnalyzer {
    pub fn new(gateway: Arc<dyn AiGateway>) -> Self {
        Self { gateway }
    }

    /// Run one analysis and wrap the report in its mode tag
    pub async fn analyze(
        &self,
        mode: AnalysisMode,
        address: &str,
        lang: ReportLanguage,
    ) -> Result<AnalysisReport> {
        match mode {
            AnalysisMode::Airdrop => Ok(AnalysisReport::Airdrop(
                self.airdrops(address, lang).await?,
            )),
            AnalysisMode::Security => {
                Ok(AnalysisReport::Security(self.security(address, lang).await))
            }
            AnalysisMode::Portfolio => Ok(AnalysisReport::Portfolio(
                self.portfolio(address, lang).await,
            )),
        }
    }

    /// Airdrop scan; gateway failures surface to the caller
    pub async fn airdrops(&self, address: &str, lang: ReportLanguage) -> Result<AirdropReport> {
        let chain = classify(address);
        let reply = self
            .generate(AnalysisMode::Airdrop, address, chain, lang)
            .await?;
        Ok(normalize_airdrops(&reply.text, &reply.sources, chain))
    }

    /// Security scan; gateway failures degrade to the manual-check report
    pub async fn security(&self, address: &str, lang: ReportLanguage) -> SecurityReport {
        let chain = classify(address);
        match self
            .generate(AnalysisMode::Security, address, chain, lang)
            .await
        {
            Ok(reply) => normalize_security(&reply.text, &reply.sources, chain, address),
            Err(e) => {
                tracing::warn!("Security scan degraded to fallback: {}", e);
                SecurityReport::manual_check(chain, address, Vec::new())
            }
        }
    }

    /// Portfolio scan; gateway failures degrade to the scanner-links report
    pub async fn portfolio(&self, address: &str, lang: ReportLanguage) -> PortfolioReport {
        let chain = classify(address);
        match self
            .generate(AnalysisMode::Portfolio, address, chain, lang)
            .await
        {
            Ok(reply) => normalize_portfolio(&reply.text, &reply.sources, chain, address),
            Err(e) => {
                tracing::warn!("Portfolio scan degraded to fallback: {}", e);
                PortfolioReport::unavailable(chain, address)
            }
        }
    }

    async fn generate(
        &self,
        mode: AnalysisMode,
        address: &str,
        chain: ChainFamily,
        lang: ReportLanguage,
    ) -> Result<GroundedReply> {
        let prompt = build_prompt(mode, address, chain, lang);
        tracing::debug!("Dispatching {:?} analysis for {} wallet", mode, chain.label());

        let request = GroundedRequest::new(prompt).with_temperature(mode.temperature());
        self.gateway.generate(&request).await
    }
}
