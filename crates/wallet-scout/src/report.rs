//! Report Models
//!
//! Typed records assembled by the response normalizer. Every report is
//! always fully populated: list fields default to empty, summaries to
//! documented placeholder strings. The fallback constructors here are the
//! canonical "fallback records" substituted when the model output is
//! missing, unusable, or never arrived.

use serde::{Deserialize, Serialize};

use crate::chain::ChainFamily;
use crate::links::{portfolio_tools, revoke_link};

/// Analysis mode selected per submission
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    Airdrop,
    Security,
    Portfolio,
}

impl AnalysisMode {
    /// Sampling temperature for this mode's gateway call
    pub fn temperature(&self) -> f32 {
        match self {
            Self::Airdrop => 0.4,
            Self::Security => 0.3,
            Self::Portfolio => 0.2,
        }
    }
}

/// Lifecycle stage of an airdrop opportunity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirdropStatus {
    Active,
    Upcoming,
    Expired,
    Rumor,
}

/// Eligibility likelihood reported by the model
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Likelihood {
    High,
    Medium,
    Low,
}

/// Project category of an airdrop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirdropCategory {
    L2,
    DeFi,
    #[serde(rename = "NFT")]
    Nft,
    Infrastructure,
    Other,
}

/// One airdrop opportunity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirdropItem {
    pub name: String,
    pub token: String,
    pub status: AirdropStatus,
    pub likelihood: Likelihood,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
    pub category: AirdropCategory,
}

/// Severity of a security finding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertLevel {
    Critical,
    High,
    Medium,
    Low,
    Safe,
}

/// One security checklist finding
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SecurityAlert {
    pub level: AlertLevel,
    pub title: String,
    pub description: String,
    pub action: String,
}

/// Kind of a portfolio holding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoldingKind {
    Token,
    #[serde(rename = "NFT")]
    Nft,
    #[serde(rename = "DeFi Pool")]
    DefiPool,
    Staking,
    Lending,
}

/// One portfolio entry (holding, position, or collection)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HoldingKind,
    pub network: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub url: String,
}

/// A deterministic external tool reference
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolLink {
    pub name: String,
    pub url: String,
    pub description: String,
}

impl ToolLink {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: description.into(),
        }
    }
}

/// Airdrop analysis report
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirdropReport {
    pub chain_family: ChainFamily,
    pub airdrops: Vec<AirdropItem>,
    pub summary: String,
    pub grounding_links: Vec<String>,
}

impl AirdropReport {
    /// Fallback when no JSON block could be extracted from the reply
    pub fn unstructured(chain_family: ChainFamily, grounding_links: Vec<String>) -> Self {
        Self {
            chain_family,
            airdrops: Vec::new(),
            summary: "Failed to structure data automatically.".into(),
            grounding_links,
        }
    }
}

/// Security analysis report
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityReport {
    pub chain_family: ChainFamily,
    pub risk_score: f32,
    pub is_flagged: bool,
    pub summary: String,
    pub alerts: Vec<SecurityAlert>,
    pub revoke_link: String,
    pub grounding_links: Vec<String>,
}

impl SecurityReport {
    /// Fallback when search produced nothing conclusive
    ///
    /// Keeps a deliberately low-but-nonzero risk score and a single
    /// manual-check alert so the report reads as guidance, not a verdict.
    pub fn manual_check(
        chain_family: ChainFamily,
        address: &str,
        grounding_links: Vec<String>,
    ) -> Self {
        Self {
            chain_family,
            risk_score: 20.0,
            is_flagged: false,
            summary: "Could not confirm reputation via search. Follow standard security procedures."
                .into(),
            alerts: vec![SecurityAlert {
                level: AlertLevel::Medium,
                title: "Manual Check".into(),
                description: "AI found no direct reports, but this does not guarantee safety."
                    .into(),
                action: "Use Revoke.cash".into(),
            }],
            revoke_link: revoke_link(chain_family, address),
            grounding_links,
        }
    }
}

/// Portfolio analysis report
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub chain_family: ChainFamily,
    pub summary: String,
    pub top_holdings: Vec<PortfolioItem>,
    pub defi_positions: Vec<PortfolioItem>,
    pub nfts: Vec<PortfolioItem>,
    pub tools: Vec<ToolLink>,
    pub grounding_links: Vec<String>,
}

impl PortfolioReport {
    /// Fallback when no JSON block could be extracted from the reply
    pub fn unstructured(
        chain_family: ChainFamily,
        address: &str,
        grounding_links: Vec<String>,
    ) -> Self {
        Self {
            chain_family,
            summary: "Could not extract detailed info. Please use the direct tools below.".into(),
            top_holdings: Vec::new(),
            defi_positions: Vec::new(),
            nfts: Vec::new(),
            tools: portfolio_tools(chain_family, address),
            grounding_links,
        }
    }

    /// Fallback when the gateway call itself failed
    ///
    /// No reply was received, so there are no grounding links to carry;
    /// the locally computed tools are still populated.
    pub fn unavailable(chain_family: ChainFamily, address: &str) -> Self {
        Self {
            summary: "Error during AI analysis. Use direct scanner links.".into(),
            ..Self::unstructured(chain_family, address, Vec::new())
        }
    }
}

/// One analysis report, tagged by the mode that produced it
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AnalysisReport {
    Airdrop(AirdropReport),
    Security(SecurityReport),
    Portfolio(PortfolioReport),
}

impl AnalysisReport {
    pub fn mode(&self) -> AnalysisMode {
        match self {
            Self::Airdrop(_) => AnalysisMode::Airdrop,
            Self::Security(_) => AnalysisMode::Security,
            Self::Portfolio(_) => AnalysisMode::Portfolio,
        }
    }
}
