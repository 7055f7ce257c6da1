//! # wallet-scout
//!
//! Search-grounded wallet analysis: classify a blockchain address, ask an
//! AI gateway for an airdrop, security, or portfolio report, and normalize
//! the free-text reply into a fully populated typed record.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐   ┌────────────┐   ┌─────────────┐   ┌─────────────┐
//! │ classify │──▶│   prompt   │──▶│  AI gateway │──▶│  normalize  │
//! │ (chain)  │   │ (per mode) │   │ (grounded)  │   │ or fallback │
//! └──────────┘   └────────────┘   └─────────────┘   └─────────────┘
//! ```
//!
//! ## Failure discipline
//!
//! - **Airdrop** - transport errors propagate; the caller decides what the
//!   user sees
//! - **Security / Portfolio** - transport errors degrade to fallback reports
//!   with conservative guidance; only a warning is logged
//! - **Normalization** - never fails; malformed model output yields the
//!   documented fallback record with grounding links preserved

pub mod analyzer;
pub mod chain;
pub mod links;
pub mod normalize;
pub mod prompt;
pub mod report;

pub use analyzer::WalletAnalyzer;
pub use chain::{classify, is_searchable, ChainFamily};
pub use links::{portfolio_tools, revoke_link};
pub use prompt::{build_prompt, ReportLanguage};
pub use report::{
    AirdropCategory, AirdropItem, AirdropReport, AirdropStatus, AlertLevel, AnalysisMode,
    AnalysisReport, HoldingKind, Likelihood, PortfolioItem, PortfolioReport, SecurityAlert,
    SecurityReport, ToolLink,
};
