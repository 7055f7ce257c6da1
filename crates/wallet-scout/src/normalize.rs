//! Response Normalizer
//!
//! Turns raw gateway text into fully populated reports. The model is asked
//! to answer inside a fenced ```json``` block; this module extracts the
//! first such block, deserializes it strictly, and substitutes the
//! documented fallback record whenever extraction or validation fails.
//! Normalization itself never returns an error.

use serde::Deserialize;

use crate::chain::ChainFamily;
use crate::links::{portfolio_tools, revoke_link};
use crate::report::{
    AirdropItem, AirdropReport, PortfolioItem, PortfolioReport, SecurityAlert, SecurityReport,
};

const FENCE_OPEN: &str = "```json\n";
const FENCE_CLOSE: &str = "\n```";

/// First fenced JSON block in the reply, if any
fn extract_json_block(text: &str) -> Option<&str> {
    let start = text.find(FENCE_OPEN)? + FENCE_OPEN.len();
    let end = text[start..].find(FENCE_CLOSE)? + start;
    Some(&text[start..end])
}

// Payload shapes as the model emits them. Every scalar is optional so a
// terse reply still validates; missing lists collapse to empty.

#[derive(Debug, Deserialize)]
struct AirdropPayload {
    summary: Option<String>,
    #[serde(default)]
    airdrops: Vec<AirdropItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecurityPayload {
    summary: Option<String>,
    is_flagged: Option<bool>,
    risk_score: Option<f32>,
    #[serde(default)]
    alerts: Vec<SecurityAlert>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PortfolioPayload {
    summary: Option<String>,
    #[serde(default)]
    top_holdings: Vec<PortfolioItem>,
    #[serde(default)]
    defi_positions: Vec<PortfolioItem>,
    #[serde(default)]
    nfts: Vec<PortfolioItem>,
}

fn parse_block<T: for<'de> Deserialize<'de>>(raw_text: &str) -> Option<T> {
    let block = extract_json_block(raw_text)?;
    match serde_json::from_str(block) {
        Ok(payload) => Some(payload),
        Err(e) => {
            tracing::debug!("Report payload failed validation: {}", e);
            None
        }
    }
}

/// Normalize an airdrop reply
pub fn normalize_airdrops(
    raw_text: &str,
    grounding_links: &[String],
    chain: ChainFamily,
) -> AirdropReport {
    let Some(payload) = parse_block::<AirdropPayload>(raw_text) else {
        return AirdropReport::unstructured(chain, grounding_links.to_vec());
    };

    AirdropReport {
        chain_family: chain,
        airdrops: payload.airdrops,
        summary: payload
            .summary
            .unwrap_or_else(|| "No information found.".into()),
        grounding_links: grounding_links.to_vec(),
    }
}

/// Normalize a security reply
pub fn normalize_security(
    raw_text: &str,
    grounding_links: &[String],
    chain: ChainFamily,
    address: &str,
) -> SecurityReport {
    let Some(payload) = parse_block::<SecurityPayload>(raw_text) else {
        return SecurityReport::manual_check(chain, address, grounding_links.to_vec());
    };

    SecurityReport {
        chain_family: chain,
        risk_score: payload.risk_score.unwrap_or(10.0),
        is_flagged: payload.is_flagged.unwrap_or(false),
        summary: payload
            .summary
            .unwrap_or_else(|| "Analysis complete.".into()),
        alerts: payload.alerts,
        revoke_link: revoke_link(chain, address),
        grounding_links: grounding_links.to_vec(),
    }
}

/// Normalize a portfolio reply
pub fn normalize_portfolio(
    raw_text: &str,
    grounding_links: &[String],
    chain: ChainFamily,
    address: &str,
) -> PortfolioReport {
    let Some(payload) = parse_block::<PortfolioPayload>(raw_text) else {
        return PortfolioReport::unstructured(chain, address, grounding_links.to_vec());
    };

    PortfolioReport {
        chain_family: chain,
        summary: payload.summary.unwrap_or_else(|| {
            "Could not extract detailed info. Please use the direct tools below.".into()
        }),
        top_holdings: payload.top_holdings,
        defi_positions: payload.defi_positions,
        nfts: payload.nfts,
        tools: portfolio_tools(chain, address),
        grounding_links: grounding_links.to_vec(),
    }
}
