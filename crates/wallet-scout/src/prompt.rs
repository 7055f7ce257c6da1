//! Prompt Builder
//!
//! Pure construction of the instruction text sent to the AI gateway. Each
//! analysis mode has one template; all three interpolate the address, the
//! chain family label, and the requested report language. The templates
//! instruct the model to answer inside a fenced ```json``` block, which is
//! what the normalizer later extracts.

use crate::chain::ChainFamily;
use crate::report::AnalysisMode;

/// Language the generated report should be written in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportLanguage {
    Bg,
    En,
    Ru,
    Zh,
    Hi,
    Ko,
    Fr,
    Es,
    De,
}

impl ReportLanguage {
    /// Resolve a two-letter code; unrecognized codes fall back to English
    pub fn from_code(code: &str) -> Self {
        match code {
            "bg" => Self::Bg,
            "ru" => Self::Ru,
            "zh" => Self::Zh,
            "hi" => Self::Hi,
            "ko" => Self::Ko,
            "fr" => Self::Fr,
            "es" => Self::Es,
            "de" => Self::De,
            _ => Self::En,
        }
    }

    /// Full language name as spelled inside the prompt
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bg => "Bulgarian",
            Self::En => "English",
            Self::Ru => "Russian",
            Self::Zh => "Chinese (Simplified)",
            Self::Hi => "Hindi",
            Self::Ko => "Korean",
            Self::Fr => "French",
            Self::Es => "Spanish",
            Self::De => "German",
        }
    }
}

impl Default for ReportLanguage {
    fn default() -> Self {
        Self::Bg
    }
}

/// Build the full prompt for one analysis
pub fn build_prompt(
    mode: AnalysisMode,
    address: &str,
    chain: ChainFamily,
    lang: ReportLanguage,
) -> String {
    match mode {
        AnalysisMode::Airdrop => airdrop_prompt(address, chain, lang),
        AnalysisMode::Security => security_prompt(address, chain, lang),
        AnalysisMode::Portfolio => portfolio_prompt(address, chain, lang),
    }
}

fn airdrop_prompt(address: &str, chain: ChainFamily, lang: ReportLanguage) -> String {
    format!(
        r#"Act as a senior cryptocurrency airdrop analyst.
I have a wallet address: {address} which appears to be a {chain} wallet.

Goal: Search for CURRENTLY ACTIVE or RECENTLY ANNOUNCED airdrops relevant to this network ecosystem.
Do not hallucinate. Use Google Search to find real, live data.

Please perform the following:
1. Search for "latest crypto airdrops {chain} 2024 2025".
2. Search for "active claims for {chain} users".
3. Identify 3-5 specific projects that are popular right now for potential eligibility or farming.
4. Determine the likely category (Layer 2, DeFi, etc.).

Output Format:
Provide a JSON object inside ```json``` code blocks.
The content MUST be in the {target} language.
The structure must be:
{{ "summary": "A brief overview (in {target}) of the current airdrop climate for this wallet type.", "airdrops": [{{ "name": "Project Name", "token": "Token Symbol (or TBD)", "status": "Active" or "Upcoming" or "Rumor", "likelihood": "High" or "Medium" or "Low", "description": "Short criteria in {target}.", "category": "L2" or "DeFi" or "NFT" or "Infrastructure" or "Other", "actionUrl": "Official URL if found, otherwise empty string" }}] }}"#,
        address = address,
        chain = chain.label(),
        target = lang.name(),
    )
}

fn security_prompt(address: &str, chain: ChainFamily, lang: ReportLanguage) -> String {
    format!(
        r#"Act as a Blockchain Security Auditor.
Target Address: {address} ({chain}).

Goal: Perform a reputation check and generate a security checklist.

Tasks:
1. Search Google for "{address} scam report", "{address} hack", "{address} phishing database", "{address} etherscan comments".
2. If you find SPECIFIC reports linking this address to scams, set "isFlagged" to true.
3. Generate a security assessment based on common vectors for {chain} (e.g. unlimited token approvals, malicious signatures).
4. Provide advice on how to use Revoke.cash or similar tools.

Output Format (JSON in ```json```):
The content MUST be in the {target} language.
{{ "summary": "Summary in {target}. If the address is clean in search results, say 'No public reports found, but always be careful'. If flagged, warn clearly.", "isFlagged": boolean (true if search results indicate a known scammer/hacker address), "riskScore": number (10-100 based on search findings. 10 is low risk/clean, 90+ is confirmed scam address), "alerts": [{{ "level": "Critical" | "High" | "Medium" | "Low" | "Safe", "title": "Title in {target}", "description": "Description in {target}", "action": "Actionable advice in {target}" }}] }}"#,
        address = address,
        chain = chain.label(),
        target = lang.name(),
    )
}

fn portfolio_prompt(address: &str, chain: ChainFamily, lang: ReportLanguage) -> String {
    format!(
        r#"Act as a Crypto Portfolio Manager.
Target Address: {address} ({chain}).

Goal: Provide a portfolio summary based on PUBLIC SEARCH DATA.

Note: Since you cannot query the blockchain directly for real-time integer balances, you must:
1. Search for this address to see if it belongs to a known entity (Whale, Exchange, Influencer).
2. If known, list their reported top holdings.
3. If unknown (regular user), list the MAJOR Protocols and Networks that are popular for {chain} right now, as "Likely Places to Check".
4. Identify standard Staking or Lending pools relevant to this chain.

Output Format (JSON in ```json```):
The content MUST be in the {target} language.
{{ "summary": "{target} summary. If address is generic, say 'This appears to be a personal wallet. Use links below for exact balances' in {target}. If it is a known entity (e.g. Vitalik), describe it.", "topHoldings": [{{ "name": "Name (e.g. Ethereum)", "type": "Token", "network": "Ethereum", "url": "Link to CoinGecko or similar" }}], "defiPositions": [{{ "name": "Protocol Name (e.g. Uniswap V3)", "type": "DeFi Pool", "network": "Ethereum", "url": "Link to protocol" }}], "nfts": [{{ "name": "Collection Name", "type": "NFT", "network": "Ethereum", "url": "Link to collection" }}] }}"#,
        address = address,
        chain = chain.label(),
        target = lang.name(),
    )
}
