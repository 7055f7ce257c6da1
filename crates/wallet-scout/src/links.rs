//! Direct Tool Links
//!
//! Deterministic explorer and dashboard references computed locally from
//! the chain family and address. These never depend on the AI gateway, so
//! they stay populated even when a report degrades to a fallback.

use crate::chain::ChainFamily;
use crate::report::ToolLink;

/// Portfolio tool set for a chain family, with the address interpolated
pub fn portfolio_tools(chain: ChainFamily, address: &str) -> Vec<ToolLink> {
    match chain {
        ChainFamily::Evm => vec![
            ToolLink::new(
                "DeBank",
                format!("https://debank.com/profile/{address}"),
                "View all DeFi positions and balances.",
            ),
            ToolLink::new(
                "Zapper",
                format!("https://zapper.xyz/account/{address}"),
                "Portfolio management and NFT.",
            ),
            ToolLink::new(
                "OpenSea",
                format!("https://opensea.io/{address}"),
                "NFT Collection viewer.",
            ),
            ToolLink::new(
                "Etherscan",
                format!("https://etherscan.io/address/{address}"),
                "Transaction history.",
            ),
        ],
        ChainFamily::Solana => vec![
            ToolLink::new(
                "Step Finance",
                format!("https://app.step.finance/en/dashboard?watch={address}"),
                "Solana Dashboard for all positions.",
            ),
            ToolLink::new(
                "SolanaFM",
                format!("https://solana.fm/address/{address}"),
                "Explorer for Solana.",
            ),
            ToolLink::new(
                "Magic Eden",
                format!("https://magiceden.io/u/{address}"),
                "NFT Portfolio.",
            ),
        ],
        _ => vec![ToolLink::new(
            "Blockchain.com",
            format!("https://www.blockchain.com/explorer/addresses/btc/{address}"),
            "Bitcoin Explorer",
        )],
    }
}

/// Approval-revocation URL for a chain family
pub fn revoke_link(chain: ChainFamily, address: &str) -> String {
    match chain {
        ChainFamily::Evm => format!("https://revoke.cash/address/{address}"),
        ChainFamily::Solana => "https://famousfoxes.com/revoke".into(),
        _ => "https://revoke.cash".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVM_ADDR: &str = "0x1234567890123456789012345678901234567890";

    #[test]
    fn test_evm_tools_interpolate_address() {
        let tools = portfolio_tools(ChainFamily::Evm, EVM_ADDR);

        assert_eq!(tools.len(), 4);
        assert_eq!(tools[0].name, "DeBank");
        assert_eq!(tools[0].url, format!("https://debank.com/profile/{EVM_ADDR}"));
        assert_eq!(tools[3].name, "Etherscan");
        assert_eq!(
            tools[3].url,
            format!("https://etherscan.io/address/{EVM_ADDR}")
        );
    }

    #[test]
    fn test_solana_tools() {
        let addr = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";
        let tools = portfolio_tools(ChainFamily::Solana, addr);

        assert_eq!(tools.len(), 3);
        assert_eq!(tools[0].name, "Step Finance");
        assert_eq!(
            tools[0].url,
            format!("https://app.step.finance/en/dashboard?watch={addr}")
        );
        assert_eq!(tools[2].name, "Magic Eden");
    }

    #[test]
    fn test_other_chains_get_bitcoin_explorer() {
        for chain in [ChainFamily::Bitcoin, ChainFamily::Cosmos, ChainFamily::Unknown] {
            let tools = portfolio_tools(chain, "bc1qxyz12345");
            assert_eq!(tools.len(), 1);
            assert_eq!(tools[0].name, "Blockchain.com");
            assert!(tools[0].url.ends_with("/btc/bc1qxyz12345"));
        }
    }

    #[test]
    fn test_revoke_links_per_chain() {
        assert_eq!(
            revoke_link(ChainFamily::Evm, EVM_ADDR),
            format!("https://revoke.cash/address/{EVM_ADDR}")
        );
        assert_eq!(
            revoke_link(ChainFamily::Solana, "anything"),
            "https://famousfoxes.com/revoke"
        );
        assert_eq!(revoke_link(ChainFamily::Bitcoin, "x"), "https://revoke.cash");
        assert_eq!(revoke_link(ChainFamily::Unknown, "x"), "https://revoke.cash");
    }

    #[test]
    fn test_tool_resolution_is_idempotent() {
        let first = portfolio_tools(ChainFamily::Evm, EVM_ADDR);
        let second = portfolio_tools(ChainFamily::Evm, EVM_ADDR);
        assert_eq!(first, second);
    }
}
