//! Wallet Chain Classification
//!
//! Guesses the chain family of an address from its shape alone. The rules
//! are heuristic and overlapping by construction; rule order is the
//! tie-break and is part of the contract (downstream prompt wording depends
//! on it), so it must not be reordered or "improved". No checksum or
//! on-chain validation is performed.

use serde::{Deserialize, Serialize};

/// Coarse blockchain-ecosystem classification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChainFamily {
    Evm,
    Solana,
    Bitcoin,
    Cosmos,
    Unknown,
}

impl ChainFamily {
    /// Human-readable label used inside prompts
    pub fn label(&self) -> &'static str {
        match self {
            Self::Evm => "EVM (Ethereum/L2s)",
            Self::Solana => "Solana",
            Self::Bitcoin => "Bitcoin",
            Self::Cosmos => "Cosmos",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for ChainFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify an address into a chain family
///
/// Total function: anything unrecognized is `Unknown`, never an error.
/// First matching rule wins:
///
/// 1. `0x` prefix and exactly 42 characters -> EVM
/// 2. length in (30, 45) without a `0x` prefix -> Solana
/// 3. `bc1`, `1`, or `3` prefix -> Bitcoin
/// 4. `cosmos` prefix -> Cosmos
///
/// Note the deliberate overlap: a 32-character address starting with `1`
/// classifies as Solana by rule order, not Bitcoin.
pub fn classify(address: &str) -> ChainFamily {
    if address.starts_with("0x") && address.len() == 42 {
        return ChainFamily::Evm;
    }
    if address.len() > 30 && address.len() < 45 && !address.starts_with("0x") {
        return ChainFamily::Solana;
    }
    if address.starts_with("bc1") || address.starts_with('1') || address.starts_with('3') {
        return ChainFamily::Bitcoin;
    }
    if address.starts_with("cosmos") {
        return ChainFamily::Cosmos;
    }
    ChainFamily::Unknown
}

/// Whether an address is long enough to be worth searching
///
/// Submissions failing this gate are rejected before any classification,
/// prompt build, or gateway call happens.
pub fn is_searchable(address: &str) -> bool {
    address.trim().len() > 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_evm() {
        assert_eq!(
            classify("0x1234567890123456789012345678901234567890"),
            ChainFamily::Evm
        );
    }

    #[test]
    fn test_classify_evm_wrong_length() {
        // 0x prefix but not 42 chars: too short for EVM, too short for Solana
        assert_eq!(classify("0x1234"), ChainFamily::Unknown);
        // 0x prefix at Solana length still never classifies as Solana
        assert_eq!(
            classify("0x12345678901234567890123456789012"),
            ChainFamily::Unknown
        );
    }

    #[test]
    fn test_classify_solana() {
        assert_eq!(
            classify("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263"),
            ChainFamily::Solana
        );
    }

    #[test]
    fn test_classify_bitcoin_prefixes() {
        assert_eq!(classify("bc1qxyz12345"), ChainFamily::Bitcoin);
        assert_eq!(classify("1BvBMSEYstWe"), ChainFamily::Bitcoin);
        assert_eq!(classify("3J98t1WpEZ73"), ChainFamily::Bitcoin);
    }

    #[test]
    fn test_classify_legacy_bitcoin_at_solana_length_is_solana() {
        // 34 chars starting with "1": matches both the Solana and Bitcoin
        // rules; rule order makes it Solana
        let legacy = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";
        assert_eq!(legacy.len(), 34);
        assert_eq!(classify(legacy), ChainFamily::Solana);
    }

    #[test]
    fn test_classify_cosmos() {
        assert_eq!(classify("cosmos1abc"), ChainFamily::Cosmos);
    }

    #[test]
    fn test_classify_cosmos_at_solana_length_is_solana() {
        // 43 chars lands in the Solana range before the cosmos rule is
        // reached; a full 45-char address classifies as Cosmos
        let short = "cosmos1vlthgax23ca9syk7xgaz347xmf4nunefw3cn";
        assert_eq!(classify(short), ChainFamily::Solana);
        let full = "cosmos1vlthgax23ca9syk7xgaz347xmf4nunefw3cnv8";
        assert_eq!(full.len(), 45);
        assert_eq!(classify(full), ChainFamily::Cosmos);
    }

    #[test]
    fn test_classify_garbage() {
        assert_eq!(classify(""), ChainFamily::Unknown);
        assert_eq!(classify("hello"), ChainFamily::Unknown);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let address = "0x1234567890123456789012345678901234567890";
        assert_eq!(classify(address), classify(address));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ChainFamily::Evm.label(), "EVM (Ethereum/L2s)");
        assert_eq!(ChainFamily::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_serde_tags() {
        let tag = serde_json::to_string(&ChainFamily::Evm).unwrap();
        assert_eq!(tag, "\"EVM\"");
        let tag = serde_json::to_string(&ChainFamily::Solana).unwrap();
        assert_eq!(tag, "\"SOLANA\"");
    }

    #[test]
    fn test_searchable_gate() {
        assert!(!is_searchable("short"));
        assert!(!is_searchable("     0x1234       "));
        assert!(is_searchable("0x1234567890123456789012345678901234567890"));
    }
}
