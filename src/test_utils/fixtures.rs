use std::collections::BTreeMap;

use serde_json::json;

use crate::model::PlatformStats;
use crate::model::TierStats;
use crate::model::VerificationResult;

/// Test fixtures for creating consistent test data
pub struct TestFixtures;

impl TestFixtures {
    pub const WALLET: &'static str = "2GpQzcKVQ6ggaqS5FYnKefTexNaHcAsXX8FYbWgbRaSN";

    /// Distinct well-formed wallets (up to 58 * 58)
    pub fn wallets(count: usize) -> Vec<String> {
        const BASE58: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
        (0..count)
            .map(|i| {
                let suffix = [BASE58[(i / BASE58.len()) % BASE58.len()], BASE58[i % BASE58.len()]];
                format!("{}{}", &Self::WALLET[..42], String::from_utf8_lossy(&suffix))
            })
            .collect()
    }

    pub fn eligible_result(token_amount: &str) -> VerificationResult {
        VerificationResult {
            wallet_address: Some(Self::WALLET.to_string()),
            eligible: true,
            tier: Some("3".to_string()),
            token_amount: token_amount.to_string(),
            claim_id: Some("clm_7f3a".to_string()),
            wallet_verified: true,
            account_linked: true,
            linked_username: Some("degen".to_string()),
            campaign_id: Some("season-1".to_string()),
            remaining_claims: Some("1200".to_string()),
            message: Some("You are eligible".to_string()),
            ..Default::default()
        }
    }

    pub fn ineligible_result() -> VerificationResult {
        VerificationResult {
            wallet_address: Some(Self::WALLET.to_string()),
            ..Default::default()
        }
    }

    pub fn trader_result() -> VerificationResult {
        let mut platforms = BTreeMap::new();
        platforms.insert(
            "axiom".to_string(),
            Some(PlatformStats { volume: Some(1500.0), trades: Some(12.0), pnl: Some(-20.5), fees: Some(3.25) }),
        );
        platforms.insert(
            "photon".to_string(),
            Some(PlatformStats { volume: Some(0.0), trades: Some(0.0), pnl: None, fees: None }),
        );

        VerificationResult {
            total_volume: Some(1500.0),
            pnl: Some(-20.5),
            trade_count: Some(12.0),
            fees_paid: Some(3.25),
            platforms: Some(platforms),
            ..Self::eligible_result("2500")
        }
    }

    pub fn tier_stats() -> TierStats {
        serde_json::from_value(json!({"tier1": 600, "tier2": 300, "tier3": 0, "tier12": 100, "total": 1000}))
            .expect("tier stats fixture")
    }
}
