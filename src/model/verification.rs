use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// Wrapper the upstream puts around every payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Eligibility record for one wallet, as returned by the verify endpoint.
///
/// The upstream owns this schema. Every field is optional or defaulted so a
/// partial payload still decodes. Flags read `null` as false, and numeric
/// fields accept both JSON numbers and numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerificationResult {
    pub wallet_address: Option<String>,
    #[serde(deserialize_with = "de_bool")]
    pub eligible: bool,
    #[serde(deserialize_with = "de_bool")]
    pub claimed: bool,
    #[serde(deserialize_with = "de_bool")]
    pub claim_queued: bool,
    #[serde(deserialize_with = "de_opt_string")]
    pub tier: Option<String>,
    #[serde(deserialize_with = "de_token_amount")]
    pub token_amount: String,
    #[serde(deserialize_with = "de_opt_string")]
    pub claim_id: Option<String>,
    #[serde(deserialize_with = "de_bool")]
    pub wallet_verified: bool,
    #[serde(deserialize_with = "de_bool")]
    pub account_linked: bool,
    pub linked_username: Option<String>,

    #[serde(deserialize_with = "de_opt_f64")]
    pub total_volume: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub pnl: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub trade_count: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub fees_paid: Option<f64>,
    pub platforms: Option<BTreeMap<String, Option<PlatformStats>>>,

    // Only present for eligible wallets
    #[serde(deserialize_with = "de_opt_string")]
    pub campaign_id: Option<String>,
    #[serde(deserialize_with = "de_opt_string")]
    pub remaining_claims: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformStats {
    #[serde(deserialize_with = "de_opt_f64")]
    pub volume: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub trades: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub pnl: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub fees: Option<f64>,
}

impl PlatformStats {
    pub fn is_active(&self) -> bool {
        self.trades.unwrap_or(0.0) > 0.0 || self.volume.unwrap_or(0.0) > 0.0
    }
}

impl VerificationResult {
    pub fn has_trading_data(&self) -> bool {
        self.total_volume.is_some()
    }

    /// Platforms with any trades or volume, in name order.
    pub fn active_platforms(&self) -> Vec<(&str, &PlatformStats)> {
        self.platforms
            .iter()
            .flatten()
            .filter_map(|(name, stats)| stats.as_ref().map(|stats| (name.as_str(), stats)))
            .filter(|(_, stats)| stats.is_active())
            .collect()
    }

    pub fn token_amount_value(&self) -> f64 {
        self.token_amount.trim().parse::<f64>().unwrap_or(0.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Number(number) => number.to_string(),
            Scalar::Flag(flag) => flag.to_string(),
        }
    }
}

fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_string))
}

fn de_token_amount<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_opt_string(deserializer)?.unwrap_or_else(|| "0".to_string()))
}

// Truthiness: null, false, 0 and "" are false
fn de_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Flag(flag)) => flag,
        Some(Scalar::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Scalar::Text(text)) => !text.is_empty(),
        None => false,
    })
}

pub(crate) fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Number(number)) => number.as_f64(),
        Some(Scalar::Text(text)) => text.trim().parse::<f64>().ok(),
        Some(Scalar::Flag(_)) | None => None,
    })
}
