use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde_json::Value;

use super::verification::de_opt_f64;

const TOTAL_KEY: &str = "total";
const TIER_PREFIX: &str = "tier";

/// Eligible-wallet counts per tier, e.g. `{"tier1": 10, "tier2": 0, "total": 10}`.
///
/// Counts may arrive as integers, floats or numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierStats {
    #[serde(default, deserialize_with = "de_count")]
    pub total: f64,
    #[serde(flatten)]
    pub tiers: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TierRow {
    pub label: String,
    pub tier_number: Option<u64>,
    pub count: f64,
    pub percentage: f64,
}

impl TierRow {
    pub fn display_name(&self) -> String {
        match self.tier_number {
            Some(number) => number.to_string(),
            None => self.label.clone(),
        }
    }

    pub fn percentage_label(&self) -> String {
        format!("{:.2}", self.percentage)
    }
}

fn de_count<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_opt_f64(deserializer)?.unwrap_or(0.0))
}

fn count_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn tier_number(label: &str) -> Option<u64> {
    label.strip_prefix(TIER_PREFIX).unwrap_or(label).trim().parse().ok()
}

impl TierStats {
    /// Non-empty tiers ordered by tier number; unnumbered labels go last.
    pub fn rows(&self) -> Vec<TierRow> {
        let mut rows: Vec<TierRow> = self
            .tiers
            .iter()
            .filter(|(label, _)| label.as_str() != TOTAL_KEY)
            .filter_map(|(label, count)| count_value(count).map(|count| (label, count)))
            .filter(|(_, count)| *count > 0.0)
            .map(|(label, count)| TierRow {
                label: label.clone(),
                tier_number: tier_number(label),
                count,
                percentage: if self.total > 0.0 { count / self.total * 100.0 } else { 0.0 },
            })
            .collect();

        rows.sort_by(|a, b| match (a.tier_number, b.tier_number) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.label.cmp(&b.label),
        });
        rows
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn stats(value: Value) -> TierStats {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn omits_empty_tiers_and_total() {
        let rows = stats(json!({"tier1": 10, "tier2": 0, "total": 10})).rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "tier1");
        assert_eq!(rows[0].percentage_label(), "100.00");
    }

    #[test]
    fn sorts_numerically() {
        let rows = stats(json!({"tier10": 1, "tier2": 2, "tier1": 3, "vip": 4, "total": 10})).rows();
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["tier1", "tier2", "tier10", "vip"]);
        assert_eq!(rows[2].display_name(), "10");
        assert_eq!(rows[3].display_name(), "vip");
        assert_eq!(rows[1].percentage_label(), "20.00");
    }

    #[test]
    fn accepts_float_and_string_counts() {
        let rows = stats(json!({"tier1": 10.0, "total": 10})).rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].percentage_label(), "100.00");

        let stats = stats(json!({"tier1": "3", "tier2": 1.0, "tier3": "0", "total": "4.0"}));
        assert_eq!(stats.total, 4.0);
        let rows = stats.rows();
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["tier1", "tier2"]);
        assert_eq!(rows[0].count, 3.0);
        assert_eq!(rows[0].percentage_label(), "75.00");
        assert_eq!(rows[1].percentage_label(), "25.00");
    }

    #[test]
    fn zero_total_does_not_divide() {
        let rows = stats(json!({"tier1": 5})).rows();
        assert_eq!(rows[0].percentage_label(), "0.00");
    }
}
