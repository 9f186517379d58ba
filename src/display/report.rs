use colored::ColoredString;
use colored::Colorize;

use crate::constants::EXAMPLE_WALLET;
use crate::error::VerifyError;
use crate::model::BatchReport;
use crate::model::TierRow;
use crate::model::TierStats;
use crate::model::VerificationResult;
use crate::utils::format_currency;
use crate::utils::format_grouped;
use crate::utils::format_token_amount;

const RULE_WIDTH: usize = 60;

fn rule() -> ColoredString {
    "=".repeat(RULE_WIDTH).cyan()
}

fn header(
    lines: &mut Vec<String>,
    title: &str,
) {
    lines.push(String::new());
    lines.push(rule().to_string());
    lines.push(title.bold().cyan().to_string());
    lines.push(rule().to_string());
}

fn footer(lines: &mut Vec<String>) {
    lines.push(rule().to_string());
    lines.push(String::new());
}

fn yes_no(
    flag: bool,
    yes: fn(&str) -> ColoredString,
    no: fn(&str) -> ColoredString,
) -> ColoredString {
    if flag { yes("YES") } else { no("NO") }
}

pub fn banner() -> String {
    format!("{}\n{}\n", "🌟 Solana Airdrop Checker - Trade.fun".bold().cyan(), "=".repeat(50).cyan())
}

pub fn usage(program: &str) -> String {
    [
        "Usage:".bold().to_string(),
        format!("  Single wallet: {} <wallet_address>", program),
        format!("  Multiple wallets: {} <wallet1> <wallet2> <wallet3>...", program),
        format!("  From file: {} --file wallets.txt", program),
        format!("  Tier statistics: {} --stats", program),
        String::new(),
        "Example:".bold().to_string(),
        format!("  {} {}", program, EXAMPLE_WALLET),
        format!("  {} --stats", program),
        String::new(),
    ]
    .join("\n")
}

/// Full status card for one wallet.
pub fn wallet_report(
    wallet: &str,
    data: &VerificationResult,
) -> String {
    let mut lines = Vec::new();
    header(&mut lines, "📊 WALLET AIRDROP STATUS");

    let address = data.wallet_address.as_deref().unwrap_or(wallet);
    lines.push(format!("🔗 Wallet Address: {}", address).white().to_string());
    lines.push(format!("✅ Eligible: {}", yes_no(data.eligible, |s| s.green(), |s| s.red())));
    lines.push(format!("🎁 Claimed: {}", yes_no(data.claimed, |s| s.yellow(), |s| s.green())));
    lines.push(format!("⏳ Claim Queued: {}", yes_no(data.claim_queued, |s| s.yellow(), |s| s.white())));

    if data.eligible {
        lines.push(format!("🏆 Tier: {}", data.tier.as_deref().unwrap_or("-")).cyan().to_string());
        lines.push(format!("💰 Token Amount: {} tokens", format_token_amount(&data.token_amount)).green().to_string());
        lines.push(format!("🆔 Claim ID: {}", data.claim_id.as_deref().unwrap_or("-")).dimmed().to_string());
    }

    lines.push(String::new());
    lines.push("📋 VERIFICATION STATUS".bold().yellow().to_string());
    lines.push(format!("🔐 Wallet Verified: {}", yes_no(data.wallet_verified, |s| s.green(), |s| s.red())));
    lines.push(format!("🔗 Account Linked: {}", yes_no(data.account_linked, |s| s.green(), |s| s.red())));
    if let Some(username) = data.linked_username.as_deref().filter(|u| !u.is_empty()) {
        lines.push(format!("👤 Linked Username: {}", username).cyan().to_string());
    }

    lines.push(String::new());
    lines.push("📈 TRADING STATISTICS".bold().blue().to_string());
    match data.total_volume {
        Some(volume) => {
            lines.push(format!("💹 Total Volume: ${}", format_currency(volume)).blue().to_string());
            lines.push(format!("💰 PnL: ${}", format_currency(data.pnl.unwrap_or(0.0))).white().to_string());
            lines.push(format!("🔢 Trade Count: {}", data.trade_count.unwrap_or(0.0)).cyan().to_string());
            lines.push(format!("💸 Fees Paid: ${}", format_currency(data.fees_paid.unwrap_or(0.0))).yellow().to_string());

            if data.platforms.is_some() {
                lines.push(String::new());
                lines.push("🏢 PLATFORM BREAKDOWN".bold().magenta().to_string());
                let active = data.active_platforms();
                if active.is_empty() {
                    lines.push("  No trading activity found".dimmed().to_string());
                }
                for (platform, stats) in active {
                    lines.push(format!("  {}:", platform).bold().to_string());
                    lines.push(format!("    📊 Volume: ${}", format_currency(stats.volume.unwrap_or(0.0))));
                    lines.push(format!("    🔢 Trades: {}", stats.trades.unwrap_or(0.0)));
                    lines.push(format!("    💰 PnL: ${}", format_currency(stats.pnl.unwrap_or(0.0))));
                    if let Some(fees) = stats.fees.filter(|f| *f != 0.0) {
                        lines.push(format!("    💸 Fees: ${}", format_currency(fees)));
                    }
                }
            }
        },
        None => lines.push("  No trading data available for this wallet".dimmed().to_string()),
    }

    if data.eligible {
        lines.push(String::new());
        lines.push("🎯 AIRDROP DETAILS".bold().green().to_string());
        lines.push(format!("📅 Campaign: {}", data.campaign_id.as_deref().unwrap_or("-")).green().to_string());
        lines.push(format!("🎫 Remaining Claims: {}", data.remaining_claims.as_deref().unwrap_or("-")).cyan().to_string());
        if let Some(message) = data.message.as_deref().filter(|m| !m.is_empty()) {
            lines.push(format!("💬 Message: {}", message).white().to_string());
        }
    }

    footer(&mut lines);
    lines.join("\n")
}

pub fn failure_report(
    wallet: &str,
    error: &VerifyError,
) -> String {
    let mut lines = Vec::new();
    match error {
        VerifyError::Rejected(message) => {
            lines.push(format!("❌ Failed to check wallet: {}", wallet).red().to_string());
            lines.push(format!("   Message: {}", message).red().to_string());
        },
        VerifyError::Upstream { status, message } => {
            let kind = error.upstream_status().unwrap_or(crate::error::UpstreamStatus::Other(*status));
            lines.push(format!("❌ Error checking wallet {}:", wallet).red().to_string());
            let status_line = match kind.headline() {
                Some(headline) => format!("   Status: {} - {}", status, headline),
                None => format!("   Status: {}", status),
            };
            lines.push(status_line.red().to_string());
            lines.push(format!("   Message: {}", kind.cli_message(message.as_deref())).red().to_string());
        },
        VerifyError::Network(_) => {
            lines.push(format!("❌ Error checking wallet {}:", wallet).red().to_string());
            lines.push("   Network error: Unable to reach API server".red().to_string());
            lines.push("   Please check your internet connection and try again.".red().to_string());
        },
        VerifyError::MissingAddress | VerifyError::InvalidAddress(_) | VerifyError::Local(_) => {
            lines.push(format!("❌ Error checking wallet {}:", wallet).red().to_string());
            lines.push(format!("   Error: {}", error).red().to_string());
        },
    }
    lines.join("\n")
}

pub fn tier_stats_failure(error: &VerifyError) -> String {
    match error {
        VerifyError::Rejected(_) => "❌ Failed to fetch tier statistics".red().to_string(),
        VerifyError::Upstream { status, .. } => {
            format!("{}\n{}", "❌ Error fetching tier statistics:".red(), format!("   Status: {}", status).red())
        },
        VerifyError::Network(_) => {
            format!("{}\n{}", "❌ Error fetching tier statistics:".red(), "   Network error: Unable to reach API".red())
        },
        other => format!("{}\n{}", "❌ Error fetching tier statistics:".red(), format!("   Error: {}", other).red()),
    }
}

fn tier_line(row: &TierRow) -> ColoredString {
    let line = format!(
        "🏆 Tier {}: {} wallets ({}%)",
        row.display_name(),
        format_grouped(row.count),
        row.percentage_label()
    );
    match row.tier_number {
        Some(1..=3) => line.green(),
        Some(4..=6) => line.yellow(),
        Some(7..=10) => line.cyan(),
        _ => line.magenta(),
    }
}

pub fn tier_stats_report(stats: &TierStats) -> String {
    let mut lines = Vec::new();
    header(&mut lines, "🏆 AIRDROP TIER STATISTICS");
    lines.push(format!("📊 Total Eligible Wallets: {}", format_grouped(stats.total)).bold().white().to_string());
    lines.push(String::new());
    lines.extend(stats.rows().iter().map(|row| tier_line(row).to_string()));
    footer(&mut lines);
    lines.join("\n")
}

pub fn batch_summary(report: &BatchReport) -> String {
    let mut lines = Vec::new();
    header(&mut lines, "📊 BATCH CHECK SUMMARY");

    lines.push(format!("📝 Total Wallets Checked: {}", report.results.len()).white().to_string());
    lines.push(format!("✅ Eligible Wallets: {}", report.eligible_count()).green().to_string());
    lines.push(format!("❌ Not Eligible: {}", report.not_eligible_count()).red().to_string());
    lines.push(format!("⚠️ Failed Checks: {}", report.failed_count()).yellow().to_string());
    lines.push(format!("💰 Total Tokens: {}", format_grouped(report.total_tokens())).yellow().to_string());

    if report.eligible_count() > 0 {
        lines.push(String::new());
        lines.push("🎁 ELIGIBLE WALLETS:".bold().green().to_string());
        for (index, result) in report.eligible().enumerate() {
            lines.push(
                format!("  {}. {} - {} tokens", index + 1, result.wallet, format_token_amount(&result.token_amount))
                    .green()
                    .to_string(),
            );
        }
    }

    footer(&mut lines);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::BatchResult;
    use crate::test_utils::fixtures::TestFixtures;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn eligible_wallet_shows_grouped_tokens_and_details() {
        plain();
        let text = wallet_report(TestFixtures::WALLET, &TestFixtures::eligible_result("1234567.5"));
        assert!(text.contains("✅ Eligible: YES"));
        assert!(text.contains("💰 Token Amount: 1,234,567.5 tokens"));
        assert!(text.contains("🏆 Tier: 3"));
        assert!(text.contains("👤 Linked Username: degen"));
        assert!(text.contains("No trading data available for this wallet"));
        assert!(text.contains("📅 Campaign: season-1"));
        assert!(text.contains("💬 Message: You are eligible"));
    }

    #[test]
    fn ineligible_wallet_hides_airdrop_details() {
        plain();
        let text = wallet_report(TestFixtures::WALLET, &TestFixtures::ineligible_result());
        assert!(text.contains("✅ Eligible: NO"));
        assert!(!text.contains("Token Amount"));
        assert!(!text.contains("AIRDROP DETAILS"));
    }

    #[test]
    fn platform_breakdown_lists_active_platforms_only() {
        plain();
        let text = wallet_report(TestFixtures::WALLET, &TestFixtures::trader_result());
        assert!(text.contains("💹 Total Volume: $1500.00"));
        assert!(text.contains("💰 PnL: $-20.50"));
        assert!(text.contains("  axiom:"));
        assert!(text.contains("    💸 Fees: $3.25"));
        assert!(!text.contains("photon"));
    }

    #[test]
    fn rate_limit_failure_wording() {
        plain();
        let text = failure_report("w", &VerifyError::Upstream { status: 429, message: None });
        assert_eq!(
            text,
            "❌ Error checking wallet w:\n   Status: 429 - Rate Limited\n   Message: Too many requests. Please wait a \
             moment and try again."
        );
    }

    #[test]
    fn other_status_passes_upstream_message() {
        plain();
        let text = failure_report("w", &VerifyError::Upstream { status: 403, message: Some("Forbidden".into()) });
        assert!(text.contains("   Status: 403\n"));
        assert!(text.contains("   Message: Forbidden"));
    }

    #[test]
    fn tier_report_lists_non_empty_tiers_in_order() {
        plain();
        let text = tier_stats_report(&TestFixtures::tier_stats());
        assert!(text.contains("📊 Total Eligible Wallets: 1,000"));
        let tier1 = text.find("🏆 Tier 1: 600 wallets (60.00%)").unwrap();
        let tier2 = text.find("🏆 Tier 2: 300 wallets (30.00%)").unwrap();
        let tier12 = text.find("🏆 Tier 12: 100 wallets (10.00%)").unwrap();
        assert!(tier1 < tier2 && tier2 < tier12);
        assert!(!text.contains("Tier 3:"));
    }

    #[test]
    fn summary_counts_failures_separately() {
        plain();
        let report = BatchReport {
            results: vec![
                BatchResult::verified("walletA".into(), TestFixtures::eligible_result("1500")),
                BatchResult::verified("walletB".into(), TestFixtures::ineligible_result()),
                BatchResult::failed("walletC".into(), VerifyError::Network("down".into())),
                BatchResult::verified("walletD".into(), TestFixtures::eligible_result("250.5")),
            ],
            delays: vec![],
        };

        let rule = "=".repeat(60);
        let expected = [
            "",
            rule.as_str(),
            "📊 BATCH CHECK SUMMARY",
            rule.as_str(),
            "📝 Total Wallets Checked: 4",
            "✅ Eligible Wallets: 2",
            "❌ Not Eligible: 1",
            "⚠️ Failed Checks: 1",
            "💰 Total Tokens: 1,750.5",
            "",
            "🎁 ELIGIBLE WALLETS:",
            "  1. walletA - 1,500 tokens",
            "  2. walletD - 250.5 tokens",
            rule.as_str(),
            "",
        ]
        .join("\n");
        assert_eq!(batch_summary(&report), expected);
    }

    #[test]
    fn usage_mentions_every_mode() {
        plain();
        let text = usage("checker");
        assert!(text.contains("checker --file wallets.txt"));
        assert!(text.contains("checker --stats"));
        assert!(text.contains(EXAMPLE_WALLET));
    }
}
