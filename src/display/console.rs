use std::time::Duration;

use colored::Colorize;

use super::report::failure_report;
use super::report::wallet_report;
use crate::engine::BatchObserver;
use crate::error::VerifyError;
use crate::model::VerificationResult;
use crate::utils::format_grouped;

/// Prints batch progress to stdout as it happens.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl BatchObserver for ConsoleObserver {
    fn on_start(
        &mut self,
        total: usize,
    ) {
        println!("{}", format!("🚀 Starting batch check for {} wallets...\n", total).cyan());
    }

    fn on_progress(
        &mut self,
        position: usize,
        total: usize,
    ) {
        println!("{}", format!("[{}/{}]", position, total).dimmed());
    }

    fn on_verified(
        &mut self,
        wallet: &str,
        result: &VerificationResult,
    ) {
        println!("{}", wallet_report(wallet, result));
    }

    fn on_failure(
        &mut self,
        wallet: &str,
        error: &VerifyError,
    ) {
        println!("{}", failure_report(wallet, error));
    }

    fn on_delay_increase(
        &mut self,
        delay: Duration,
    ) {
        println!(
            "{}",
            format!("⏳ Increasing delay to {}s due to rate limiting...", format_grouped(delay.as_secs_f64())).yellow()
        );
    }
}
