use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::error;
use tracing::info;
use tracing::warn;

use super::batch::run_batch;
use crate::Result;
use crate::client::AirdropApi;
use crate::client::AirdropClient;
use crate::config::BatchConfig;
use crate::config::Config;
use crate::display;
use crate::display::ConsoleObserver;
use crate::err_with_loc;
use crate::model::BatchReport;
use crate::model::TierStats;
use crate::model::VerificationResult;
use crate::tracing::setup_tracing;

#[derive(Debug, Clone, Parser)]
#[command(name = "checker", version, about = "Check Solana wallets for airdrop eligibility")]
pub struct CheckerArgs {
    /// Wallet addresses to check; more than one runs a batch
    #[arg(value_name = "WALLET")]
    pub wallets: Vec<String>,

    /// Read newline-separated wallet addresses from a file. A bare `--file` is a usage error.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Show eligible-wallet counts per tier
    #[arg(long)]
    pub stats: bool,

    /// Config file (defaults to ./Config.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerMode {
    Usage,
    Stats,
    File(PathBuf),
    Single(String),
    Batch(Vec<String>),
}

impl CheckerArgs {
    /// `--stats` wins over `--file`, which wins over positional wallets.
    pub fn mode(&self) -> CheckerMode {
        if self.stats {
            CheckerMode::Stats
        } else if let Some(path) = &self.file {
            CheckerMode::File(path.clone())
        } else {
            match self.wallets.as_slice() {
                [] => CheckerMode::Usage,
                [wallet] => CheckerMode::Single(wallet.clone()),
                wallets => CheckerMode::Batch(wallets.to_vec()),
            }
        }
    }
}

/// Non-blank lines of a wallet list, untrimmed; the batch runner trims them.
pub fn read_wallet_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| err_with_loc!(format!("Error reading file {}: {}", path.display(), e)))?;
    Ok(content.lines().filter(|line| !line.trim().is_empty()).map(str::to_string).collect())
}

/// Command-line front end over an [`AirdropApi`].
pub struct Checker<A: AirdropApi> {
    pub api: A,
    pub batch: BatchConfig,
}

impl Checker<AirdropClient> {
    pub async fn run(args: CheckerArgs) -> Result<()> {
        dotenvy::dotenv().ok();

        let config = Config::load(args.config.as_deref())?;
        if let Err(e) = setup_tracing("checker", &config.logging) {
            eprintln!("{:#}", e);
        }
        info!("checker::config_loaded::{}", config.upstream.base_url);

        let checker = Checker {
            api: AirdropClient::for_cli(&config.upstream)?,
            batch: config.batch.clone(),
        };

        println!("{}", display::report::banner());
        checker.execute(args.mode()).await;
        Ok(())
    }
}

impl<A: AirdropApi> Checker<A> {
    pub async fn execute(
        &self,
        mode: CheckerMode,
    ) {
        match mode {
            CheckerMode::Usage => println!("{}", display::usage("checker")),
            CheckerMode::Stats => {
                if let Some(stats) = self.fetch_tier_stats().await {
                    println!("{}", display::tier_stats_report(&stats));
                }
            },
            CheckerMode::File(path) => match read_wallet_file(&path) {
                Ok(wallets) => {
                    self.check_wallets(&wallets).await;
                },
                Err(e) => {
                    error!("checker::wallet_file::{:#}", e);
                    println!("{}", format!("❌ {}", e.root_cause()).red());
                },
            },
            CheckerMode::Single(wallet) => {
                self.check_wallet(&wallet).await;
            },
            CheckerMode::Batch(wallets) => {
                self.check_wallets(&wallets).await;
            },
        }
    }

    /// Prints the wallet card, or the failure, and returns the data if there was any.
    pub async fn check_wallet(
        &self,
        wallet: &str,
    ) -> Option<VerificationResult> {
        match self.api.verify_wallet(wallet).await {
            Ok(result) => {
                println!("{}", display::wallet_report(wallet, &result));
                Some(result)
            },
            Err(e) => {
                if e.is_validation() {
                    info!("checker::check_wallet::rejected_input::{}::{}", wallet, e);
                } else {
                    warn!("checker::check_wallet::{}::{}", wallet, e);
                }
                println!("{}", display::failure_report(wallet, &e));
                None
            },
        }
    }

    pub async fn check_wallets(
        &self,
        wallets: &[String],
    ) -> BatchReport {
        let report = run_batch(&self.api, wallets, &self.batch, &mut ConsoleObserver).await;
        println!("{}", display::batch_summary(&report));
        report
    }

    pub async fn fetch_tier_stats(&self) -> Option<TierStats> {
        println!("{}", "📊 Fetching tier statistics...".yellow());
        match self.api.tier_stats().await {
            Ok(stats) => Some(stats),
            Err(e) => {
                warn!("checker::tier_stats::{}", e);
                println!("{}", display::tier_stats_failure(&e));
                None
            },
        }
    }
}
