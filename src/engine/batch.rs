use std::time::Duration;

use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::client::AirdropApi;
use crate::config::BatchConfig;
use crate::error::VerifyError;
use crate::model::BatchReport;
use crate::model::BatchResult;
use crate::model::VerificationResult;

/// Pause between consecutive wallets in a batch.
///
/// Starts at `initial_delay_ms` and grows by `backoff_factor` (capped at
/// `max_delay_ms`) every time a wallet other than the first fails. It never
/// shrinks, even after later successes.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchDelay {
    current_ms: f64,
    factor: f64,
    max_ms: f64,
}

impl BatchDelay {
    pub fn new(config: &BatchConfig) -> Self {
        let initial = config.initial_delay_ms as f64;
        Self {
            current_ms: initial,
            factor: config.backoff_factor.max(1.0),
            max_ms: (config.max_delay_ms as f64).max(initial),
        }
    }

    pub fn current(&self) -> Duration {
        Duration::from_millis(self.current_ms.round() as u64)
    }

    /// Feed one wallet's outcome. Returns true when the delay was escalated.
    pub fn record(
        &mut self,
        index: usize,
        succeeded: bool,
    ) -> bool {
        if succeeded || index == 0 {
            return false;
        }
        self.current_ms = (self.current_ms * self.factor).min(self.max_ms);
        true
    }
}

/// Progress hooks for a batch run. All methods default to doing nothing.
pub trait BatchObserver {
    fn on_start(
        &mut self,
        _total: usize,
    ) {
    }

    fn on_progress(
        &mut self,
        _position: usize,
        _total: usize,
    ) {
    }

    fn on_verified(
        &mut self,
        _wallet: &str,
        _result: &VerificationResult,
    ) {
    }

    fn on_failure(
        &mut self,
        _wallet: &str,
        _error: &VerifyError,
    ) {
    }

    fn on_delay_increase(
        &mut self,
        _delay: Duration,
    ) {
    }
}

impl BatchObserver for () {}

/// Checks wallets one at a time, in order, sleeping between requests.
///
/// A failed wallet is recorded and skipped; it never aborts the batch and is
/// never retried.
pub async fn run_batch<A, O>(
    api: &A,
    addresses: &[String],
    config: &BatchConfig,
    observer: &mut O,
) -> BatchReport
where
    A: AirdropApi + ?Sized,
    O: BatchObserver + ?Sized,
{
    let total = addresses.len();
    let mut delay = BatchDelay::new(config);
    let mut report = BatchReport {
        results: Vec::with_capacity(total),
        delays: Vec::with_capacity(total.saturating_sub(1)),
    };

    info!("batch::start::{}_wallets", total);
    observer.on_start(total);

    for (index, raw) in addresses.iter().enumerate() {
        let wallet = raw.trim().to_string();
        observer.on_progress(index + 1, total);

        let result = match api.verify_wallet(&wallet).await {
            Ok(result) => {
                debug!("batch::verified::{}::eligible::{}", wallet, result.eligible);
                observer.on_verified(&wallet, &result);
                BatchResult::verified(wallet, result)
            },
            Err(e) => {
                if e.is_validation() {
                    debug!("batch::skipped::{}::{}", wallet, e);
                } else {
                    warn!("batch::failed::{}::{}", wallet, e);
                }
                observer.on_failure(&wallet, &e);
                BatchResult::failed(wallet, e)
            },
        };

        if delay.record(index, !result.is_failure()) {
            observer.on_delay_increase(delay.current());
        }
        report.results.push(result);

        if index + 1 < total {
            let pause = delay.current();
            report.delays.push(pause);
            tokio::time::sleep(pause).await;
        }
    }

    info!(
        "batch::done::checked::{}::eligible::{}::failed::{}",
        report.results.len(),
        report.eligible_count(),
        report.failed_count()
    );
    report
}
