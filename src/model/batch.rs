use std::time::Duration;

use crate::error::VerifyError;
use crate::model::verification::VerificationResult;

#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    Verified(Box<VerificationResult>),
    Failed(VerifyError),
}

/// One wallet's line in a batch run.
///
/// A failed check is counted as not eligible with zero tokens, but the
/// failure itself is kept so summaries can tell it apart from ineligibility.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub wallet: String,
    pub outcome: BatchOutcome,
    pub eligible: bool,
    pub token_amount: String,
}

impl BatchResult {
    pub fn verified(
        wallet: String,
        result: VerificationResult,
    ) -> Self {
        Self {
            wallet,
            eligible: result.eligible,
            token_amount: result.token_amount.clone(),
            outcome: BatchOutcome::Verified(Box::new(result)),
        }
    }

    pub fn failed(
        wallet: String,
        error: VerifyError,
    ) -> Self {
        Self {
            wallet,
            outcome: BatchOutcome::Failed(error),
            eligible: false,
            token_amount: "0".to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, BatchOutcome::Failed(_))
    }

    pub fn token_amount_value(&self) -> f64 {
        self.token_amount.trim().parse::<f64>().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub results: Vec<BatchResult>,
    // Delay awaited after each wallet; the last wallet has none
    pub delays: Vec<Duration>,
}

impl BatchReport {
    pub fn eligible(&self) -> impl Iterator<Item = &BatchResult> {
        self.results.iter().filter(|r| r.eligible)
    }

    pub fn eligible_count(&self) -> usize {
        self.eligible().count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    pub fn not_eligible_count(&self) -> usize {
        self.results.len() - self.eligible_count() - self.failed_count()
    }

    pub fn total_tokens(&self) -> f64 {
        self.eligible().map(BatchResult::token_amount_value).sum()
    }
}
