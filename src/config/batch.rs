use serde::Deserialize;
use serde::Serialize;

use crate::constants::BATCH_BACKOFF_FACTOR;
use crate::constants::BATCH_INITIAL_DELAY_MS;
use crate::constants::BATCH_MAX_DELAY_MS;
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub initial_delay_ms: u64,
    pub backoff_factor: f64,
    pub max_delay_ms: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: BATCH_INITIAL_DELAY_MS,
            backoff_factor: BATCH_BACKOFF_FACTOR,
            max_delay_ms: BATCH_MAX_DELAY_MS,
        }
    }
}

impl BatchConfig {
    // The delay must never shrink during a batch
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.backoff_factor.is_finite() || self.backoff_factor < 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "batch.backoff_factor",
                reason: format!("must be a finite number >= 1.0, got {}", self.backoff_factor),
            });
        }
        if self.max_delay_ms < self.initial_delay_ms {
            return Err(ConfigError::InvalidValue {
                field: "batch.max_delay_ms",
                reason: format!(
                    "must not be lower than initial_delay_ms ({} < {})",
                    self.max_delay_ms, self.initial_delay_ms
                ),
            });
        }
        Ok(())
    }
}
