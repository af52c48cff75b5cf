use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const MAX_RESULT_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Pause before a finished game is announced.
    pub result_delay_ms: u64,
    pub show_score: bool,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.result_delay_ms > MAX_RESULT_DELAY_MS {
            return Err(format!(
                "result_delay_ms must not exceed {} (got {})",
                MAX_RESULT_DELAY_MS, self.result_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            result_delay_ms: 100,
            show_score: true,
        }
    }
}
