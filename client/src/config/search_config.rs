use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Score each opening branch on its own blocking task.
    pub parallel: bool,
}

impl Validate for SearchConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}
