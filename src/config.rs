use std::path::Path;

use crate::error::ScoreError;

/// Feedback thresholds for the surrounding speaking-practice tool. These
/// shape the report layer only; alignment semantics never read them.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ScorerConfig {
    /// Minimum accuracy percentage for an attempt to count as passed.
    #[serde(default = "default_pass_accuracy_pct")]
    pub pass_accuracy_pct: u8,
    /// Attempts slower than this many words per minute are flagged as slow.
    #[serde(default = "default_slow_wpm")]
    pub slow_wpm: u32,
    /// Attempts faster than this many words per minute are flagged as rushed.
    #[serde(default = "default_fast_wpm")]
    pub fast_wpm: u32,
}

fn default_pass_accuracy_pct() -> u8 {
    80
}
fn default_slow_wpm() -> u32 {
    90
}
fn default_fast_wpm() -> u32 {
    160
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            pass_accuracy_pct: default_pass_accuracy_pct(),
            slow_wpm: default_slow_wpm(),
            fast_wpm: default_fast_wpm(),
        }
    }
}

impl ScorerConfig {
    pub fn load(path: &Path) -> Result<Self, ScoreError> {
        let data =
            std::fs::read_to_string(path).map_err(|e| ScoreError::io("read scorer config", e))?;
        serde_json::from_str(&data).map_err(|e| ScoreError::json("parse scorer config", e))
    }

    pub(crate) fn validate(&self) -> Result<(), ScoreError> {
        if self.pass_accuracy_pct > 100 {
            return Err(ScoreError::invalid_config(format!(
                "pass_accuracy_pct must be <= 100, got {}",
                self.pass_accuracy_pct
            )));
        }
        if self.slow_wpm >= self.fast_wpm {
            return Err(ScoreError::invalid_config(format!(
                "slow_wpm ({}) must be below fast_wpm ({})",
                self.slow_wpm, self.fast_wpm
            )));
        }
        Ok(())
    }
}
