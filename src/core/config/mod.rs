use serde::{Deserialize, Serialize};
use crate::core::error::CoreError;

pub const DEFAULT_MIN_STORAGE_LEN: usize = 50;
pub const DEFAULT_MAX_WASTE_RATIO: f64 = 0.25;

/// When a queue drops its tombstoned prefix.
///
/// Compaction runs after a dequeue once the backing storage holds more than
/// `min_storage_len` slots and more than `max_waste_ratio` of them are
/// tombstones.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompactionPolicy {
    pub min_storage_len: usize,
    pub max_waste_ratio: f64,
}

impl Default for CompactionPolicy {
    fn default() -> Self {
        Self {
            min_storage_len: DEFAULT_MIN_STORAGE_LEN,
            max_waste_ratio: DEFAULT_MAX_WASTE_RATIO,
        }
    }
}

impl CompactionPolicy {
    /// Build a validated policy
    pub fn new(min_storage_len: usize, max_waste_ratio: f64) -> Result<Self, CoreError> {
        let policy = Self {
            min_storage_len,
            max_waste_ratio,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Parse a policy from JSON; missing fields fall back to the defaults
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let policy: Self = serde_json::from_str(raw)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.max_waste_ratio.is_finite() {
            return Err(CoreError::invalid_policy(format!(
                "max_waste_ratio must be finite, got {}",
                self.max_waste_ratio
            )));
        }
        // head/len never exceeds 1.0, so a ratio of 1.0 would never compact
        if !(0.0..1.0).contains(&self.max_waste_ratio) {
            return Err(CoreError::invalid_policy(format!(
                "max_waste_ratio must be within [0, 1), got {}",
                self.max_waste_ratio
            )));
        }
        Ok(())
    }

    /// Whether a storage of `storage_len` slots with `head` tombstones is due
    pub fn should_compact(&self, head: usize, storage_len: usize) -> bool {
        if storage_len <= self.min_storage_len || storage_len == 0 {
            return false;
        }
        let waste = head as f64 / storage_len as f64;
        waste > self.max_waste_ratio
    }
}
