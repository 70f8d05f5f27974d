//! # Difficulty Configuration Module
//!
//! Central home for every tuning value the engine consumes: global
//! bounds, tier thresholds, and one parameter bundle per built-in
//! modifier.
//!
//! ## Usage
//! ```rust
//! use dda_core::config::DifficultyConfig;
//! use dda_core::stats::GameStatistics;
//!
//! let hand_tuned = DifficultyConfig::default();
//! let generated = DifficultyConfig::from_stats(&GameStatistics::default()).unwrap();
//! ```

mod generator;
mod params;

pub use generator::generate_all_from_stats;
pub use params::{
    ComebackParams, CompletionRateParams, DifficultyBounds, LossStreakParams, RageQuitParams,
    SessionLengthParams, TierThresholds, TimeDecayParams, WinStreakParams,
};

use serde::{Deserialize, Serialize};

use crate::stats::{GameStatistics, StatsError};

/// Full configuration bundle: bounds, tiers, and all modifier parameters
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DifficultyConfig {
    /// Global difficulty bounds and per-update rate limit
    pub bounds: DifficultyBounds,
    /// Discrete tier boundaries
    pub tiers: TierThresholds,
    /// Win-streak modifier parameters
    pub win_streak: WinStreakParams,
    /// Loss-streak modifier parameters
    pub loss_streak: LossStreakParams,
    /// Time-decay modifier parameters
    pub time_decay: TimeDecayParams,
    /// Rage-quit modifier parameters
    pub rage_quit: RageQuitParams,
    /// Completion-rate modifier parameters
    pub completion_rate: CompletionRateParams,
    /// Session-length modifier parameters
    pub session_length: SessionLengthParams,
    /// Comeback modifier parameters
    pub comeback: ComebackParams,
}

impl DifficultyConfig {
    /// Derive the whole bundle from designer statistics
    ///
    /// Validates first and fails without building anything, so a caller
    /// replacing an existing config only overwrites it on success.
    pub fn from_stats(stats: &GameStatistics) -> Result<Self, StatsError> {
        generate_all_from_stats(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stats_matches_generator() {
        let stats = GameStatistics::default();
        assert_eq!(
            DifficultyConfig::from_stats(&stats).unwrap(),
            generate_all_from_stats(&stats).unwrap()
        );
    }

    #[test]
    fn test_from_stats_rejects_invalid() {
        let stats = GameStatistics { target_retention_days: 0.0, ..GameStatistics::default() };
        assert!(DifficultyConfig::from_stats(&stats).is_err());
    }

    #[test]
    fn test_config_serialization() {
        let cfg = DifficultyConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let parsed: DifficultyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cfg);
    }
}
