//! Designer-supplied aggregate game statistics.
//!
//! These coarse numbers are the single input to config generation
//! (`DifficultyConfig::from_stats`). They are validated before use and
//! never auto-corrected; a rejected record leaves any existing
//! configuration untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures for [`GameStatistics`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error(
        "difficulty bounds must satisfy min < default < max, got min {min}, default {default}, max {max}"
    )]
    BoundsOrdering { min: f32, default: f32, max: f32 },
}

/// Aggregate game statistics supplied once by a designer
///
/// Streak lengths and session gaps come from playtest telemetry or design
/// targets; difficulty bounds define the playable range of the game's
/// difficulty scalar.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameStatistics {
    /// Average consecutive wins before a loss (> 0)
    pub avg_consecutive_wins: f32,

    /// Average consecutive losses before a win (> 0)
    pub avg_consecutive_losses: f32,

    /// Lowest difficulty the game supports
    pub difficulty_min: f32,

    /// Difficulty for a fresh player (strictly between min and max)
    pub difficulty_default: f32,

    /// Highest difficulty the game supports
    pub difficulty_max: f32,

    /// Largest difficulty swing allowed in one update cycle (> 0)
    pub max_change_per_session: f32,

    /// Retention target used to pace time decay, in days (> 0)
    pub target_retention_days: f32,

    /// Average gap between play sessions, in hours (>= 0)
    pub avg_hours_between_sessions: f32,
}

impl Default for GameStatistics {
    fn default() -> Self {
        Self {
            avg_consecutive_wins: 3.0,
            avg_consecutive_losses: 3.0,
            difficulty_min: 1.0,
            difficulty_default: 5.0,
            difficulty_max: 10.0,
            max_change_per_session: 2.0,
            target_retention_days: 7.0,
            avg_hours_between_sessions: 24.0,
        }
    }
}

impl GameStatistics {
    /// Validate ordering and sign constraints
    ///
    /// Pure check; the record is never adjusted on failure.
    pub fn validate(&self) -> Result<(), StatsError> {
        Self::check_finite("avg_consecutive_wins", self.avg_consecutive_wins)?;
        Self::check_finite("avg_consecutive_losses", self.avg_consecutive_losses)?;
        Self::check_finite("difficulty_min", self.difficulty_min)?;
        Self::check_finite("difficulty_default", self.difficulty_default)?;
        Self::check_finite("difficulty_max", self.difficulty_max)?;
        Self::check_finite("max_change_per_session", self.max_change_per_session)?;
        Self::check_finite("target_retention_days", self.target_retention_days)?;
        Self::check_finite("avg_hours_between_sessions", self.avg_hours_between_sessions)?;

        Self::check_positive("avg_consecutive_wins", self.avg_consecutive_wins)?;
        Self::check_positive("avg_consecutive_losses", self.avg_consecutive_losses)?;
        Self::check_positive("max_change_per_session", self.max_change_per_session)?;
        Self::check_positive("target_retention_days", self.target_retention_days)?;

        if self.avg_hours_between_sessions < 0.0 {
            return Err(StatsError::Negative {
                field: "avg_hours_between_sessions",
                value: self.avg_hours_between_sessions,
            });
        }

        if !(self.difficulty_min < self.difficulty_default
            && self.difficulty_default < self.difficulty_max)
        {
            return Err(StatsError::BoundsOrdering {
                min: self.difficulty_min,
                default: self.difficulty_default,
                max: self.difficulty_max,
            });
        }

        Ok(())
    }

    /// Width of the playable difficulty range
    pub fn difficulty_range(&self) -> f32 {
        self.difficulty_max - self.difficulty_min
    }

    fn check_positive(field: &'static str, value: f32) -> Result<(), StatsError> {
        if value <= 0.0 {
            return Err(StatsError::NonPositive { field, value });
        }
        Ok(())
    }

    fn check_finite(field: &'static str, value: f32) -> Result<(), StatsError> {
        if !value.is_finite() {
            return Err(StatsError::NotFinite { field, value });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats_valid() {
        assert!(GameStatistics::default().validate().is_ok());
    }

    #[test]
    fn test_bounds_ordering_rejected() {
        let stats = GameStatistics {
            difficulty_min: 5.0,
            difficulty_default: 5.0,
            difficulty_max: 10.0,
            ..GameStatistics::default()
        };
        assert!(matches!(stats.validate(), Err(StatsError::BoundsOrdering { .. })));

        let inverted = GameStatistics {
            difficulty_min: 10.0,
            difficulty_default: 5.0,
            difficulty_max: 1.0,
            ..GameStatistics::default()
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_non_positive_fields_rejected() {
        let stats =
            GameStatistics { avg_consecutive_wins: 0.0, ..GameStatistics::default() };
        assert!(matches!(
            stats.validate(),
            Err(StatsError::NonPositive { field: "avg_consecutive_wins", .. })
        ));

        let stats =
            GameStatistics { target_retention_days: -1.0, ..GameStatistics::default() };
        assert!(stats.validate().is_err());
    }

    #[test]
    fn test_negative_hour_gap_rejected() {
        let stats = GameStatistics {
            avg_hours_between_sessions: -0.5,
            ..GameStatistics::default()
        };
        assert!(matches!(stats.validate(), Err(StatsError::Negative { .. })));
    }

    #[test]
    fn test_zero_hour_gap_allowed() {
        let stats =
            GameStatistics { avg_hours_between_sessions: 0.0, ..GameStatistics::default() };
        assert!(stats.validate().is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        let stats =
            GameStatistics { difficulty_max: f32::NAN, ..GameStatistics::default() };
        assert!(matches!(stats.validate(), Err(StatsError::NotFinite { .. })));
    }

    #[test]
    fn test_error_message_names_field() {
        let stats =
            GameStatistics { max_change_per_session: 0.0, ..GameStatistics::default() };
        let err = stats.validate().unwrap_err();
        assert!(err.to_string().contains("max_change_per_session"));
    }
}
