//! Config auto-generation
//!
//! Closed-form derivation of every modifier parameter bundle from a
//! validated [`GameStatistics`] record. Pure and deterministic: identical
//! input yields an identical bundle, and every derived field is clamped
//! into its documented safe range so even extreme (but valid) statistics
//! cannot produce runaway or negligible parameters.
//!
//! The whole bundle is produced in one call. Validation failure aborts
//! generation before anything is built, so a caller holding a previous
//! config keeps it untouched.

use crate::stats::{GameStatistics, StatsError};

use super::params::{
    ComebackParams, CompletionRateParams, DifficultyBounds, LossStreakParams, RageQuitParams,
    SessionLengthParams, TierThresholds, TimeDecayParams, WinStreakParams,
};
use super::DifficultyConfig;

/// Derive the full configuration bundle from designer statistics
///
/// Entry point used by [`DifficultyConfig::from_stats`]. Invoked
/// explicitly whenever game statistics change; all seven bundles are
/// overwritten together.
pub fn generate_all_from_stats(stats: &GameStatistics) -> Result<DifficultyConfig, StatsError> {
    stats.validate()?;

    let range = stats.difficulty_range();

    Ok(DifficultyConfig {
        bounds: generate_bounds(stats),
        tiers: generate_tiers(stats),
        win_streak: generate_win_streak(stats, range),
        loss_streak: generate_loss_streak(stats, range),
        time_decay: generate_time_decay(stats),
        rage_quit: generate_rage_quit(range),
        completion_rate: generate_completion_rate(stats, range),
        session_length: generate_session_length(stats, range),
        comeback: generate_comeback(stats, range),
    })
}

fn generate_bounds(stats: &GameStatistics) -> DifficultyBounds {
    DifficultyBounds {
        min: stats.difficulty_min,
        max: stats.difficulty_max,
        default: stats.difficulty_default,
        max_change_per_session: stats.max_change_per_session,
    }
}

/// Tier boundaries at one third and two thirds of the difficulty range
fn generate_tiers(stats: &GameStatistics) -> TierThresholds {
    let range = stats.difficulty_range();
    TierThresholds {
        easy_below: stats.difficulty_min + range / 3.0,
        hard_from: stats.difficulty_min + range * 2.0 / 3.0,
    }
}

/// `threshold = max(2, round(avg_wins * 0.75))`,
/// `step = clamp(range / (avg_wins * 2), 0.1, 2.0)`,
/// `max_bonus = clamp(range * 0.3, 0.5, 5.0)`
fn generate_win_streak(stats: &GameStatistics, range: f32) -> WinStreakParams {
    WinStreakParams {
        threshold: (stats.avg_consecutive_wins * 0.75).round().max(2.0) as u32,
        step: (range / (stats.avg_consecutive_wins * 2.0)).clamp(0.1, 2.0),
        max_bonus: (range * 0.3).clamp(0.5, 5.0),
    }
}

/// `threshold = max(2, round(avg_losses * 0.8))`,
/// `step = clamp(range / (avg_losses * 3), 0.1, 2.0)`,
/// `max_reduction = clamp(range * 0.25, 0.5, 5.0)`
fn generate_loss_streak(stats: &GameStatistics, range: f32) -> LossStreakParams {
    LossStreakParams {
        threshold: (stats.avg_consecutive_losses * 0.8).round().max(2.0) as u32,
        step: (range / (stats.avg_consecutive_losses * 3.0)).clamp(0.1, 2.0),
        max_reduction: (range * 0.25).clamp(0.5, 5.0),
    }
}

/// `decay_per_day = clamp(max_change / retention_days, 0.1, 2.0)`,
/// `max_decay = clamp(max_change, 0.5, 5.0)`,
/// `grace_hours = clamp(avg_hours_between_sessions, 0, 48)`
fn generate_time_decay(stats: &GameStatistics) -> TimeDecayParams {
    TimeDecayParams {
        decay_per_day: (stats.max_change_per_session / stats.target_retention_days)
            .clamp(0.1, 2.0),
        max_decay: stats.max_change_per_session.clamp(0.5, 5.0),
        grace_hours: stats.avg_hours_between_sessions.clamp(0.0, 48.0),
    }
}

/// `rage_reduction = clamp(range * 0.15, 0.3, 3.0)`,
/// `mid_play_reduction = clamp(range * 0.05, 0.1, 1.0)`
fn generate_rage_quit(range: f32) -> RageQuitParams {
    RageQuitParams {
        rage_reduction: (range * 0.15).clamp(0.3, 3.0),
        mid_play_reduction: (range * 0.05).clamp(0.1, 1.0),
    }
}

/// `min_samples = max(5, round(avg_wins + avg_losses))`,
/// `step = clamp(range * 0.05, 0.1, 1.0)`,
/// `max_adjustment = clamp(range * 0.15, 0.25, 2.0)`;
/// the 0.7 / 0.3 rate cutoffs are fixed design constants
fn generate_completion_rate(stats: &GameStatistics, range: f32) -> CompletionRateParams {
    CompletionRateParams {
        min_samples: (stats.avg_consecutive_wins + stats.avg_consecutive_losses)
            .round()
            .max(5.0) as u32,
        high_rate: 0.7,
        low_rate: 0.3,
        step: (range * 0.05).clamp(0.1, 1.0),
        max_adjustment: (range * 0.15).clamp(0.25, 2.0),
    }
}

/// `short_session_minutes = clamp(avg_hours_between_sessions * 1.5, 5, 30)`,
/// `reduction = clamp(range * 0.1, 0.1, 1.0)`, warm-up of 3 sessions
fn generate_session_length(stats: &GameStatistics, range: f32) -> SessionLengthParams {
    SessionLengthParams {
        short_session_minutes: (stats.avg_hours_between_sessions * 1.5).clamp(5.0, 30.0),
        reduction: (range * 0.1).clamp(0.1, 1.0),
        grace_sessions: 3,
    }
}

/// `threshold = max(2, round(avg_losses))`,
/// `step = clamp(range / (avg_losses * 4), 0.05, 1.0)`,
/// `max_bonus = clamp(range * 0.15, 0.25, 2.0)`
fn generate_comeback(stats: &GameStatistics, range: f32) -> ComebackParams {
    ComebackParams {
        threshold: stats.avg_consecutive_losses.round().max(2.0) as u32,
        step: (range / (stats.avg_consecutive_losses * 4.0)).clamp(0.05, 1.0),
        max_bonus: (range * 0.15).clamp(0.25, 2.0),
    }
}
