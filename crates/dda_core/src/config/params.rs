//! Parameter bundles for the built-in modifiers
//!
//! One plain struct per modifier kind. Every numeric field has a
//! documented safe range; the generator clamps into these ranges at
//! generation time, and the `Default` impls sit comfortably inside them.

use serde::{Deserialize, Serialize};

/// Global difficulty bounds and the per-update rate limit
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DifficultyBounds {
    /// Lowest reachable difficulty
    pub min: f32,
    /// Highest reachable difficulty
    pub max: f32,
    /// Difficulty for a fresh player, inside `[min, max]`
    pub default: f32,
    /// Cap on the net difficulty change of one update cycle (> 0)
    pub max_change_per_session: f32,
}

impl Default for DifficultyBounds {
    fn default() -> Self {
        Self { min: 1.0, max: 10.0, default: 5.0, max_change_per_session: 2.0 }
    }
}

/// Boundaries of the discrete difficulty tiers
///
/// Classification is total and non-overlapping: values below
/// `easy_below` are Easy, values from `easy_below` up to (excluding)
/// `hard_from` are Medium, everything from `hard_from` is Hard.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TierThresholds {
    /// Upper bound (exclusive) of the Easy tier
    pub easy_below: f32,
    /// Lower bound (inclusive) of the Hard tier
    pub hard_from: f32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self { easy_below: 4.0, hard_from: 7.0 }
    }
}

/// Win-streak modifier parameters
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WinStreakParams {
    /// Streak length at which the bonus starts (>= 2)
    pub threshold: u32,
    /// Bonus per streak step past the threshold (0.1 - 2.0)
    pub step: f32,
    /// Cap on the total bonus (0.5 - 5.0)
    pub max_bonus: f32,
}

impl Default for WinStreakParams {
    fn default() -> Self {
        Self { threshold: 2, step: 0.5, max_bonus: 2.0 }
    }
}

/// Loss-streak modifier parameters
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LossStreakParams {
    /// Streak length at which the reduction starts (>= 2)
    pub threshold: u32,
    /// Reduction per streak step past the threshold (0.1 - 2.0)
    pub step: f32,
    /// Cap on the total reduction (0.5 - 5.0)
    pub max_reduction: f32,
}

impl Default for LossStreakParams {
    fn default() -> Self {
        Self { threshold: 2, step: 0.5, max_reduction: 2.0 }
    }
}

/// Time-decay modifier parameters
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimeDecayParams {
    /// Difficulty lost per day away (0.1 - 2.0)
    pub decay_per_day: f32,
    /// Cap on the total decay of one update (0.5 - 5.0)
    pub max_decay: f32,
    /// Hours away before decay starts (0 - 48)
    pub grace_hours: f32,
}

impl Default for TimeDecayParams {
    fn default() -> Self {
        Self { decay_per_day: 0.3, max_decay: 2.0, grace_hours: 24.0 }
    }
}

/// Rage-quit modifier parameters
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RageQuitParams {
    /// Reduction applied after a rage quit (0.3 - 3.0)
    pub rage_reduction: f32,
    /// Reduction applied after a mid-play quit (0.1 - 1.0)
    pub mid_play_reduction: f32,
}

impl Default for RageQuitParams {
    fn default() -> Self {
        Self { rage_reduction: 1.0, mid_play_reduction: 0.3 }
    }
}

/// Completion-rate modifier parameters
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompletionRateParams {
    /// Outcomes required before the rate is trusted (>= 5)
    pub min_samples: u32,
    /// Win rate above which difficulty is nudged up (0.0 - 1.0)
    pub high_rate: f32,
    /// Win rate below which difficulty is nudged down (0.0 - 1.0)
    pub low_rate: f32,
    /// Adjustment per 10-percentage-point band past a cutoff (0.1 - 1.0)
    pub step: f32,
    /// Cap on the total adjustment (0.25 - 2.0)
    pub max_adjustment: f32,
}

impl Default for CompletionRateParams {
    fn default() -> Self {
        Self { min_samples: 6, high_rate: 0.7, low_rate: 0.3, step: 0.45, max_adjustment: 1.35 }
    }
}

/// Session-length modifier parameters
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionLengthParams {
    /// Sessions shorter than this count as disengaged, in minutes (5 - 30)
    pub short_session_minutes: f32,
    /// Reduction applied after a short session (0.1 - 1.0)
    pub reduction: f32,
    /// Sessions to ignore while the player settles in
    pub grace_sessions: u32,
}

impl Default for SessionLengthParams {
    fn default() -> Self {
        Self { short_session_minutes: 15.0, reduction: 0.5, grace_sessions: 3 }
    }
}

/// Comeback modifier parameters
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ComebackParams {
    /// Length a broken loss run must reach to count as a comeback (>= 2)
    pub threshold: u32,
    /// Bonus per loss in the broken run (0.05 - 1.0)
    pub step: f32,
    /// Cap on the total bonus (0.25 - 2.0)
    pub max_bonus: f32,
}

impl Default for ComebackParams {
    fn default() -> Self {
        Self { threshold: 3, step: 0.25, max_bonus: 1.0 }
    }
}
