//! Pure difficulty calculation core
//!
//! Combines a current difficulty value with a set of modifier
//! contributions: sum, cap the net change magnitude, clamp into the
//! global bounds. Holds only configuration — the current value is owned
//! by the caller — so a single manager is freely reusable across
//! sessions.

use serde::{Deserialize, Serialize};

use crate::config::{DifficultyBounds, TierThresholds};
use crate::error::{DifficultyError, Result};
use crate::modifier::ModifierContribution;

/// Discrete classification of a difficulty value
///
/// Always derived from the underlying value on demand, never stored, so
/// the two cannot drift apart.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

impl DifficultyTier {
    pub fn name(&self) -> &'static str {
        match self {
            DifficultyTier::Easy => "Easy",
            DifficultyTier::Medium => "Medium",
            DifficultyTier::Hard => "Hard",
        }
    }
}

/// Stateless difficulty calculator
///
/// Construction fails fast on malformed bounds; afterwards every method
/// is a pure, total function.
#[derive(Debug, Clone)]
pub struct DifficultyManager {
    bounds: DifficultyBounds,
    tiers: TierThresholds,
}

impl DifficultyManager {
    pub fn new(bounds: DifficultyBounds, tiers: TierThresholds) -> Result<Self> {
        if !bounds.min.is_finite() || !bounds.max.is_finite() || bounds.min >= bounds.max {
            return Err(DifficultyError::InvalidBounds { min: bounds.min, max: bounds.max });
        }
        if !(bounds.min..=bounds.max).contains(&bounds.default) {
            return Err(DifficultyError::DefaultOutOfBounds {
                default: bounds.default,
                min: bounds.min,
                max: bounds.max,
            });
        }
        if !(bounds.max_change_per_session.is_finite() && bounds.max_change_per_session > 0.0) {
            return Err(DifficultyError::NonPositiveMaxChange(bounds.max_change_per_session));
        }
        if tiers.easy_below > tiers.hard_from {
            return Err(DifficultyError::InvalidTierThresholds {
                easy_below: tiers.easy_below,
                hard_from: tiers.hard_from,
            });
        }
        Ok(Self { bounds, tiers })
    }

    /// Apply a set of contributions to the current difficulty
    ///
    /// The magnitude of the **net** change is capped at
    /// `max_change_per_session` preserving its sign, then the result is
    /// clamped into the global bounds. An empty contribution list is the
    /// identity for any in-range value.
    pub fn calculate(&self, current: f32, contributions: &[ModifierContribution]) -> f32 {
        let cap = self.bounds.max_change_per_session;
        let delta: f32 = contributions.iter().map(|c| c.value).sum();
        let capped = delta.clamp(-cap, cap);
        self.clamp(current + capped)
    }

    /// Clamp a value into the global bounds; idempotent
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.bounds.min, self.bounds.max)
    }

    /// Classify a difficulty value into its tier
    ///
    /// Boundary values land on the upper side: `easy_below` itself is
    /// Medium, `hard_from` itself is Hard.
    pub fn tier(&self, value: f32) -> DifficultyTier {
        if value < self.tiers.easy_below {
            DifficultyTier::Easy
        } else if value < self.tiers.hard_from {
            DifficultyTier::Medium
        } else {
            DifficultyTier::Hard
        }
    }

    /// The configured starting difficulty
    pub fn default_difficulty(&self) -> f32 {
        self.bounds.default
    }

    pub fn bounds(&self) -> &DifficultyBounds {
        &self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> DifficultyManager {
        DifficultyManager::new(DifficultyBounds::default(), TierThresholds::default()).unwrap()
    }

    fn contributions(values: &[f32]) -> Vec<ModifierContribution> {
        values.iter().map(|v| ModifierContribution::new("test", *v)).collect()
    }

    #[test]
    fn test_empty_contributions_identity() {
        let m = manager();
        for current in [1.0, 2.5, 5.0, 9.9, 10.0] {
            assert_eq!(m.calculate(current, &[]), current);
        }
    }

    #[test]
    fn test_plain_sum_within_cap() {
        // current 5.0, +1.5, cap 2.0, bounds [1, 10] -> 6.5
        let m = manager();
        assert!((m.calculate(5.0, &contributions(&[1.5])) - 6.5).abs() < 1e-6);
    }

    #[test]
    fn test_global_clamp_dominates_at_min() {
        // current 1.0 at min, -10 -> stays 1.0
        let m = manager();
        assert!((m.calculate(1.0, &contributions(&[-10.0])) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cap_then_clamp_at_max() {
        // current 9.0, +5 capped to +2, clamped to 10.0
        let m = manager();
        assert!((m.calculate(9.0, &contributions(&[5.0])) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_net_change_capped_not_intermediate() {
        // +3 and -0.5 sum to +2.5; only the net is capped, to +2.0
        let m = manager();
        let result = m.calculate(5.0, &contributions(&[3.0, -0.5]));
        assert!((result - 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_sign_preserved_under_cap() {
        let m = manager();
        let up = m.calculate(5.0, &contributions(&[100.0]));
        assert!(up > 5.0);
        let down = m.calculate(5.0, &contributions(&[-100.0]));
        assert!(down < 5.0);
    }

    #[test]
    fn test_opposing_contributions_cancel() {
        let m = manager();
        let result = m.calculate(5.0, &contributions(&[1.5, -1.5]));
        assert!((result - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_idempotent_and_bounded() {
        let m = manager();
        for v in [-100.0, 0.0, 1.0, 5.5, 10.0, 1e6] {
            let once = m.clamp(v);
            assert_eq!(m.clamp(once), once);
            assert!((1.0..=10.0).contains(&once));
        }
    }

    #[test]
    fn test_tier_boundaries() {
        let m = manager();
        assert_eq!(m.tier(3.9), DifficultyTier::Easy);
        assert_eq!(m.tier(4.0), DifficultyTier::Medium);
        assert_eq!(m.tier(6.9), DifficultyTier::Medium);
        assert_eq!(m.tier(7.0), DifficultyTier::Hard);
        assert_eq!(m.tier(10.0), DifficultyTier::Hard);
    }

    #[test]
    fn test_default_difficulty_constant() {
        let m = manager();
        assert_eq!(m.default_difficulty(), 5.0);
        assert_eq!(m.default_difficulty(), 5.0);
    }

    #[test]
    fn test_construction_rejects_bad_bounds() {
        let inverted = DifficultyBounds { min: 10.0, max: 1.0, ..DifficultyBounds::default() };
        assert!(matches!(
            DifficultyManager::new(inverted, TierThresholds::default()),
            Err(DifficultyError::InvalidBounds { .. })
        ));

        let degenerate = DifficultyBounds { min: 5.0, max: 5.0, ..DifficultyBounds::default() };
        assert!(DifficultyManager::new(degenerate, TierThresholds::default()).is_err());
    }

    #[test]
    fn test_construction_rejects_default_outside_bounds() {
        let bounds = DifficultyBounds { default: 0.0, ..DifficultyBounds::default() };
        assert!(matches!(
            DifficultyManager::new(bounds, TierThresholds::default()),
            Err(DifficultyError::DefaultOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_construction_rejects_non_positive_cap() {
        let bounds =
            DifficultyBounds { max_change_per_session: 0.0, ..DifficultyBounds::default() };
        assert!(matches!(
            DifficultyManager::new(bounds, TierThresholds::default()),
            Err(DifficultyError::NonPositiveMaxChange(_))
        ));
    }

    #[test]
    fn test_construction_rejects_inverted_tiers() {
        let tiers = TierThresholds { easy_below: 8.0, hard_from: 4.0 };
        assert!(DifficultyManager::new(DifficultyBounds::default(), tiers).is_err());
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the result never leaves the global bounds
            #[test]
            fn prop_result_bounded(
                current in -50.0f32..50.0,
                delta in -100.0f32..100.0,
            ) {
                let m = manager();
                let result = m.calculate(m.clamp(current), &contributions(&[delta]));
                prop_assert!((1.0..=10.0).contains(&result));
            }

            /// Property: the per-update change never exceeds the cap
            #[test]
            fn prop_session_cap_holds(
                current in 1.0f32..=10.0,
                a in -100.0f32..100.0,
                b in -100.0f32..100.0,
            ) {
                let m = manager();
                let result = m.calculate(current, &contributions(&[a, b]));
                prop_assert!((result - current).abs() <= 2.0 + 1e-4);
            }

            /// Property: clamp is idempotent
            #[test]
            fn prop_clamp_idempotent(v in -1e6f32..1e6) {
                let m = manager();
                prop_assert_eq!(m.clamp(m.clamp(v)), m.clamp(v));
            }
        }
    }
}
