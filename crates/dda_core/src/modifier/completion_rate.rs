//! Completion-rate modifier: long-run win rate nudges the baseline

use chrono::{DateTime, Utc};

use crate::config::CompletionRateParams;
use crate::session::SessionData;

use super::{DifficultyModifier, ModifierContribution};

const NAME: &str = "completion_rate";

/// Width of one rate band, in win-rate units (10 percentage points)
const RATE_BAND: f32 = 0.1;

/// Adjusts difficulty when the lifetime win rate leaves the target band
///
/// Below `min_samples` recorded outcomes the rate is noise and the
/// contribution is exactly zero. Past that, each started `RATE_BAND`
/// above `high_rate` adds one `step` (and symmetrically below
/// `low_rate`, negative), capped at `max_adjustment`. Rates inside the
/// `[low_rate, high_rate]` band contribute nothing.
pub struct CompletionRateModifier {
    params: CompletionRateParams,
}

impl CompletionRateModifier {
    pub fn new(params: CompletionRateParams) -> Self {
        Self { params }
    }

    fn banded(&self, distance: f32) -> f32 {
        let bands = (distance / RATE_BAND).floor() + 1.0;
        (bands * self.params.step).min(self.params.max_adjustment)
    }
}

impl DifficultyModifier for CompletionRateModifier {
    fn name(&self) -> &'static str {
        NAME
    }

    fn evaluate(&self, session: &SessionData, _now: DateTime<Utc>) -> ModifierContribution {
        if session.total_wins + session.total_losses < self.params.min_samples {
            return ModifierContribution::zero(NAME);
        }
        let Some(rate) = session.completion_rate() else {
            return ModifierContribution::zero(NAME);
        };

        let value = if rate > self.params.high_rate {
            self.banded(rate - self.params.high_rate)
        } else if rate < self.params.low_rate {
            -self.banded(self.params.low_rate - rate)
        } else {
            0.0
        };
        ModifierContribution::new(NAME, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modifier() -> CompletionRateModifier {
        CompletionRateModifier::new(CompletionRateParams {
            min_samples: 6,
            high_rate: 0.7,
            low_rate: 0.3,
            step: 0.45,
            max_adjustment: 1.35,
        })
    }

    fn session_with_record(wins: u32, losses: u32) -> SessionData {
        let mut session = SessionData::new();
        session.total_wins = wins;
        session.total_losses = losses;
        session
    }

    #[test]
    fn test_too_few_samples_is_zero() {
        let m = modifier();
        // 5 outcomes at 100% win rate: still below min_samples
        let contribution = m.evaluate(&session_with_record(5, 0), Utc::now());
        assert_eq!(contribution.value, 0.0);
    }

    #[test]
    fn test_rate_inside_band_is_zero() {
        let m = modifier();
        let contribution = m.evaluate(&session_with_record(5, 5), Utc::now());
        assert_eq!(contribution.value, 0.0);
    }

    #[test]
    fn test_high_rate_nudges_up() {
        let m = modifier();
        // 8/10 = 0.8: one started band above 0.7
        let contribution = m.evaluate(&session_with_record(8, 2), Utc::now());
        assert!(contribution.value > 0.0);
        assert!(contribution.value <= 1.35);
    }

    #[test]
    fn test_low_rate_nudges_down() {
        let m = modifier();
        // 2/10 = 0.2: one started band below 0.3
        let contribution = m.evaluate(&session_with_record(2, 8), Utc::now());
        assert!(contribution.value < 0.0);
        assert!(contribution.value >= -1.35);
    }

    #[test]
    fn test_adjustment_capped() {
        let m = modifier();
        // 100% win rate over many games
        let contribution = m.evaluate(&session_with_record(60, 0), Utc::now());
        assert!((contribution.value - 1.35).abs() < 1e-6);
    }
}
