//! Win-streak modifier: sustained winning ramps difficulty up

use chrono::{DateTime, Utc};

use crate::config::WinStreakParams;
use crate::session::SessionData;

use super::{DifficultyModifier, ModifierContribution};

const NAME: &str = "win_streak";

/// Raises difficulty once the win streak reaches the threshold
///
/// Contribution grows by `step` for every win at or past the threshold
/// and is capped at `max_bonus`. Streaks below the threshold contribute
/// exactly zero.
pub struct WinStreakModifier {
    params: WinStreakParams,
}

impl WinStreakModifier {
    pub fn new(params: WinStreakParams) -> Self {
        Self { params }
    }
}

impl DifficultyModifier for WinStreakModifier {
    fn name(&self) -> &'static str {
        NAME
    }

    fn evaluate(&self, session: &SessionData, _now: DateTime<Utc>) -> ModifierContribution {
        if session.win_streak < self.params.threshold {
            return ModifierContribution::zero(NAME);
        }

        let steps = (session.win_streak - self.params.threshold + 1) as f32;
        let bonus = (steps * self.params.step).min(self.params.max_bonus);
        ModifierContribution::new(NAME, bonus)
    }
}
