//! Time-decay modifier: difficulty drifts down while the player is away

use chrono::{DateTime, Utc};

use crate::config::TimeDecayParams;
use crate::session::SessionData;

use super::{DifficultyModifier, ModifierContribution};

const NAME: &str = "time_decay";

/// Eases difficulty after an absence longer than the grace window
///
/// Once the gap since the last session end exceeds `grace_hours`, the
/// contribution is `-decay_per_day` per elapsed day, capped at
/// `-max_decay`. A player with no recorded session end decays nothing.
pub struct TimeDecayModifier {
    params: TimeDecayParams,
}

impl TimeDecayModifier {
    pub fn new(params: TimeDecayParams) -> Self {
        Self { params }
    }
}

impl DifficultyModifier for TimeDecayModifier {
    fn name(&self) -> &'static str {
        NAME
    }

    fn evaluate(&self, session: &SessionData, now: DateTime<Utc>) -> ModifierContribution {
        let Some(last_end) = session.last_session_end else {
            return ModifierContribution::zero(NAME);
        };

        let hours_away = (now - last_end).num_minutes() as f32 / 60.0;
        if hours_away <= self.params.grace_hours {
            return ModifierContribution::zero(NAME);
        }

        let days_away = hours_away / 24.0;
        let decay = (self.params.decay_per_day * days_away).min(self.params.max_decay);
        ModifierContribution::new(NAME, -decay)
    }
}
