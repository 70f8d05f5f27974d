//! Loss-streak modifier: sustained losing eases difficulty down

use chrono::{DateTime, Utc};

use crate::config::LossStreakParams;
use crate::session::SessionData;

use super::{DifficultyModifier, ModifierContribution};

const NAME: &str = "loss_streak";

/// Lowers difficulty once the loss streak reaches the threshold
///
/// Mirror of the win-streak rule with a negative sign: `step` per loss at
/// or past the threshold, capped at `max_reduction`.
pub struct LossStreakModifier {
    params: LossStreakParams,
}

impl LossStreakModifier {
    pub fn new(params: LossStreakParams) -> Self {
        Self { params }
    }
}

impl DifficultyModifier for LossStreakModifier {
    fn name(&self) -> &'static str {
        NAME
    }

    fn evaluate(&self, session: &SessionData, _now: DateTime<Utc>) -> ModifierContribution {
        if session.loss_streak < self.params.threshold {
            return ModifierContribution::zero(NAME);
        }

        let steps = (session.loss_streak - self.params.threshold + 1) as f32;
        let reduction = (steps * self.params.step).min(self.params.max_reduction);
        ModifierContribution::new(NAME, -reduction)
    }
}
