//! Comeback modifier: breaking a long loss run re-ramps difficulty

use chrono::{DateTime, Utc};

use crate::config::ComebackParams;
use crate::session::SessionData;

use super::{DifficultyModifier, ModifierContribution};

const NAME: &str = "comeback";

/// Nudges difficulty back up on the win that ends a long loss run
///
/// While the player was losing, the loss-streak rule pulled difficulty
/// down; the first win after a run of at least `threshold` losses earns
/// `step` per broken loss, capped at `max_bonus`, to start the climb
/// back. Only the breaking win itself qualifies (`win_streak == 1`) —
/// from the second win on, the win-streak rule takes over.
pub struct ComebackModifier {
    params: ComebackParams,
}

impl ComebackModifier {
    pub fn new(params: ComebackParams) -> Self {
        Self { params }
    }
}

impl DifficultyModifier for ComebackModifier {
    fn name(&self) -> &'static str {
        NAME
    }

    fn evaluate(&self, session: &SessionData, _now: DateTime<Utc>) -> ModifierContribution {
        if session.win_streak != 1 || session.last_broken_loss_streak < self.params.threshold {
            return ModifierContribution::zero(NAME);
        }

        let broken = session.last_broken_loss_streak as f32;
        let bonus = (broken * self.params.step).min(self.params.max_bonus);
        ModifierContribution::new(NAME, bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modifier() -> ComebackModifier {
        ComebackModifier::new(ComebackParams { threshold: 3, step: 0.25, max_bonus: 1.0 })
    }

    fn session_after_losses_then_win(losses: u32) -> SessionData {
        let mut session = SessionData::new();
        for _ in 0..losses {
            session.record_loss();
        }
        session.record_win();
        session
    }

    #[test]
    fn test_short_loss_run_is_zero() {
        let m = modifier();
        let session = session_after_losses_then_win(2);
        assert_eq!(m.evaluate(&session, Utc::now()).value, 0.0);
    }

    #[test]
    fn test_breaking_win_earns_bonus() {
        let m = modifier();
        let session = session_after_losses_then_win(3);
        let contribution = m.evaluate(&session, Utc::now());
        assert!((contribution.value - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_bonus_capped() {
        let m = modifier();
        let session = session_after_losses_then_win(20);
        let contribution = m.evaluate(&session, Utc::now());
        assert!((contribution.value - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_second_win_no_longer_counts() {
        let m = modifier();
        let mut session = session_after_losses_then_win(5);
        session.record_win();
        assert_eq!(m.evaluate(&session, Utc::now()).value, 0.0);
    }

    #[test]
    fn test_loss_after_comeback_clears_it() {
        let m = modifier();
        let mut session = session_after_losses_then_win(5);
        session.record_loss();
        assert_eq!(m.evaluate(&session, Utc::now()).value, 0.0);
    }
}
