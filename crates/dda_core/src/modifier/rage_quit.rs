//! Rage-quit modifier: frustrated exits ease the next session

use chrono::{DateTime, Utc};

use crate::config::RageQuitParams;
use crate::session::{QuitKind, SessionData};

use super::{DifficultyModifier, ModifierContribution};

const NAME: &str = "rage_quit";

/// Lowers difficulty after a frustrated exit
///
/// A rage quit applies the full `rage_reduction`, a mid-play quit the
/// softer `mid_play_reduction`, a normal exit nothing. The
/// classification stands until the next quit is recorded, so the easing
/// applies to every update of the session the player returns to.
pub struct RageQuitModifier {
    params: RageQuitParams,
}

impl RageQuitModifier {
    pub fn new(params: RageQuitParams) -> Self {
        Self { params }
    }
}

impl DifficultyModifier for RageQuitModifier {
    fn name(&self) -> &'static str {
        NAME
    }

    fn evaluate(&self, session: &SessionData, _now: DateTime<Utc>) -> ModifierContribution {
        let value = match session.last_quit {
            QuitKind::Normal => 0.0,
            QuitKind::MidPlay => -self.params.mid_play_reduction,
            QuitKind::RageQuit => -self.params.rage_reduction,
        };
        ModifierContribution::new(NAME, value)
    }
}
