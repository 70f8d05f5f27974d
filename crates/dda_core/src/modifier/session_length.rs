//! Session-length modifier: very short sessions signal disengagement

use chrono::{DateTime, Utc};

use crate::config::SessionLengthParams;
use crate::session::SessionData;

use super::{DifficultyModifier, ModifierContribution};

const NAME: &str = "session_length";

/// Eases difficulty when the last completed session was unusually short
///
/// The first `grace_sessions` sessions are ignored while the player
/// settles in, and a player with no completed session yet contributes
/// zero. Long sessions are treated as healthy and contribute nothing.
pub struct SessionLengthModifier {
    params: SessionLengthParams,
}

impl SessionLengthModifier {
    pub fn new(params: SessionLengthParams) -> Self {
        Self { params }
    }
}

impl DifficultyModifier for SessionLengthModifier {
    fn name(&self) -> &'static str {
        NAME
    }

    fn evaluate(&self, session: &SessionData, _now: DateTime<Utc>) -> ModifierContribution {
        if session.session_count <= self.params.grace_sessions {
            return ModifierContribution::zero(NAME);
        }
        if session.last_session_secs <= 0.0 {
            return ModifierContribution::zero(NAME);
        }

        let short_secs = self.params.short_session_minutes * 60.0;
        if session.last_session_secs < short_secs {
            ModifierContribution::new(NAME, -self.params.reduction)
        } else {
            ModifierContribution::zero(NAME)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn modifier() -> SessionLengthModifier {
        SessionLengthModifier::new(SessionLengthParams {
            short_session_minutes: 15.0,
            reduction: 0.5,
            grace_sessions: 3,
        })
    }

    fn session_after(count: u32, length_minutes: i64) -> SessionData {
        let mut session = SessionData::new();
        let now = Utc::now();
        session.start_session(now);
        session.end_session(now + Duration::minutes(length_minutes));
        session.session_count = count;
        session
    }

    #[test]
    fn test_grace_sessions_ignored() {
        let m = modifier();
        let session = session_after(3, 5);
        assert_eq!(m.evaluate(&session, Utc::now()).value, 0.0);
    }

    #[test]
    fn test_short_session_reduces() {
        let m = modifier();
        let session = session_after(4, 5);
        let contribution = m.evaluate(&session, Utc::now());
        assert!((contribution.value + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_long_session_is_zero() {
        let m = modifier();
        let session = session_after(4, 45);
        assert_eq!(m.evaluate(&session, Utc::now()).value, 0.0);
    }

    #[test]
    fn test_no_completed_session_is_zero() {
        let m = modifier();
        let mut session = SessionData::new();
        session.session_count = 10;
        assert_eq!(m.evaluate(&session, Utc::now()).value, 0.0);
    }
}
