//! # Behavioral Difficulty Modifiers
//!
//! Each modifier encodes one behavioral rule: given the current session
//! data and its own immutable parameter bundle it produces a signed
//! contribution to difficulty. Modifiers never mutate session data and
//! hold no state across calls, so a fixed set of them can be evaluated
//! in any order from any single thread.
//!
//! [`builtin_modifiers`] registers the seven built-in rules in a fixed
//! order so combination is reproducible across runs.

mod comeback;
mod completion_rate;
mod loss_streak;
mod rage_quit;
mod session_length;
mod time_decay;
mod win_streak;

pub use comeback::ComebackModifier;
pub use completion_rate::CompletionRateModifier;
pub use loss_streak::LossStreakModifier;
pub use rage_quit::RageQuitModifier;
pub use session_length::SessionLengthModifier;
pub use time_decay::TimeDecayModifier;
pub use win_streak::WinStreakModifier;

use chrono::{DateTime, Utc};

use crate::config::DifficultyConfig;
use crate::session::SessionData;

/// Signed output of one modifier for one calculation pass
///
/// Ephemeral: produced fresh on every pass, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierContribution {
    /// Modifier name, for diagnostics
    pub name: &'static str,
    /// Signed difficulty delta
    pub value: f32,
}

impl ModifierContribution {
    pub fn new(name: &'static str, value: f32) -> Self {
        Self { name, value }
    }

    /// The well-defined "no effect" contribution
    pub fn zero(name: &'static str) -> Self {
        Self { name, value: 0.0 }
    }
}

/// One behavioral rule contributing to the difficulty calculation
///
/// Implementations read their own immutable parameters plus the supplied
/// session data; `evaluate` must be a pure function of its arguments.
pub trait DifficultyModifier {
    /// Stable name used in contributions and diagnostics
    fn name(&self) -> &'static str;

    /// Compute this rule's signed contribution
    ///
    /// `now` is passed explicitly so time-based rules stay deterministic
    /// under test.
    fn evaluate(&self, session: &SessionData, now: DateTime<Utc>) -> ModifierContribution;
}

/// Build the seven built-in modifiers in their fixed registration order
pub fn builtin_modifiers(config: &DifficultyConfig) -> Vec<Box<dyn DifficultyModifier>> {
    vec![
        Box::new(WinStreakModifier::new(config.win_streak.clone())),
        Box::new(LossStreakModifier::new(config.loss_streak.clone())),
        Box::new(TimeDecayModifier::new(config.time_decay.clone())),
        Box::new(RageQuitModifier::new(config.rage_quit.clone())),
        Box::new(CompletionRateModifier::new(config.completion_rate.clone())),
        Box::new(SessionLengthModifier::new(config.session_length.clone())),
        Box::new(ComebackModifier::new(config.comeback.clone())),
    ]
}
