//! Per-player session and behavior record
//!
//! A single mutable record of streaks, session timing and quit
//! classification. The orchestration service holds the only reference for
//! a given player; mutation happens through the recording methods below
//! and nothing here is safe for concurrent writers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the player left their last session
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuitKind {
    /// Clean exit through normal flow
    #[default]
    Normal,
    /// Quit in the middle of active play
    MidPlay,
    /// Quit immediately after a frustrating outcome
    RageQuit,
}

/// Mutable per-player behavior data consumed by the modifiers
///
/// Win and loss streaks are mutually exclusive: recording one outcome
/// zeroes the opposite streak. Created zeroed, persisted and reloaded by
/// the store, reset only by an explicit clear.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SessionData {
    /// Consecutive wins since the last loss
    pub win_streak: u32,

    /// Consecutive losses since the last win
    pub loss_streak: u32,

    /// Length of the loss run ended by the most recent win; zeroed again
    /// on the next loss
    pub last_broken_loss_streak: u32,

    /// Lifetime win total
    pub total_wins: u32,

    /// Lifetime loss total
    pub total_losses: u32,

    /// Number of sessions started
    pub session_count: u32,

    /// Start of the currently open session, if one is running
    pub session_open: Option<DateTime<Utc>>,

    /// Length of the last completed session, in seconds
    pub last_session_secs: f32,

    /// When the last session ended
    pub last_session_end: Option<DateTime<Utc>>,

    /// Classification of the last quit; stands until the next
    /// `record_quit`
    pub last_quit: QuitKind,
}

impl SessionData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a win: bumps the win streak and zeroes the loss streak,
    /// remembering the length of the loss run it ended
    pub fn record_win(&mut self) {
        if self.loss_streak > 0 {
            self.last_broken_loss_streak = self.loss_streak;
            self.loss_streak = 0;
        }
        self.win_streak += 1;
        self.total_wins += 1;
    }

    /// Record a loss: mirror of `record_win`
    pub fn record_loss(&mut self) {
        self.win_streak = 0;
        self.last_broken_loss_streak = 0;
        self.loss_streak += 1;
        self.total_losses += 1;
    }

    /// Open a new session at `now`
    pub fn start_session(&mut self, now: DateTime<Utc>) {
        self.session_count += 1;
        self.session_open = Some(now);
    }

    /// Close the open session at `now`, storing its length
    ///
    /// A stray end without a matching start only stamps the end time.
    pub fn end_session(&mut self, now: DateTime<Utc>) {
        if let Some(open) = self.session_open.take() {
            let secs = (now - open).num_seconds().max(0);
            self.last_session_secs = secs as f32;
        }
        self.last_session_end = Some(now);
    }

    /// Classify the just-ended session's quit
    pub fn record_quit(&mut self, kind: QuitKind) {
        self.last_quit = kind;
    }

    /// Lifetime win rate, `None` until any outcome is recorded
    pub fn completion_rate(&self) -> Option<f32> {
        let total = self.total_wins + self.total_losses;
        if total == 0 {
            return None;
        }
        Some(self.total_wins as f32 / total as f32)
    }

    /// Reset everything back to the zeroed state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
