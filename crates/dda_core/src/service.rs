//! Orchestration service
//!
//! Binds the manager, the modifier set, the session record and a
//! persistence provider together: records gameplay events, runs the
//! calculation cycle, delegates storage. One service instance per player
//! session; hosts running from multiple threads must serialize access.

use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};

use crate::config::DifficultyConfig;
use crate::error::Result;
use crate::manager::{DifficultyManager, DifficultyTier};
use crate::modifier::{builtin_modifiers, DifficultyModifier, ModifierContribution};
use crate::session::{QuitKind, SessionData};
use crate::store::DifficultyStore;

pub struct DifficultyService {
    manager: DifficultyManager,
    modifiers: Vec<Box<dyn DifficultyModifier>>,
    session: SessionData,
    current: f32,
    store: Box<dyn DifficultyStore>,
}

impl DifficultyService {
    /// Build a service with the seven built-in modifiers
    ///
    /// Fails fast on malformed bounds, then pulls any existing session
    /// and difficulty from the store.
    pub fn new(config: &DifficultyConfig, store: Box<dyn DifficultyStore>) -> Result<Self> {
        Self::with_modifiers(config, store, builtin_modifiers(config))
    }

    /// Build a service with a custom modifier set
    ///
    /// The list order is the evaluation order.
    pub fn with_modifiers(
        config: &DifficultyConfig,
        store: Box<dyn DifficultyStore>,
        modifiers: Vec<Box<dyn DifficultyModifier>>,
    ) -> Result<Self> {
        let manager = DifficultyManager::new(config.bounds.clone(), config.tiers.clone())?;
        let current = manager.default_difficulty();
        let mut service =
            Self { manager, modifiers, session: SessionData::default(), current, store };
        service.load_data()?;
        Ok(service)
    }

    // === Event recording ===

    pub fn record_win(&mut self) {
        self.session.record_win();
        log::debug!("Win recorded, streak {}", self.session.win_streak);
    }

    pub fn record_loss(&mut self) {
        self.session.record_loss();
        log::debug!("Loss recorded, streak {}", self.session.loss_streak);
    }

    pub fn record_session_start(&mut self) {
        self.record_session_start_at(Utc::now());
    }

    pub fn record_session_start_at(&mut self, now: DateTime<Utc>) {
        self.session.start_session(now);
        log::debug!("Session {} started", self.session.session_count);
    }

    pub fn record_session_end(&mut self) {
        self.record_session_end_at(Utc::now());
    }

    pub fn record_session_end_at(&mut self, now: DateTime<Utc>) {
        self.session.end_session(now);
        log::debug!("Session ended after {:.0}s", self.session.last_session_secs);
    }

    pub fn record_quit(&mut self, kind: QuitKind) {
        self.session.record_quit(kind);
        log::debug!("Quit recorded: {:?}", kind);
    }

    // === Calculation cycle ===

    /// Run one update cycle: evaluate every modifier, apply the result,
    /// persist it
    pub fn update_difficulty(&mut self) -> Result<f32> {
        self.update_difficulty_at(Utc::now())
    }

    /// Update cycle with an explicit clock, for deterministic tests
    pub fn update_difficulty_at(&mut self, now: DateTime<Utc>) -> Result<f32> {
        let contributions: Vec<ModifierContribution> =
            self.modifiers.iter().map(|m| m.evaluate(&self.session, now)).collect();

        let previous = self.current;
        self.current = self.manager.calculate(previous, &contributions);

        self.store.save_difficulty(self.current)?;
        self.store.save_session(&self.session)?;

        log::info!(
            "Difficulty updated {:.2} -> {:.2} ({})",
            previous,
            self.current,
            self.manager.tier(self.current).name()
        );
        Ok(self.current)
    }

    /// Persist the configured default difficulty, ignoring modifiers
    pub fn reset_difficulty(&mut self) -> Result<f32> {
        self.current = self.manager.default_difficulty();
        self.store.save_difficulty(self.current)?;
        log::info!("Difficulty reset to {:.2}", self.current);
        Ok(self.current)
    }

    // === Diagnostics ===

    pub fn current_difficulty(&self) -> f32 {
        self.current
    }

    pub fn current_tier(&self) -> DifficultyTier {
        self.manager.tier(self.current)
    }

    pub fn session(&self) -> &SessionData {
        &self.session
    }

    /// Derived snapshot for external consumption; not authoritative state
    pub fn difficulty_stats(&self) -> Map<String, Value> {
        let mut stats = Map::new();
        stats.insert("difficulty".into(), json!(self.current));
        stats.insert("tier".into(), json!(self.current_tier().name()));
        stats.insert("win_streak".into(), json!(self.session.win_streak));
        stats.insert("loss_streak".into(), json!(self.session.loss_streak));
        stats.insert("session_count".into(), json!(self.session.session_count));
        stats.insert("total_wins".into(), json!(self.session.total_wins));
        stats.insert("total_losses".into(), json!(self.session.total_losses));
        stats.insert("completion_rate".into(), json!(self.session.completion_rate()));
        stats.insert("last_quit".into(), json!(self.session.last_quit));
        stats
    }

    // === Persistence delegation ===

    pub fn save_data(&mut self) -> Result<()> {
        self.store.save_session(&self.session)?;
        self.store.save_difficulty(self.current)?;
        Ok(())
    }

    pub fn load_data(&mut self) -> Result<()> {
        self.session = self.store.load_session()?;
        self.current = match self.store.load_difficulty()? {
            Some(value) => self.manager.clamp(value),
            None => self.manager.default_difficulty(),
        };
        Ok(())
    }

    pub fn clear_data(&mut self) -> Result<()> {
        self.store.clear()?;
        self.session.reset();
        self.current = self.manager.default_difficulty();
        Ok(())
    }
}
