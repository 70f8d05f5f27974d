//! In-process provider for tests and hosts that persist elsewhere

use super::{DifficultyStore, StoreError};
use crate::session::SessionData;

/// Keeps everything in memory; data lives as long as the store does
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    session: Option<SessionData>,
    difficulty: Option<f32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DifficultyStore for MemoryStore {
    fn load_session(&self) -> Result<SessionData, StoreError> {
        Ok(self.session.clone().unwrap_or_default())
    }

    fn save_session(&mut self, session: &SessionData) -> Result<(), StoreError> {
        self.session = Some(session.clone());
        Ok(())
    }

    fn load_difficulty(&self) -> Result<Option<f32>, StoreError> {
        Ok(self.difficulty)
    }

    fn save_difficulty(&mut self, value: f32) -> Result<(), StoreError> {
        self.difficulty = Some(value);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.session = None;
        self.difficulty = None;
        Ok(())
    }
}
