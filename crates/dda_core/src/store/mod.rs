//! # Persistence Providers
//!
//! The engine persists two things per player: the session/behavior
//! record and the current difficulty value. [`DifficultyStore`] is the
//! contract the orchestration service talks to; absence of stored data
//! is not an error — a fresh player loads a zeroed session and no
//! difficulty.
//!
//! Two providers ship with the crate: [`MemoryStore`] for tests and
//! hosts that persist elsewhere, and [`FileStore`] writing a compressed,
//! checksummed save file with atomic replace.

mod error;
mod file;
mod format;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use format::{
    decompress_and_deserialize, serialize_and_compress, DifficultySave, SAVE_VERSION,
};
pub use memory::MemoryStore;

use crate::session::SessionData;

/// Storage contract consumed by the orchestration service
pub trait DifficultyStore {
    /// Load the session record, zeroed when nothing is stored
    fn load_session(&self) -> Result<SessionData, StoreError>;

    /// Persist the session record
    fn save_session(&mut self, session: &SessionData) -> Result<(), StoreError>;

    /// Load the difficulty value, `None` when nothing is stored
    fn load_difficulty(&self) -> Result<Option<f32>, StoreError>;

    /// Persist the difficulty value
    fn save_difficulty(&mut self, value: f32) -> Result<(), StoreError>;

    /// Drop all stored data for this player
    fn clear(&mut self) -> Result<(), StoreError>;
}
