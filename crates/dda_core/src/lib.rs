//! # dda_core - Adaptive Difficulty Engine
//!
//! A deterministic difficulty adjustment engine: behavioral modifiers
//! read per-player session data and contribute signed deltas, which are
//! combined, rate-limited and clamped into a new difficulty value and a
//! discrete tier. Modifier parameters are either hand-tuned or derived
//! in closed form from designer-supplied aggregate statistics.
//!
//! ## Features
//! - 100% deterministic calculation (same inputs = same result)
//! - Config auto-generation from six to ten coarse game statistics
//! - Pluggable persistence behind a provider trait
//!
//! ## Quick start
//! ```rust
//! use dda_core::{DifficultyConfig, DifficultyService, GameStatistics, MemoryStore};
//!
//! let config = DifficultyConfig::from_stats(&GameStatistics::default()).unwrap();
//! let mut service = DifficultyService::new(&config, Box::new(MemoryStore::new())).unwrap();
//!
//! service.record_session_start();
//! service.record_win();
//! service.record_win();
//! service.record_win();
//! let new_difficulty = service.update_difficulty().unwrap();
//! assert!(new_difficulty > config.bounds.default);
//! ```

pub mod config;
pub mod error;
pub mod manager;
pub mod modifier;
pub mod service;
pub mod session;
pub mod stats;
pub mod store;

// Re-export the main API surface
pub use config::{
    ComebackParams, CompletionRateParams, DifficultyBounds, DifficultyConfig, LossStreakParams,
    RageQuitParams, SessionLengthParams, TierThresholds, TimeDecayParams, WinStreakParams,
};
pub use error::{DifficultyError, Result};
pub use manager::{DifficultyManager, DifficultyTier};
pub use modifier::{builtin_modifiers, DifficultyModifier, ModifierContribution};
pub use service::DifficultyService;
pub use session::{QuitKind, SessionData};
pub use stats::{GameStatistics, StatsError};
pub use store::{DifficultyStore, FileStore, MemoryStore, StoreError};
