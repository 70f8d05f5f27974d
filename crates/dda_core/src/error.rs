use thiserror::Error;

use crate::stats::StatsError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum DifficultyError {
    #[error("Invalid game statistics: {0}")]
    InvalidStats(#[from] StatsError),

    #[error("Invalid difficulty bounds: min {min} must be below max {max}")]
    InvalidBounds { min: f32, max: f32 },

    #[error("Default difficulty {default} outside bounds [{min}, {max}]")]
    DefaultOutOfBounds { default: f32, min: f32, max: f32 },

    #[error("Max change per session must be positive, got {0}")]
    NonPositiveMaxChange(f32),

    #[error("Tier thresholds must satisfy easy_below <= hard_from, got {easy_below} and {hard_from}")]
    InvalidTierThresholds { easy_below: f32, hard_from: f32 },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, DifficultyError>;
