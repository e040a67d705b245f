//! Error types for the simulation and its configuration

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Rejection sampling never found a spawn point clear of the player
    #[error("no valid enemy spawn position after {attempts} attempts")]
    SpawnExhausted { attempts: u32 },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
}
