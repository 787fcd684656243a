//! Error types for the simulation core

use thiserror::Error;

/// Errors surfaced by [`crate::GameSession`] and [`crate::Settings`]
#[derive(Debug, Error)]
pub enum GameError {
    /// `tick()` was called with a time delta that is not a positive, finite number.
    /// The session is left untouched.
    #[error("invalid input: tick delta must be positive and finite, got {dt}")]
    InvalidInput { dt: f32 },

    #[error("invalid settings: {field} {reason}")]
    InvalidSettings {
        field: &'static str,
        reason: String,
    },

    #[error("failed to parse settings: {0}")]
    SettingsParse(#[from] serde_json::Error),
}

impl GameError {
    pub(crate) fn settings(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSettings {
            field,
            reason: reason.into(),
        }
    }
}
