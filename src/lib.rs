//! Face Shooter - simulation core for a face-steered arcade shooter
//!
//! A tracked face steers a ship along the bottom of the arena, the ship
//! auto-fires upward and descending targets must be shot down before they
//! reach it.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, session)
//! - `steering`: Adapters that turn detector output into a steering x
//! - `settings`: Data-driven game tuning
//! - `highscores`: In-memory leaderboard of finished runs
//!
//! Camera capture, face detection and rendering live outside this crate; they
//! feed [`sim::GameSession::tick`] and draw the returned [`sim::SceneSnapshot`].

pub mod error;
pub mod highscores;
pub mod settings;
pub mod sim;
pub mod steering;

pub use error::GameError;
pub use highscores::HighScores;
pub use settings::Settings;
pub use sim::{GameSession, SceneSnapshot};

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Frame length the per-frame speeds were tuned at (30 ms)
    pub const REFERENCE_FRAME_SECS: f32 = 0.030;

    /// Longest motion/collision substep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Substep cap per tick so a huge `dt` can't stall the caller
    pub const MAX_SUBSTEPS: u32 = 64;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1024.0;
    pub const ARENA_HEIGHT: f32 = 800.0;

    /// Ship sprite and its fixed row
    pub const SHIP_WIDTH: f32 = 80.0;
    pub const SHIP_HEIGHT: f32 = 80.0;
    pub const SHIP_Y: f32 = 700.0;

    /// Projectile sprite, speed and spawn point relative to the ship
    pub const PROJECTILE_WIDTH: f32 = 20.0;
    pub const PROJECTILE_HEIGHT: f32 = 10.0;
    pub const PROJECTILE_SPEED: f32 = 15.0 / REFERENCE_FRAME_SECS;
    pub const MUZZLE_OFFSET_X: f32 = 45.0;
    pub const MUZZLE_OFFSET_Y: f32 = -10.0;
    /// Seconds between auto-fired projectiles
    pub const FIRE_INTERVAL_SECS: f32 = 3.0;

    /// Target sprite and speed
    pub const TARGET_WIDTH: f32 = 100.0;
    pub const TARGET_HEIGHT: f32 = 100.0;
    pub const TARGET_SPEED: f32 = 8.0 / REFERENCE_FRAME_SECS;
    /// Maximum concurrent targets
    pub const TARGET_CEILING: usize = 10;
    /// Targets spawn up to this far above the top edge
    pub const TARGET_SPAWN_DEPTH: f32 = 500.0;

    /// Projectile/target proximity box half-extent
    pub const HIT_TOLERANCE: f32 = 40.0;
    pub const POINTS_PER_HIT: u64 = 100;
    pub const HITS_PER_PHASE: u32 = 5;

    /// Display holds the renderer applies (seconds)
    pub const ANNOUNCE_HOLD_SECS: f32 = 3.0;
    pub const EXPLOSION_HOLD_SECS: f32 = 3.0;
    pub const GAME_OVER_HOLD_SECS: f32 = 3.0;
}

/// Clamp a ship's left edge so the whole sprite stays inside `[0, arena_width]`
#[inline]
pub fn clamp_to_arena(x: f32, width: f32, arena_width: f32) -> f32 {
    x.clamp(0.0, (arena_width - width).max(0.0))
}
