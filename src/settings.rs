//! Game tuning
//!
//! Every gameplay constant lives here so the driver can load a JSON override.
//! Missing fields fall back to the reference game's values in [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Gameplay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Ship ===
    pub ship_size: Vec2,
    /// Fixed row the ship travels along (top edge)
    pub ship_y: f32,
    /// Horizontal pursuit speed cap in units/s. `None` snaps to the steering input.
    pub ship_max_speed: Option<f32>,

    // === Projectiles ===
    pub projectile_size: Vec2,
    /// Upward speed in units/s
    pub projectile_speed: f32,
    /// Spawn point relative to the ship's top-left corner
    pub muzzle_offset: Vec2,
    pub fire_interval_secs: f32,

    // === Targets ===
    pub target_size: Vec2,
    /// Downward speed in units/s
    pub target_speed: f32,
    pub target_ceiling: usize,
    pub target_spawn_depth: f32,

    // === Scoring ===
    pub hit_tolerance: f32,
    pub points_per_hit: u64,
    pub hits_per_phase: u32,

    // === Display holds (consumed by the renderer) ===
    pub announce_hold_secs: f32,
    pub explosion_hold_secs: f32,
    pub game_over_hold_secs: f32,

    /// RNG seed. `None` draws one from OS entropy when the session is created.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            ship_size: Vec2::new(SHIP_WIDTH, SHIP_HEIGHT),
            ship_y: SHIP_Y,
            ship_max_speed: None,

            projectile_size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            projectile_speed: PROJECTILE_SPEED,
            muzzle_offset: Vec2::new(MUZZLE_OFFSET_X, MUZZLE_OFFSET_Y),
            fire_interval_secs: FIRE_INTERVAL_SECS,

            target_size: Vec2::new(TARGET_WIDTH, TARGET_HEIGHT),
            target_speed: TARGET_SPEED,
            target_ceiling: TARGET_CEILING,
            target_spawn_depth: TARGET_SPAWN_DEPTH,

            hit_tolerance: HIT_TOLERANCE,
            points_per_hit: POINTS_PER_HIT,
            hits_per_phase: HITS_PER_PHASE,

            announce_hold_secs: ANNOUNCE_HOLD_SECS,
            explosion_hold_secs: EXPLOSION_HOLD_SECS,
            game_over_hold_secs: GAME_OVER_HOLD_SECS,

            seed: None,
        }
    }
}

impl Settings {
    /// Default settings with a fixed seed (reproducible runs)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the settings describe a playable arena
    pub fn validate(&self) -> Result<(), GameError> {
        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("ship_size.x", self.ship_size.x)?;
        positive("ship_size.y", self.ship_size.y)?;
        positive("projectile_size.x", self.projectile_size.x)?;
        positive("projectile_size.y", self.projectile_size.y)?;
        positive("target_size.x", self.target_size.x)?;
        positive("target_size.y", self.target_size.y)?;
        positive("projectile_speed", self.projectile_speed)?;
        positive("target_speed", self.target_speed)?;
        positive("fire_interval_secs", self.fire_interval_secs)?;
        positive("hit_tolerance", self.hit_tolerance)?;

        if let Some(speed) = self.ship_max_speed {
            positive("ship_max_speed", speed)?;
        }
        if self.ship_size.x > self.arena_width {
            return Err(GameError::settings("ship_size.x", "is wider than the arena"));
        }
        if self.target_size.x > self.arena_width {
            return Err(GameError::settings("target_size.x", "is wider than the arena"));
        }
        if !(0.0..self.arena_height).contains(&self.ship_y) {
            return Err(GameError::settings(
                "ship_y",
                format!("must lie within [0, {})", self.arena_height),
            ));
        }
        if !self.target_spawn_depth.is_finite() || self.target_spawn_depth < 0.0 {
            return Err(GameError::settings(
                "target_spawn_depth",
                "must be a finite, non-negative number",
            ));
        }
        if self.target_ceiling == 0 {
            return Err(GameError::settings("target_ceiling", "must be at least 1"));
        }
        if self.hits_per_phase == 0 {
            return Err(GameError::settings("hits_per_phase", "must be at least 1"));
        }
        Ok(())
    }

    /// Ship x that centers the ship in the arena
    pub fn centered_ship_x(&self) -> f32 {
        (self.arena_width - self.ship_size.x) / 2.0
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), GameError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GameError::settings(
            field,
            format!("must be positive and finite, got {value}"),
        ))
    }
}
