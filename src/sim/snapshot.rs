//! Renderable description of a session, produced after every tick

use glam::Vec2;
use serde::Serialize;

use super::state::{Entity, GameEvent};

/// Where to draw one sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpriteRect {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
}

impl From<&Entity> for SpriteRect {
    fn from(entity: &Entity) -> Self {
        Self {
            id: entity.id,
            pos: entity.pos,
            size: entity.size,
        }
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    /// Simulated ticks so far
    pub tick: u64,
    pub ship: SpriteRect,
    /// Insertion order
    pub projectiles: Vec<SpriteRect>,
    /// Insertion order
    pub targets: Vec<SpriteRect>,
    pub score: u64,
    pub phase: u32,
    pub hits_this_phase: u32,
    /// Set while the phase banner should be shown
    pub phase_announcement: Option<u32>,
    pub game_over: bool,
    pub explosion_position: Option<Vec2>,
    /// How long the renderer should hold this frame before the next tick
    pub hold_secs: Option<f32>,
    /// Simulation seconds until the next auto-fired projectile
    pub next_shot_in: f32,
    /// Events emitted by the tick that produced this snapshot
    pub events: Vec<GameEvent>,
}

impl SceneSnapshot {
    pub fn is_announcing(&self) -> bool {
        self.phase_announcement.is_some()
    }
}
