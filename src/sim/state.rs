//! Entities and session-level state types
//!
//! Ship, projectiles and targets share one rectangle representation and are
//! told apart by [`EntityRole`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::phase::PhaseController;
use super::spawn::SpawnController;
use crate::settings::Settings;

/// Top-level state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Phase banner is up; motion and spawning are suspended until the next tick
    PhaseAnnounce,
    /// Active gameplay
    Playing,
    /// A target reached the ship. Terminal until reset.
    GameOver,
}

/// What an entity is in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityRole {
    Ship,
    Projectile,
    Target,
}

/// An axis-aligned rectangle moving at constant velocity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub role: EntityRole,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Units per second
    pub vel: Vec2,
}

impl Entity {
    pub fn new(id: u32, role: EntityRole, pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            role,
            pos,
            size,
            vel,
        }
    }

    /// Linear motion over `dt` seconds
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Horizontal spans overlap (open intervals, touching edges don't count)
    #[inline]
    pub fn overlaps_horizontally(&self, other: &Entity) -> bool {
        self.right() > other.pos.x && self.pos.x < other.right()
    }
}

/// Something that happened during a tick, for sound and effect cues
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ProjectileFired {
        id: u32,
        pos: Vec2,
    },
    TargetDestroyed {
        target_id: u32,
        projectile_id: u32,
        pos: Vec2,
    },
    PhaseAdvanced {
        phase: u32,
    },
    ShipDestroyed {
        pos: Vec2,
    },
}

/// Hands out increasing entity ids, wrapping after `u32::MAX`
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Complete session state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    /// Seed the RNG was created from
    pub seed: u64,
    /// Seeded once per session; survives reset so the stream continues
    pub rng: Pcg32,
    /// Simulated ticks (ticks spent in GameOver don't count)
    pub time_ticks: u64,
    /// Accumulated simulation time in seconds
    pub time_secs: f64,
    pub mode: SessionState,
    pub ship: Entity,
    /// Insertion order
    pub projectiles: Vec<Entity>,
    /// Insertion order
    pub targets: Vec<Entity>,
    pub score: u64,
    pub phases: PhaseController,
    pub spawner: SpawnController,
    /// Ship position when it was destroyed
    pub explosion: Option<Vec2>,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    pub ids: IdAllocator,
}

impl GameState {
    /// Fresh session waiting on its phase 1 announcement
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut ids = IdAllocator::default();
        let ship = Self::spawn_ship(&settings, &mut ids);
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
            time_ticks: 0,
            time_secs: 0.0,
            mode: SessionState::PhaseAnnounce,
            ship,
            projectiles: Vec::new(),
            targets: Vec::new(),
            score: 0,
            phases: PhaseController::new(settings.hits_per_phase),
            spawner: SpawnController::new(&settings),
            explosion: None,
            events: Vec::new(),
            ids,
            settings,
        }
    }

    /// Back to a fresh session. Settings, seed and RNG stream are kept.
    pub fn reset(&mut self) {
        self.ids = IdAllocator::default();
        self.ship = Self::spawn_ship(&self.settings, &mut self.ids);
        self.time_ticks = 0;
        self.time_secs = 0.0;
        self.mode = SessionState::PhaseAnnounce;
        self.projectiles.clear();
        self.targets.clear();
        self.score = 0;
        self.phases = PhaseController::new(self.settings.hits_per_phase);
        self.spawner = SpawnController::new(&self.settings);
        self.explosion = None;
        self.events.clear();
    }

    fn spawn_ship(settings: &Settings, ids: &mut IdAllocator) -> Entity {
        Entity::new(
            ids.next_id(),
            EntityRole::Ship,
            Vec2::new(settings.centered_ship_x(), settings.ship_y),
            settings.ship_size,
            Vec2::ZERO,
        )
    }

    /// Place a projectile directly, bypassing auto-fire
    pub fn spawn_projectile_at(&mut self, pos: Vec2) -> u32 {
        let id = self.ids.next_id();
        self.projectiles.push(Entity::new(
            id,
            EntityRole::Projectile,
            pos,
            self.settings.projectile_size,
            Vec2::new(0.0, -self.settings.projectile_speed),
        ));
        id
    }

    /// Place a target directly, bypassing the population top-up
    pub fn spawn_target_at(&mut self, pos: Vec2) -> u32 {
        let id = self.ids.next_id();
        self.targets.push(Entity::new(
            id,
            EntityRole::Target,
            pos,
            self.settings.target_size,
            Vec2::new(0.0, self.settings.target_speed),
        ));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, w: f32) -> Entity {
        Entity::new(0, EntityRole::Target, Vec2::new(x, 0.0), Vec2::new(w, 10.0), Vec2::ZERO)
    }

    #[test]
    fn test_advance_is_linear() {
        let mut e = Entity::new(
            1,
            EntityRole::Projectile,
            Vec2::new(10.0, 100.0),
            Vec2::new(20.0, 10.0),
            Vec2::new(0.0, -500.0),
        );
        e.advance(0.1);
        assert_eq!(e.pos, Vec2::new(10.0, 50.0));
        e.advance(0.1);
        assert_eq!(e.pos, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_horizontal_overlap_edges() {
        let ship = rect(100.0, 80.0);
        assert!(rect(50.0, 100.0).overlaps_horizontally(&ship));
        assert!(rect(179.0, 10.0).overlaps_horizontally(&ship));
        // Touching edges
        assert!(!rect(0.0, 100.0).overlaps_horizontally(&ship));
        assert!(!rect(180.0, 10.0).overlaps_horizontally(&ship));
    }

    #[test]
    fn test_new_state_is_centered_and_announcing() {
        let state = GameState::new(Settings::default(), 1);
        assert_eq!(state.mode, SessionState::PhaseAnnounce);
        assert_eq!(state.ship.pos, Vec2::new(472.0, 700.0));
        assert_eq!(state.ship.role, EntityRole::Ship);
        assert!(state.projectiles.is_empty());
        assert!(state.targets.is_empty());
        assert_eq!(state.phases.phase(), 1);
    }

    #[test]
    fn test_reset_clears_entities_and_counters() {
        let mut state = GameState::new(Settings::default(), 1);
        state.spawn_projectile_at(Vec2::new(10.0, 10.0));
        state.spawn_target_at(Vec2::new(10.0, 10.0));
        state.score = 500;
        state.mode = SessionState::GameOver;
        state.explosion = Some(Vec2::new(1.0, 2.0));
        state.ship.pos.x = 0.0;

        state.reset();

        assert_eq!(state.mode, SessionState::PhaseAnnounce);
        assert_eq!(state.score, 0);
        assert!(state.projectiles.is_empty());
        assert!(state.targets.is_empty());
        assert_eq!(state.explosion, None);
        assert_eq!(state.ship.pos.x, state.settings.centered_ship_x());
        assert_eq!(state.seed, 1);
    }

    #[test]
    fn test_injected_entities_use_settings() {
        let mut state = GameState::new(Settings::default(), 1);
        let p = state.spawn_projectile_at(Vec2::new(0.0, 700.0));
        let t = state.spawn_target_at(Vec2::new(0.0, 700.0));
        assert_ne!(p, t);
        assert_eq!(state.projectiles[0].size, Vec2::new(20.0, 10.0));
        assert!(state.projectiles[0].vel.y < 0.0);
        assert_eq!(state.targets[0].size, Vec2::new(100.0, 100.0));
        assert!(state.targets[0].vel.y > 0.0);
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut ids = IdAllocator::default();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 3);
    }

    #[test]
    fn test_ids_wrap_instead_of_overflowing() {
        let mut ids = IdAllocator { next: u32::MAX };
        assert_eq!(ids.next_id(), u32::MAX);
        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 1);
    }
}
