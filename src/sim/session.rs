//! Public face of the simulation
//!
//! `GameSession` validates input, drives [`tick`](super::tick::tick) and turns
//! the state into a [`SceneSnapshot`] for the renderer. One caller drives it;
//! `&mut self` on `tick` enforces the single-writer rule.

use glam::Vec2;

use super::snapshot::{SceneSnapshot, SpriteRect};
use super::state::{Entity, GameState, SessionState};
use super::tick::{TickInput, tick};
use crate::error::GameError;
use crate::settings::Settings;

/// A running game
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
}

impl GameSession {
    /// Validate the settings and start a fresh session.
    ///
    /// Without a configured seed one is drawn from OS entropy.
    pub fn new(settings: Settings) -> Result<Self, GameError> {
        settings.validate()?;
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("New session with seed {}", seed);
        Ok(Self {
            state: GameState::new(settings, seed),
        })
    }

    /// Default settings with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: GameState::new(Settings::with_seed(seed), seed),
        }
    }

    /// Advance by `dt` seconds with the ship steered toward `steering_x`.
    ///
    /// Fails without touching the session if `dt` is not positive and finite.
    pub fn tick(&mut self, steering_x: f32, dt: f32) -> Result<SceneSnapshot, GameError> {
        if !(dt.is_finite() && dt > 0.0) {
            log::warn!("Rejected tick with dt={}", dt);
            return Err(GameError::InvalidInput { dt });
        }
        tick(&mut self.state, &TickInput { steering_x }, dt);
        Ok(self.snapshot())
    }

    pub fn is_game_over(&self) -> bool {
        self.state.mode == SessionState::GameOver
    }

    /// Start over: score 0, phase 1, no projectiles or targets, ship centered
    pub fn reset(&mut self) {
        log::info!(
            "Session reset (final score {}, phase {})",
            self.state.score,
            self.state.phases.phase()
        );
        self.state.reset();
    }

    /// Current scene without advancing
    pub fn snapshot(&self) -> SceneSnapshot {
        let state = &self.state;
        let settings = &state.settings;
        let (phase_announcement, hold_secs) = match state.mode {
            SessionState::PhaseAnnounce => (
                Some(state.phases.phase()),
                Some(settings.announce_hold_secs),
            ),
            SessionState::GameOver => (
                None,
                Some(settings.explosion_hold_secs + settings.game_over_hold_secs),
            ),
            SessionState::Playing => (None, None),
        };

        SceneSnapshot {
            tick: state.time_ticks,
            ship: SpriteRect::from(&state.ship),
            projectiles: state.projectiles.iter().map(SpriteRect::from).collect(),
            targets: state.targets.iter().map(SpriteRect::from).collect(),
            score: state.score,
            phase: state.phases.phase(),
            hits_this_phase: state.phases.hits_this_phase(),
            phase_announcement,
            game_over: state.mode == SessionState::GameOver,
            explosion_position: state.explosion,
            hold_secs,
            next_shot_in: state.spawner.time_to_next_shot(settings),
            events: state.events.clone(),
        }
    }

    /// Inject a projectile at `pos`, bypassing auto-fire. Returns its id.
    pub fn spawn_projectile_at(&mut self, pos: Vec2) -> u32 {
        self.state.spawn_projectile_at(pos)
    }

    /// Inject a target at `pos`, bypassing the population top-up. Returns its id.
    pub fn spawn_target_at(&mut self, pos: Vec2) -> u32 {
        self.state.spawn_target_at(pos)
    }

    pub fn state(&self) -> SessionState {
        self.state.mode
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn phase(&self) -> u32 {
        self.state.phases.phase()
    }

    pub fn hits_this_phase(&self) -> u32 {
        self.state.phases.hits_this_phase()
    }

    pub fn seed(&self) -> u64 {
        self.state.seed
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn ship(&self) -> &Entity {
        &self.state.ship
    }

    pub fn projectiles(&self) -> &[Entity] {
        &self.state.projectiles
    }

    pub fn targets(&self) -> &[Entity] {
        &self.state.targets
    }

    /// Simulation seconds elapsed
    pub fn elapsed_secs(&self) -> f64 {
        self.state.time_secs
    }
}
