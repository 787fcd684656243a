//! Projectile auto-fire and target population upkeep
//!
//! Tuning (interval, ceiling, speeds) is always read from [`Settings`]; the
//! controller only owns the fire timer.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Entity, EntityRole, IdAllocator};
use crate::settings::Settings;

/// Auto-fire timer and target top-up policy
#[derive(Debug, Clone)]
pub struct SpawnController {
    /// Simulation seconds accumulated toward the next shot
    fire_timer: f32,
}

impl SpawnController {
    /// New controller with the timer primed, so the first tick fires
    pub fn new(settings: &Settings) -> Self {
        Self {
            fire_timer: settings.fire_interval_secs,
        }
    }

    /// Seconds of simulation time until the next shot
    pub fn time_to_next_shot(&self, settings: &Settings) -> f32 {
        (settings.fire_interval_secs - self.fire_timer).max(0.0)
    }

    /// Count `dt` toward the next shot. Every playing tick does this, including
    /// ticks that end in a phase change or game over.
    pub fn accumulate(&mut self, dt: f32) {
        self.fire_timer += dt;
    }

    /// Fire at most one projectile from the ship's muzzle if the timer is due.
    ///
    /// The leftover time is carried over so cadence doesn't drift with frame size.
    pub fn take_shot(
        &mut self,
        ship: &Entity,
        settings: &Settings,
        ids: &mut IdAllocator,
    ) -> Option<Entity> {
        let interval = settings.fire_interval_secs;
        if self.fire_timer < interval {
            return None;
        }
        // Never bank more than one extra shot after a long frame
        self.fire_timer = (self.fire_timer - interval).min(interval);

        Some(Entity::new(
            ids.next_id(),
            EntityRole::Projectile,
            ship.pos + settings.muzzle_offset,
            settings.projectile_size,
            Vec2::new(0.0, -settings.projectile_speed),
        ))
    }

    /// One new target above the arena if the population is under the ceiling
    pub fn replenish_target(
        current: usize,
        rng: &mut Pcg32,
        settings: &Settings,
        ids: &mut IdAllocator,
    ) -> Option<Entity> {
        if current >= settings.target_ceiling {
            return None;
        }
        let max_x = (settings.arena_width - settings.target_size.x).max(0.0);
        let x = rng.random_range(0.0..=max_x);
        let y = -rng.random_range(0.0..=settings.target_spawn_depth);

        Some(Entity::new(
            ids.next_id(),
            EntityRole::Target,
            Vec2::new(x, y),
            settings.target_size,
            Vec2::new(0.0, settings.target_speed),
        ))
    }
}
