//! Per-tick simulation step
//!
//! Advances the session by one variable timestep. Order inside a playing tick:
//! steer, settle pairs already in contact, then motion in fixed substeps (move,
//! cull projectiles, projectile hits, ship strike, cull targets), phase check,
//! spawn. Substeps keep fast pairs and long frames from tunnelling through the
//! hit box or past the ship's row.

use super::collision;
use super::spawn::SpawnController;
use super::state::{GameEvent, GameState, SessionState};
use crate::clamp_to_arena;
use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Desired ship center x in arena coordinates (from face tracking)
    pub steering_x: f32,
}

/// Advance the game state by `dt` seconds.
///
/// `dt` must already be validated as positive and finite.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    match state.mode {
        SessionState::GameOver => return,
        SessionState::PhaseAnnounce => {
            // The caller held the banner; this tick resumes play
            log::debug!("Phase {} underway", state.phases.phase());
            state.mode = SessionState::Playing;
        }
        SessionState::Playing => {}
    }

    state.time_ticks += 1;
    state.time_secs += f64::from(dt);

    steer_ship(state, input.steering_x, dt);
    // Timers run on the full frame, even if the tick ends early below
    state.spawner.accumulate(dt);

    // Pairs that start the tick in contact score before anything moves
    resolve_hits(state);

    let substeps = substep_count(dt);
    let sub_dt = dt / substeps as f32;
    let mut culled = 0;
    for _ in 0..substeps {
        for projectile in &mut state.projectiles {
            projectile.advance(sub_dt);
        }
        for target in &mut state.targets {
            target.advance(sub_dt);
        }

        // Projectiles that left the arena can't hit anything
        culled += collision::cull_projectiles(&mut state.projectiles);
        resolve_hits(state);

        if let Some(target_id) =
            collision::find_ship_strike(&state.targets, &state.ship).map(|t| t.id)
        {
            let pos = state.ship.pos;
            state.mode = SessionState::GameOver;
            state.explosion = Some(pos);
            state.events.push(GameEvent::ShipDestroyed { pos });
            log::info!(
                "Target {} reached the ship at tick {}: game over with score {} in phase {}",
                target_id,
                state.time_ticks,
                state.score,
                state.phases.phase()
            );
            return;
        }

        // Only after the strike check, so nothing slips past the ship
        culled += collision::cull_targets(&mut state.targets, state.settings.arena_height);
    }
    if culled > 0 {
        log::trace!("Culled {} out-of-bounds entities", culled);
    }

    if let Some(phase) = state.phases.evaluate() {
        state.mode = SessionState::PhaseAnnounce;
        state.events.push(GameEvent::PhaseAdvanced { phase });
        log::info!("Advancing to phase {} (score {})", phase, state.score);
        return;
    }

    if let Some(shot) = state
        .spawner
        .take_shot(&state.ship, &state.settings, &mut state.ids)
    {
        log::debug!("Auto-fired projectile {}", shot.id);
        state.events.push(GameEvent::ProjectileFired {
            id: shot.id,
            pos: shot.pos,
        });
        state.projectiles.push(shot);
    }

    if let Some(target) = SpawnController::replenish_target(
        state.targets.len(),
        &mut state.rng,
        &state.settings,
        &mut state.ids,
    ) {
        state.targets.push(target);
    }

    log::trace!(
        "Tick {}: ship x={:.1}, {} projectiles, {} targets, score {}",
        state.time_ticks,
        state.ship.pos.x,
        state.projectiles.len(),
        state.targets.len(),
        state.score
    );
}

/// Number of equal substeps `dt` is split into, each at most `SIM_DT` long
/// until the cap kicks in.
fn substep_count(dt: f32) -> u32 {
    ((dt / SIM_DT).ceil() as u32).clamp(1, MAX_SUBSTEPS)
}

/// Remove matched projectile/target pairs, then score them and record events.
fn resolve_hits(state: &mut GameState) {
    let hits = collision::resolve_projectile_hits(
        &mut state.projectiles,
        &mut state.targets,
        state.settings.hit_tolerance,
    );
    if hits.is_empty() {
        return;
    }

    let count = u32::try_from(hits.len()).unwrap_or(u32::MAX);
    let points = state.settings.points_per_hit.saturating_mul(u64::from(count));
    state.score = state.score.saturating_add(points);
    state.phases.record_hits(count);

    for hit in hits {
        log::debug!(
            "Projectile {} destroyed target {} at ({:.0}, {:.0})",
            hit.projectile_id,
            hit.target_id,
            hit.pos.x,
            hit.pos.y
        );
        state.events.push(GameEvent::TargetDestroyed {
            target_id: hit.target_id,
            projectile_id: hit.projectile_id,
            pos: hit.pos,
        });
    }
}

/// Move the ship toward the steering input, clamped to the arena.
///
/// A NaN reading leaves the ship where it is.
fn steer_ship(state: &mut GameState, steering_x: f32, dt: f32) {
    if steering_x.is_nan() {
        state.ship.vel.x = 0.0;
        return;
    }
    let arena_width = state.settings.arena_width;
    let ship = &mut state.ship;
    let desired = clamp_to_arena(steering_x - ship.size.x / 2.0, ship.size.x, arena_width);

    let next = match state.settings.ship_max_speed {
        None => desired,
        Some(max_speed) => {
            let max_delta = max_speed * dt;
            ship.pos.x + (desired - ship.pos.x).clamp(-max_delta, max_delta)
        }
    };
    let next = clamp_to_arena(next, ship.size.x, arena_width);

    ship.vel.x = (next - ship.pos.x) / dt;
    ship.pos.x = next;
}
