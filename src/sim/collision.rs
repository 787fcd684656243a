//! Collision detection and removal policy
//!
//! Projectile/target hits use a proximity box on the sprites' top-left
//! corners rather than full rectangle intersection. Tightening it to true
//! rectangles changes how forgiving the game feels, so the tolerance is kept.
//!
//! All removals go through `retain`, never erase-while-iterating.

use glam::Vec2;

use super::state::Entity;

/// A projectile that destroyed a target this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub projectile_id: u32,
    pub target_id: u32,
    /// Target position at the moment of impact
    pub pos: Vec2,
}

/// Proximity test between a projectile and a target
#[inline]
pub fn within_hit_box(projectile: &Entity, target: &Entity, tolerance: f32) -> bool {
    (projectile.pos.x - target.pos.x).abs() < tolerance
        && (projectile.pos.y - target.pos.y).abs() < tolerance
}

/// Pair projectiles with targets and remove every matched pair.
///
/// Projectiles are visited in insertion order; each claims the first
/// unclaimed target inside its hit box. A target can only be claimed once.
pub fn resolve_projectile_hits(
    projectiles: &mut Vec<Entity>,
    targets: &mut Vec<Entity>,
    tolerance: f32,
) -> Vec<Hit> {
    let mut hits: Vec<Hit> = Vec::new();

    for projectile in projectiles.iter() {
        let claimed = targets.iter().find(|target| {
            !hits.iter().any(|h| h.target_id == target.id)
                && within_hit_box(projectile, target, tolerance)
        });
        if let Some(target) = claimed {
            hits.push(Hit {
                projectile_id: projectile.id,
                target_id: target.id,
                pos: target.pos,
            });
        }
    }

    if !hits.is_empty() {
        projectiles.retain(|p| !hits.iter().any(|h| h.projectile_id == p.id));
        targets.retain(|t| !hits.iter().any(|h| h.target_id == t.id));
    }

    hits
}

/// First target (insertion order) that has reached the ship's row while
/// overlapping it horizontally.
pub fn find_ship_strike<'a>(targets: &'a [Entity], ship: &Entity) -> Option<&'a Entity> {
    targets
        .iter()
        .find(|target| target.pos.y >= ship.pos.y && target.overlaps_horizontally(ship))
}

/// Drop projectiles that left through the top edge. Returns how many were removed.
pub fn cull_projectiles(projectiles: &mut Vec<Entity>) -> usize {
    let before = projectiles.len();
    projectiles.retain(|p| p.pos.y >= 0.0);
    before - projectiles.len()
}

/// Drop targets that fell past the arena floor without touching the ship.
pub fn cull_targets(targets: &mut Vec<Entity>, arena_height: f32) -> usize {
    let before = targets.len();
    targets.retain(|t| t.pos.y <= arena_height);
    before - targets.len()
}
