//! Steering sources
//!
//! The simulation only ever sees one number per tick: where the player wants
//! the ship's center to be. These adapters produce it, either from a face
//! detector's bounding boxes or from an autopilot reading the scene.

use crate::settings::Settings;
use crate::sim::{SceneSnapshot, SpriteRect};

/// Anything that can steer the ship
pub trait SteeringSource {
    /// Desired ship center x for the next tick, in arena coordinates
    fn steering_x(&mut self, scene: &SceneSnapshot) -> f32;
}

/// A detected face in camera pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FaceBox {
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Steers with the first detected face
#[derive(Debug, Clone)]
pub struct FaceSteering {
    frame_width: f32,
    arena_width: f32,
    /// Flip horizontally so the ship follows the player like a mirror
    mirror: bool,
    last_x: f32,
}

impl FaceSteering {
    /// `frame_width` is the camera frame width in pixels
    pub fn new(frame_width: f32, settings: &Settings) -> Self {
        Self {
            frame_width: frame_width.max(1.0),
            arena_width: settings.arena_width,
            mirror: false,
            last_x: settings.arena_width / 2.0,
        }
    }

    pub fn mirrored(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    /// Feed one frame of detector output. The first face wins; with no face
    /// the previous reading is held. Returns the current steering x.
    pub fn observe(&mut self, faces: &[FaceBox]) -> f32 {
        if let Some(face) = faces.first() {
            let mut frame_x = face.center_x();
            if self.mirror {
                frame_x = self.frame_width - frame_x;
            }
            self.last_x = frame_x * self.arena_width / self.frame_width;
        }
        self.last_x
    }

    pub fn current(&self) -> f32 {
        self.last_x
    }
}

impl SteeringSource for FaceSteering {
    fn steering_x(&mut self, _scene: &SceneSnapshot) -> f32 {
        self.last_x
    }
}

/// Idle/demo player
///
/// Sidesteps the most imminent target in the ship's lane, otherwise lines up
/// under the lowest target that is still far enough away to be shot.
#[derive(Debug, Clone)]
pub struct Autopilot {
    arena_width: f32,
    /// Horizontal muzzle offset from the ship's left edge
    muzzle_x: f32,
    /// Targets closer than this to the ship row count as threats
    danger_band: f32,
}

impl Autopilot {
    pub fn new(settings: &Settings) -> Self {
        Self {
            arena_width: settings.arena_width,
            muzzle_x: settings.muzzle_offset.x,
            danger_band: settings.target_size.y * 2.0,
        }
    }

    fn lane_overlaps(target: &SpriteRect, ship: &SpriteRect) -> bool {
        target.pos.x + target.size.x > ship.pos.x && target.pos.x < ship.pos.x + ship.size.x
    }

    /// Center x that clears `threat`, on whichever side has room and is closer
    fn dodge(&self, threat: &SpriteRect, ship: &SpriteRect) -> f32 {
        let half = ship.size.x / 2.0;
        let left = threat.pos.x - half - 1.0;
        let right = threat.pos.x + threat.size.x + half + 1.0;
        let left_ok = left - half >= 0.0;
        let right_ok = right + half <= self.arena_width;
        let ship_center = ship.pos.x + half;

        match (left_ok, right_ok) {
            (true, true) => {
                if (ship_center - left).abs() <= (right - ship_center).abs() {
                    left
                } else {
                    right
                }
            }
            (true, false) => left,
            (false, true) => right,
            (false, false) => ship_center,
        }
    }
}

impl SteeringSource for Autopilot {
    fn steering_x(&mut self, scene: &SceneSnapshot) -> f32 {
        let ship = &scene.ship;
        let ship_center = ship.pos.x + ship.size.x / 2.0;

        let threat = scene
            .targets
            .iter()
            .filter(|t| t.pos.y + t.size.y >= ship.pos.y - self.danger_band)
            .filter(|t| Self::lane_overlaps(t, ship))
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));
        if let Some(threat) = threat {
            return self.dodge(threat, ship);
        }

        // Hits compare left edges, so put the muzzle on the target's left edge
        scene
            .targets
            .iter()
            .filter(|t| t.pos.y + t.size.y < ship.pos.y - self.danger_band)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|t| t.pos.x - self.muzzle_x + ship.size.x / 2.0)
            .unwrap_or(ship_center)
    }
}
