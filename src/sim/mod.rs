//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through the `dt` passed to `tick`
//! - Seeded RNG only
//! - Stable iteration order (insertion order, ids ascending)
//! - No rendering, capture or platform dependencies

pub mod collision;
pub mod phase;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Hit, find_ship_strike, resolve_projectile_hits, within_hit_box};
pub use phase::PhaseController;
pub use session::GameSession;
pub use snapshot::{SceneSnapshot, SpriteRect};
pub use spawn::SpawnController;
pub use state::{Entity, EntityRole, GameEvent, GameState, SessionState};
pub use tick::{TickInput, tick};
