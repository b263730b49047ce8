//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` is one display frame
//! - Seeded RNG only
//! - Stable iteration order (row-major bricks)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod rect;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{Contacts, brick_collisions, paddle_collision, resolve_collisions, wall_collision};
pub use input::{Key, KeyEdge, apply_key};
pub use rect::Rect;
pub use state::{Ball, Brick, BrickGrid, GameState, Paddle, RoundOutcome};
pub use tick::tick;
