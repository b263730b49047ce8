//! Keyboard intent for the paddle

use serde::{Deserialize, Serialize};

use super::state::Paddle;

/// Logical direction keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEdge {
    Pressed,
    Released,
}

/// Apply a key edge to the paddle velocity
///
/// Whichever event arrives last wins; releasing either key stops the paddle
/// even if the other is still held.
pub fn apply_key(paddle: &mut Paddle, key: Key, edge: KeyEdge) {
    paddle.vel_x = match (key, edge) {
        (Key::Left, KeyEdge::Pressed) => -paddle.speed,
        (Key::Right, KeyEdge::Pressed) => paddle.speed,
        (_, KeyEdge::Released) => 0.0,
    };
}
