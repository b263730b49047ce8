//! Idle/demo mode: steer the paddle under the ball
//!
//! Produces the same key edges a player would, so the headless runner
//! exercises the real input path.

use super::input::{Key, KeyEdge};
use super::state::GameState;

/// Tracks which key the autopilot is "holding"
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    held: Option<Key>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key edges to apply before the next frame (empty when nothing changes)
    pub fn steer(&mut self, state: &GameState) -> Vec<(Key, KeyEdge)> {
        let paddle_center = state.paddle.pos.x + state.paddle.width / 2.0;
        let offset = state.ball.pos.x - paddle_center;
        let dead_zone = state.paddle.width / 4.0;

        let want = if offset < -dead_zone {
            Some(Key::Left)
        } else if offset > dead_zone {
            Some(Key::Right)
        } else {
            None
        };

        if want == self.held {
            return Vec::new();
        }

        let mut edges = Vec::with_capacity(2);
        if let Some(key) = self.held {
            edges.push((key, KeyEdge::Released));
        }
        if let Some(key) = want {
            edges.push((key, KeyEdge::Pressed));
        }
        self.held = want;
        edges
    }

    /// Forget held keys (round reset)
    pub fn reset(&mut self) {
        self.held = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(&GameConfig::default(), Vec2::new(800.0, 600.0), 0, 3)
    }

    #[test]
    fn test_idle_when_ball_above_paddle() {
        let s = state();
        let mut pilot = Autopilot::new();
        assert!(pilot.steer(&s).is_empty());
    }

    #[test]
    fn test_press_then_switch() {
        let mut s = state();
        let mut pilot = Autopilot::new();

        s.ball.pos.x = 50.0;
        assert_eq!(pilot.steer(&s), vec![(Key::Left, KeyEdge::Pressed)]);
        // Holding: no repeat edges
        assert!(pilot.steer(&s).is_empty());

        s.ball.pos.x = 750.0;
        assert_eq!(
            pilot.steer(&s),
            vec![(Key::Left, KeyEdge::Released), (Key::Right, KeyEdge::Pressed)]
        );

        s.ball.pos.x = 400.0;
        assert_eq!(pilot.steer(&s), vec![(Key::Right, KeyEdge::Released)]);
    }
}
