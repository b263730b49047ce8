//! Per-frame simulation step
//!
//! Movement is in pixels per frame; one call advances exactly one frame.

use super::collision::resolve_collisions;
use super::state::{GameState, RoundOutcome};
use crate::best_score::BestScore;

/// Advance the round by one frame
///
/// Moves the paddle (clamped) and the ball, resolves collisions, then checks
/// the terminal conditions: loss first, win second. On loss the in-state best
/// score is raised if beaten; persisting it is left to the caller.
pub fn tick(state: &mut GameState) -> Option<RoundOutcome> {
    state.time_ticks += 1;

    state.paddle.advance(state.surface.x);
    state.ball.advance();

    let contacts = resolve_collisions(state);
    if contacts.any() {
        log::debug!("Tick {}: {:?}, score {}", state.time_ticks, contacts, state.score);
    }

    // Whole ball below the play area
    if state.ball.top() > state.surface.y {
        let mut best = BestScore::new(state.best_score);
        let new_best = best.record(state.score);
        state.best_score = best.value;
        return Some(RoundOutcome::Lost { new_best });
    }

    if state.is_cleared() {
        return Some(RoundOutcome::Won);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::input::{Key, KeyEdge, apply_key};
    use glam::Vec2;
    use proptest::prelude::*;

    const SURFACE: Vec2 = Vec2::new(800.0, 600.0);

    fn state_with_best(best: u32) -> GameState {
        GameState::new(&GameConfig::default(), SURFACE, best, 12345)
    }

    /// Park the ball below the surface, clear of the paddle, so the next tick loses
    fn drop_ball(state: &mut GameState) {
        state.ball.pos = Vec2::new(20.0, SURFACE.y + 100.0);
        state.ball.vel = Vec2::new(0.0, 5.0);
    }

    #[test]
    fn test_first_tick_moves_ball_up() {
        let mut state = state_with_best(0);
        let start = state.ball.pos;
        assert_eq!(tick(&mut state), None);
        assert_eq!(state.ball.pos.y, start.y - 5.0);
        assert_eq!(state.ball.pos.x, start.x + state.ball.vel.x);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_win_after_every_brick() {
        let mut state = state_with_best(0);
        let centers: Vec<Vec2> = state.bricks.bricks.iter().map(|b| b.rect.center()).collect();
        assert_eq!(centers.len(), 50);

        for (i, center) in centers.iter().enumerate() {
            state.ball.pos = *center;
            state.ball.vel = Vec2::ZERO;
            let outcome = tick(&mut state);
            assert_eq!(state.score, i as u32 + 1);

            if i < 49 {
                assert_eq!(outcome, None);
            } else {
                assert_eq!(outcome, Some(RoundOutcome::Won));
            }
        }
        assert_eq!(state.score, 50);
        assert_eq!(state.bricks.alive_count(), 0);
    }

    #[test]
    fn test_loss_raises_best_when_beaten() {
        let mut state = state_with_best(10);
        state.score = 12;
        drop_ball(&mut state);

        assert_eq!(tick(&mut state), Some(RoundOutcome::Lost { new_best: true }));
        assert_eq!(state.best_score, 12);
    }

    #[test]
    fn test_loss_keeps_best_when_not_beaten() {
        let mut state = state_with_best(10);
        state.score = 5;
        drop_ball(&mut state);

        assert_eq!(tick(&mut state), Some(RoundOutcome::Lost { new_best: false }));
        assert_eq!(state.best_score, 10);
    }

    #[test]
    fn test_loss_needs_whole_ball_below() {
        let mut state = state_with_best(0);
        // Top edge lands exactly on the bottom edge: still in play
        state.ball.pos = Vec2::new(20.0, SURFACE.y + 5.0);
        state.ball.vel = Vec2::new(0.0, 5.0);
        assert_eq!(tick(&mut state), None);

        assert_eq!(tick(&mut state), Some(RoundOutcome::Lost { new_best: false }));
    }

    #[test]
    fn test_loss_checked_before_win() {
        let mut state = state_with_best(0);
        state.score = state.bricks.total();
        drop_ball(&mut state);

        assert_eq!(tick(&mut state), Some(RoundOutcome::Lost { new_best: true }));
    }

    #[test]
    fn test_paddle_moves_with_input() {
        let mut state = state_with_best(0);
        let start = state.paddle.pos.x;
        apply_key(&mut state.paddle, Key::Right, KeyEdge::Pressed);
        tick(&mut state);
        assert_eq!(state.paddle.pos.x, start + 8.0);
        // Paddle y never changes
        assert_eq!(state.paddle.pos.y, 550.0);
    }

    #[test]
    fn test_paddle_returns_ball() {
        let mut state = state_with_best(0);
        state.ball.pos = Vec2::new(400.0, 538.0);
        state.ball.vel = Vec2::new(3.0, 5.0);

        assert_eq!(tick(&mut state), None);
        assert_eq!(state.ball.pos.y, state.paddle.pos.y - state.ball.radius);
        assert_eq!(state.ball.vel.y, -5.0);
    }

    proptest! {
        #[test]
        fn prop_round_invariants(
            seed in any::<u64>(),
            moves in prop::collection::vec((0u8..3, 1usize..60), 1..40),
        ) {
            let mut state = GameState::new(&GameConfig::default(), SURFACE, 0, seed);
            let max_x = SURFACE.x - state.paddle.width;
            let mut dead: Vec<bool> = vec![false; state.bricks.bricks.len()];

            'round: for (key, frames) in moves {
                match key {
                    0 => apply_key(&mut state.paddle, Key::Left, KeyEdge::Pressed),
                    1 => apply_key(&mut state.paddle, Key::Right, KeyEdge::Pressed),
                    _ => apply_key(&mut state.paddle, Key::Left, KeyEdge::Released),
                }

                for _ in 0..frames {
                    let before = state.score;
                    let destroyed_before = dead.iter().filter(|d| **d).count();
                    let outcome = tick(&mut state);

                    prop_assert!(state.paddle.pos.x >= 0.0 && state.paddle.pos.x <= max_x);
                    prop_assert!(state.score >= before);

                    for (i, brick) in state.bricks.bricks.iter().enumerate() {
                        prop_assert!(!(dead[i] && brick.alive), "brick {} revived", i);
                        dead[i] = !brick.alive;
                    }
                    let destroyed = dead.iter().filter(|d| **d).count();
                    prop_assert_eq!((state.score - before) as usize, destroyed - destroyed_before);

                    if outcome.is_some() {
                        break 'round;
                    }
                }
            }
        }
    }
}
