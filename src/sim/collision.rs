//! Collision detection and response
//!
//! Responses only flip velocity components; the only position correction is
//! the paddle snap. Passes always run wall, paddle, bricks in that order.

use super::state::{Ball, BrickGrid, GameState, Paddle};

/// What the ball touched during one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    /// Left or right wall (horizontal velocity flipped once)
    pub side_wall: bool,
    /// Top wall
    pub ceiling: bool,
    pub paddle: bool,
    /// Bricks destroyed this pass
    pub bricks: u32,
}

impl Contacts {
    pub fn any(&self) -> bool {
        self.side_wall || self.ceiling || self.paddle || self.bricks > 0
    }
}

/// Bounce off the side walls and the ceiling
///
/// Both side walls share one check, so a pass flips horizontal velocity at
/// most once. The floor is open.
pub fn wall_collision(ball: &mut Ball, surface_width: f32) -> (bool, bool) {
    let side = ball.right() > surface_width || ball.left() < 0.0;
    if side {
        ball.vel.x = -ball.vel.x;
    }

    let ceiling = ball.top() < 0.0;
    if ceiling {
        ball.vel.y = -ball.vel.y;
    }

    (side, ceiling)
}

/// Bounce off the paddle's top edge
///
/// Fires whenever the center is strictly within the paddle's horizontal span
/// and the bottom edge is past the paddle's top, whatever the vertical
/// direction. The ball is snapped to rest exactly on the paddle.
pub fn paddle_collision(ball: &mut Ball, paddle: &Paddle) -> bool {
    let rect = paddle.as_rect();
    let hit = ball.pos.x > rect.left() && ball.pos.x < rect.right() && ball.bottom() > rect.top();

    if hit {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = rect.top() - ball.radius;
    }

    hit
}

/// Destroy every alive brick containing the ball's center
///
/// Row-major, no early exit: each hit flips vertical velocity again.
/// Returns the number of bricks destroyed.
pub fn brick_collisions(ball: &mut Ball, grid: &mut BrickGrid) -> u32 {
    let mut destroyed = 0;

    for brick in grid.bricks.iter_mut().filter(|b| b.alive) {
        if brick.rect.contains_point_strict(ball.pos) {
            ball.vel.y = -ball.vel.y;
            brick.alive = false;
            destroyed += 1;
            log::debug!("Brick ({}, {}) destroyed", brick.row, brick.column);
        }
    }

    destroyed
}

/// Run a full resolution pass and update the score
pub fn resolve_collisions(state: &mut GameState) -> Contacts {
    let (side_wall, ceiling) = wall_collision(&mut state.ball, state.surface.x);
    let paddle = paddle_collision(&mut state.ball, &state.paddle);
    let bricks = brick_collisions(&mut state.ball, &mut state.bricks);
    state.score += bricks;

    Contacts {
        side_wall,
        ceiling,
        paddle,
        bricks,
    }
}
