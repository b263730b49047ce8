//! Game state and core simulation types
//!
//! Everything a round needs lives in [`GameState`]; it is rebuilt from
//! scratch when the round ends.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Ball fell below the play area
    Lost {
        /// Score beat the best score and should be persisted
        new_best: bool,
    },
    /// Every brick destroyed
    Won,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball resting on top of the paddle, heading up and to one side
    pub fn on_paddle(paddle: &Paddle, surface: Vec2, radius: f32, speed: f32, rng: &mut Pcg32) -> Self {
        let dir_x = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Self {
            pos: Vec2::new(surface.x / 2.0, paddle.pos.y - radius),
            vel: Vec2::new(speed * dir_x, -speed),
            radius,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner (y never changes after construction)
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal velocity (pixels per frame)
    pub vel_x: f32,
    /// Speed magnitude used by the input handler
    pub speed: f32,
}

impl Paddle {
    /// Paddle centered horizontally near the bottom edge
    pub fn new(config: &GameConfig, surface: Vec2) -> Self {
        // A paddle wider than the surface would leave no valid x
        let width = config.paddle_width.min(surface.x);
        Self {
            pos: Vec2::new(surface.x / 2.0 - width / 2.0, surface.y - config.paddle_bottom_offset),
            width,
            height: config.paddle_height,
            vel_x: 0.0,
            speed: config.paddle_speed,
        }
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Apply velocity, then keep the paddle inside [0, surface_width - width]
    pub fn advance(&mut self, surface_width: f32) {
        self.pos.x += self.vel_x;

        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        }
        if self.pos.x + self.width > surface_width {
            self.pos.x = surface_width - self.width;
        }
    }
}

/// A destructible brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub row: u32,
    pub column: u32,
    /// Screen rectangle, fixed for the whole round
    pub rect: Rect,
    pub alive: bool,
}

/// Fixed rows x columns brick wall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    pub rows: u32,
    pub columns: u32,
    /// Row-major
    pub bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out every cell once; the layout never changes within a round
    ///
    /// Cell width fills the surface: `surface_width / columns - padding`.
    /// Half the padding is kept as a margin before the first row and column.
    pub fn new(config: &GameConfig, surface_width: f32) -> Self {
        let padding = config.brick_padding;
        let width = surface_width / config.brick_columns as f32 - padding;
        let height = config.brick_height;

        let mut bricks = Vec::with_capacity(config.brick_count() as usize);
        for row in 0..config.brick_rows {
            for column in 0..config.brick_columns {
                let x = column as f32 * (width + padding) + padding / 2.0;
                let y = row as f32 * (height + padding) + padding / 2.0;
                bricks.push(Brick {
                    row,
                    column,
                    rect: Rect::new(x, y, width, height),
                    alive: true,
                });
            }
        }

        Self {
            rows: config.brick_rows,
            columns: config.brick_columns,
            bricks,
        }
    }

    pub fn total(&self) -> u32 {
        self.rows.saturating_mul(self.columns)
    }

    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    pub fn get(&self, row: u32, column: u32) -> Option<&Brick> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.bricks.get((row * self.columns + column) as usize)
    }

    pub fn get_mut(&mut self, row: u32, column: u32) -> Option<&mut Brick> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.bricks.get_mut((row * self.columns + column) as usize)
    }
}

/// Complete round state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the ball direction was drawn from
    pub seed: u64,
    /// Drawing surface size in pixels (fixed at startup)
    pub surface: Vec2,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    /// Bricks destroyed this round
    pub score: u32,
    /// Best score as loaded at round start (raised on loss)
    pub best_score: u32,
    /// Frames simulated this round
    pub time_ticks: u64,
}

impl GameState {
    /// Build a fresh round
    ///
    /// The grid is capped and narrowed to fit `surface` so every brick stays hittable.
    pub fn new(config: &GameConfig, surface: Vec2, best_score: u32, seed: u64) -> Self {
        let config = &config.clone().sanitized().fit_to_surface(surface.x);
        let mut rng = Pcg32::seed_from_u64(seed);
        let paddle = Paddle::new(config, surface);
        let ball = Ball::on_paddle(&paddle, surface, config.ball_radius, config.ball_speed, &mut rng);
        let bricks = BrickGrid::new(config, surface.x);

        Self {
            seed,
            surface,
            paddle,
            ball,
            bricks,
            score: 0,
            best_score,
            time_ticks: 0,
        }
    }

    /// Every brick destroyed
    pub fn is_cleared(&self) -> bool {
        self.score == self.bricks.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(&GameConfig::default(), surface(), 7, 1);

        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 7);
        assert_eq!(state.paddle.pos, Vec2::new(325.0, 550.0));
        assert_eq!(state.paddle.vel_x, 0.0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 540.0));
        assert_eq!(state.ball.radius, 10.0);
        assert_eq!(state.ball.vel.y, -5.0);
        assert_eq!(state.ball.vel.x.abs(), 5.0);
    }

    #[test]
    fn test_brick_grid_layout() {
        let grid = BrickGrid::new(&GameConfig::default(), 800.0);
        assert_eq!(grid.bricks.len(), 50);
        assert_eq!(grid.alive_count(), 50);

        // 800 / 10 - 5 = 75 wide, 80 px pitch, 2.5 px margin
        let first = grid.get(0, 0).unwrap();
        assert_eq!(first.rect, Rect::new(2.5, 2.5, 75.0, 20.0));

        let last = grid.get(4, 9).unwrap();
        assert_eq!(last.rect.pos, Vec2::new(9.0 * 80.0 + 2.5, 4.0 * 25.0 + 2.5));
        assert_eq!((last.row, last.column), (4, 9));

        assert!(grid.get(5, 0).is_none());
        assert!(grid.get(0, 10).is_none());
    }

    #[test]
    fn test_seed_determines_direction() {
        let config = GameConfig::default();
        for seed in 0..32 {
            let a = GameState::new(&config, surface(), 0, seed);
            let b = GameState::new(&config, surface(), 0, seed);
            assert_eq!(a.ball.vel, b.ball.vel);
        }
    }

    #[test]
    fn test_both_directions_occur() {
        let config = GameConfig::default();
        let dirs: Vec<f32> = (0..64)
            .map(|seed| GameState::new(&config, surface(), 0, seed).ball.vel.x)
            .collect();
        assert!(dirs.iter().any(|&dx| dx > 0.0));
        assert!(dirs.iter().any(|&dx| dx < 0.0));
    }

    #[test]
    fn test_oversized_grid_stays_hittable() {
        let config = GameConfig {
            brick_rows: 100_000,
            brick_columns: 100_000,
            ..Default::default()
        };
        let state = GameState::new(&config, surface(), 0, 3);
        assert_eq!(state.bricks.total(), 5000);
        assert_eq!(state.bricks.bricks.len(), 5000);
        assert!(
            state
                .bricks
                .bricks
                .iter()
                .all(|b| b.rect.size.x > 0.0 && b.rect.contains_point_strict(b.rect.center()))
        );
    }

    #[test]
    fn test_crowded_columns_narrowed_to_surface() {
        let config = GameConfig {
            brick_columns: 400,
            ..Default::default()
        };
        let state = GameState::new(&config, Vec2::new(300.0, 600.0), 0, 3);
        assert_eq!(state.bricks.columns, 50);
        assert!(state.bricks.bricks.iter().all(|b| b.rect.size.x >= 1.0));
    }

    #[test]
    fn test_oversized_paddle_fits_surface() {
        let config = GameConfig {
            paddle_width: 1000.0,
            ..Default::default()
        };
        let mut paddle = Paddle::new(&config, surface());
        assert_eq!(paddle.width, 800.0);
        paddle.vel_x = 8.0;
        paddle.advance(800.0);
        assert_eq!(paddle.pos.x, 0.0);
    }

    #[test]
    fn test_paddle_clamps_to_walls() {
        let mut paddle = Paddle::new(&GameConfig::default(), surface());

        paddle.vel_x = -1000.0;
        paddle.advance(800.0);
        assert_eq!(paddle.pos.x, 0.0);

        paddle.vel_x = 1000.0;
        paddle.advance(800.0);
        assert_eq!(paddle.pos.x, 650.0);
    }
}
