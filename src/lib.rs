//! Brick Breaker - a single-screen paddle, ball and brick wall arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, round outcomes)
//! - `renderer`: Display list composition and the WebGPU pipeline
//! - `platform`: Storage and notification seams (LocalStorage/alert on web)
//! - `best_score`: Persisted best score
//! - `config`: Data-driven layout and speeds
//! - `game`: Round driver (render, update, round end, reset)

pub mod best_score;
pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use best_score::BestScore;
pub use config::GameConfig;
pub use game::Game;

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Brick grid dimensions
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLUMNS: u32 = 10;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Gap between bricks (half of it is kept as a margin around the grid)
    pub const BRICK_PADDING: f32 = 5.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Distance from the bottom edge to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 50.0;

    /// Ball defaults (pixels per frame)
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 5.0;

    /// HUD text placement, measured from the top-right corner
    pub const HUD_RIGHT_INSET: f32 = 150.0;
    pub const HUD_FIRST_LINE_Y: f32 = 30.0;
    pub const HUD_LINE_SPACING: f32 = 30.0;
    pub const HUD_FONT_PX: f32 = 20.0;

    /// Limits for stored config overrides
    pub const MAX_BRICK_ROWS: u32 = 50;
    pub const MAX_BRICK_COLUMNS: u32 = 100;
    /// Narrowest brick the layout will produce (pixels)
    pub const MIN_BRICK_WIDTH: f32 = 1.0;

    /// Native headless runner limits
    pub const MAX_FRAMES_PER_ROUND: u64 = 200_000;
}
