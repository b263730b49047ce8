//! Game configuration
//!
//! Defaults come from [`crate::consts`]. An optional JSON override can be
//! stored next to the best score in the key-value store.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::platform::Storage;

/// Layout and speed settings for a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Brick grid ===
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_height: f32,
    pub brick_padding: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Horizontal speed while a direction key is held (pixels/frame)
    pub paddle_speed: f32,
    pub paddle_bottom_offset: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Magnitude of each velocity component at round start (pixels/frame)
    pub ball_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
        }
    }
}

impl GameConfig {
    /// Storage key for the JSON override
    pub const STORAGE_KEY: &'static str = "breakoutConfig";

    /// Total number of bricks in the grid
    pub fn brick_count(&self) -> u32 {
        self.brick_rows.saturating_mul(self.brick_columns)
    }

    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<GameConfig>(json) {
            Ok(config) => Some(config.sanitized()),
            Err(e) => {
                log::warn!("Ignoring invalid config: {}", e);
                None
            }
        }
    }

    /// Load the config override from storage, falling back to defaults
    pub fn load(storage: &dyn Storage) -> Self {
        if let Some(json) = storage.get_item(Self::STORAGE_KEY) {
            if let Some(config) = Self::from_json(&json) {
                log::info!("Loaded config override from storage");
                return config;
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Replace degenerate values with the defaults and cap the grid size
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.brick_rows == 0 {
            self.brick_rows = defaults.brick_rows;
        }
        if self.brick_columns == 0 {
            self.brick_columns = defaults.brick_columns;
        }
        if self.brick_rows > MAX_BRICK_ROWS {
            log::warn!("{} brick rows requested, capping at {}", self.brick_rows, MAX_BRICK_ROWS);
            self.brick_rows = MAX_BRICK_ROWS;
        }
        if self.brick_columns > MAX_BRICK_COLUMNS {
            log::warn!(
                "{} brick columns requested, capping at {}",
                self.brick_columns,
                MAX_BRICK_COLUMNS
            );
            self.brick_columns = MAX_BRICK_COLUMNS;
        }

        let positive = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        self.brick_height = positive(self.brick_height, defaults.brick_height);
        self.paddle_width = positive(self.paddle_width, defaults.paddle_width);
        self.paddle_height = positive(self.paddle_height, defaults.paddle_height);
        self.paddle_speed = positive(self.paddle_speed, defaults.paddle_speed);
        self.ball_radius = positive(self.ball_radius, defaults.ball_radius);
        self.ball_speed = positive(self.ball_speed, defaults.ball_speed);

        // Zero padding and a paddle resting on the bottom edge are both fine
        if !self.brick_padding.is_finite() || self.brick_padding < 0.0 {
            self.brick_padding = defaults.brick_padding;
        }
        if !self.paddle_bottom_offset.is_finite() || self.paddle_bottom_offset < 0.0 {
            self.paddle_bottom_offset = defaults.paddle_bottom_offset;
        }

        self
    }

    /// Drop brick columns until every brick is at least `MIN_BRICK_WIDTH` wide
    ///
    /// Padding wider than the whole surface is discarded first.
    pub fn fit_to_surface(mut self, surface_width: f32) -> Self {
        let brick_width = |columns: u32, padding: f32| surface_width / columns as f32 - padding;
        if brick_width(self.brick_columns, self.brick_padding) >= MIN_BRICK_WIDTH {
            return self;
        }

        if brick_width(1, self.brick_padding) < MIN_BRICK_WIDTH {
            log::warn!(
                "Brick padding {} does not fit a {}px surface, dropping it",
                self.brick_padding,
                surface_width
            );
            self.brick_padding = 0.0;
        }

        let mut columns = ((surface_width / (self.brick_padding + MIN_BRICK_WIDTH)) as u32)
            .clamp(1, self.brick_columns);
        while columns > 1 && brick_width(columns, self.brick_padding) < MIN_BRICK_WIDTH {
            columns -= 1;
        }

        log::warn!(
            "{} brick columns do not fit a {}px surface, using {}",
            self.brick_columns,
            surface_width,
            columns
        );
        self.brick_columns = columns;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStorage;

    #[test]
    fn test_defaults_match_classic_layout() {
        let config = GameConfig::default();
        assert_eq!(config.brick_count(), 50);
        assert_eq!(config.paddle_width, 150.0);
        assert_eq!(config.ball_radius, 10.0);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = GameConfig::from_json(r#"{"brick_rows": 3}"#).unwrap();
        assert_eq!(config.brick_rows, 3);
        assert_eq!(config.brick_columns, BRICK_COLUMNS);
        assert_eq!(config.paddle_speed, PADDLE_SPEED);
    }

    #[test]
    fn test_degenerate_values_are_replaced() {
        let config =
            GameConfig::from_json(r#"{"brick_columns": 0, "ball_radius": -4.0}"#).unwrap();
        assert_eq!(config.brick_columns, BRICK_COLUMNS);
        assert_eq!(config.ball_radius, BALL_RADIUS);
    }

    #[test]
    fn test_huge_grid_is_capped() {
        let mut storage = MemoryStorage::new();
        storage.set_item(
            GameConfig::STORAGE_KEY,
            r#"{"brick_rows": 100000, "brick_columns": 100000}"#,
        );
        let config = GameConfig::load(&storage);
        assert_eq!(config.brick_rows, MAX_BRICK_ROWS);
        assert_eq!(config.brick_columns, MAX_BRICK_COLUMNS);
        assert_eq!(config.brick_count(), MAX_BRICK_ROWS * MAX_BRICK_COLUMNS);
    }

    #[test]
    fn test_brick_count_saturates() {
        let config = GameConfig {
            brick_rows: u32::MAX,
            brick_columns: 2,
            ..Default::default()
        };
        assert_eq!(config.brick_count(), u32::MAX);
    }

    #[test]
    fn test_fitting_layout_is_untouched() {
        let config = GameConfig::default();
        assert_eq!(config.clone().fit_to_surface(800.0), config);
    }

    #[test]
    fn test_too_many_columns_are_dropped() {
        let config = GameConfig {
            brick_columns: 100,
            ..Default::default()
        }
        .fit_to_surface(300.0);
        // 300 / 50 - 5 = 1
        assert_eq!(config.brick_columns, 50);
        assert_eq!(config.brick_padding, BRICK_PADDING);
    }

    #[test]
    fn test_padding_wider_than_surface_is_dropped() {
        let config = GameConfig {
            brick_padding: 1000.0,
            ..Default::default()
        }
        .fit_to_surface(800.0);
        assert_eq!(config.brick_padding, 0.0);
        assert_eq!(config.brick_columns, BRICK_COLUMNS);
    }

    #[test]
    fn test_load_falls_back_on_garbage() {
        let mut storage = MemoryStorage::new();
        storage.set_item(GameConfig::STORAGE_KEY, "{not json");
        assert_eq!(GameConfig::load(&storage), GameConfig::default());
    }

    #[test]
    fn test_load_reads_override() {
        let mut storage = MemoryStorage::new();
        storage.set_item(GameConfig::STORAGE_KEY, r#"{"paddle_speed": 12.0}"#);
        assert_eq!(GameConfig::load(&storage).paddle_speed, 12.0);
    }
}
