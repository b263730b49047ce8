//! Frame composition
//!
//! Turns a [`GameState`] into a backend-neutral display list. Composing never
//! mutates the simulation, so it can run before or after `tick` without
//! changing gameplay.

use glam::Vec2;

use super::vertex::colors;
use crate::consts::{HUD_FIRST_LINE_Y, HUD_FONT_PX, HUD_LINE_SPACING, HUD_RIGHT_INSET};
use crate::sim::{GameState, Rect};

/// RGBA, 0-1
pub type Color = [f32; 4];

/// One drawing operation, in screen pixels (origin top-left, y down)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear { color: Color },
    FillRect { rect: Rect, color: Color },
    FillCircle { center: Vec2, radius: f32, color: Color },
    /// `pos` is the text baseline start
    Text {
        text: String,
        pos: Vec2,
        size_px: f32,
        color: Color,
    },
}

/// Display list for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Surface size the coordinates refer to
    pub size: Vec2,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Color of the last clear (background if none)
    pub fn clear_color(&self) -> Color {
        self.commands
            .iter()
            .rev()
            .find_map(|c| match c {
                DrawCommand::Clear { color } => Some(*color),
                _ => None,
            })
            .unwrap_or(colors::BACKGROUND)
    }

    /// Text commands, in draw order
    pub fn texts(&self) -> impl Iterator<Item = (&str, Vec2, f32, Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text {
                text,
                pos,
                size_px,
                color,
            } => Some((text.as_str(), *pos, *size_px, *color)),
            _ => None,
        })
    }
}

/// Paint the current state: clear, paddle, ball, alive bricks, scores
pub fn compose(state: &GameState) -> Frame {
    let mut commands = Vec::with_capacity(state.bricks.bricks.len() + 5);

    commands.push(DrawCommand::Clear {
        color: colors::BACKGROUND,
    });

    commands.push(DrawCommand::FillRect {
        rect: state.paddle.as_rect(),
        color: colors::PADDLE,
    });

    commands.push(DrawCommand::FillCircle {
        center: state.ball.pos,
        radius: state.ball.radius,
        color: colors::BALL,
    });

    // Destroyed bricks are skipped
    commands.extend(state.bricks.bricks.iter().filter(|b| b.alive).map(|b| {
        DrawCommand::FillRect {
            rect: b.rect,
            color: colors::BRICK,
        }
    }));

    let x = state.surface.x - HUD_RIGHT_INSET;
    let lines = [
        format!("Score: {}", state.score),
        format!("Best: {}", state.best_score),
    ];
    for (i, text) in lines.into_iter().enumerate() {
        commands.push(DrawCommand::Text {
            text,
            pos: Vec2::new(x, HUD_FIRST_LINE_Y + i as f32 * HUD_LINE_SPACING),
            size_px: HUD_FONT_PX,
            color: colors::TEXT,
        });
    }

    Frame {
        size: state.surface,
        commands,
    }
}
