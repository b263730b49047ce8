//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::draw::{DrawCommand, Frame};
use super::vertex::Vertex;
use crate::sim::Rect;

/// Triangle fan resolution for the ball
pub const CIRCLE_SEGMENTS: u32 = 32;

/// Generate vertices for a filled rectangle
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (l, r, t, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());

    vec![
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, b, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Triangles for every filled shape in the frame, in draw order
///
/// Clears and text are handled by the backend.
pub fn tessellate(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for command in &frame.commands {
        match command {
            DrawCommand::FillRect { rect: r, color } => vertices.extend(rect(r, *color)),
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => vertices.extend(circle(*center, *radius, *color, CIRCLE_SEGMENTS)),
            DrawCommand::Clear { .. } | DrawCommand::Text { .. } => {}
        }
    }

    vertices
}
