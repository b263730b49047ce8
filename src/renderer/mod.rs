//! Rendering module
//!
//! `draw` composes a backend-neutral display list from the game state;
//! `pipeline` paints its shapes with WebGPU.

pub mod draw;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use draw::{Color, DrawCommand, Frame, compose};
pub use pipeline::RenderState;
pub use vertex::Vertex;
