//! Rendering module
//!
//! The simulation produces a `RenderSnapshot`; `draw_frame` turns it into
//! filled rectangles and text on any `Surface`. On the web the surface is a
//! canvas 2D context, elsewhere a `RecordingSurface`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use shapes::{draw_frame, net_segments, score_positions};

use glam::Vec2;

use crate::sim::Rect;

/// A host drawing target
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, color: &str);
}

/// Colors for game elements (CSS color strings)
pub mod colors {
    pub const BACKGROUND: &str = "#111";
    pub const NET: &str = "#444";
    pub const PADDLE: &str = "#fff";
    pub const BALL: &str = "#fff";
    pub const SCORE: &str = "#fff";
}

/// Font used for both score counters
pub const SCORE_FONT: &str = "40px Arial";

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        color: String,
    },
    Text {
        text: String,
        at: Vec2,
        font: String,
        color: String,
    },
}

/// Surface that keeps every draw call, for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text draws, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                DrawCommand::Rect { .. } => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            font: font.to_string(),
            color: color.to_string(),
        });
    }
}
