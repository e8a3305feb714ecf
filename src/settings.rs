//! Game tuning constants
//!
//! Defaults reproduce the classic layout. A JSON document can override any
//! subset of fields; values that make no geometric sense are clamped, never
//! rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from reading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Dimensions and speeds used by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from each side wall to the paddle's outer edge
    pub paddle_inset: f32,

    // === Ball ===
    pub ball_size: f32,
    pub serve_speed_x: f32,
    pub serve_speed_y: f32,
    pub spin_factor: f32,

    // === Opponent ===
    pub ai_dead_zone: f32,
    pub ai_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,

            ball_size: BALL_SIZE,
            serve_speed_x: SERVE_SPEED_X,
            serve_speed_y: SERVE_SPEED_Y,
            spin_factor: SPIN_FACTOR,

            ai_dead_zone: AI_DEAD_ZONE,
            ai_step: AI_STEP,
        }
    }
}

impl Tuning {
    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Read and parse a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read a tuning file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp every value into a playable range
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        // Wide enough for two minimum-width paddles side by side
        let field_width = finite_or(self.field_width, d.field_width).max(2.0);
        let field_height = finite_or(self.field_height, d.field_height).max(1.0);

        let paddle_width =
            finite_or(self.paddle_width, d.paddle_width).clamp(1.0, field_width / 2.0);
        // Paddles may meet in the middle but never cross
        let max_inset = (field_width - 2.0 * paddle_width) / 2.0;

        Self {
            field_width,
            field_height,

            paddle_width,
            paddle_height: finite_or(self.paddle_height, d.paddle_height).clamp(1.0, field_height),
            paddle_inset: finite_or(self.paddle_inset, d.paddle_inset).clamp(0.0, max_inset),

            ball_size: finite_or(self.ball_size, d.ball_size).clamp(1.0, field_height),
            serve_speed_x: finite_or(self.serve_speed_x, d.serve_speed_x).abs(),
            serve_speed_y: finite_or(self.serve_speed_y, d.serve_speed_y).abs(),
            spin_factor: finite_or(self.spin_factor, d.spin_factor),

            ai_dead_zone: finite_or(self.ai_dead_zone, d.ai_dead_zone).max(0.0),
            ai_step: finite_or(self.ai_step, d.ai_step).abs(),
        }
    }

    /// Left edge of the human paddle
    pub fn human_paddle_x(&self) -> f32 {
        self.paddle_inset
    }

    /// Left edge of the opponent paddle
    pub fn opponent_paddle_x(&self) -> f32 {
        self.field_width - self.paddle_width - self.paddle_inset
    }

    /// Highest legal paddle top
    pub fn paddle_max_y(&self) -> f32 {
        (self.field_height - self.paddle_height).max(0.0)
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}
