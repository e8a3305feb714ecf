//! Canvas Pong - classic two-paddle Pong against a tracking opponent
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, scoring)
//! - `renderer`: Snapshot-to-surface drawing (canvas on web, recording in tests)
//! - `platform`: Pointer input cell shared with the host
//! - `driver`: Cancellable update-then-render frame loop
//! - `settings`: Tuning constants with JSON overrides

pub mod driver;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{CancelToken, FrameDriver};
pub use platform::PointerInput;
pub use settings::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_INSET: f32 = 20.0;

    /// Ball defaults (square, size is the edge length)
    pub const BALL_SIZE: f32 = 14.0;
    /// Serve speed magnitudes (units per frame)
    pub const SERVE_SPEED_X: f32 = 6.0;
    pub const SERVE_SPEED_Y: f32 = 4.0;

    /// Vertical velocity added per unit of hit offset from paddle center
    pub const SPIN_FACTOR: f32 = 0.25;

    /// Opponent holds still while its center is within this of the ball center
    pub const AI_DEAD_ZONE: f32 = 10.0;
    /// Opponent movement per frame
    pub const AI_STEP: f32 = 5.0;
}
