//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use snapshot::RenderSnapshot;
pub use state::{Ball, GameEvent, GameState, Paddle, Score, Side};
pub use tick::{TickInput, tick};
