//! Read-only view of the state handed to renderers

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::{GameState, Score};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub field: Vec2,
    pub human: Rect,
    pub opponent: Rect,
    pub ball: Rect,
    pub score: Score,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            field: state.field_size(),
            human: state.human.rect(),
            opponent: state.opponent.rect(),
            ball: state.ball.rect(),
            score: state.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_initial_state() {
        let state = GameState::new(5);
        let snap = RenderSnapshot::capture(&state);

        assert_eq!(snap.field, Vec2::new(800.0, 600.0));
        assert_eq!(snap.human.min, Vec2::new(20.0, 260.0));
        assert_eq!(snap.human.size, Vec2::new(12.0, 80.0));
        assert_eq!(snap.opponent.min.x, 768.0);
        assert_eq!(snap.ball.size, Vec2::splat(14.0));
        assert_eq!(snap.score, Score::default());
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = RenderSnapshot::capture(&GameState::new(5));
        let json = serde_json::to_string(&snap).unwrap();
        let back: RenderSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
