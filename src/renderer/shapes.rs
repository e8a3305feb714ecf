//! Frame layout: background, net, paddles, ball, scores

use glam::Vec2;

use super::{SCORE_FONT, Surface, colors};
use crate::sim::{Rect, RenderSnapshot};

/// Net dash geometry
const NET_WIDTH: f32 = 4.0;
const NET_DASH: f32 = 20.0;
const NET_SPACING: f32 = 30.0;

/// Score baseline and horizontal offsets from the field center
const SCORE_BASELINE: f32 = 50.0;
const HUMAN_SCORE_OFFSET: f32 = -60.0;
const OPPONENT_SCORE_OFFSET: f32 = 30.0;

/// Dashes of the center net, top to bottom
pub fn net_segments(field: Vec2) -> Vec<Rect> {
    let x = field.x / 2.0 - NET_WIDTH / 2.0;
    let mut segments = Vec::new();
    let mut y = 0.0;
    while y < field.y {
        segments.push(Rect::new(Vec2::new(x, y), Vec2::new(NET_WIDTH, NET_DASH)));
        y += NET_SPACING;
    }
    segments
}

/// Text anchors for the (human, opponent) scores
pub fn score_positions(field: Vec2) -> (Vec2, Vec2) {
    let mid = field.x / 2.0;
    (
        Vec2::new(mid + HUMAN_SCORE_OFFSET, SCORE_BASELINE),
        Vec2::new(mid + OPPONENT_SCORE_OFFSET, SCORE_BASELINE),
    )
}

/// Draw one complete frame
pub fn draw_frame<S: Surface + ?Sized>(snapshot: &RenderSnapshot, surface: &mut S) {
    // Clear
    surface.fill_rect(Rect::new(Vec2::ZERO, snapshot.field), colors::BACKGROUND);

    for dash in net_segments(snapshot.field) {
        surface.fill_rect(dash, colors::NET);
    }

    surface.fill_rect(snapshot.human, colors::PADDLE);
    surface.fill_rect(snapshot.opponent, colors::PADDLE);
    surface.fill_rect(snapshot.ball, colors::BALL);

    let (human_at, opponent_at) = score_positions(snapshot.field);
    surface.fill_text(
        &snapshot.score.human.to_string(),
        human_at,
        SCORE_FONT,
        colors::SCORE,
    );
    surface.fill_text(
        &snapshot.score.opponent.to_string(),
        opponent_at,
        SCORE_FONT,
        colors::SCORE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::sim::{GameState, Score};

    #[test]
    fn test_net_covers_field_height() {
        let dashes = net_segments(Vec2::new(800.0, 600.0));
        assert_eq!(dashes.len(), 20);
        assert_eq!(dashes[0].min, Vec2::new(398.0, 0.0));
        assert_eq!(dashes[19].top(), 570.0);
    }

    #[test]
    fn test_score_positions() {
        let (human, opponent) = score_positions(Vec2::new(800.0, 600.0));
        assert_eq!(human, Vec2::new(340.0, 50.0));
        assert_eq!(opponent, Vec2::new(430.0, 50.0));
    }

    #[test]
    fn test_draw_frame_order() {
        let mut state = GameState::new(1);
        state.score = Score {
            human: 3,
            opponent: 7,
        };
        let snapshot = RenderSnapshot::capture(&state);
        let mut surface = RecordingSurface::new();

        draw_frame(&snapshot, &mut surface);

        // background + 20 dashes + 2 paddles + ball + 2 scores
        assert_eq!(surface.commands.len(), 26);
        assert_eq!(
            surface.commands[0],
            DrawCommand::Rect {
                rect: Rect::new(Vec2::ZERO, Vec2::new(800.0, 600.0)),
                color: colors::BACKGROUND.to_string(),
            }
        );
        assert_eq!(
            surface.commands[23],
            DrawCommand::Rect {
                rect: snapshot.ball,
                color: colors::BALL.to_string(),
            }
        );
        assert_eq!(surface.texts(), vec!["3", "7"]);
    }
}
