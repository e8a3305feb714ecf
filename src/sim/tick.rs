//! Per-frame simulation tick
//!
//! One call advances the game by exactly one frame. The step order matters:
//! paddle, ball advance, walls, human paddle, opponent paddle, opponent AI,
//! scoring.

use super::state::{GameEvent, GameState, Paddle, Side};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Pointer Y relative to the field top; `None` keeps the paddle where it is
    pub pointer_y: Option<f32>,
}

impl TickInput {
    pub fn pointer(y: f32) -> Self {
        Self { pointer_y: Some(y) }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    let field_height = state.tuning.field_height;
    let field_width = state.tuning.field_width;

    // Human paddle follows the pointer (centered), non-finite input is ignored
    if let Some(target) = input.pointer_y.filter(|y| y.is_finite()) {
        state.human.pos.y = target - state.human.size.y / 2.0;
    }
    state.human.clamp_to_field(&state.tuning);

    // Advance ball
    state.ball.pos += state.ball.vel;

    // Top/bottom walls reflect velocity only; the ball may overlap the wall for a frame
    let ball = state.ball.rect();
    if ball.top() <= 0.0 || ball.bottom() >= field_height {
        state.ball.vel.y = -state.ball.vel.y;
        state.events.push(GameEvent::WallBounce);
    }

    let human = state.human;
    if deflect(state, &human) {
        state.ball.pos.x = human.rect().right();
    }

    let opponent = state.opponent;
    if deflect(state, &opponent) {
        state.ball.pos.x = opponent.rect().left() - state.ball.size;
    }

    track_ball(state);

    // Scoring
    let ball = state.ball.rect();
    if ball.left() < 0.0 {
        award_point(state, Side::Opponent);
    } else if ball.right() > field_width {
        award_point(state, Side::Human);
    }
}

/// Reverse the ball off a paddle and add spin if they overlap; the caller snaps x
fn deflect(state: &mut GameState, paddle: &Paddle) -> bool {
    if !state.ball.rect().overlaps(&paddle.rect()) {
        return false;
    }

    state.ball.vel.x = -state.ball.vel.x;
    let hit_offset = state.ball.center().y - paddle.center_y();
    state.ball.vel.y += hit_offset * state.tuning.spin_factor;

    state.events.push(GameEvent::PaddleHit { side: paddle.side });
    true
}

/// Opponent moves a fixed step toward the ball, holding still inside the dead zone
fn track_ball(state: &mut GameState) {
    let paddle_center = state.opponent.center_y();
    let ball_center = state.ball.center().y;
    let dead_zone = state.tuning.ai_dead_zone;

    if paddle_center < ball_center - dead_zone {
        state.opponent.pos.y += state.tuning.ai_step;
    } else if paddle_center > ball_center + dead_zone {
        state.opponent.pos.y -= state.tuning.ai_step;
    }
    state.opponent.clamp_to_field(&state.tuning);
}

fn award_point(state: &mut GameState, side: Side) {
    state.score.award(side);
    state.events.push(GameEvent::Scored { side });
    state.reset_ball();
}
