//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in one `GameState` owned by the
//! caller. The RNG is part of the state so a seed fully determines a run.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::settings::Tuning;

/// Which end of the field a paddle (or point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Pointer-controlled paddle on the left
    Human,
    /// Scripted paddle on the right
    Opponent,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reached the top or bottom wall and its vertical velocity flipped
    WallBounce,
    /// Ball deflected off the paddle on `side`
    PaddleHit { side: Side },
    /// `side` is the player credited with the point
    Scored { side: Side },
}

/// A paddle; only `y` moves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(side: Side, tuning: &Tuning) -> Self {
        let x = match side {
            Side::Human => tuning.human_paddle_x(),
            Side::Opponent => tuning.opponent_paddle_x(),
        };
        Self {
            side,
            pos: Vec2::new(x, (tuning.field_height - tuning.paddle_height) / 2.0),
            size: Vec2::new(tuning.paddle_width, tuning.paddle_height),
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.rect().center().y
    }

    /// Keep the paddle fully inside the field vertically
    pub fn clamp_to_field(&mut self, tuning: &Tuning) {
        self.pos.y = self.pos.y.clamp(0.0, tuning.paddle_max_y());
    }
}

/// The ball (a square)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Units per frame
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(self.size))
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    /// Center the ball and serve it in a random diagonal direction
    pub fn serve(&mut self, tuning: &Tuning, rng: &mut Pcg32) {
        self.pos = Vec2::new(
            tuning.field_width / 2.0 - self.size / 2.0,
            tuning.field_height / 2.0 - self.size / 2.0,
        );
        self.vel = Vec2::new(
            tuning.serve_speed_x * random_sign(rng),
            tuning.serve_speed_y * random_sign(rng),
        );
    }
}

/// Uniform draw from {+1, -1}
fn random_sign(rng: &mut Pcg32) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// Points per side; only ever incremented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub human: u32,
    pub opponent: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Human => self.human += 1,
            Side::Opponent => self.opponent += 1,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub human: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), seed)
    }

    /// Create a new game; the tuning is sanitized first
    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        let tuning = tuning.sanitized();
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut ball = Ball {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: tuning.ball_size,
        };
        ball.serve(&tuning, &mut rng);

        Self {
            seed,
            tuning,
            human: Paddle::new(Side::Human, &tuning),
            opponent: Paddle::new(Side::Opponent, &tuning),
            ball,
            score: Score::default(),
            time_ticks: 0,
            events: Vec::new(),
            rng,
        }
    }

    /// Re-center the ball with fresh random direction signs
    pub fn reset_ball(&mut self) {
        self.ball.serve(&self.tuning, &mut self.rng);
    }

    pub fn field_size(&self) -> Vec2 {
        Vec2::new(self.tuning.field_width, self.tuning.field_height)
    }
}
