//! Frame driver
//!
//! Owns the `GameState` and runs update-then-render once per frame until its
//! `CancelToken` fires. Hosts either call `frame` from their own callback
//! (requestAnimationFrame) or hand control to `run`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::platform::PointerInput;
use crate::renderer::{Surface, draw_frame};
use crate::sim::{GameEvent, GameState, RenderSnapshot, Side, TickInput, tick};

/// Cloneable stop signal shared between the driver and whoever stops it
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Drives the simulation and renderer
pub struct FrameDriver {
    state: GameState,
    pointer: PointerInput,
    cancel: CancelToken,
    frames: u64,
}

impl FrameDriver {
    pub fn new(state: GameState, pointer: PointerInput, cancel: CancelToken) -> Self {
        Self {
            state,
            pointer,
            cancel,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one update-then-render; returns false (and does nothing) once cancelled
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }

        let input = TickInput {
            pointer_y: self.pointer.get(),
        };
        tick(&mut self.state, &input);
        self.frames += 1;
        self.log_events();

        draw_frame(&RenderSnapshot::capture(&self.state), surface);
        true
    }

    /// Run frames back to back until cancelled; returns the frames run by this call
    pub fn run<S: Surface + ?Sized>(&mut self, surface: &mut S) -> u64 {
        let start = self.frames;
        while self.frame(surface) {}
        self.log_stopped();
        self.frames - start
    }

    /// Final log line once the loop has stopped
    pub fn log_stopped(&self) {
        log::info!(
            "Frame loop stopped after {} frames (score {}-{})",
            self.frames,
            self.state.score.human,
            self.state.score.opponent
        );
    }

    fn log_events(&self) {
        for event in &self.state.events {
            match event {
                GameEvent::Scored { side } => {
                    let who = match side {
                        Side::Human => "Player",
                        Side::Opponent => "AI",
                    };
                    log::info!(
                        "{} scores: {}-{}",
                        who,
                        self.state.score.human,
                        self.state.score.opponent
                    );
                }
                GameEvent::PaddleHit { side } => {
                    log::debug!("Paddle hit ({:?}), ball vel {}", side, self.state.ball.vel);
                }
                GameEvent::WallBounce => {
                    log::debug!("Wall bounce at y={}", self.state.ball.pos.y);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;

    #[test]
    fn test_frame_ticks_and_draws() {
        let mut driver =
            FrameDriver::new(GameState::new(1), PointerInput::new(), CancelToken::new());
        let mut surface = RecordingSurface::new();

        assert!(driver.frame(&mut surface));
        assert_eq!(driver.frames(), 1);
        assert_eq!(driver.state().time_ticks, 1);
        assert!(!surface.commands.is_empty());
    }

    #[test]
    fn test_pointer_read_each_frame() {
        let pointer = PointerInput::new();
        let mut driver = FrameDriver::new(GameState::new(1), pointer.clone(), CancelToken::new());
        let mut surface = RecordingSurface::new();

        pointer.set(100.0);
        driver.frame(&mut surface);
        assert_eq!(driver.state().human.pos.y, 60.0);

        pointer.set(400.0);
        driver.frame(&mut surface);
        assert_eq!(driver.state().human.pos.y, 360.0);
    }

    #[test]
    fn test_cleared_pointer_holds_paddle() {
        let pointer = PointerInput::new();
        let mut driver = FrameDriver::new(GameState::new(1), pointer.clone(), CancelToken::new());
        let mut surface = RecordingSurface::new();

        pointer.set(150.0);
        driver.frame(&mut surface);
        assert_eq!(driver.state().human.pos.y, 110.0);

        pointer.clear();
        driver.frame(&mut surface);
        driver.frame(&mut surface);
        assert_eq!(driver.state().human.pos.y, 110.0);
    }

    #[test]
    fn test_cancelled_driver_does_nothing() {
        let cancel = CancelToken::new();
        let mut driver = FrameDriver::new(GameState::new(1), PointerInput::new(), cancel.clone());
        let mut surface = RecordingSurface::new();

        cancel.cancel();

        assert!(!driver.frame(&mut surface));
        assert_eq!(driver.run(&mut surface), 0);
        assert_eq!(driver.state().time_ticks, 0);
        assert!(surface.commands.is_empty());
    }
}
