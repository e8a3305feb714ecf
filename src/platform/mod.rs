//! Platform abstraction layer
//!
//! The host writes pointer positions whenever its events fire; the frame
//! driver reads the latest one once per frame. Last value wins, nothing is
//! queued.

#[cfg(target_arch = "wasm32")]
pub mod web;

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Bit pattern meaning "no pointer position reported yet"
const NO_VALUE: u32 = u32::MAX;

/// Shared last-known pointer Y, relative to the field's top edge
#[derive(Debug, Clone)]
pub struct PointerInput {
    bits: Arc<AtomicU32>,
}

impl Default for PointerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerInput {
    pub fn new() -> Self {
        Self {
            bits: Arc::new(AtomicU32::new(NO_VALUE)),
        }
    }

    /// Record a new pointer position (non-finite values are dropped)
    pub fn set(&self, y: f32) {
        if y.is_finite() {
            self.bits.store(y.to_bits(), Ordering::Relaxed);
        }
    }

    /// Latest pointer position, if any has been reported
    pub fn get(&self) -> Option<f32> {
        match self.bits.load(Ordering::Relaxed) {
            NO_VALUE => None,
            bits => Some(f32::from_bits(bits)),
        }
    }

    /// Forget the last position (e.g. pointer left the canvas)
    pub fn clear(&self) {
        self.bits.store(NO_VALUE, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert_eq!(PointerInput::new().get(), None);
    }

    #[test]
    fn test_last_value_wins_across_clones() {
        let host = PointerInput::new();
        let reader = host.clone();
        host.set(10.0);
        host.set(-25.5);
        assert_eq!(reader.get(), Some(-25.5));
    }

    #[test]
    fn test_non_finite_ignored() {
        let input = PointerInput::new();
        input.set(42.0);
        input.set(f32::NAN);
        input.set(f32::INFINITY);
        assert_eq!(input.get(), Some(42.0));
    }

    #[test]
    fn test_clear() {
        let input = PointerInput::new();
        input.set(1.0);
        input.clear();
        assert_eq!(input.get(), None);
    }

    #[test]
    fn test_written_from_another_thread() {
        let input = PointerInput::new();
        let writer = input.clone();
        std::thread::spawn(move || writer.set(123.0))
            .join()
            .unwrap();
        assert_eq!(input.get(), Some(123.0));
    }
}
