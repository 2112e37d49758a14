use super::HapticService;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Terminal stand-in for a vibration pulse: remembers when the last pulse
/// fired so the view can flash the card border for a moment.
///
/// Clones share the same pulse clock.
#[derive(Debug, Clone, Default)]
pub struct FlashHaptics {
    last_pulse: Rc<Cell<Option<Instant>>>,
}

impl FlashHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_flashing(&self, window: Duration) -> bool {
        self.is_flashing_at(Instant::now(), window)
    }

    pub fn is_flashing_at(&self, now: Instant, window: Duration) -> bool {
        match self.last_pulse.get() {
            Some(at) => now.saturating_duration_since(at) < window,
            None => false,
        }
    }
}

impl HapticService for FlashHaptics {
    fn pulse(&mut self) {
        self.last_pulse.set(Some(Instant::now()));
    }
}
