use super::event::AppEvent;

/// Turns a press/release pair on the card into a swipe.
///
/// Dragging toward the left shows the next letter, toward the right the
/// previous one. Shorter drags resolve to `AppEvent::None`.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: u16,
    origin: Option<u16>,
}

impl SwipeTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold: threshold.max(1),
            origin: None,
        }
    }

    pub fn press(&mut self, column: u16) {
        self.origin = Some(column);
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }

    pub fn release(&mut self, column: u16) -> AppEvent {
        let Some(origin) = self.origin.take() else {
            return AppEvent::None;
        };

        let dx = i32::from(column) - i32::from(origin);
        let threshold = i32::from(self.threshold);
        if dx <= -threshold {
            AppEvent::SwipeLeft
        } else if dx >= threshold {
            AppEvent::SwipeRight
        } else {
            AppEvent::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_left_is_swipe_left() {
        let mut swipe = SwipeTracker::new(6);
        swipe.press(40);
        assert_eq!(swipe.release(30), AppEvent::SwipeLeft);
    }

    #[test]
    fn test_drag_right_is_swipe_right() {
        let mut swipe = SwipeTracker::new(6);
        swipe.press(10);
        assert_eq!(swipe.release(16), AppEvent::SwipeRight);
    }

    #[test]
    fn test_short_drag_is_ignored() {
        let mut swipe = SwipeTracker::new(6);
        swipe.press(20);
        assert_eq!(swipe.release(25), AppEvent::None);
        swipe.press(20);
        assert_eq!(swipe.release(15), AppEvent::None);
    }

    #[test]
    fn test_release_without_press() {
        let mut swipe = SwipeTracker::new(6);
        assert_eq!(swipe.release(0), AppEvent::None);
        swipe.press(50);
        swipe.cancel();
        assert_eq!(swipe.release(0), AppEvent::None);
    }
}
