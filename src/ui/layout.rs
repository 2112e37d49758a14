use ratatui::layout::Rect;
use std::ops::Range;

/// Where each clickable element landed in the last frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenLayout {
    /// Visible picker cells with the catalog index they stand for
    pub strip: Vec<(Rect, usize)>,
    pub card: Rect,
    pub previous: Rect,
    pub play: Rect,
    pub next: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Letter(usize),
    Previous,
    Play,
    Next,
    Card,
    Nothing,
}

impl ScreenLayout {
    pub fn hit(&self, column: u16, row: u16) -> Hit {
        if let Some((_, index)) = self
            .strip
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
        {
            return Hit::Letter(*index);
        }

        if contains(self.previous, column, row) {
            Hit::Previous
        } else if contains(self.play, column, row) {
            Hit::Play
        } else if contains(self.next, column, row) {
            Hit::Next
        } else if contains(self.card, column, row) {
            Hit::Card
        } else {
            Hit::Nothing
        }
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Slice of the picker strip to show when only `fits` cells are visible,
/// keeping the cursor roughly centred.
pub fn strip_window(cursor: usize, total: usize, fits: usize) -> Range<usize> {
    if fits >= total {
        return 0..total;
    }
    let start = cursor.saturating_sub(fits / 2).min(total - fits);
    start..start + fits
}
