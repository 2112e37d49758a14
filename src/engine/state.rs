/// Cursor into a catalog of `len` items. Always `cursor < len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorState {
    cursor: usize,
    len: usize,
}

impl NavigatorState {
    /// `len` must be non-zero.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "navigator needs at least one item");
        Self { cursor: 0, len }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 >= self.len
    }

    /// Jump to `index`. Out-of-range values leave the cursor alone.
    pub fn select(&mut self, index: i64) -> bool {
        match usize::try_from(index) {
            Ok(i) if i < self.len => {
                self.cursor = i;
                true
            }
            _ => false,
        }
    }

    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// 1-based "N of total" pair
    pub fn position(&self) -> (usize, usize) {
        (self.cursor + 1, self.len)
    }
}
