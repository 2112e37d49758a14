use super::announce::Announcer;
use super::display::DisplaySurface;
use super::state::NavigatorState;
use crate::catalog::{LearningItem, CATALOG};
use tracing::debug;

/// Cursor over the alphabet catalog. Every successful move announces the
/// new letter and then refreshes the attached display surface.
pub struct Navigator<D: DisplaySurface> {
    catalog: &'static [LearningItem],
    state: NavigatorState,
    announcer: Announcer,
    surface: D,
}

impl<D: DisplaySurface> Navigator<D> {
    pub fn new(announcer: Announcer, mut surface: D) -> Self {
        let catalog: &'static [LearningItem] = &CATALOG;
        let state = NavigatorState::new(catalog.len());

        surface.show_catalog(catalog);
        surface.show(&catalog[state.cursor()], state.position());

        Self {
            catalog,
            state,
            announcer,
            surface,
        }
    }

    pub fn catalog(&self) -> &'static [LearningItem] {
        self.catalog
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    pub fn current_item(&self) -> &LearningItem {
        &self.catalog[self.state.cursor()]
    }

    pub fn current_position(&self) -> (usize, usize) {
        self.state.position()
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    /// Jump to `index`; out-of-range indices are ignored
    pub fn select_index(&mut self, index: i64) -> bool {
        let moved = self.state.select(index);
        if moved {
            self.settle("select");
        } else {
            debug!(index, "select ignored, index out of range");
        }
        moved
    }

    pub fn advance(&mut self) -> bool {
        let moved = self.state.advance();
        if moved {
            self.settle("advance");
        }
        moved
    }

    pub fn retreat(&mut self) -> bool {
        let moved = self.state.retreat();
        if moved {
            self.settle("retreat");
        }
        moved
    }

    /// Replay the current letter without moving
    pub fn announce_current(&mut self) {
        self.settle("replay");
    }

    fn settle(&mut self, reason: &'static str) {
        let item = self.catalog[self.state.cursor()];
        let position = self.state.position();
        debug!(reason, symbol = item.symbol, cursor = self.state.cursor(), "cursor settled");

        self.announcer.announce(&item);
        self.surface.show(&item, position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator() -> Navigator<()> {
        Navigator::new(Announcer::silent(), ())
    }

    #[test]
    fn test_starts_at_apple() {
        let nav = navigator();
        assert_eq!(nav.cursor(), 0);
        assert_eq!(nav.current_item().label, "Apple");
        assert_eq!(nav.current_position(), (1, 26));
    }

    #[test]
    fn test_select_every_index() {
        let mut nav = navigator();
        for i in 0..26 {
            assert!(nav.select_index(i));
            assert_eq!(nav.current_item(), &CATALOG[i as usize]);
        }
    }

    #[test]
    fn test_select_out_of_range_keeps_cursor() {
        let mut nav = navigator();
        nav.select_index(7);
        for bad in [-1, -26, 26, 27, 1_000] {
            assert!(!nav.select_index(bad));
            assert_eq!(nav.cursor(), 7);
        }
    }

    #[test]
    fn test_advance_to_the_end() {
        let mut nav = navigator();
        for _ in 0..25 {
            assert!(nav.advance());
        }
        assert_eq!(nav.cursor(), 25);
        assert!(!nav.advance());
        assert_eq!(nav.current_position(), (26, 26));
    }

    #[test]
    fn test_retreat_at_start_is_inert() {
        let mut nav = navigator();
        assert!(!nav.retreat());
        assert_eq!(nav.current_item().symbol, "A");
        assert_eq!(nav.cursor(), 0);
    }

    #[test]
    fn test_announce_current_keeps_cursor() {
        let mut nav = navigator();
        nav.select_index(3);
        nav.announce_current();
        assert_eq!(nav.cursor(), 3);
    }
}
