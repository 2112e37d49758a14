use crate::app::mode::AppMode;
use crate::catalog::LearningItem;
use crate::engine::DisplaySurface;

/// Render state for UI components, kept current by the navigator
#[derive(Debug, Clone)]
pub struct RenderState {
    pub mode: AppMode,
    pub symbols: Vec<&'static str>,
    pub current: Option<LearningItem>,
    pub cursor: usize,
    pub progress: (usize, usize),
}

impl RenderState {
    pub fn empty(mode: AppMode) -> Self {
        Self {
            mode,
            symbols: vec![],
            current: None,
            cursor: 0,
            progress: (0, 0),
        }
    }

    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 >= self.symbols.len()
    }
}

impl DisplaySurface for RenderState {
    fn show_catalog(&mut self, catalog: &[LearningItem]) {
        self.symbols = catalog.iter().map(|item| item.symbol).collect();
    }

    fn show(&mut self, item: &LearningItem, position: (usize, usize)) {
        self.current = Some(*item);
        self.cursor = position.0.saturating_sub(1);
        self.progress = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    #[test]
    fn test_empty_state() {
        let state = RenderState::empty(AppMode::Learning);
        assert_eq!(state.current, None);
        assert_eq!(state.progress, (0, 0));
    }

    #[test]
    fn test_show_updates_projection() {
        let mut state = RenderState::empty(AppMode::Learning);
        state.show_catalog(&CATALOG);
        state.show(&CATALOG[2], (3, 26));
        assert_eq!(state.symbols.len(), 26);
        assert_eq!(state.current.unwrap().label, "Cat");
        assert_eq!(state.cursor, 2);
        assert!(!state.is_first());
        assert!(!state.is_last());
    }
}
