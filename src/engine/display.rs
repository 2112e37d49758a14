use crate::catalog::LearningItem;

/// Receives the navigator's display projection.
///
/// `show_catalog` is called once when the surface is attached; `show` is
/// called after every cursor change, before the next input is handled.
pub trait DisplaySurface {
    fn show_catalog(&mut self, catalog: &[LearningItem]);

    fn show(&mut self, item: &LearningItem, position: (usize, usize));
}

impl DisplaySurface for () {
    fn show_catalog(&mut self, _catalog: &[LearningItem]) {}

    fn show(&mut self, _item: &LearningItem, _position: (usize, usize)) {}
}
