#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Learning,
    Help,
    Quit,
}
