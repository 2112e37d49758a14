pub mod layout;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use layout::{Hit, ScreenLayout};
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
pub use view::draw_screen;
