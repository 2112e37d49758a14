pub mod announce;
pub mod config;
pub mod display;
pub mod error;
pub mod navigator;
pub mod state;

pub use announce::{phrase, Announcer};
pub use display::DisplaySurface;
pub use error::AlphabetError;
pub use navigator::Navigator;
pub use state::NavigatorState;
