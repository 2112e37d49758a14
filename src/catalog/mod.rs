pub mod class;
pub mod item;
pub mod letters;

pub use class::{classify, LetterClass};
pub use item::{LearningItem, Picture};
pub use letters::{index_of, CATALOG, CATALOG_SIZE};
