//! Alphabet Tutor: a one-screen terminal app that walks children through
//! the letters A to Z, each with a word, a picture and a spoken announcement.

pub mod app;
pub mod catalog;
pub mod engine;
pub mod logging;
pub mod speech;
pub mod ui;
