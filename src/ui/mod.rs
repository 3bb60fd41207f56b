//! TUI module for the word card viewer.

mod app;
pub mod theme;
mod widgets;
pub mod word_card;

pub use app::App;
