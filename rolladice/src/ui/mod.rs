//! UI module for the RollaDice TUI

pub mod layout;
pub mod render;
pub mod theme;
pub mod widgets;

pub use layout::ScreenLayout;
