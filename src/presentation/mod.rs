//! Presentation layer handling terminal UI and user input.
//!
//! This module manages the terminal user interface using ratatui,
//! handles keyboard input, and renders classification results.

pub mod ui;
pub mod input;
pub mod result_view;

pub use ui::*;
pub use input::*;
pub use result_view::*;
