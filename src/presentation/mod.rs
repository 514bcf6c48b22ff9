//! Presentation layer handling terminal UI and user input.
//!
//! This module manages the terminal user interface using ratatui,
//! maps keyboard input onto application actions, and binds the wizard's
//! state to the step views.

pub mod steps;
pub mod ui;
pub mod input;

pub use steps::*;
pub use ui::*;
pub use input::*;
