//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Terminal layout with one pane per mounted widget
//! - Theme management
//! - Widget components (spinner, styling)
//! - The result area projection rendered by each pane

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
pub mod view;
mod widgets;

pub const SPINNER_FRAME_COUNT: usize = widgets::spinner::FRAMES.len();

pub use render::render;
pub use theme::{ColorSpec, Theme};
