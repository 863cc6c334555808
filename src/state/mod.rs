//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds every mounted widget instance
//! - Per-instance form state (`FormState`) and its result area
//! - Field focus order
//! - State error handling

mod error;
mod form;
mod navigation;

pub use error::StateError;
pub use form::{
    clamp_quantity, parse_quantity, FormState, ResultArea, WidgetId, MAX_QUANTITY, MIN_QUANTITY,
    VALIDATION_MESSAGE,
};
pub use navigation::Field;

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
