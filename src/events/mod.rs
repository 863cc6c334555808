//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: random user API requests issued by widget submissions
//! - Terminal events: user input and terminal interactions

pub mod network;
pub mod terminal;
