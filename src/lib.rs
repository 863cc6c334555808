//! Terminal form widget that generates fake people for a chosen country.
//!
//! Each mounted widget instance owns its own form state, issues one request
//! per submission against the random user API and renders the outcome.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod randomuser;
pub mod state;
pub mod ui;
