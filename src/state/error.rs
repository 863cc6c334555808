//! State management-specific error types.

use super::WidgetId;

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No widget is mounted
    #[error("No widget mounted")]
    NoWidgetMounted,

    /// Widget with id is not mounted
    #[error("Widget not found: {id}")]
    WidgetNotFound { id: WidgetId },
}
