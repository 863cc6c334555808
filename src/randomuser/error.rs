//! Random user API-specific error types.

/// Shown when a successful response carries no usable results.
///
pub const NO_USERS_MESSAGE: &str = "No users returned from API for the chosen country.";

/// Errors that can occur while generating people.
#[derive(Debug, thiserror::Error)]
pub enum RandomUserError {
    /// Request never produced a response
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("API error (status {status})")]
    ApiError { status: u16 },

    /// Response parsed but the results array was missing or empty
    #[error("API returned no results")]
    EmptyResults,

    /// Response body did not match the expected shape
    #[error("Failed to deserialize API response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl RandomUserError {
    /// Message shown to the user next to the quantity field.
    ///
    pub fn user_message(&self) -> String {
        match self {
            RandomUserError::ApiError { status } => format!("API error: {}", status),
            RandomUserError::HttpRequest(e) => match e.status() {
                Some(status) => format!("API error: {}", status.as_u16()),
                None => format!("API error: {}", e),
            },
            RandomUserError::EmptyResults | RandomUserError::Malformed(_) => {
                NO_USERS_MESSAGE.to_string()
            }
        }
    }
}
