//! Error types for the registration workflow.
//!
//! - [`ValidationError`] - Local form checks, never reach the server
//! - [`TransportError`] - Network, status, decode and timeout failures
//! - [`AppError`] - Top-level union used at the UI boundary
//!
//! Every error ends at a notification or an inline message; nothing is
//! propagated past a submit or lookup handler.

use thiserror::Error;

/// Shown for any transport failure. The real cause is only logged.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Shown when the server rejects a registration without saying why.
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

// =============================================================================
// Validation Errors
// =============================================================================

/// Local form validation failures.
///
/// `Display` is the exact user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Full name, email or affiliation is blank.
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,

    /// Email does not look like `local@domain.tld`.
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

// =============================================================================
// Transport Errors
// =============================================================================

/// Errors talking to the registration API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Request could not be built or sent.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// Non-success status without a usable body.
    #[error("Server error ({0})")]
    Status(u16),

    /// Body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// No response within the configured limit.
    #[error("Request timed out after {0} ms")]
    Timeout(u32),
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}

// =============================================================================
// Application Errors
// =============================================================================

/// Frontend application errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Well-formed `success:false` answer.
    #[error("Rejected by server: {0}")]
    Rejected(String),
}

impl AppError {
    /// Text safe to show to the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(err) => err.to_string(),
            AppError::Transport(_) => NETWORK_ERROR_MESSAGE.to_string(),
            AppError::Rejected(msg) => msg.clone(),
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
