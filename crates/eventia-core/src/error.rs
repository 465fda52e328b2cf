//! Error types for the Eventia session client.
//!
//! Authentication, authorization and request failures each get their own
//! variant so the front end can decide whether to show a message, force a
//! new login, or let the user retry.

use std::fmt;
use thiserror::Error;

/// The unified error type for session client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Login rejected by the server, or the login call could not be made.
    #[error("authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// An authorized call came back 401. The session has been torn down.
    #[error("unauthorized")]
    Unauthorized,

    /// The refresh call failed. The session has been torn down.
    #[error("token refresh failed: {message}")]
    RefreshFailed { message: String },

    /// Any other non-2xx response.
    #[error("{0}")]
    RequestFailed(RequestError),

    /// Client-side input validation failed before reaching the network.
    #[error("validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A successful response whose body could not be decoded.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// Persistent storage could not be read or written.
    #[error("storage error: {message}")]
    Storage { message: String },

    /// Malformed configuration input such as the API base URL.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true if this error ended the session.
    pub fn is_session_ended(&self) -> bool {
        matches!(self, Error::Unauthorized | Error::RefreshFailed { .. })
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Error::Storage {
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Error::InvalidResponse {
            message: message.into(),
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-2xx response other than 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server body, if it carried one.
    pub message: Option<String>,
}

impl RequestError {
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message {
            Some(ref message) => write!(f, "{}", message),
            None => write!(f, "HTTP {}", self.status),
        }
    }
}

impl std::error::Error for RequestError {}

/// Client-side form validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// A field was present but malformed.
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Configuration input errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },
}
