//! Error handling utilities for the MindEase client.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! The API layer deliberately keeps two surfaces: the `try_*` methods on
//! `ApiClient` return `ApiError` so callers (and logs) can tell failure modes
//! apart, while the sentinel-value methods collapse every failure to
//! `false`/`None`/empty to match the behavior the UI screens were built
//! against.

use thiserror::Error;

/// Represents specific error cases that can occur when talking to the
/// MindEase backend.
///
/// Each variant captures one of the four failure modes of a client call:
/// calling before login, a network-level failure, an unexpected HTTP status,
/// or a response body that does not decode into the expected shape.
///
/// # Examples
///
/// ```
/// use mindease_client::errors::ApiError;
///
/// let error = ApiError::Protocol {
///     status: 500,
///     body: "internal error".to_string(),
/// };
/// assert!(format!("{}", error).contains("500"));
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The operation requires a logged-in session and none is present.
    /// No network call was made.
    #[error("Not logged in. Call login() before user-scoped operations.")]
    AuthRequired,

    /// The request never completed: DNS failure, connection refused,
    /// timeout, or a malformed response at the transport level.
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a status other than 200.
    #[error("Unexpected HTTP status {status}: {body}")]
    Protocol {
        /// The HTTP status code the backend returned.
        status: u16,
        /// The raw response body, kept for diagnostics.
        body: String,
    },

    /// The response body could not be decoded into the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Represents all possible errors that can occur in the MindEase client.
///
/// This enum is the central error type used across the application, with
/// variants for different error categories. It uses `thiserror` for deriving
/// the `Error` trait implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use mindease_client::errors::AppError;
///
/// let error = AppError::Config("Missing base URL".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing base URL");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors when interacting with the MindEase backend.
    ///
    /// This variant uses a dedicated ApiError type to provide detailed
    /// information about which failure mode occurred.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Input/output errors, e.g. reading a password from the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
