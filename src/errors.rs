//! Error types for the iamport library.
//!
//! This module defines all error types that can occur while talking to the
//! I'mport gateway, from configuration mistakes up to vendor-reported failures.

use thiserror::Error;

/// Main error type for iamport operations.
#[derive(Error, Debug)]
pub enum IamportError {
    /// Missing or invalid client configuration (empty URL, key or secret)
    #[error("configuration error: {0}")]
    Config(String),

    /// Error during HTTP request/response handling
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error parsing a URL
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The gateway rejected the request as unauthorized (HTTP 401)
    #[error("unauthorized")]
    Unauthorized,

    /// The requested resource does not exist (HTTP 404)
    #[error("not found")]
    NotFound,

    /// Any other non-success HTTP status
    #[error("unexpected status: {0}")]
    UnexpectedStatus(u16),

    /// The response envelope carried a non-zero application code.
    ///
    /// The message is the vendor's text, passed through verbatim.
    #[error("gateway error (code {code}): {message}")]
    Gateway {
        /// Application-level status code from the envelope
        code: i32,
        /// Vendor-supplied message
        message: String,
    },

    /// The response body did not match the expected envelope shape
    #[error("decode error: {0}")]
    Decode(String),

    /// A request parameter failed validation before any network call
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}

/// Result type alias for iamport operations.
pub type Result<T> = std::result::Result<T, IamportError>;
