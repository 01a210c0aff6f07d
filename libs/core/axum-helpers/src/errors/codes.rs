//! Type-safe error codes for API responses.
//!
//! Each code has a SCREAMING_SNAKE_CASE identifier for clients, an integer
//! for logs and dashboards, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Path identifier is not a valid integer id
    InvalidId,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// Generic malformed request
    BadRequest,

    /// Identifier in the path differs from the one in the payload
    IdMismatch,

    /// Payload references an entity that does not exist
    UnknownReference,

    /// Requested API version is not served
    UnsupportedApiVersion,

    /// Query string could not be parsed
    InvalidQuery,

    /// HTTP method not supported on this route
    MethodNotAllowed,

    // Store errors (2000-2999)
    /// Record was modified concurrently by another writer
    ConcurrencyConflict,
}

impl ErrorCode {
    /// Get the string representation for client consumption.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::IdMismatch => "ID_MISMATCH",
            Self::UnknownReference => "UNKNOWN_REFERENCE",
            Self::UnsupportedApiVersion => "UNSUPPORTED_API_VERSION",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::ConcurrencyConflict => "CONCURRENCY_CONFLICT",
        }
    }

    /// Get the integer code for logging and monitoring.
    ///
    /// Ranges:
    /// - 1000-1999: request errors
    /// - 2000-2999: store errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::BadRequest => 1006,
            Self::IdMismatch => 1007,
            Self::UnknownReference => 1008,
            Self::UnsupportedApiVersion => 1009,
            Self::InvalidQuery => 1010,
            Self::MethodNotAllowed => 1012,

            Self::ConcurrencyConflict => 2001,
        }
    }

    /// Get the default user-facing error message.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidId => "Invalid id format",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::BadRequest => "Bad request",
            Self::IdMismatch => "Path id does not match payload id",
            Self::UnknownReference => "Referenced resource does not exist",
            Self::UnsupportedApiVersion => "Requested API version is not supported",
            Self::InvalidQuery => "Failed to parse query string",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::ConcurrencyConflict => "Record was modified by another request",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
