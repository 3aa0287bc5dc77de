//! Error codes for the roster app.
//!
//! Every code that can appear in a problem-details response is listed here.
//! Codes are SCREAMING_SNAKE_CASE and map 1:1 to the response strings.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General validation error
    ValidationError,
    /// A required form field was empty
    MissingField,
    /// Malformed form or query payload
    BadRequest,

    // Resource Not Found
    /// Student not found
    StudentNotFound,
    /// General not found error
    NotFound,

    // Infrastructure
    /// Generic database failure
    DbError,
    /// Database could not be reached
    DbUnavailable,
    /// Database operation timed out
    DbTimeout,
    /// Invalid or missing configuration
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::MissingField => "MISSING_FIELD",
            Self::BadRequest => "BAD_REQUEST",
            Self::StudentNotFound => "STUDENT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
