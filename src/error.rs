//! Error types for the normalization boundary.
//!
//! The analytic calculators never error: missing data degrades to sentinel
//! or neutral values. Errors only arise when converting malformed wire
//! records into typed models.

/// Error types for record normalization
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("unparseable date: {0}")]
    InvalidDate(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Result type for normalization operations
pub type Result<T> = std::result::Result<T, SignalError>;
