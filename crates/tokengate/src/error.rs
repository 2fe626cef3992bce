//! Errors for tokengate

use thiserror::Error;

/// Reasons a candidate token is refused admission
///
/// Rejections are ordinary values returned by the validator, not failures of
/// the gate itself. The sequencer turns each of them into one of a small set
/// of user-facing messages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TooLarge { size: usize, max: usize },

    // ============================================================================
    // Format Rejections
    // ============================================================================
    #[error("Invalid token format: expected three non-empty parts separated by '.', found {segments}")]
    MalformedStructure { segments: usize },

    #[error("Invalid token payload: {0}")]
    MalformedPayload(String),

    // ============================================================================
    // Temporal Rejections
    // ============================================================================
    #[error("Token expired at {expired_at} (now: {now})")]
    Expired { expired_at: f64, now: i64 },

    #[error("Token issued in future at {issued_at} (now: {now})")]
    NotYetIssued { issued_at: f64, now: i64 },
}

/// Tokengate Errors
///
/// Failures of the environment around the gate (storage, address bar) or of
/// its configuration. None of these ever reach the display surface raw.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Storage Errors
    // ============================================================================
    #[error("Token storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Failed to read persisted token: {0}")]
    StorageRead(String),

    #[error("Failed to write persisted token: {0}")]
    StorageWrite(String),

    // ============================================================================
    // Location Errors
    // ============================================================================
    #[error("Page location unavailable: {0}")]
    LocationUnavailable(String),

    #[error("Invalid page URL: {0}")]
    UrlInvalid(String),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Clock skew too large: {value} seconds (maximum: {max} seconds)")]
    ClockSkewTooLarge { value: u64, max: u64 },

    #[error("At least one token query parameter name must be configured")]
    QueryParamsEmpty,
}

/// Result type alias for tokengate operations
pub type Result<T> = std::result::Result<T, Error>;
