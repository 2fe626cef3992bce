//! Size limit constants for input validation

/// Maximum clock skew tolerance (300 seconds = 5 minutes)
/// Prevents clock skew from effectively disabling expiration checks
pub(crate) const MAX_CLOCK_SKEW_SECONDS: u64 = 300;

/// Number of segments in a well-formed token (header, payload, signature)
pub(crate) const TOKEN_SEGMENTS: usize = 3;

/// Largest magnitude of a displayable instant in milliseconds (±100,000,000 days)
pub(crate) const MAX_DATE_MILLIS: f64 = 8.64e15;
