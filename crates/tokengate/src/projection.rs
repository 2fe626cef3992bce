//! Display projection of an admitted token
//!
//! Projection decodes the header and payload segments independently and
//! renders them as pretty-printed JSON, along with a human-readable expiry.
//! It never fails: a segment that cannot be decoded degrades only its own
//! field to a placeholder.

use crate::claims::temporal_claim;
use crate::limits::MAX_DATE_MILLIS;
use crate::token::TokenParts;
use crate::utils::base64url;
use chrono::{DateTime, Local, Utc};
use serde_json::Value;
use std::fmt::Write;

/// Shown in place of a header that cannot be decoded
pub const HEADER_PLACEHOLDER: &str = "Error parsing header";

/// Shown in place of a payload that cannot be decoded
pub const PAYLOAD_PLACEHOLDER: &str = "Error parsing payload";

/// Expiry display for a payload without an `exp` claim
pub const NO_EXPIRATION: &str = "No expiration set";

/// Expiry display when the payload itself cannot be decoded
pub const EXPIRY_UNKNOWN: &str = "Unknown";

/// Expiry display for an `exp` outside the representable date range
pub const INVALID_DATE: &str = "Invalid Date";

/// Default expiry pattern, matching the `en-US` locale date-time rendering
pub const DEFAULT_EXPIRY_PATTERN: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Time zone used to render the expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayTimeZone {
    /// The host's local time zone
    #[default]
    Local,
    /// Coordinated Universal Time
    Utc,
}

/// How the expiry claim is rendered for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryFormat {
    pattern: String,
    time_zone: DisplayTimeZone,
}

impl Default for ExpiryFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_EXPIRY_PATTERN.to_string(),
            time_zone: DisplayTimeZone::Local,
        }
    }
}

impl ExpiryFormat {
    /// Create a format with the default pattern in the local time zone
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `strftime` pattern
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Set the time zone
    pub fn time_zone(mut self, time_zone: DisplayTimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// Render an `exp` claim (seconds since epoch)
    pub fn render(&self, exp: f64) -> String {
        let millis = (exp * 1000.0).trunc();
        if !millis.is_finite() || millis.abs() > MAX_DATE_MILLIS {
            return INVALID_DATE.to_string();
        }

        let Some(instant) = DateTime::<Utc>::from_timestamp_millis(millis as i64) else {
            return INVALID_DATE.to_string();
        };

        let mut rendered = String::new();
        let written = match self.time_zone {
            DisplayTimeZone::Local => write!(
                rendered,
                "{}",
                instant.with_timezone(&Local).format(&self.pattern)
            ),
            DisplayTimeZone::Utc => write!(rendered, "{}", instant.format(&self.pattern)),
        };

        match written {
            Ok(()) => rendered,
            Err(_) => {
                tracing::warn!(pattern = %self.pattern, "invalid expiry pattern, using RFC 3339");
                instant.to_rfc3339()
            }
        }
    }
}

/// Human-readable fields derived from an admitted token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFields {
    pub header_json: String,
    pub payload_json: String,
    pub expiry: String,
}

/// Derive display fields from an admitted token
pub fn project(token: &str, format: &ExpiryFormat) -> DisplayFields {
    let Ok(parts) = TokenParts::split(token) else {
        return DisplayFields {
            header_json: HEADER_PLACEHOLDER.to_string(),
            payload_json: PAYLOAD_PLACEHOLDER.to_string(),
            expiry: EXPIRY_UNKNOWN.to_string(),
        };
    };

    let header_json = decode_pretty(parts.header).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "token header cannot be displayed");
        HEADER_PLACEHOLDER.to_string()
    });

    let (payload_json, expiry) = match base64url::decode_json(parts.payload) {
        Ok(payload) => {
            let expiry = match temporal_claim(&payload, "exp") {
                Some(exp) => format.render(exp),
                None => NO_EXPIRATION.to_string(),
            };
            let json = pretty(&payload).unwrap_or_else(|| PAYLOAD_PLACEHOLDER.to_string());
            (json, expiry)
        }
        Err(e) => {
            tracing::warn!(error = %e, "token payload cannot be displayed");
            (PAYLOAD_PLACEHOLDER.to_string(), EXPIRY_UNKNOWN.to_string())
        }
    };

    DisplayFields {
        header_json,
        payload_json,
        expiry,
    }
}

fn decode_pretty(segment: &str) -> Result<String, String> {
    let value = base64url::decode_json(segment)?;
    pretty(&value).ok_or_else(|| "JSON rendering failed".to_string())
}

fn pretty(value: &Value) -> Option<String> {
    serde_json::to_string_pretty(value).ok()
}
