//! Claims decoding and admission validation
//!
//! This module decides whether a candidate token is admissible without a
//! trust authority: it checks the shape of the token, decodes the payload and
//! evaluates the temporal claims (`exp`, `iat`).
//!
//! # Security
//! No signature is ever checked. An accepted token is well-formed and fresh,
//! not authentic. Anyone can mint a token this validator accepts, so real
//! authorization must still happen server-side.

use crate::error::{Error, Rejection, Result};
use crate::limits::MAX_CLOCK_SKEW_SECONDS;
use crate::token::TokenParts;
use crate::utils::base64url;
use serde_json::{Map, Value};

/// Decoded payload of a token
///
/// `exp` and `iat` are interpreted, every other member passes through
/// untouched for display. A payload that is valid JSON but not an object
/// simply has no claims.
#[derive(Debug, Clone, PartialEq)]
pub struct Claims {
    payload: Value,
}

impl Claims {
    /// Build claims from a decoded payload, which must not be `null`
    pub fn from_value(payload: Value) -> std::result::Result<Self, Rejection> {
        if payload.is_null() {
            return Err(Rejection::MalformedPayload(
                "payload decodes to null".to_string(),
            ));
        }
        Ok(Self { payload })
    }

    /// Expiration Time (exp) in seconds since Unix epoch
    pub fn expiration(&self) -> Option<f64> {
        temporal_claim(&self.payload, "exp")
    }

    /// Issued At (iat) in seconds since Unix epoch
    pub fn issued_at(&self) -> Option<f64> {
        temporal_claim(&self.payload, "iat")
    }

    /// Subject (sub)
    pub fn subject(&self) -> Option<&str> {
        self.get("sub").and_then(Value::as_str)
    }

    /// Issuer (iss)
    pub fn issuer(&self) -> Option<&str> {
        self.get("iss").and_then(Value::as_str)
    }

    /// Look up any claim by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members()?.get(name)
    }

    /// All members in payload order, if the payload is an object
    pub fn members(&self) -> Option<&Map<String, Value>> {
        self.payload.as_object()
    }

    /// The decoded payload as-is
    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

/// Read a temporal claim as seconds since epoch
///
/// Numbers are taken as-is. Numeric strings and `true` are coerced the way a
/// loosely typed issuer would expect (`"100"` is 100, `true` is 1). Anything
/// else, including `false`, an empty string or a non-finite value, counts as
/// absent.
pub(crate) fn temporal_claim(payload: &Value, name: &str) -> Option<f64> {
    match payload.get(name)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        Value::Bool(true) => Some(1.0),
        _ => None,
    }
}

/// Configuration for admission validation
///
/// The defaults apply the admission rules with no tolerance: zero clock skew
/// and no length limit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenValidation {
    clock_skew_seconds: u64,
    max_token_length: Option<usize>,
}

impl TokenValidation {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set clock skew tolerance
    ///
    /// # Security
    /// Clock skew is limited to prevent effectively disabling expiration checks.
    /// Maximum allowed value is 300 seconds (5 minutes). Larger values are
    /// refused when the gate is constructed.
    pub fn clock_skew(mut self, seconds: u64) -> Self {
        self.clock_skew_seconds = seconds;
        self
    }

    /// Reject candidates longer than `bytes` before decoding them
    ///
    /// Off by default, so arbitrarily large sessions are admitted.
    pub fn max_token_length(mut self, bytes: usize) -> Self {
        self.max_token_length = Some(bytes);
        self
    }

    /// Check configuration bounds
    pub(crate) fn check(&self) -> Result<()> {
        if self.clock_skew_seconds > MAX_CLOCK_SKEW_SECONDS {
            return Err(Error::ClockSkewTooLarge {
                value: self.clock_skew_seconds,
                max: MAX_CLOCK_SKEW_SECONDS,
            });
        }
        Ok(())
    }

    /// Decide whether `candidate` is admissible at `now` (seconds since epoch)
    ///
    /// `Ok` carries the decoded claims of an accepted token, `Err` the reason
    /// it was rejected.
    pub fn validate(&self, candidate: &str, now: i64) -> std::result::Result<Claims, Rejection> {
        // 1. Bound the input before doing any work on it
        if let Some(max) = self.max_token_length {
            if candidate.len() > max {
                return Err(Rejection::TooLarge {
                    size: candidate.len(),
                    max,
                });
            }
        }

        // 2. Check token format (header, payload, signature)
        let parts = TokenParts::split(candidate)?;

        // 3. Decode payload; the header is not needed for admission
        let payload = base64url::decode_json(parts.payload).map_err(Rejection::MalformedPayload)?;
        let claims = Claims::from_value(payload)?;

        // 4. Temporal claims
        let skew = self.clock_skew_seconds as f64;
        let now_f = now as f64;

        if let Some(exp) = claims.expiration() {
            if exp + skew < now_f {
                return Err(Rejection::Expired {
                    expired_at: exp,
                    now,
                });
            }
        }

        if let Some(iat) = claims.issued_at() {
            if iat > now_f + skew {
                return Err(Rejection::NotYetIssued { issued_at: iat, now });
            }
        }

        Ok(claims)
    }
}

/// Validate a candidate with the default configuration
pub fn validate(candidate: &str, now: i64) -> std::result::Result<Claims, Rejection> {
    TokenValidation::default().validate(candidate, now)
}
