use crate::error::Rejection;
use crate::limits::TOKEN_SEGMENTS;

/// The three Base64URL segments of a candidate token
///
/// Splitting establishes shape only. Nothing about the segments has been
/// decoded or trusted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
}

impl<'a> TokenParts<'a> {
    /// Split a candidate on `.` into exactly three non-empty segments
    pub fn split(token: &'a str) -> Result<Self, Rejection> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != TOKEN_SEGMENTS || parts.iter().any(|part| part.is_empty()) {
            return Err(Rejection::MalformedStructure {
                segments: parts.len(),
            });
        }

        Ok(Self {
            header: parts[0],
            payload: parts[1],
            signature: parts[2],
        })
    }
}
