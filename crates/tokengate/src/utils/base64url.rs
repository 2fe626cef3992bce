//! Base64URL decoding for token segments
//!
//! Segments are translated to the standard alphabet (`-` to `+`, `_` to `/`),
//! right-padded with `=` to a multiple of four and decoded with the padded
//! standard engine. Input that already carries padding is accepted as-is.
//! Non-zero trailing bits in the last symbol are ignored, matching the
//! forgiving decoders browsers use.

use base64::{
    Engine, alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
};

const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Translate a Base64URL segment into padded standard Base64
pub(crate) fn to_standard(input: &str) -> String {
    let mut standard: String = input
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    while standard.len() % 4 != 0 {
        standard.push('=');
    }

    standard
}

/// Decode a Base64URL segment to bytes
pub(crate) fn decode_bytes(input: &str) -> Result<Vec<u8>, String> {
    FORGIVING
        .decode(to_standard(input))
        .map_err(|e| format!("Base64URL decode failed: {e}"))
}

/// Decode a Base64URL segment and parse it as UTF-8 JSON
pub(crate) fn decode_json(input: &str) -> Result<serde_json::Value, String> {
    let bytes = decode_bytes(input)?;
    serde_json::from_slice(&bytes).map_err(|e| format!("JSON parsing failed: {e}"))
}
