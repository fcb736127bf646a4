//! The codec used for every opaque binary value that crosses the wire to the Relying Party.
//!
//! Binary buffers travel as unpadded `base64url` tokens so they fit both in a JSON field and in
//! an ordinary URL. Decoding is tolerant of tokens that still carry their `=` padding.

use std::{fmt, sync::LazyLock};

use data_encoding::{Encoding, BASE64URL, BASE64URL_NOPAD};
use serde::Serialize;

const PADDING: char = '=';

/// `base64url` with padding, but without rejecting non-zero trailing bits the way browsers'
/// `atob` doesn't.
static LENIENT_BASE64URL: LazyLock<Encoding> = LazyLock::new(|| {
    let mut specs = BASE64URL.specification();
    specs.check_trailing_bits = false;
    // SAFETY: relaxing the trailing bits check of a valid built-in specification keeps it valid.
    specs.encoding().unwrap()
});

/// Convert bytes to base64url without padding
pub fn base64url(data: &[u8]) -> String {
    BASE64URL_NOPAD.encode(data)
}

/// Pad a token with `=` up to the next multiple of 4 characters.
///
/// Any padding already present is discarded first, so `"AQ"`, `"AQ="` and `"AQ=="` all restore
/// to `"AQ=="`.
pub fn restore_padding(input: &str) -> String {
    let trimmed = input.trim_end_matches(PADDING);
    let missing = (4 - trimmed.len() % 4) % 4;

    let mut padded = String::with_capacity(trimmed.len() + missing);
    padded.push_str(trimmed);
    padded.extend(std::iter::repeat(PADDING).take(missing));
    padded
}

/// Try parsing from base64url with or without padding
pub fn try_from_base64url(input: &str) -> Result<Vec<u8>, DecodeError> {
    LENIENT_BASE64URL
        .decode(restore_padding(input).as_bytes())
        .map_err(DecodeError::from)
}

/// The given token is not valid `base64url`.
///
/// Only the position and the reason are kept, the rejected input is never echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[typeshare::typeshare]
pub struct DecodeError {
    /// Offset of the offending character within the padded token.
    pub position: usize,
    /// Human readable reason, e.g. `invalid symbol` or `invalid length`.
    pub reason: String,
}

impl From<data_encoding::DecodeError> for DecodeError {
    fn from(value: data_encoding::DecodeError) -> Self {
        Self {
            position: value.position,
            reason: value.kind.to_string(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.reason, self.position)
    }
}

impl std::error::Error for DecodeError {}

#[cfg(test)]
mod tests;
