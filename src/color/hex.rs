//! Six-digit hexadecimal RGB codec
//!
//! Colors travel as bare `rrggbb` text both on the wire and in persisted
//! preset lines. A leading `#` is a command-grammar concern and must be
//! stripped by the caller before parsing.

use core::fmt::Write;

use heapless::String;
use thiserror::Error;

use super::{Rgb, rgb_from_u32, rgb_to_u32};

/// Number of characters in an encoded color
pub const HEX_COLOR_LEN: usize = 6;

/// Encoded color text
pub type HexColor = String<HEX_COLOR_LEN>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input is not exactly six ASCII hex digits
    #[error("expected six hex digits")]
    InvalidFormat,
}

/// Parse exactly six ASCII hex digits (case-insensitive) into a color
pub fn parse_hex_color(text: &str) -> Result<Rgb, ColorError> {
    let bytes = text.as_bytes();
    if bytes.len() != HEX_COLOR_LEN {
        return Err(ColorError::InvalidFormat);
    }

    let mut value: u32 = 0;
    for &b in bytes {
        value = (value << 4) | u32::from(hex_digit(b)?);
    }
    Ok(rgb_from_u32(value))
}

/// Format a color as six zero-padded lowercase hex digits
pub fn format_hex_color(color: Rgb) -> HexColor {
    let mut out = HexColor::new();
    // Six digits always fit the buffer
    let _ = write!(out, "{:06x}", rgb_to_u32(color));
    out
}

#[inline]
fn hex_digit(b: u8) -> Result<u8, ColorError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(ColorError::InvalidFormat),
    }
}
