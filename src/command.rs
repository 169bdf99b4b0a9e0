//! Text command grammar
//!
//! Every transport hands its extracted command text to [`parse`]; there is
//! no other parser. Keywords are case-sensitive and numeric fields must be
//! plain decimal digits (no sign, no whitespace).
//!
//! ```text
//! next                      Next
//! prev                      Previous
//! set:<digits>              SetPreset(index)
//! bright:<digits>           SetBrightness(0..=255)
//! color:#<rrggbb>           SetColor
//! speed:<digits>            SetSpeed(ms > 0, no upper bound)
//! leds:[#]rrggbb[,...]      SetLeds, at most N colors, extra tokens ignored
//! anything else             Unknown
//! ```

use embassy_time::Duration;
use heapless::Vec;
use thiserror::Error;

use crate::color::{Rgb, parse_hex_color};
use crate::preset::PresetError;

const KEYWORD_NEXT: &str = "next";
const KEYWORD_PREVIOUS: &str = "prev";
const PREFIX_SET: &str = "set:";
const PREFIX_BRIGHTNESS: &str = "bright:";
const PREFIX_COLOR: &str = "color:";
const PREFIX_SPEED: &str = "speed:";
const PREFIX_LEDS: &str = "leds:";

const COLOR_MARKER: char = '#';
const LED_SEPARATOR: char = ',';

/// Why a command line was rejected. Rejected lines never change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Malformed field: empty, non-digit, missing `#` or bad hex
    #[error("malformed command")]
    Parse,
    /// Well-formed number outside the accepted range
    #[error("command value out of range")]
    Range,
    /// Preset store refused the change
    #[error(transparent)]
    Preset(#[from] PresetError),
}

/// Validated operation against the engine
///
/// N is the number of LEDs in the strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<const N: usize> {
    /// Select the following preset, wrapping around
    Next,
    /// Select the preceding preset, wrapping around
    Previous,
    /// Select a preset by index
    SetPreset(usize),
    /// Set global brightness
    SetBrightness(u8),
    /// Set the color of the current preset
    SetColor(Rgb),
    /// Set the periodic frame interval
    SetSpeed(Duration),
    /// Replace the LED array of the current preset
    SetLeds(Vec<Rgb, N>),
    /// Unrecognized line, ignored
    Unknown,
}

impl<const N: usize> Command<N> {
    /// Whether applying the command can change persisted presets
    pub const fn persists(&self) -> bool {
        matches!(self, Self::SetColor(_) | Self::SetLeds(_))
    }

    /// Whether applying the command re-renders and pushes a frame at once
    pub const fn renders(&self) -> bool {
        !matches!(self, Self::SetSpeed(_) | Self::Unknown)
    }
}

/// Parse one command line
pub fn parse<const N: usize>(line: &str) -> Result<Command<N>, CommandError> {
    if line == KEYWORD_NEXT {
        return Ok(Command::Next);
    }
    if line == KEYWORD_PREVIOUS {
        return Ok(Command::Previous);
    }

    if let Some(value) = line.strip_prefix(PREFIX_SET) {
        let index = parse_decimal(value)?;
        let index = usize::try_from(index).map_err(|_| CommandError::Range)?;
        return Ok(Command::SetPreset(index));
    }

    if let Some(value) = line.strip_prefix(PREFIX_BRIGHTNESS) {
        let brightness = parse_decimal(value)?;
        let brightness = u8::try_from(brightness).map_err(|_| CommandError::Range)?;
        return Ok(Command::SetBrightness(brightness));
    }

    if let Some(value) = line.strip_prefix(PREFIX_COLOR) {
        let hex = value.strip_prefix(COLOR_MARKER).ok_or(CommandError::Parse)?;
        let color = parse_hex_color(hex).map_err(|_| CommandError::Parse)?;
        return Ok(Command::SetColor(color));
    }

    if let Some(value) = line.strip_prefix(PREFIX_SPEED) {
        let millis = parse_decimal(value)?;
        if millis == 0 {
            return Err(CommandError::Range);
        }
        let interval = Duration::try_from_millis(millis).ok_or(CommandError::Range)?;
        return Ok(Command::SetSpeed(interval));
    }

    if let Some(value) = line.strip_prefix(PREFIX_LEDS) {
        return parse_led_list(value).map(Command::SetLeds);
    }

    Ok(Command::Unknown)
}

/// Parse a non-empty, digits-only decimal field
fn parse_decimal(s: &str) -> Result<u64, CommandError> {
    if s.is_empty() {
        return Err(CommandError::Parse);
    }

    let mut value: u64 = 0;
    for b in s.bytes() {
        if !b.is_ascii_digit() {
            return Err(CommandError::Parse);
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
            .ok_or(CommandError::Range)?;
    }
    Ok(value)
}

/// Parse up to N comma separated colors, each with an optional `#`.
///
/// The whole list is rejected if any of the first N tokens is invalid.
fn parse_led_list<const N: usize>(s: &str) -> Result<Vec<Rgb, N>, CommandError> {
    let mut leds = Vec::new();
    for token in s.split(LED_SEPARATOR).take(N) {
        let hex = token.strip_prefix(COLOR_MARKER).unwrap_or(token);
        let color = parse_hex_color(hex).map_err(|_| CommandError::Parse)?;
        leds.push(color).map_err(|_| CommandError::Parse)?;
    }
    Ok(leds)
}
