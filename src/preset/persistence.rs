//! Line format for persisted custom presets
//!
//! ```text
//! <name>,<type>,<rrggbb>                       non-Custom
//! <name>,<type>,<rrggbb>;<rrggbb>;...;<rrggbb>  Custom, one color per LED
//! ```

use core::fmt::{self, Write};

use heapless::{String, Vec};

use super::{MAX_NAME_LEN, Preset, PresetError, PresetKind};
use crate::color::{Rgb, format_hex_color, parse_hex_color};

/// Capacity of one persisted line
///
/// Sized for the longest custom preset: a full name, two commas, a two-digit
/// type tag and [`MAX_STRIP_LEN`] colors of six hex digits joined by `;`.
pub const MAX_LINE_LEN: usize = 320;

/// Longest strip whose custom presets fit in [`MAX_LINE_LEN`]
pub const MAX_STRIP_LEN: usize = (MAX_LINE_LEN - MAX_NAME_LEN - 4) / 7;

/// One persisted preset
pub type PresetLine = String<MAX_LINE_LEN>;

const FIELD_SEPARATOR: char = ',';
const LED_SEPARATOR: char = ';';

/// Write a preset in the persisted line format (no line terminator)
pub fn write_preset_line<W: Write, const N: usize>(
    preset: &Preset<N>,
    out: &mut W,
) -> fmt::Result {
    write!(
        out,
        "{}{}{}{}",
        preset.name(),
        FIELD_SEPARATOR,
        preset.kind().as_raw(),
        FIELD_SEPARATOR
    )?;

    if preset.kind() != PresetKind::Custom {
        return out.write_str(&format_hex_color(preset.color()));
    }

    for (i, led) in preset.leds().iter().enumerate() {
        if i > 0 {
            out.write_char(LED_SEPARATOR)?;
        }
        out.write_str(&format_hex_color(*led))?;
    }
    Ok(())
}

/// Parse one persisted line back into a preset
pub fn parse_preset_line<const N: usize>(line: &str) -> Result<Preset<N>, PresetError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut fields = line.split(FIELD_SEPARATOR);

    let name = fields.next().ok_or(PresetError::Corrupt)?;
    let kind = fields.next().ok_or(PresetError::Corrupt)?;
    let payload = fields.next().ok_or(PresetError::Corrupt)?;
    if fields.next().is_some() {
        return Err(PresetError::Corrupt);
    }

    let kind = parse_kind(kind).ok_or(PresetError::Corrupt)?;

    if kind != PresetKind::Custom {
        let color = parse_hex_color(payload)?;
        return Preset::with_kind(name, kind, color);
    }

    let mut leds: Vec<Rgb, N> = Vec::new();
    for token in payload.split(LED_SEPARATOR) {
        let color = parse_hex_color(token)?;
        leds.push(color).map_err(|_| PresetError::Corrupt)?;
    }
    Preset::new_custom(name, &leds)
}

fn parse_kind(field: &str) -> Option<PresetKind> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<u8>().ok().and_then(PresetKind::from_raw)
}
