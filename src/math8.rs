/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Map a full-range 8-bit value onto the inclusive range `low..=high`
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn lerp8_range(value: u8, low: u8, high: u8) -> u8 {
    if high <= low {
        return low;
    }
    let span = (high - low) as u16 + 1;
    low + ((value as u16 * span) >> 8) as u8
}
