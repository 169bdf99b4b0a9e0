//! Rainbow cycling animation
//!
//! The whole wheel is spread across the strip and rotated one hue step per
//! tick.

use embassy_time::{Duration, Instant};

use super::{Animation, cadence::Cadence};
use crate::color::{Rgb, hsv};

const SATURATION: u8 = 255;
const VALUE: u8 = 255;

#[derive(Debug, Clone)]
pub struct RainbowAnimation {
    cadence: Cadence,
    /// Hue distance between neighbouring LEDs
    spread: u8,
    hue: u8,
}

impl RainbowAnimation {
    pub const fn new(tick: Duration, spread: u8) -> Self {
        Self {
            cadence: Cadence::new(tick),
            spread,
            hue: 0,
        }
    }

    /// Hue of the first LED
    pub const fn hue(&self) -> u8 {
        self.hue
    }
}

impl Animation for RainbowAnimation {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        if self.cadence.advance(now) {
            self.hue = self.hue.wrapping_add(1);
        }

        for (i, led) in leds.iter_mut().enumerate() {
            let hue = self.hue.wrapping_add((i as u8).wrapping_mul(self.spread));
            *led = hsv(hue, SATURATION, VALUE);
        }
    }

    fn reset(&mut self) {
        self.cadence.reset();
        self.hue = 0;
    }
}
