//! Slow flowing hue gradient

use embassy_time::{Duration, Instant};

use super::{Animation, cadence::Cadence};
use crate::color::{Rgb, hsv};

const SATURATION: u8 = 240;
const VALUE: u8 = 255;
/// Hue positions wrap at 255, not 256
const HUE_MODULUS: usize = 255;

#[derive(Debug, Clone)]
pub struct LavalampAnimation {
    cadence: Cadence,
    /// Hue distance between neighbouring LEDs
    offset: u8,
    position: u8,
}

impl LavalampAnimation {
    pub const fn new(tick: Duration, offset: u8) -> Self {
        Self {
            cadence: Cadence::new(tick),
            offset,
            position: 0,
        }
    }

    pub const fn position(&self) -> u8 {
        self.position
    }

    /// Hue of LED `index` at the current position
    #[allow(clippy::cast_possible_truncation)]
    pub fn hue_at(&self, index: usize) -> u8 {
        ((usize::from(self.position) + index * usize::from(self.offset)) % HUE_MODULUS) as u8
    }
}

impl Animation for LavalampAnimation {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        if self.cadence.advance(now) {
            self.position = ((usize::from(self.position) + 1) % HUE_MODULUS) as u8;
        }

        for (i, led) in leds.iter_mut().enumerate() {
            *led = hsv(self.hue_at(i), SATURATION, VALUE);
        }
    }

    fn reset(&mut self) {
        self.cadence.reset();
        self.position = 0;
    }
}
