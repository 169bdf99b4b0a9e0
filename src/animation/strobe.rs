use embassy_time::{Duration, Instant};

use super::{Animation, cadence::Cadence};
use crate::color::{BLACK, Rgb, WHITE};

/// White/black strobe toggling once per tick
#[derive(Debug, Clone)]
pub struct StrobeAnimation {
    cadence: Cadence,
    on: bool,
}

impl StrobeAnimation {
    pub const fn new(tick: Duration) -> Self {
        Self {
            cadence: Cadence::new(tick),
            on: false,
        }
    }

    pub const fn is_on(&self) -> bool {
        self.on
    }
}

impl Animation for StrobeAnimation {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        if self.cadence.advance(now) {
            self.on = !self.on;
        }
        leds.fill(if self.on { WHITE } else { BLACK });
    }

    fn reset(&mut self) {
        self.cadence.reset();
        self.on = false;
    }
}
