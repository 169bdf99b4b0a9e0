//! Randomized animations
//!
//! Fire, candle and party keep no phase of their own: every render draws
//! fresh values from one shared PCG stream, regardless of cadence.

use rand_core::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::{
    color::{Rgb, hsv},
    math8::lerp8_range,
};

const FIRE_HUE: (u8, u8) = (0, 25);
const FIRE_VALUE: (u8, u8) = (120, 255);
const FIRE_SATURATION: u8 = 255;

const CANDLE_HUE: (u8, u8) = (16, 32);
const CANDLE_VALUE: (u8, u8) = (90, 255);
const CANDLE_SATURATION: u8 = 220;

const PARTY_SATURATION: u8 = 255;
const PARTY_VALUE: u8 = 255;

#[derive(Debug, Clone)]
pub struct NoiseAnimation {
    rng: Pcg32,
}

impl NoiseAnimation {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Warm hue and brightness per LED
    pub fn fire(&mut self, leds: &mut [Rgb]) {
        for led in leds.iter_mut() {
            let [hue, value, ..] = self.rng.next_u32().to_le_bytes();
            *led = hsv(
                lerp8_range(hue, FIRE_HUE.0, FIRE_HUE.1),
                FIRE_SATURATION,
                lerp8_range(value, FIRE_VALUE.0, FIRE_VALUE.1),
            );
        }
    }

    /// One warm flickering color for the whole strip
    pub fn candle(&mut self, leds: &mut [Rgb]) {
        let [hue, value, ..] = self.rng.next_u32().to_le_bytes();
        leds.fill(hsv(
            lerp8_range(hue, CANDLE_HUE.0, CANDLE_HUE.1),
            CANDLE_SATURATION,
            lerp8_range(value, CANDLE_VALUE.0, CANDLE_VALUE.1),
        ));
    }

    /// Fully random hue per LED
    pub fn party(&mut self, leds: &mut [Rgb]) {
        for led in leds.iter_mut() {
            let [hue, ..] = self.rng.next_u32().to_le_bytes();
            *led = hsv(hue, PARTY_SATURATION, PARTY_VALUE);
        }
    }

    pub(crate) fn reseed(&mut self, seed: u64) {
        self.rng = Pcg32::seed_from_u64(seed);
    }
}
