//! Emergency-light animations
//!
//! The strip is split into two halves: the left group holds the first
//! `ceil(len / 2)` LEDs, the right group the rest.

use embassy_time::{Duration, Instant};

use super::{Animation, cadence::Cadence};
use crate::{
    bounds::center_of,
    color::{BLACK, BLUE, RED, Rgb, WHITE},
};

/// Timing constants for [`PoliceNlAnimation`]
#[derive(Debug, Clone, Copy)]
pub struct PoliceNlTimings {
    /// Time each group stays lit before the other takes over
    pub flash_period: Duration,
    /// Every `strobe_every`-th flash (and the one halfway in between) strobes
    pub strobe_every: u32,
    /// On/off period of the strobing group
    pub strobe_flicker: Duration,
}

impl PoliceNlTimings {
    pub const DEFAULT: Self = Self {
        flash_period: Duration::from_millis(250),
        strobe_every: 20,
        strobe_flicker: Duration::from_millis(20),
    };
}

/// Timing constants for [`PoliceUsaAnimation`]
#[derive(Debug, Clone, Copy)]
pub struct PoliceUsaTimings {
    /// Duration of one step
    pub step: Duration,
    /// Steps per cycle; even steps are lit, odd steps dark
    pub steps: u8,
}

impl PoliceUsaTimings {
    pub const DEFAULT: Self = Self {
        step: Duration::from_millis(150),
        steps: 12,
    };
}

/// Dutch style: blue halves alternating, with a periodic strobe burst
///
/// During a strobe flash the active half flickers blue at the flicker rate
/// and the other half stays dark.
#[derive(Debug, Clone)]
pub struct PoliceNlAnimation {
    flash: Cadence,
    flicker: Cadence,
    strobe_every: u32,
    flashes: u32,
    left_active: bool,
    flicker_on: bool,
}

impl PoliceNlAnimation {
    pub const fn new(timings: &PoliceNlTimings) -> Self {
        Self {
            flash: Cadence::new(timings.flash_period),
            flicker: Cadence::new(timings.strobe_flicker),
            strobe_every: timings.strobe_every,
            flashes: 0,
            left_active: true,
            flicker_on: true,
        }
    }

    /// Number of flashes since start
    pub const fn flashes(&self) -> u32 {
        self.flashes
    }

    pub const fn left_active(&self) -> bool {
        self.left_active
    }

    /// Whether the current flash is a strobe burst
    pub fn is_strobing(&self) -> bool {
        if self.flashes == 0 || self.strobe_every == 0 {
            return false;
        }
        let position = self.flashes % self.strobe_every;
        position == 0 || position == self.strobe_every / 2
    }
}

impl Animation for PoliceNlAnimation {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        if self.flash.advance(now) {
            self.flashes = self.flashes.wrapping_add(1);
            self.left_active = !self.left_active;
        }

        let color = if self.is_strobing() {
            if self.flicker.advance(now) {
                self.flicker_on = !self.flicker_on;
            }
            if self.flicker_on { BLUE } else { BLACK }
        } else {
            BLUE
        };

        let center = center_of(leds);
        let (left, right) = leds.split_at_mut(center);
        if self.left_active {
            left.fill(color);
            right.fill(BLACK);
        } else {
            left.fill(BLACK);
            right.fill(color);
        }
    }

    fn reset(&mut self) {
        self.flash.reset();
        self.flicker.reset();
        self.flashes = 0;
        self.left_active = true;
        self.flicker_on = true;
    }
}

/// American style: red/white on one half, blue on the other
///
/// A cycle walks `steps` steps. The first half of the cycle lights the left
/// group, the second half the right group, blinking on even steps. Which
/// half carries red/white swaps every cycle.
#[derive(Debug, Clone)]
pub struct PoliceUsaAnimation {
    cadence: Cadence,
    steps: u8,
    step: u8,
    cycles: u32,
}

impl PoliceUsaAnimation {
    pub const fn new(timings: &PoliceUsaTimings) -> Self {
        Self {
            cadence: Cadence::new(timings.step),
            steps: timings.steps,
            step: 0,
            cycles: 0,
        }
    }

    pub const fn step(&self) -> u8 {
        self.step
    }

    pub const fn cycles(&self) -> u32 {
        self.cycles
    }

    pub const fn is_lit(&self) -> bool {
        self.step % 2 == 0
    }

    pub const fn left_active(&self) -> bool {
        self.step < self.steps / 2
    }

    /// Whether the red/white pattern is on the right half this cycle
    pub const fn is_mirrored(&self) -> bool {
        self.cycles % 2 == 1
    }
}

impl Animation for PoliceUsaAnimation {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        if self.cadence.advance(now) {
            self.step += 1;
            if self.step >= self.steps.max(1) {
                self.step = 0;
                self.cycles = self.cycles.wrapping_add(1);
            }
        }

        leds.fill(BLACK);
        if !self.is_lit() {
            return;
        }

        let left_active = self.left_active();
        let warm = left_active != self.is_mirrored();
        let center = center_of(leds);
        let (left, right) = leds.split_at_mut(center);
        let active = if left_active { left } else { right };

        if warm {
            for (i, led) in active.iter_mut().enumerate() {
                *led = if i % 2 == 0 { RED } else { WHITE };
            }
        } else {
            active.fill(BLUE);
        }
    }

    fn reset(&mut self) {
        self.cadence.reset();
        self.step = 0;
        self.cycles = 0;
    }
}
