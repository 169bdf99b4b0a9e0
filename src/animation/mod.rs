//! Animation generator
//!
//! Renders one frame for a preset. Static and custom presets are pure copies
//! of the preset payload; every animated kind owns its phase inside
//! [`AnimationPhase`]. Phases are independent of each other and survive
//! preset switches, so leaving an animation and coming back resumes it where
//! it was.

mod cadence;
mod lavalamp;
mod noise;
mod police;
mod rainbow;
mod strobe;

use embassy_time::{Duration, Instant};

pub use lavalamp::LavalampAnimation;
pub use noise::NoiseAnimation;
pub use police::{PoliceNlAnimation, PoliceNlTimings, PoliceUsaAnimation, PoliceUsaTimings};
pub use rainbow::RainbowAnimation;
pub use strobe::StrobeAnimation;

use crate::{
    color::{BLACK, Rgb},
    preset::{Preset, PresetKind},
};

/// Seed used when the caller has no entropy source
pub const DEFAULT_SEED: u64 = 0x5eed_1ed5;

pub trait Animation {
    /// Render a single frame, advancing phase if its tick has elapsed
    fn render(&mut self, now: Instant, leds: &mut [Rgb]);

    /// Reset animation phase
    fn reset(&mut self) {}
}

/// Tick lengths and spatial constants of every animated kind
#[derive(Debug, Clone, Copy)]
pub struct AnimationTimings {
    pub rainbow_tick: Duration,
    /// Hue distance between neighbouring LEDs
    pub rainbow_spread: u8,
    pub police_nl: PoliceNlTimings,
    pub police_usa: PoliceUsaTimings,
    pub strobe_tick: Duration,
    pub lavalamp_tick: Duration,
    /// Hue distance between neighbouring LEDs
    pub lavalamp_offset: u8,
}

impl AnimationTimings {
    pub const DEFAULT: Self = Self {
        rainbow_tick: Duration::from_millis(50),
        rainbow_spread: 20,
        police_nl: PoliceNlTimings::DEFAULT,
        police_usa: PoliceUsaTimings::DEFAULT,
        strobe_tick: Duration::from_millis(50),
        lavalamp_tick: Duration::from_millis(30),
        lavalamp_offset: 12,
    };
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Per-kind animation state for the lifetime of the process
#[derive(Debug, Clone)]
pub struct AnimationPhase {
    rainbow: RainbowAnimation,
    police_nl: PoliceNlAnimation,
    police_usa: PoliceUsaAnimation,
    strobe: StrobeAnimation,
    lavalamp: LavalampAnimation,
    noise: NoiseAnimation,
    seed: u64,
}

impl AnimationPhase {
    pub fn new(timings: &AnimationTimings, seed: u64) -> Self {
        Self {
            rainbow: RainbowAnimation::new(timings.rainbow_tick, timings.rainbow_spread),
            police_nl: PoliceNlAnimation::new(&timings.police_nl),
            police_usa: PoliceUsaAnimation::new(&timings.police_usa),
            strobe: StrobeAnimation::new(timings.strobe_tick),
            lavalamp: LavalampAnimation::new(timings.lavalamp_tick, timings.lavalamp_offset),
            noise: NoiseAnimation::new(seed),
            seed,
        }
    }

    /// Render `preset` into `leds`
    pub fn render<const N: usize>(&mut self, preset: &Preset<N>, now: Instant, leds: &mut [Rgb]) {
        match preset.kind() {
            PresetKind::Static => leds.fill(preset.color()),
            PresetKind::Rainbow => self.rainbow.render(now, leds),
            PresetKind::PoliceNl => self.police_nl.render(now, leds),
            PresetKind::PoliceUsa => self.police_usa.render(now, leds),
            PresetKind::Strobe => self.strobe.render(now, leds),
            PresetKind::Lavalamp => self.lavalamp.render(now, leds),
            PresetKind::Fire => self.noise.fire(leds),
            PresetKind::Candle => self.noise.candle(leds),
            PresetKind::Party => self.noise.party(leds),
            PresetKind::Custom => render_custom(preset.leds(), leds),
        }
    }

    /// Reset every phase and restart the random stream
    pub fn reset(&mut self) {
        self.rainbow.reset();
        self.police_nl.reset();
        self.police_usa.reset();
        self.strobe.reset();
        self.lavalamp.reset();
        self.noise.reseed(self.seed);
    }

    pub const fn rainbow(&self) -> &RainbowAnimation {
        &self.rainbow
    }

    pub const fn police_nl(&self) -> &PoliceNlAnimation {
        &self.police_nl
    }

    pub const fn police_usa(&self) -> &PoliceUsaAnimation {
        &self.police_usa
    }

    pub const fn strobe(&self) -> &StrobeAnimation {
        &self.strobe
    }

    pub const fn lavalamp(&self) -> &LavalampAnimation {
        &self.lavalamp
    }
}

/// Copy the stored LED array; missing entries render black
fn render_custom(colors: &[Rgb], leds: &mut [Rgb]) {
    for (i, led) in leds.iter_mut().enumerate() {
        *led = colors.get(i).copied().unwrap_or(BLACK);
    }
}
