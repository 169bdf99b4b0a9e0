use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::{AnimationPhase, AnimationTimings, DEFAULT_SEED};
use crate::color::Rgb;
use crate::command::{self, Command, CommandError};
use crate::hold::HoldOverride;
use crate::preset::{DEFAULT_PRESETS, Preset, PresetCollection, PresetError, PresetTemplate};
use crate::queue::CommandReceiver;
use crate::{OutputDriver, PresetStorage};

/// Default global brightness
pub const DEFAULT_BRIGHTNESS: u8 = 255;

/// Default interval between periodic frames
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Configuration for the engine
#[derive(Clone)]
pub struct EngineConfig<'a> {
    /// Built-in presets, in display order
    pub defaults: &'a [PresetTemplate],
    pub brightness: u8,
    pub frame_interval: Duration,
    pub timings: AnimationTimings,
    /// Seed for the fire/candle/party random stream
    pub seed: u64,
}

impl EngineConfig<'static> {
    pub const DEFAULT: Self = Self {
        defaults: &DEFAULT_PRESETS,
        brightness: DEFAULT_BRIGHTNESS,
        frame_interval: DEFAULT_FRAME_INTERVAL,
        timings: AnimationTimings::DEFAULT,
        seed: DEFAULT_SEED,
    };
}

impl Default for EngineConfig<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Preset and command engine
///
/// Owns every piece of mutable lighting state. All transports reach it
/// through [`Engine::dispatch`], and the periodic loop through
/// [`Engine::refresh`]; both render into the same frame buffer.
pub struct Engine<D: OutputDriver, S: PresetStorage, const N: usize> {
    // External dependencies
    driver: D,
    storage: S,

    // Internal state
    presets: PresetCollection<N>,
    phase: AnimationPhase,
    hold: HoldOverride,
    brightness: u8,
    frame_interval: Duration,
    frame_buffer: [Rgb; N],
}

impl<D: OutputDriver, S: PresetStorage, const N: usize> Engine<D, S, N> {
    /// Build the engine and restore persisted presets and hold preset.
    ///
    /// Nothing is rendered or written back to storage.
    pub fn new(driver: D, mut storage: S, config: &EngineConfig<'_>) -> Result<Self, PresetError> {
        let mut presets = PresetCollection::new(config.defaults)?;
        storage.read_custom_presets(|line| {
            presets.load_custom([line]);
        });

        let hold = HoldOverride::new(storage.read_hold_index().unwrap_or(0));

        #[cfg(feature = "esp32-log")]
        println!(
            "[Engine.new] {} default, {} custom presets",
            presets.default_count(),
            presets.custom_count()
        );

        Ok(Self {
            driver,
            storage,
            presets,
            phase: AnimationPhase::new(&config.timings, config.seed),
            hold,
            brightness: config.brightness,
            frame_interval: config.frame_interval,
            frame_buffer: [Rgb::default(); N],
        })
    }

    /// Parse and apply one command line.
    ///
    /// A rejected line leaves every piece of state untouched and causes no
    /// render and no storage write.
    pub fn dispatch(&mut self, line: &str, now: Instant) -> Result<Command<N>, CommandError> {
        let result = command::parse::<N>(line).and_then(|command| {
            self.apply(&command, now)?;
            Ok(command)
        });

        #[cfg(feature = "esp32-log")]
        if let Err(err) = &result {
            println!("[Engine.dispatch] rejected {:?}: {}", line, err);
        }

        result
    }

    /// Drain queued command lines through [`Engine::dispatch`].
    ///
    /// Returns the number of lines processed, rejected ones included.
    pub fn process_pending<const SIZE: usize>(
        &mut self,
        commands: &CommandReceiver<'_, SIZE>,
        now: Instant,
    ) -> usize {
        let mut processed = 0;
        while let Some(line) = commands.try_receive() {
            let _ = self.dispatch(&line, now);
            processed += 1;
        }
        processed
    }

    /// Apply a validated command
    fn apply(&mut self, command: &Command<N>, now: Instant) -> Result<(), CommandError> {
        match command {
            Command::Next => self.presets.next(),
            Command::Previous => self.presets.previous(),
            Command::SetPreset(index) => {
                self.presets
                    .select(*index)
                    .map_err(|_| CommandError::Range)?;
            }
            Command::SetBrightness(brightness) => self.brightness = *brightness,
            Command::SetColor(color) => self.presets.set_current_color(*color)?,
            Command::SetLeds(leds) => self.presets.set_current_leds(leds)?,
            Command::SetSpeed(interval) => self.frame_interval = *interval,
            Command::Unknown => {}
        }

        #[cfg(feature = "esp32-log")]
        if matches!(
            command,
            Command::Next | Command::Previous | Command::SetPreset(_)
        ) {
            println!("[Engine.apply] preset {}", self.presets.current_index());
        }

        // Defaults are never serialized
        if command.persists() && self.presets.is_custom(self.presets.current_index()) {
            self.persist();
        }
        if command.renders() {
            self.refresh(now);
        }
        Ok(())
    }

    /// Render the current preset and push it to the driver
    pub fn refresh(&mut self, now: Instant) {
        self.phase
            .render(self.presets.current(), now, &mut self.frame_buffer);
        self.driver.write(&self.frame_buffer, self.brightness);
    }

    /// Select a preset directly, bypassing the text grammar
    pub fn select(&mut self, index: usize, now: Instant) -> Result<(), PresetError> {
        self.presets.select(index)?;
        self.refresh(now);
        Ok(())
    }

    /// Add a static preset before the off preset, select and persist it
    pub fn add_preset(&mut self, name: &str, color: Rgb, now: Instant) -> Result<usize, PresetError> {
        let index = self.presets.add_static(name, color)?;
        self.persist();
        self.refresh(now);

        #[cfg(feature = "esp32-log")]
        println!("[Engine.add_preset] added {:?} at {}", name, index);

        Ok(index)
    }

    /// Configure and persist the preset shown while the hold signal is active
    pub fn set_hold_preset(&mut self, index: usize) -> Result<(), PresetError> {
        if index >= self.presets.count() {
            return Err(PresetError::IndexOutOfRange(index));
        }
        self.hold.set_preset(index);
        self.storage.write_hold_index(index);
        Ok(())
    }

    /// Hold signal pressed
    pub fn hold_activate(&mut self, now: Instant) {
        if self.hold.activate(&mut self.presets) {
            self.refresh(now);
        }
    }

    /// Hold signal released
    pub fn hold_release(&mut self, now: Instant) {
        if self.hold.release(&mut self.presets) {
            self.refresh(now);
        }
    }

    fn persist(&mut self) {
        self.storage
            .write_custom_presets(self.presets.serialize_custom());
    }

    /// Number of presets, off preset included
    pub fn count(&self) -> usize {
        self.presets.count()
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.presets.get(index).map(Preset::name)
    }

    pub fn preset(&self, index: usize) -> Option<&Preset<N>> {
        self.presets.get(index)
    }

    pub const fn is_active(&self, index: usize) -> bool {
        self.presets.current_index() == index
    }

    pub const fn current_index(&self) -> usize {
        self.presets.current_index()
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Preset shown while the hold signal is active
    pub const fn hold_preset(&self) -> usize {
        self.hold.preset()
    }

    pub const fn hold(&self) -> &HoldOverride {
        &self.hold
    }

    pub const fn presets(&self) -> &PresetCollection<N> {
        &self.presets
    }

    pub const fn phase(&self) -> &AnimationPhase {
        &self.phase
    }

    /// Last rendered frame
    pub const fn frame(&self) -> &[Rgb; N] {
        &self.frame_buffer
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}
