#![allow(dead_code)]

use wearable_light::color::{BLUE, RED, Rgb};
use wearable_light::preset::{PresetKind, PresetTemplate};
use wearable_light::{Engine, EngineConfig, OutputDriver, PresetLine, PresetStorage};

pub const LEDS: usize = 13;

/// Two static presets and a rainbow, plus the implicit off preset
pub const DEFAULTS: [PresetTemplate; 3] = [
    PresetTemplate::new("Red", PresetKind::Static).with_color(RED),
    PresetTemplate::new("Blue", PresetKind::Static).with_color(BLUE),
    PresetTemplate::new("Rainbow", PresetKind::Rainbow),
];

pub const CONFIG: EngineConfig<'static> = EngineConfig {
    defaults: &DEFAULTS,
    ..EngineConfig::DEFAULT
};

#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<(Vec<Rgb>, u8)>,
}

impl RecordingDriver {
    pub fn last(&self) -> Option<&(Vec<Rgb>, u8)> {
        self.frames.last()
    }
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, colors: &[Rgb], brightness: u8) {
        self.frames.push((colors.to_vec(), brightness));
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    pub lines: Vec<String>,
    pub hold: Option<usize>,
    pub writes: usize,
    pub hold_writes: usize,
}

impl MemoryStorage {
    pub fn with_lines(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }
}

impl PresetStorage for MemoryStorage {
    fn read_custom_presets<F: FnMut(&str)>(&mut self, mut visit: F) {
        for line in &self.lines {
            visit(line);
        }
    }

    fn write_custom_presets<I: Iterator<Item = PresetLine>>(&mut self, lines: I) {
        self.lines = lines.map(|line| line.as_str().to_string()).collect();
        self.writes += 1;
    }

    fn read_hold_index(&mut self) -> Option<usize> {
        self.hold
    }

    fn write_hold_index(&mut self, index: usize) {
        self.hold = Some(index);
        self.hold_writes += 1;
    }
}

pub type TestEngine = Engine<RecordingDriver, MemoryStorage, LEDS>;

pub fn engine() -> TestEngine {
    engine_with(MemoryStorage::default())
}

pub fn engine_with(storage: MemoryStorage) -> TestEngine {
    Engine::new(RecordingDriver::default(), storage, &CONFIG).unwrap()
}

