#![no_std]

pub mod animation;
pub mod bounds;
pub mod color;
pub mod command;
pub mod engine;
pub mod frame_scheduler;
pub mod hold;
pub mod math8;
pub mod preset;
pub mod queue;

pub use animation::{AnimationPhase, AnimationTimings};
pub use command::{Command, CommandError};
pub use engine::{Engine, EngineConfig};
pub use frame_scheduler::FrameScheduler;
pub use hold::HoldOverride;
pub use preset::{
    DEFAULT_PRESETS, Preset, PresetCollection, PresetError, PresetKind, PresetLine,
    PresetTemplate,
};
pub use queue::{CommandQueue, CommandReceiver, CommandSender, QueueError};

pub use color::{ColorError, Hsv, Rgb, format_hex_color, parse_hex_color};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The engine is generic over this trait. Failures stay inside the driver.
pub trait OutputDriver {
    /// Write colors to the LED strip at the given global brightness
    fn write(&mut self, colors: &[Rgb], brightness: u8);
}

/// Line-oriented persistent storage
///
/// A missing or unreadable store behaves like an empty one.
pub trait PresetStorage {
    /// Feed every stored custom preset line to `visit`
    fn read_custom_presets<F: FnMut(&str)>(&mut self, visit: F);

    /// Replace all stored custom preset lines
    fn write_custom_presets<I: Iterator<Item = PresetLine>>(&mut self, lines: I);

    /// Stored hold preset index, if any
    fn read_hold_index(&mut self) -> Option<usize>;

    /// Store the hold preset index
    fn write_hold_index(&mut self, index: usize);
}
