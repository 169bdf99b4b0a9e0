//! Preset model
//!
//! A preset is a named lighting configuration: a kind tag plus the payload
//! that kind needs (one color for `Static`, a full LED array for `Custom`).
//! Presets live in a [`PresetCollection`], an index-addressed arena laid out as
//! `[defaults..][custom..][sentinel]`.

mod collection;
mod persistence;

use heapless::{String, Vec};
use thiserror::Error;

pub use collection::PresetCollection;
pub use persistence::{
    MAX_LINE_LEN, MAX_STRIP_LEN, PresetLine, parse_preset_line, write_preset_line,
};

use crate::color::{BLACK, BLUE, ColorError, RED, Rgb, WHITE};

/// Maximum number of presets (defaults, custom and sentinel together)
pub const MAX_PRESETS: usize = 32;

/// Maximum preset name length in bytes
pub const MAX_NAME_LEN: usize = 24;

/// Display label of a preset
pub type PresetName = String<MAX_NAME_LEN>;

/// Name of the always-last "off" preset
pub const SENTINEL_NAME: &str = "Off";

const PRESET_NAME_STATIC: &str = "static";
const PRESET_NAME_RAINBOW: &str = "rainbow";
const PRESET_NAME_POLICE_NL: &str = "police_nl";
const PRESET_NAME_POLICE_USA: &str = "police_usa";
const PRESET_NAME_STROBE: &str = "strobe";
const PRESET_NAME_LAVALAMP: &str = "lavalamp";
const PRESET_NAME_FIRE: &str = "fire";
const PRESET_NAME_CANDLE: &str = "candle";
const PRESET_NAME_PARTY: &str = "party";
const PRESET_NAME_CUSTOM: &str = "custom";

const PRESET_KIND_STATIC: u8 = 0;
const PRESET_KIND_RAINBOW: u8 = 1;
const PRESET_KIND_POLICE_NL: u8 = 2;
const PRESET_KIND_POLICE_USA: u8 = 3;
const PRESET_KIND_STROBE: u8 = 4;
const PRESET_KIND_LAVALAMP: u8 = 5;
const PRESET_KIND_FIRE: u8 = 6;
const PRESET_KIND_CANDLE: u8 = 7;
const PRESET_KIND_PARTY: u8 = 8;
const PRESET_KIND_CUSTOM: u8 = 9;

/// Errors raised by preset store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PresetError {
    #[error("preset index {0} is out of range")]
    IndexOutOfRange(usize),
    #[error("more LED colors than the strip has")]
    TooManyLeds,
    #[error("preset collection is full")]
    CapacityExceeded,
    #[error("preset name is empty, too long or contains a separator")]
    InvalidName,
    #[error("the off preset cannot be modified")]
    ReadOnly,
    #[error("malformed persisted preset line")]
    Corrupt,
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Preset kind tag. The discriminant is the persisted type field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PresetKind {
    Static = PRESET_KIND_STATIC,
    Rainbow = PRESET_KIND_RAINBOW,
    PoliceNl = PRESET_KIND_POLICE_NL,
    PoliceUsa = PRESET_KIND_POLICE_USA,
    Strobe = PRESET_KIND_STROBE,
    Lavalamp = PRESET_KIND_LAVALAMP,
    Fire = PRESET_KIND_FIRE,
    Candle = PRESET_KIND_CANDLE,
    Party = PRESET_KIND_PARTY,
    Custom = PRESET_KIND_CUSTOM,
}

impl PresetKind {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PRESET_KIND_STATIC => Self::Static,
            PRESET_KIND_RAINBOW => Self::Rainbow,
            PRESET_KIND_POLICE_NL => Self::PoliceNl,
            PRESET_KIND_POLICE_USA => Self::PoliceUsa,
            PRESET_KIND_STROBE => Self::Strobe,
            PRESET_KIND_LAVALAMP => Self::Lavalamp,
            PRESET_KIND_FIRE => Self::Fire,
            PRESET_KIND_CANDLE => Self::Candle,
            PRESET_KIND_PARTY => Self::Party,
            PRESET_KIND_CUSTOM => Self::Custom,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => PRESET_NAME_STATIC,
            Self::Rainbow => PRESET_NAME_RAINBOW,
            Self::PoliceNl => PRESET_NAME_POLICE_NL,
            Self::PoliceUsa => PRESET_NAME_POLICE_USA,
            Self::Strobe => PRESET_NAME_STROBE,
            Self::Lavalamp => PRESET_NAME_LAVALAMP,
            Self::Fire => PRESET_NAME_FIRE,
            Self::Candle => PRESET_NAME_CANDLE,
            Self::Party => PRESET_NAME_PARTY,
            Self::Custom => PRESET_NAME_CUSTOM,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PRESET_NAME_STATIC => Some(Self::Static),
            PRESET_NAME_RAINBOW => Some(Self::Rainbow),
            PRESET_NAME_POLICE_NL => Some(Self::PoliceNl),
            PRESET_NAME_POLICE_USA => Some(Self::PoliceUsa),
            PRESET_NAME_STROBE => Some(Self::Strobe),
            PRESET_NAME_LAVALAMP => Some(Self::Lavalamp),
            PRESET_NAME_FIRE => Some(Self::Fire),
            PRESET_NAME_CANDLE => Some(Self::Candle),
            PRESET_NAME_PARTY => Some(Self::Party),
            PRESET_NAME_CUSTOM => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Compile-time description of a built-in preset
#[derive(Debug, Clone, Copy)]
pub struct PresetTemplate {
    pub name: &'static str,
    pub kind: PresetKind,
    pub color: Rgb,
}

impl PresetTemplate {
    pub const fn new(name: &'static str, kind: PresetKind) -> Self {
        Self {
            name,
            kind,
            color: BLACK,
        }
    }

    #[must_use]
    pub const fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }
}

/// Built-in presets shipped with the firmware
pub const DEFAULT_PRESETS: [PresetTemplate; 11] = [
    PresetTemplate::new("Red", PresetKind::Static).with_color(RED),
    PresetTemplate::new("Blue", PresetKind::Static).with_color(BLUE),
    PresetTemplate::new("White", PresetKind::Static).with_color(WHITE),
    PresetTemplate::new("Rainbow", PresetKind::Rainbow),
    PresetTemplate::new("Police NL", PresetKind::PoliceNl),
    PresetTemplate::new("Police USA", PresetKind::PoliceUsa),
    PresetTemplate::new("Strobe", PresetKind::Strobe),
    PresetTemplate::new("Lava lamp", PresetKind::Lavalamp),
    PresetTemplate::new("Fire", PresetKind::Fire),
    PresetTemplate::new("Candle", PresetKind::Candle),
    PresetTemplate::new("Party", PresetKind::Party),
];

/// One lighting configuration
///
/// `color` is only meaningful for `Static`, `leds` only for `Custom`.
/// `leds` is either empty or exactly `N` long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset<const N: usize> {
    name: PresetName,
    kind: PresetKind,
    color: Rgb,
    leds: Vec<Rgb, N>,
}

impl<const N: usize> Preset<N> {
    /// Create a single color preset
    pub fn new_static(name: &str, color: Rgb) -> Result<Self, PresetError> {
        Ok(Self {
            name: validate_name(name)?,
            kind: PresetKind::Static,
            color,
            leds: Vec::new(),
        })
    }

    /// Create a per-LED preset, padding missing trailing LEDs with black
    pub fn new_custom(name: &str, leds: &[Rgb]) -> Result<Self, PresetError> {
        let mut preset = Self {
            name: validate_name(name)?,
            kind: PresetKind::Custom,
            color: BLACK,
            leds: Vec::new(),
        };
        preset.replace_leds(leds)?;
        Ok(preset)
    }

    /// Create a preset of any kind without LED payload
    pub fn with_kind(name: &str, kind: PresetKind, color: Rgb) -> Result<Self, PresetError> {
        Ok(Self {
            name: validate_name(name)?,
            kind,
            color,
            leds: Vec::new(),
        })
    }

    pub(crate) fn from_template(template: &PresetTemplate) -> Result<Self, PresetError> {
        Self::with_kind(template.name, template.kind, template.color)
    }

    pub(crate) fn sentinel() -> Self {
        let mut name = PresetName::new();
        let _ = name.push_str(SENTINEL_NAME);
        Self {
            name,
            kind: PresetKind::Static,
            color: BLACK,
            leds: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn kind(&self) -> PresetKind {
        self.kind
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Per-LED colors; empty unless the preset has been customized
    pub fn leds(&self) -> &[Rgb] {
        &self.leds
    }

    pub(crate) fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Switch to `Custom` and replace the LED array.
    ///
    /// Nothing changes if `colors` is longer than the strip.
    pub(crate) fn replace_leds(&mut self, colors: &[Rgb]) -> Result<(), PresetError> {
        if colors.len() > N {
            return Err(PresetError::TooManyLeds);
        }
        self.leds.clear();
        for i in 0..N {
            let color = colors.get(i).copied().unwrap_or(BLACK);
            // Capacity is N, so this never fails
            let _ = self.leds.push(color);
        }
        self.kind = PresetKind::Custom;
        Ok(())
    }
}

/// Check that a name fits the buffer and cannot break the line format
pub(crate) fn validate_name(name: &str) -> Result<PresetName, PresetError> {
    if name.is_empty() || name.contains([',', ';', '\r', '\n']) {
        return Err(PresetError::InvalidName);
    }
    let mut out = PresetName::new();
    out.push_str(name).map_err(|()| PresetError::InvalidName)?;
    Ok(out)
}
