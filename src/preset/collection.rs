use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{
    MAX_PRESETS, MAX_STRIP_LEN, Preset, PresetError, PresetLine, PresetTemplate,
    parse_preset_line, write_preset_line,
};
use crate::color::Rgb;

/// Ordered preset arena
///
/// Layout is `[defaults..][custom..][sentinel]`:
/// - the default prefix is fixed at construction and never reordered,
/// - custom presets are only ever inserted right before the sentinel,
/// - the sentinel ("Off", static black) is always the last element,
///   so the collection is never empty.
///
/// Indices are stable until the next insertion; insertions only shift the
/// sentinel.
///
/// `N` is limited to [`MAX_STRIP_LEN`] LEDs so a custom preset still fits
/// one persisted line. Larger strips fail to compile.
#[derive(Debug, Clone)]
pub struct PresetCollection<const N: usize> {
    presets: Vec<Preset<N>, MAX_PRESETS>,
    defaults: usize,
    current: usize,
}

impl<const N: usize> PresetCollection<N> {
    const LINE_FITS: () = assert!(
        N <= MAX_STRIP_LEN,
        "LED count exceeds MAX_STRIP_LEN, custom presets would not fit a persisted line"
    );

    /// Build the collection from built-in defaults and append the sentinel
    pub fn new(defaults: &[PresetTemplate]) -> Result<Self, PresetError> {
        let () = Self::LINE_FITS;

        if defaults.len() + 1 > MAX_PRESETS {
            return Err(PresetError::CapacityExceeded);
        }

        let mut presets = Vec::new();
        for template in defaults {
            presets
                .push(Preset::from_template(template)?)
                .map_err(|_| PresetError::CapacityExceeded)?;
        }
        presets
            .push(Preset::sentinel())
            .map_err(|_| PresetError::CapacityExceeded)?;

        Ok(Self {
            presets,
            defaults: defaults.len(),
            current: 0,
        })
    }

    /// Number of presets, sentinel included. Always at least one.
    pub fn count(&self) -> usize {
        self.presets.len()
    }

    /// Length of the built-in prefix
    pub const fn default_count(&self) -> usize {
        self.defaults
    }

    /// Number of user-defined presets
    pub fn custom_count(&self) -> usize {
        self.sentinel_index() - self.defaults
    }

    pub fn sentinel_index(&self) -> usize {
        self.presets.len() - 1
    }

    pub const fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Preset<N> {
        &self.presets[self.current]
    }

    pub fn get(&self, index: usize) -> Option<&Preset<N>> {
        self.presets.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset<N>> {
        self.presets.iter()
    }

    /// Whether `index` addresses a user-defined preset
    pub fn is_custom(&self, index: usize) -> bool {
        (self.defaults..self.sentinel_index()).contains(&index)
    }

    /// User-defined presets, in order, without defaults and sentinel
    pub fn custom(&self) -> &[Preset<N>] {
        &self.presets[self.defaults..self.sentinel_index()]
    }

    /// Make `index` the current preset
    pub fn select(&mut self, index: usize) -> Result<(), PresetError> {
        if index >= self.presets.len() {
            return Err(PresetError::IndexOutOfRange(index));
        }
        self.current = index;
        Ok(())
    }

    /// Advance to the next preset, wrapping after the sentinel
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.presets.len();
    }

    /// Step back to the previous preset, wrapping before the first default
    pub fn previous(&mut self) {
        let len = self.presets.len();
        self.current = (self.current + len - 1) % len;
    }

    /// Set the single color of the current preset.
    ///
    /// Custom presets keep their LED array untouched.
    pub fn set_current_color(&mut self, color: Rgb) -> Result<(), PresetError> {
        self.current_mut()?.set_color(color);
        Ok(())
    }

    /// Turn the current preset into a `Custom` one with the given LEDs.
    ///
    /// The remainder of the strip is filled with black. Either every LED is
    /// replaced or nothing changes.
    pub fn set_current_leds(&mut self, colors: &[Rgb]) -> Result<(), PresetError> {
        if colors.len() > N {
            return Err(PresetError::TooManyLeds);
        }
        self.current_mut()?.replace_leds(colors)
    }

    /// Insert a static preset before the sentinel and select it
    pub fn add_static(&mut self, name: &str, color: Rgb) -> Result<usize, PresetError> {
        let preset = Preset::new_static(name, color)?;
        let index = self.insert(preset)?;
        self.current = index;
        Ok(index)
    }

    /// Insert a preset right before the sentinel without changing selection
    pub fn insert(&mut self, preset: Preset<N>) -> Result<usize, PresetError> {
        let index = self.sentinel_index();
        self.presets
            .insert(index, preset)
            .map_err(|_| PresetError::CapacityExceeded)?;
        Ok(index)
    }

    /// Restore persisted custom presets.
    ///
    /// Malformed lines are skipped. Returns the number of presets restored.
    pub fn load_custom<'a, I>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut loaded = 0;
        for line in lines {
            match parse_preset_line::<N>(line).and_then(|preset| self.insert(preset)) {
                Ok(_) => loaded += 1,
                Err(_err) => {
                    #[cfg(feature = "esp32-log")]
                    println!("[PresetCollection.load_custom] skipping line: {}", _err);
                }
            }
        }
        loaded
    }

    /// Serialize every custom preset, one line each
    pub fn serialize_custom(&self) -> impl Iterator<Item = PresetLine> + '_ {
        self.custom().iter().map(|preset| {
            let mut line = PresetLine::new();
            // LINE_FITS guarantees the buffer is large enough
            let _ = write_preset_line(preset, &mut line);
            line
        })
    }

    /// Re-clamp the current index after the collection shrank
    pub fn clamp_current(&mut self) {
        if self.current >= self.presets.len() {
            self.current = self.presets.len() - 1;
        }
    }

    fn current_mut(&mut self) -> Result<&mut Preset<N>, PresetError> {
        if self.current == self.sentinel_index() {
            return Err(PresetError::ReadOnly);
        }
        Ok(&mut self.presets[self.current])
    }
}
