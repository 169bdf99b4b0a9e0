//! Momentary preset override
//!
//! While an external signal is held, a configured preset replaces the
//! current one. Releasing the signal restores whatever was selected before.

use crate::preset::PresetCollection;

#[derive(Debug, Clone)]
pub struct HoldOverride {
    /// Preset shown while held
    preset: usize,
    /// Selection captured on the activating edge
    saved: Option<usize>,
}

impl HoldOverride {
    pub const fn new(preset: usize) -> Self {
        Self {
            preset,
            saved: None,
        }
    }

    pub const fn preset(&self) -> usize {
        self.preset
    }

    pub fn set_preset(&mut self, preset: usize) {
        self.preset = preset;
    }

    pub const fn is_active(&self) -> bool {
        self.saved.is_some()
    }

    /// Selection that will be restored on release
    pub const fn saved(&self) -> Option<usize> {
        self.saved
    }

    /// Handle the activating edge.
    ///
    /// Only the first edge captures the current selection; repeated
    /// activations while held are ignored. Returns `true` when the held
    /// preset was selected.
    pub fn activate<const N: usize>(&mut self, presets: &mut PresetCollection<N>) -> bool {
        if self.saved.is_some() {
            return false;
        }
        self.saved = Some(presets.current_index());
        presets.select(self.preset).is_ok()
    }

    /// Handle the release edge. Returns `true` when a selection was restored.
    pub fn release<const N: usize>(&mut self, presets: &mut PresetCollection<N>) -> bool {
        let Some(saved) = self.saved.take() else {
            return false;
        };
        if presets.select(saved).is_err() {
            presets.clamp_current();
        }
        true
    }
}
