//! In-memory settings store for one editing session
//!
//! The store owns the single [`PrintSettings`] record and the user's saved
//! presets. Every write goes through [`SettingsStore::update`], which
//! validates the whole partial update before touching the record.

use crate::settings::{PrintSettings, SettingsUpdate};
use crate::types::*;
use log::debug;

/// Identifier of a saved preset, unique within one store
pub type PresetId = u64;

/// A named partial update that can be re-applied later
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub id: PresetId,
    pub name: String,
    pub settings: SettingsUpdate,
}

#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    settings: PrintSettings,
    /// Newest first
    presets: Vec<Preset>,
    next_preset_id: PresetId,
}

impl SettingsStore {
    /// Start a session with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from an explicit record.
    ///
    /// The record goes through the same checks as [`SettingsStore::update`].
    pub fn with_settings(settings: PrintSettings) -> Result<Self> {
        Ok(Self {
            settings: settings.normalized()?,
            ..Self::default()
        })
    }

    /// Current snapshot of the settings
    pub fn settings(&self) -> &PrintSettings {
        &self.settings
    }

    /// Merge the named fields of `update` into the current settings.
    ///
    /// The update is validated as a whole first; on error nothing is changed.
    pub fn update(&mut self, update: SettingsUpdate) -> Result<&PrintSettings> {
        let update = update.normalized()?;
        debug!("Applying settings update: {:?}", update);
        update.apply_to(&mut self.settings);
        Ok(&self.settings)
    }

    /// Restore the session defaults. Saved presets are kept.
    pub fn reset(&mut self) {
        debug!("Resetting settings to defaults");
        self.settings = PrintSettings::default();
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Save a named preset and return its id
    pub fn add_preset(
        &mut self,
        name: impl Into<String>,
        settings: SettingsUpdate,
    ) -> Result<PresetId> {
        let settings = settings.normalized()?;
        let id = self.next_preset_id;
        self.next_preset_id += 1;

        let preset = Preset {
            id,
            name: name.into(),
            settings,
        };
        debug!("Saved preset {} ({:?})", preset.id, preset.name);
        self.presets.insert(0, preset);
        Ok(id)
    }

    /// Remove a preset. Returns whether it existed.
    pub fn remove_preset(&mut self, id: PresetId) -> bool {
        let before = self.presets.len();
        self.presets.retain(|preset| preset.id != id);
        self.presets.len() != before
    }

    /// Apply a saved preset on top of the current settings
    pub fn load_preset(&mut self, id: PresetId) -> Result<&PrintSettings> {
        let update = self
            .presets
            .iter()
            .find(|preset| preset.id == id)
            .map(|preset| preset.settings.clone())
            .ok_or(SettingsError::UnknownPreset(id))?;
        self.update(update)
    }
}
