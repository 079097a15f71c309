//! Settings panel: the only writer of the persisted sensitivity preference.

use std::sync::Arc;

use egui::Ui;
use slidekit_core::sensitivity::{parse_sensitivity, DEFAULT_SENSITIVITY};
use slidekit_core::{PreferenceStore, SENSITIVITY_PREFERENCE_KEY};

/// Range offered to users. The engine accepts more through overrides.
const UI_SENSITIVITY_RANGE: std::ops::RangeInclusive<i32> = 1..=100;

/// Sensitivity slider and auto-rotate toggle.
pub struct SettingsPanel {
    preferences: Arc<dyn PreferenceStore>,
    sensitivity: i32,
    auto_rotate: bool,
}

impl SettingsPanel {
    /// Create the panel, reading the stored sensitivity once.
    pub fn new(preferences: Arc<dyn PreferenceStore>, auto_rotate: bool) -> Self {
        let sensitivity = preferences
            .get(SENSITIVITY_PREFERENCE_KEY)
            .ok()
            .flatten()
            .and_then(|raw| parse_sensitivity(&raw))
            .unwrap_or(DEFAULT_SENSITIVITY)
            .clamp(*UI_SENSITIVITY_RANGE.start(), *UI_SENSITIVITY_RANGE.end());
        Self {
            preferences,
            sensitivity,
            auto_rotate,
        }
    }

    pub fn sensitivity(&self) -> i32 {
        self.sensitivity
    }

    /// Store a new sensitivity. Failures are logged; the slider keeps the value.
    pub fn set_sensitivity(&mut self, sensitivity: i32) {
        self.sensitivity = sensitivity;
        if let Err(e) = self
            .preferences
            .set(SENSITIVITY_PREFERENCE_KEY, &sensitivity.to_string())
        {
            log::warn!("Failed to save sensitivity: {}", e);
        }
    }

    /// Show the panel. Returns the new auto-rotate state when toggled.
    pub fn show(&mut self, ui: &mut Ui) -> Option<bool> {
        ui.heading("Settings");
        ui.add_space(8.0);

        let mut sensitivity = self.sensitivity;
        let response = ui.add(egui::Slider::new(&mut sensitivity, UI_SENSITIVITY_RANGE).text("Swipe sensitivity"));
        if response.changed() {
            self.set_sensitivity(sensitivity);
        }
        if ui.small_button("Reset").clicked() {
            self.set_sensitivity(DEFAULT_SENSITIVITY);
        }

        ui.add_space(8.0);
        let mut toggled = None;
        if ui.checkbox(&mut self.auto_rotate, "Auto-rotate banners").changed() {
            toggled = Some(self.auto_rotate);
        }
        toggled
    }
}
