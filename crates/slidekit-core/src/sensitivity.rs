//! Swipe sensitivity resolution.
//!
//! Sensitivity is inverse to the swipe threshold: doubling it roughly halves
//! the distance a finger has to travel before a release counts as a swipe.

use crate::storage::{PreferenceStore, SENSITIVITY_PREFERENCE_KEY};

/// Sensitivity used when nothing else is configured.
pub const DEFAULT_SENSITIVITY: i32 = 50;

/// Sensitivity at which the threshold equals the base distance.
pub const BASE_SENSITIVITY: i32 = 50;

/// Lowest accepted sensitivity.
pub const MIN_SENSITIVITY: i32 = 1;

/// Highest accepted sensitivity.
pub const MAX_SENSITIVITY: i32 = 1000;

/// The threshold never drops below this, in pixels.
pub const MIN_SWIPE_DISTANCE_FLOOR: f64 = 10.0;

/// Resolves the swipe threshold for one carousel.
#[derive(Clone, Copy)]
pub struct SensitivityConfig<'a> {
    /// Threshold at base sensitivity, in pixels.
    pub base_distance: f64,
    preferences: Option<&'a dyn PreferenceStore>,
}

impl std::fmt::Debug for SensitivityConfig<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensitivityConfig")
            .field("base_distance", &self.base_distance)
            .field("has_preferences", &self.preferences.is_some())
            .finish()
    }
}

impl<'a> SensitivityConfig<'a> {
    /// Create a config with no persisted preference.
    pub fn new(base_distance: f64) -> Self {
        Self {
            base_distance,
            preferences: None,
        }
    }

    /// Attach a preference store to fall back on.
    pub fn with_preferences(mut self, preferences: Option<&'a dyn PreferenceStore>) -> Self {
        self.preferences = preferences;
        self
    }

    /// Pick the active sensitivity: override, then stored preference, then default.
    pub fn resolve_sensitivity(&self, override_value: Option<i32>) -> i32 {
        let value = override_value
            .or_else(|| self.stored_sensitivity())
            .unwrap_or(DEFAULT_SENSITIVITY);
        value.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY)
    }

    /// Minimum swipe distance in pixels for the resolved sensitivity.
    pub fn resolve_min_swipe_distance(&self, override_value: Option<i32>) -> f64 {
        self.min_swipe_distance(self.resolve_sensitivity(override_value))
    }

    /// Minimum swipe distance in pixels for a given sensitivity.
    pub fn min_swipe_distance(&self, sensitivity: i32) -> f64 {
        let sensitivity = sensitivity.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY) as f64;
        let distance = (self.base_distance * (BASE_SENSITIVITY as f64 / sensitivity)).round();
        distance.max(MIN_SWIPE_DISTANCE_FLOOR)
    }

    fn stored_sensitivity(&self) -> Option<i32> {
        let store = self.preferences?;
        match store.get(SENSITIVITY_PREFERENCE_KEY) {
            Ok(Some(raw)) => {
                let parsed = parse_sensitivity(&raw);
                if parsed.is_none() {
                    log::warn!("Ignoring malformed sensitivity preference: {:?}", raw);
                }
                parsed
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("Failed to read sensitivity preference: {}", e);
                None
            }
        }
    }
}

/// Parse a stored sensitivity. Accepts integers and finite floats (rounded).
pub fn parse_sensitivity(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i32>() {
        return Some(value);
    }
    let value = raw.parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
}
