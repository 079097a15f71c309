//! Carousel configuration and per-type presets.

use crate::clock::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default auto-rotation interval in milliseconds.
pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = 5000;

/// Swipe distance for single-slide sliders at base sensitivity, in pixels.
pub const SLIDER_BASE_SWIPE_DISTANCE: f64 = 30.0;

/// Swipe distance for multi-item carousels at base sensitivity, in pixels.
pub const CATEGORY_BASE_SWIPE_DISTANCE: f64 = 50.0;

/// Rubber-band allowance past the first/last slide for sliders, in percent.
pub const SLIDER_ELASTIC_OVERFLOW: f64 = 10.0;

/// Rubber-band allowance past the first/last item for multi-item carousels, in percent.
pub const CATEGORY_ELASTIC_OVERFLOW: f64 = 5.0;

/// Fraction of one slide width a drag must cover to move regardless of swipe distance.
pub const DEFAULT_LARGE_DRAG_FRACTION: f64 = 0.25;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid carousel config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Options for one carousel instance.
///
/// Deserializing fills missing fields from the slider preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Items shown at once. Values below 1 are treated as 1.
    pub visible_count: usize,
    /// Whether the carousel advances on its own.
    pub auto_rotate: bool,
    /// Delay between automatic advances.
    pub rotation_interval_ms: u64,
    /// Per-instance sensitivity, taking priority over the stored preference.
    pub sensitivity_override: Option<i32>,
    /// Swipe distance in pixels at base sensitivity.
    pub base_swipe_distance: f64,
    /// How far the track may be pulled past either end, in percent.
    pub elastic_overflow: f64,
    /// Fraction of a slide width that always counts as a deliberate drag.
    pub large_drag_fraction: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::slider()
    }
}

impl CarouselConfig {
    /// One slide per view (hero banners, product galleries).
    pub fn slider() -> Self {
        Self {
            visible_count: 1,
            auto_rotate: false,
            rotation_interval_ms: DEFAULT_ROTATION_INTERVAL_MS,
            sensitivity_override: None,
            base_swipe_distance: SLIDER_BASE_SWIPE_DISTANCE,
            elastic_overflow: SLIDER_ELASTIC_OVERFLOW,
            large_drag_fraction: DEFAULT_LARGE_DRAG_FRACTION,
        }
    }

    /// Several items per view (category strips).
    pub fn category(visible_count: usize) -> Self {
        Self {
            visible_count: visible_count.max(1),
            base_swipe_distance: CATEGORY_BASE_SWIPE_DISTANCE,
            elastic_overflow: CATEGORY_ELASTIC_OVERFLOW,
            ..Self::slider()
        }
    }

    /// Enable or disable auto-rotation.
    pub fn with_auto_rotate(mut self, enabled: bool) -> Self {
        self.auto_rotate = enabled;
        self
    }

    /// Set the auto-rotation interval in milliseconds.
    pub fn with_rotation_interval_ms(mut self, ms: u64) -> Self {
        self.rotation_interval_ms = ms;
        self
    }

    /// Set a per-instance sensitivity override.
    pub fn with_sensitivity(mut self, sensitivity: i32) -> Self {
        self.sensitivity_override = Some(sensitivity);
        self
    }

    /// Set the shared large-drag fraction.
    pub fn with_large_drag_fraction(mut self, fraction: f64) -> Self {
        self.large_drag_fraction = fraction;
        self
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the config to JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Items per view, never zero.
    pub fn visible_count(&self) -> usize {
        self.visible_count.max(1)
    }

    /// Width of one item as a percentage of the track viewport.
    pub fn unit_width_percent(&self) -> f64 {
        100.0 / self.visible_count() as f64
    }

    /// Highest reachable index for a collection of `len` slides.
    pub fn max_index(&self, len: usize) -> usize {
        len.saturating_sub(self.visible_count())
    }

    /// Auto-rotation interval, never zero.
    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms.max(1))
    }

    /// Elastic overflow, never negative.
    pub fn elastic_overflow(&self) -> f64 {
        if self.elastic_overflow.is_finite() {
            self.elastic_overflow.max(0.0)
        } else {
            0.0
        }
    }

    /// Large-drag fraction limited to `(0, 1]`; anything else falls back to the default.
    pub fn large_drag_fraction(&self) -> f64 {
        let fraction = self.large_drag_fraction;
        if fraction.is_finite() && fraction > 0.0 && fraction <= 1.0 {
            fraction
        } else {
            DEFAULT_LARGE_DRAG_FRACTION
        }
    }
}
