//! Pointer/touch gesture tracking for horizontal swipes.

use crate::position::SlidePositionModel;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event type for unified mouse/touch handling.
///
/// Only the horizontal coordinate takes part in swipe tracking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        /// Width of the carousel viewport in pixels at press time.
        container_width: f64,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
    },
    /// The platform took the pointer away (touch cancel, focus loss).
    Cancel,
}

/// Pointer samples for the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub start_x: f64,
    pub last_x: f64,
    /// Viewport width in pixels, never zero.
    pub container_width: f64,
}

impl GestureSample {
    /// Start a sample at `x`.
    ///
    /// A zero, negative or non-finite width is stored as 1 so percentages
    /// stay finite.
    pub fn new(x: f64, container_width: f64) -> Self {
        let container_width = if container_width.is_finite() && container_width > 0.0 {
            container_width
        } else {
            1.0
        };
        Self {
            start_x: x,
            last_x: x,
            container_width,
        }
    }

    /// `start_x - last_x`; positive when dragging toward the next slide.
    pub fn total_distance(&self) -> f64 {
        self.start_x - self.last_x
    }

    /// Total distance as a percentage of the viewport width.
    pub fn percent_moved(&self) -> f64 {
        self.total_distance() / self.container_width * 100.0
    }
}

/// What the tracker is doing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(GestureSample),
}

/// Summary of a finished gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEnd {
    /// `start_x - last_x` in pixels.
    pub total_distance: f64,
    /// Final absolute track offset in percent.
    pub drag_offset: f64,
}

/// Turns pointer samples into a live track offset.
///
/// Idle -> Dragging on press, Dragging -> Idle on release or cancel.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    state: GestureState,
}

impl GestureTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging(_))
    }

    /// The current sample, if dragging.
    pub fn sample(&self) -> Option<&GestureSample> {
        match &self.state {
            GestureState::Dragging(sample) => Some(sample),
            GestureState::Idle => None,
        }
    }

    /// Begin a gesture at `x`. Returns false if one is already in progress.
    pub fn start(&mut self, x: f64, container_width: f64, position: &mut SlidePositionModel) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.state = GestureState::Dragging(GestureSample::new(x, container_width));
        position.begin_drag();
        true
    }

    /// Follow the pointer to `x`, applying elastic limits at both ends.
    ///
    /// A drag across the full container moves the track by one slide width,
    /// so multi-item views scroll one item per container-width of travel.
    ///
    /// Returns the new offset, or `None` when idle.
    pub fn move_to(
        &mut self,
        x: f64,
        position: &mut SlidePositionModel,
        elastic_overflow: f64,
    ) -> Option<f64> {
        let GestureState::Dragging(sample) = &mut self.state else {
            return None;
        };
        if !x.is_finite() {
            return Some(position.drag_offset());
        }
        sample.last_x = x;

        let raw = position.resting_offset() - sample.percent_moved() * position.unit_width_percent() / 100.0;
        let offset = elastic_clamp(
            raw,
            position.max_index(),
            position.unit_width_percent(),
            elastic_overflow,
        );
        log::trace!("Drag to x={} raw={:.2}% offset={:.2}%", x, raw, offset);
        position.set_drag_offset(offset);
        Some(offset)
    }

    /// Finish the gesture. The caller decides where to snap and commits.
    ///
    /// Returns `None` when idle.
    pub fn end(&mut self, position: &SlidePositionModel) -> Option<GestureEnd> {
        let GestureState::Dragging(sample) = std::mem::take(&mut self.state) else {
            return None;
        };
        Some(GestureEnd {
            total_distance: sample.total_distance(),
            drag_offset: position.drag_offset(),
        })
    }

    /// Abandon the gesture and spring back to the committed index.
    pub fn cancel(&mut self, position: &mut SlidePositionModel) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.state = GestureState::Idle;
        position.end_drag();
        true
    }
}

/// Limit a track offset to the rubber-band range.
///
/// The track may be pulled at most `elastic_overflow` percent past the
/// first slide and past the last reachable one.
pub fn elastic_clamp(raw: f64, max_index: usize, unit_width_percent: f64, elastic_overflow: f64) -> f64 {
    let upper = elastic_overflow;
    let lower = -(max_index as f64 * unit_width_percent + elastic_overflow);
    raw.clamp(lower, upper)
}
