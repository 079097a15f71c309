//! Slide position: the committed index and the transient drag offset.

use crate::notifier::IndexChangeNotifier;

/// Owns `current_index` and `drag_offset` for one carousel.
///
/// Invariants:
/// - `0 <= current_index <= max_index`
/// - `drag_offset == 0.0` whenever `is_dragging` is false
#[derive(Debug)]
pub struct SlidePositionModel {
    current_index: usize,
    max_index: usize,
    unit_width_percent: f64,
    /// Absolute track offset in percent while a drag is active.
    drag_offset: f64,
    is_dragging: bool,
    notifier: IndexChangeNotifier,
}

impl SlidePositionModel {
    /// Create a model resting at index 0.
    pub fn new(max_index: usize, unit_width_percent: f64) -> Self {
        Self {
            current_index: 0,
            max_index,
            unit_width_percent,
            drag_offset: 0.0,
            is_dragging: false,
            notifier: IndexChangeNotifier::new(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    pub fn unit_width_percent(&self) -> f64 {
        self.unit_width_percent
    }

    pub fn drag_offset(&self) -> f64 {
        self.drag_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Listeners for committed index changes.
    pub fn notifier_mut(&mut self) -> &mut IndexChangeNotifier {
        &mut self.notifier
    }

    /// Track offset of the committed index with no drag applied.
    pub fn resting_offset(&self) -> f64 {
        -(self.current_index as f64 * self.unit_width_percent)
    }

    /// Offset the view should render at.
    ///
    /// While dragging this follows the finger and should be shown without a
    /// transition; otherwise it is the resting offset and should animate.
    pub fn render_offset_percent(&self) -> f64 {
        if self.is_dragging {
            self.drag_offset
        } else {
            self.resting_offset()
        }
    }

    /// Enter the dragging state with the track at its resting offset.
    pub fn begin_drag(&mut self) {
        self.is_dragging = true;
        self.drag_offset = self.resting_offset();
    }

    /// Update the live drag offset. Ignored when not dragging.
    pub fn set_drag_offset(&mut self, offset: f64) {
        if self.is_dragging {
            self.drag_offset = offset;
        }
    }

    /// Leave the dragging state without changing the index.
    pub fn end_drag(&mut self) {
        self.is_dragging = false;
        self.drag_offset = 0.0;
    }

    /// Move to `target` (clamped to `[0, max_index]`) and clear any drag.
    ///
    /// Listeners fire only if the index actually changed. Returns whether it did.
    pub fn commit(&mut self, target: isize) -> bool {
        let target = clamp_index(target, self.max_index);
        self.end_drag();

        if target == self.current_index {
            return false;
        }

        log::debug!("Slide index {} -> {}", self.current_index, target);
        self.current_index = target;
        self.notifier.notify(target);
        true
    }

    /// Replace the bounds (new collection or layout) and return to index 0.
    ///
    /// Returns whether the index changed.
    pub fn reset_bounds(&mut self, max_index: usize, unit_width_percent: f64) -> bool {
        let previous = self.current_index;
        self.max_index = max_index;
        self.unit_width_percent = unit_width_percent;
        self.current_index = 0;
        self.end_drag();

        if previous == 0 {
            return false;
        }
        log::debug!("Slide index {} -> 0 (collection replaced)", previous);
        self.notifier.notify(0);
        true
    }
}

fn clamp_index(target: isize, max_index: usize) -> usize {
    if target <= 0 {
        0
    } else {
        (target as usize).min(max_index)
    }
}
