//! Snap target selection at gesture release.

/// Which rule chose the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapRule {
    /// The track was pulled far enough that the drag alone decides.
    LargeDrag,
    /// The finger travelled past the swipe threshold.
    Swipe,
    /// Neither rule fired; the carousel stays put.
    Stay,
}

/// Direction of a one-slide move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapDirection {
    /// Toward higher indices.
    Forward,
    /// Toward lower indices.
    Backward,
}

impl SnapDirection {
    fn step(self, current_index: usize, max_index: usize) -> usize {
        match self {
            SnapDirection::Forward => (current_index + 1).min(max_index),
            SnapDirection::Backward => current_index.saturating_sub(1),
        }
    }
}

/// Everything known about a gesture at the moment it ends.
#[derive(Debug, Clone, Copy)]
pub struct SnapInput {
    /// `start_x - last_x` in pixels; positive means toward the next slide.
    pub total_distance: f64,
    /// Final absolute track offset in percent.
    pub drag_offset: f64,
    pub current_index: usize,
    pub max_index: usize,
    /// Swipe threshold in pixels.
    pub min_swipe_distance: f64,
    /// Width of one slide in percent of the viewport.
    pub unit_width_percent: f64,
    /// Fraction of one slide width above which the drag alone decides.
    pub large_drag_fraction: f64,
}

/// Result of a snap decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapDecision {
    /// Index to commit.
    pub target_index: usize,
    /// Rule that produced the target.
    pub rule: SnapRule,
}

impl SnapInput {
    /// How far the track sits from its resting position, in slide widths.
    ///
    /// Negative when pulled toward the next slide.
    pub fn drag_fraction(&self) -> f64 {
        if self.unit_width_percent <= 0.0 || !self.unit_width_percent.is_finite() {
            return 0.0;
        }
        let resting = -(self.current_index as f64 * self.unit_width_percent);
        (self.drag_offset - resting) / self.unit_width_percent
    }
}

/// Choose the index to settle on.
///
/// A large drag wins first; otherwise a release past the swipe threshold
/// moves one slide; otherwise the index stays. Never moves more than one
/// slide and never wraps.
pub fn decide(input: &SnapInput) -> SnapDecision {
    let current = input.current_index.min(input.max_index);
    let fraction = input.drag_fraction();

    if fraction.abs() > input.large_drag_fraction {
        let direction = if fraction < 0.0 {
            SnapDirection::Forward
        } else {
            SnapDirection::Backward
        };
        return SnapDecision {
            target_index: direction.step(current, input.max_index),
            rule: SnapRule::LargeDrag,
        };
    }

    let direction = if input.total_distance > input.min_swipe_distance {
        Some(SnapDirection::Forward)
    } else if input.total_distance < -input.min_swipe_distance {
        Some(SnapDirection::Backward)
    } else {
        None
    };

    match direction {
        Some(direction) => SnapDecision {
            target_index: direction.step(current, input.max_index),
            rule: SnapRule::Swipe,
        },
        None => SnapDecision {
            target_index: current,
            rule: SnapRule::Stay,
        },
    }
}
