//! The carousel engine.
//!
//! Ties gesture tracking, snap decisions, the position model and the
//! auto-rotation timer together behind the entry points a view layer calls.
//! All state changes go through [`SlidePositionModel::commit`], so the index
//! stays in range and listeners see every change exactly once.

use crate::autorotate::{AutoRotationScheduler, TickHandle};
use crate::clock::{Clock, Duration, SystemClock};
use crate::config::CarouselConfig;
use crate::input::{GestureTracker, PointerEvent};
use crate::position::SlidePositionModel;
use crate::sensitivity::SensitivityConfig;
use crate::snap::{self, SnapDecision, SnapInput};
use crate::storage::PreferenceStore;
use std::sync::Arc;

/// How the view should move to the render offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Jump immediately (the track is following a finger).
    None,
    /// Animate to the new offset.
    Smooth,
}

/// A touch-driven carousel over a fixed collection of slides.
pub struct Carousel<T> {
    slides: Vec<T>,
    config: CarouselConfig,
    position: SlidePositionModel,
    tracker: GestureTracker,
    scheduler: AutoRotationScheduler,
    clock: Box<dyn Clock>,
    preferences: Option<Arc<dyn PreferenceStore>>,
    /// Threshold resolved when the current gesture started.
    min_swipe_distance: f64,
    destroyed: bool,
}

impl<T> std::fmt::Debug for Carousel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("len", &self.slides.len())
            .field("config", &self.config)
            .field("position", &self.position)
            .field("tracker", &self.tracker)
            .field("scheduler", &self.scheduler)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}

impl<T> Carousel<T> {
    /// Create a carousel at index 0. Starts rotating if configured and eligible.
    pub fn new(slides: Vec<T>, config: CarouselConfig) -> Self {
        let position = SlidePositionModel::new(
            config.max_index(slides.len()),
            config.unit_width_percent(),
        );
        let scheduler = AutoRotationScheduler::new(config.rotation_interval());
        let mut carousel = Self {
            slides,
            min_swipe_distance: config.base_swipe_distance,
            config,
            position,
            tracker: GestureTracker::new(),
            scheduler,
            clock: Box::new(SystemClock),
            preferences: None,
            destroyed: false,
        };
        carousel.sync_rotation(false);
        carousel
    }

    /// Replace the time source. A running timer restarts on the new clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self.sync_rotation(true);
        self
    }

    /// Read the persisted sensitivity preference from `preferences`.
    pub fn with_preferences(mut self, preferences: Arc<dyn PreferenceStore>) -> Self {
        self.preferences = Some(preferences);
        self
    }

    /// Register a listener for index changes.
    pub fn on_slide_change(&mut self, listener: impl FnMut(usize) + 'static) {
        if !self.destroyed {
            self.position.notifier_mut().subscribe(listener);
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn slides(&self) -> &[T] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// First slide in view.
    pub fn current_slide(&self) -> Option<&T> {
        self.slides.get(self.position.current_index())
    }

    /// Slides in view at the committed index.
    pub fn visible_slides(&self) -> &[T] {
        let start = self.position.current_index().min(self.slides.len());
        let end = (start + self.config.visible_count()).min(self.slides.len());
        &self.slides[start..end]
    }

    pub fn current_index(&self) -> usize {
        self.position.current_index()
    }

    pub fn max_index(&self) -> usize {
        self.position.max_index()
    }

    /// Number of distinct resting positions (one dot each).
    pub fn page_count(&self) -> usize {
        if self.slides.is_empty() {
            0
        } else {
            self.position.max_index() + 1
        }
    }

    pub fn drag_offset(&self) -> f64 {
        self.position.drag_offset()
    }

    pub fn is_dragging(&self) -> bool {
        self.position.is_dragging()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Whether rotation is enabled, possible, and not held by a gesture.
    pub fn is_auto_rotating(&self) -> bool {
        self.rotation_eligible()
    }

    /// Offset of the track in percent of the viewport width.
    pub fn render_offset_percent(&self) -> f64 {
        self.position.render_offset_percent()
    }

    /// How the view should reach [`render_offset_percent`](Self::render_offset_percent).
    pub fn transition(&self) -> Transition {
        if self.position.is_dragging() {
            Transition::None
        } else {
            Transition::Smooth
        }
    }

    /// Swipe threshold for the active gesture, or what the next one would use.
    pub fn min_swipe_distance(&self) -> f64 {
        if self.tracker.is_dragging() {
            self.min_swipe_distance
        } else {
            self.resolve_min_swipe_distance()
        }
    }

    /// Jump to `index`, clamped to the valid range.
    ///
    /// Cancels an in-progress gesture. Returns whether the index changed.
    pub fn go_to_slide(&mut self, index: isize) -> bool {
        if self.destroyed {
            return false;
        }
        if self.tracker.cancel(&mut self.position) {
            log::debug!("Gesture cancelled by go_to_slide({})", index);
        }
        let changed = self.position.commit(index);
        // A manual move earns a full interval before the next automatic one.
        self.sync_rotation(changed);
        changed
    }

    /// Move one slide forward without wrapping.
    pub fn next(&mut self) -> bool {
        self.go_to_slide(self.position.current_index() as isize + 1)
    }

    /// Move one slide backward without wrapping.
    pub fn previous(&mut self) -> bool {
        self.go_to_slide(self.position.current_index() as isize - 1)
    }

    /// Swap the whole collection.
    ///
    /// Cancels any gesture and pending tick and returns to index 0.
    pub fn set_slides(&mut self, slides: Vec<T>) {
        if self.destroyed {
            return;
        }
        self.tracker.cancel(&mut self.position);
        self.slides = slides;
        self.position.reset_bounds(
            self.config.max_index(self.slides.len()),
            self.config.unit_width_percent(),
        );
        self.scheduler.stop();
        self.sync_rotation(true);
    }

    /// Turn auto-rotation on or off.
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        if self.destroyed {
            return;
        }
        self.config.auto_rotate = enabled;
        self.sync_rotation(false);
    }

    /// Change the rotation interval; a running timer restarts.
    pub fn set_rotation_interval_ms(&mut self, ms: u64) {
        if self.destroyed {
            return;
        }
        self.config.rotation_interval_ms = ms;
        let now = self.clock.now();
        self.scheduler.set_interval(self.config.rotation_interval(), now);
    }

    /// Set or clear the per-instance sensitivity. Applies from the next gesture.
    pub fn set_sensitivity_override(&mut self, sensitivity: Option<i32>) {
        self.config.sensitivity_override = sensitivity;
    }

    /// Route a pointer event to the matching gesture entry point.
    ///
    /// Returns whether the event was consumed.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down {
                position,
                container_width,
            } => self.on_gesture_start(position.x, container_width),
            PointerEvent::Move { position } => self.on_gesture_move(position.x).is_some(),
            PointerEvent::Up { position } => {
                if self.on_gesture_move(position.x).is_none() {
                    return false;
                }
                self.on_gesture_end().is_some()
            }
            PointerEvent::Cancel => self.on_gesture_cancel(),
        }
    }

    /// Pointer went down at `x` over a viewport `container_width` pixels wide.
    ///
    /// Ignored with fewer than two slides. Suspends auto-rotation.
    pub fn on_gesture_start(&mut self, x: f64, container_width: f64) -> bool {
        if self.destroyed || self.slides.len() <= 1 || !x.is_finite() {
            return false;
        }
        if !self.tracker.start(x, container_width, &mut self.position) {
            return false;
        }
        self.scheduler.stop();
        self.min_swipe_distance = self.resolve_min_swipe_distance();
        log::debug!(
            "Gesture start at x={} (index {}, threshold {}px)",
            x,
            self.position.current_index(),
            self.min_swipe_distance
        );
        true
    }

    /// Pointer moved to `x`. Returns the new drag offset while dragging.
    pub fn on_gesture_move(&mut self, x: f64) -> Option<f64> {
        if self.destroyed {
            return None;
        }
        self.tracker
            .move_to(x, &mut self.position, self.config.elastic_overflow())
    }

    /// Pointer released: pick a target, commit it and resume rotation.
    pub fn on_gesture_end(&mut self) -> Option<SnapDecision> {
        if self.destroyed {
            return None;
        }
        let end = self.tracker.end(&self.position)?;
        let decision = snap::decide(&SnapInput {
            total_distance: end.total_distance,
            drag_offset: end.drag_offset,
            current_index: self.position.current_index(),
            max_index: self.position.max_index(),
            min_swipe_distance: self.min_swipe_distance,
            unit_width_percent: self.position.unit_width_percent(),
            large_drag_fraction: self.config.large_drag_fraction(),
        });
        log::debug!(
            "Gesture end: distance={}px offset={:.2}% -> {:?}",
            end.total_distance,
            end.drag_offset,
            decision
        );
        self.position.commit(decision.target_index as isize);
        self.sync_rotation(true);
        Some(decision)
    }

    /// The platform cancelled the pointer: spring back and resume rotation.
    pub fn on_gesture_cancel(&mut self) -> bool {
        if self.destroyed || !self.tracker.cancel(&mut self.position) {
            return false;
        }
        log::debug!("Gesture cancelled");
        self.sync_rotation(true);
        true
    }

    /// Advance if a rotation tick is due. Call from the host's frame or timer loop.
    pub fn tick(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        let now = self.clock.now();
        if !self.scheduler.poll(now) {
            return false;
        }
        self.advance();
        true
    }

    /// The next scheduled rotation tick, for hosts that arm a real timer.
    pub fn next_tick(&self) -> Option<TickHandle> {
        self.scheduler.next_tick()
    }

    /// Time left until the next rotation tick, measured on the carousel's clock.
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.scheduler
            .next_tick()
            .map(|handle| handle.deadline.saturating_duration_since(self.clock.now()))
    }

    /// Fire a tick obtained from [`next_tick`](Self::next_tick).
    ///
    /// Ticks from a schedule that was since cancelled, or that already
    /// fired, do nothing.
    pub fn fire(&mut self, handle: TickHandle) -> bool {
        if self.destroyed {
            return false;
        }
        let now = self.clock.now();
        if !self.scheduler.fire(handle, now) {
            return false;
        }
        self.advance();
        true
    }

    /// Tear down: cancel the timer and any gesture, drop listeners.
    ///
    /// Every entry point is a no-op afterwards.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.scheduler.stop();
        self.tracker.cancel(&mut self.position);
        self.position.notifier_mut().clear();
        self.destroyed = true;
        log::debug!("Carousel destroyed");
    }

    fn advance(&mut self) {
        let current = self.position.current_index();
        let next = if current >= self.position.max_index() {
            0
        } else {
            current + 1
        };
        log::trace!("Auto-rotation tick: {} -> {}", current, next);
        self.position.commit(next as isize);
    }

    fn rotation_eligible(&self) -> bool {
        self.config.auto_rotate
            && self.position.max_index() > 0
            && !self.position.is_dragging()
            && !self.destroyed
    }

    /// Bring the timer in line with the current state.
    ///
    /// With `restart`, an eligible timer starts a fresh interval from now.
    fn sync_rotation(&mut self, restart: bool) {
        if !self.rotation_eligible() {
            self.scheduler.stop();
            return;
        }
        let now = self.clock.now();
        if restart {
            self.scheduler.restart(now);
        } else {
            self.scheduler.start(now);
        }
    }

    fn resolve_min_swipe_distance(&self) -> f64 {
        SensitivityConfig::new(self.config.base_swipe_distance)
            .with_preferences(self.preferences.as_deref())
            .resolve_min_swipe_distance(self.config.sensitivity_override)
    }
}
