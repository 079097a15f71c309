//! Auto-rotation timer.
//!
//! Advances the carousel on a fixed interval. The timer is a single
//! deadline: stopping drops it, so a tick that was due can never fire after
//! a gesture starts. Each start bumps a generation so hosts that arm real
//! timers can recognise stale wake-ups.

use crate::clock::{Duration, Instant};

/// Handle to one scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    /// Schedule the tick belongs to.
    pub generation: u64,
    /// When the tick is due.
    pub deadline: Instant,
}

/// Scheduler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationState {
    Stopped,
    Running { deadline: Instant },
}

/// Two-state (Stopped/Running) interval scheduler.
#[derive(Debug, Clone)]
pub struct AutoRotationScheduler {
    interval: Duration,
    state: RotationState,
    generation: u64,
}

impl AutoRotationScheduler {
    /// Create a stopped scheduler.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            state: RotationState::Stopped,
            generation: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RotationState::Running { .. })
    }

    /// Generation of the current (or most recent) schedule.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Change the interval. A running schedule restarts from `now`.
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.interval = interval.max(Duration::from_millis(1));
        if self.is_running() {
            self.restart(now);
        }
    }

    /// Start ticking one interval from `now`. No-op if already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        self.generation += 1;
        self.state = RotationState::Running {
            deadline: now + self.interval,
        };
        log::trace!("Auto-rotation started (generation {})", self.generation);
        true
    }

    /// Cancel any pending tick.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = RotationState::Stopped;
        log::trace!("Auto-rotation stopped (generation {})", self.generation);
        true
    }

    /// Stop and start again, so the next tick is a full interval from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.stop();
        self.start(now);
    }

    /// The next scheduled tick, if running.
    pub fn next_tick(&self) -> Option<TickHandle> {
        match self.state {
            RotationState::Running { deadline } => Some(TickHandle {
                generation: self.generation,
                deadline,
            }),
            RotationState::Stopped => None,
        }
    }

    /// Consume the due tick, if any. At most one tick fires per call.
    pub fn poll(&mut self, now: Instant) -> bool {
        let RotationState::Running { deadline } = self.state else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let next = deadline + self.interval;
        // A host that stalled for several intervals realigns instead of bursting.
        let next = if next <= now { now + self.interval } else { next };
        self.state = RotationState::Running { deadline: next };
        true
    }

    /// Fire a tick previously handed out by [`next_tick`](Self::next_tick).
    ///
    /// Handles from a cancelled or replaced schedule, or for a tick that
    /// already fired, are ignored.
    pub fn fire(&mut self, handle: TickHandle, now: Instant) -> bool {
        if self.next_tick() != Some(handle) {
            log::trace!(
                "Ignoring stale tick (generation {}, current {})",
                handle.generation,
                self.generation
            );
            return false;
        }
        self.poll(now)
    }
}
