//! SlideKit Core Library
//!
//! Platform-agnostic carousel engine: finger tracking with elastic edges,
//! snap decisions, sensitivity-aware swipe thresholds and an auto-rotation
//! timer that yields to manual interaction.

pub mod autorotate;
pub mod carousel;
pub mod clock;
pub mod config;
pub mod input;
pub mod notifier;
pub mod position;
pub mod sensitivity;
pub mod snap;
pub mod storage;

pub use autorotate::{AutoRotationScheduler, RotationState, TickHandle};
pub use carousel::{Carousel, Transition};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{CarouselConfig, ConfigError};
pub use input::{GestureSample, GestureState, GestureTracker, PointerEvent};
pub use notifier::IndexChangeNotifier;
pub use position::SlidePositionModel;
pub use sensitivity::{SensitivityConfig, DEFAULT_SENSITIVITY};
pub use snap::{SnapDecision, SnapInput, SnapRule};
pub use storage::{MemoryPreferences, PreferenceStore, StorageError, SENSITIVITY_PREFERENCE_KEY};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FilePreferences;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStoragePreferences;
