//! egui widgets for the SlideKit carousel engine.
//!
//! - **CarouselView**: the draggable viewport that paints slides
//! - **DotIndicator**: one dot per resting position, click to jump
//! - **ArrowButton**: previous/next chevrons

pub mod arrows;
pub mod dots;
pub mod view;

pub use arrows::{ArrowButton, ArrowDirection};
pub use dots::DotIndicator;
pub use view::CarouselView;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Dot indicator diameter
    pub const DOT: f32 = 8.0;
    /// Gap between dots
    pub const DOT_SPACING: f32 = 6.0;
    /// Arrow button size
    pub const ARROW: f32 = 32.0;
    /// Seconds to settle on a slide after release
    pub const SETTLE_TIME: f32 = 0.3;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Muted foreground (inactive dots, disabled arrows)
    pub const MUTED: Color32 = Color32::from_rgb(190, 190, 190);
    /// Icon color
    pub const ICON: Color32 = Color32::from_rgb(80, 80, 80);
}
