//! Previous/next arrow buttons.

use egui::{vec2, CursorIcon, Pos2, Sense, Stroke, Ui};

use crate::{sizing, theme};

/// Which way an arrow points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Previous,
    Next,
}

/// A round chevron button.
pub struct ArrowButton {
    direction: ArrowDirection,
    enabled: bool,
}

impl ArrowButton {
    /// Create an enabled arrow.
    pub fn new(direction: ArrowDirection) -> Self {
        Self {
            direction,
            enabled: true,
        }
    }

    /// Grey out the arrow (at the first or last slide).
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Show the button and return true if clicked while enabled.
    pub fn show(self, ui: &mut Ui) -> bool {
        let size = sizing::ARROW;
        let sense = if self.enabled { Sense::click() } else { Sense::hover() };
        let (rect, response) = ui.allocate_exact_size(vec2(size, size), sense);

        if ui.is_rect_visible(rect) {
            let hovered = self.enabled && response.hovered();
            let bg = if hovered { theme::HOVER_BG } else { egui::Color32::WHITE };
            let color = if self.enabled { theme::ICON } else { theme::MUTED };

            ui.painter().circle(
                rect.center(),
                size / 2.0,
                bg,
                Stroke::new(1.0, theme::BORDER),
            );

            let c = rect.center();
            let arm = size * 0.15;
            let (tip, back) = match self.direction {
                ArrowDirection::Previous => (c.x - arm / 2.0, c.x + arm / 2.0),
                ArrowDirection::Next => (c.x + arm / 2.0, c.x - arm / 2.0),
            };
            let stroke = Stroke::new(2.0, color);
            ui.painter()
                .line_segment([Pos2::new(back, c.y - arm), Pos2::new(tip, c.y)], stroke);
            ui.painter()
                .line_segment([Pos2::new(tip, c.y), Pos2::new(back, c.y + arm)], stroke);
        }

        let clicked = self.enabled && response.clicked();
        if self.enabled {
            let tooltip = match self.direction {
                ArrowDirection::Previous => "Previous",
                ArrowDirection::Next => "Next",
            };
            response.on_hover_text(tooltip).on_hover_cursor(CursorIcon::PointingHand);
        }
        clicked
    }
}
