//! Dot indicator: one dot per resting position.

use egui::{vec2, CursorIcon, Sense, Stroke, Ui};

use crate::{sizing, theme};

/// A row of page dots.
pub struct DotIndicator {
    page_count: usize,
    current: usize,
}

impl DotIndicator {
    /// Create an indicator for `page_count` pages with `current` highlighted.
    pub fn new(page_count: usize, current: usize) -> Self {
        Self {
            page_count,
            current,
        }
    }

    /// Show the dots. Returns the page that was clicked, if any.
    pub fn show(self, ui: &mut Ui) -> Option<usize> {
        if self.page_count < 2 {
            return None;
        }

        let mut clicked = None;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = sizing::DOT_SPACING;
            for page in 0..self.page_count {
                // Hit area is larger than the dot itself
                let hit = vec2(sizing::DOT + 4.0, sizing::DOT + 4.0);
                let (rect, response) = ui.allocate_exact_size(hit, Sense::click());

                if ui.is_rect_visible(rect) {
                    let radius = sizing::DOT / 2.0;
                    if page == self.current {
                        ui.painter().circle_filled(rect.center(), radius, theme::ACCENT);
                    } else {
                        let fill = if response.hovered() {
                            theme::HOVER_BG
                        } else {
                            theme::MUTED
                        };
                        ui.painter().circle(
                            rect.center(),
                            radius,
                            fill,
                            Stroke::new(1.0, theme::BORDER),
                        );
                    }
                }

                if response.clicked() && page != self.current {
                    clicked = Some(page);
                }
                response
                    .on_hover_text(format!("Slide {}", page + 1))
                    .on_hover_cursor(CursorIcon::PointingHand);
            }
        });
        clicked
    }
}
