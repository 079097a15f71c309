//! Draggable carousel viewport.

use std::hash::Hash;

use egui::{
    pos2, vec2, Align, CursorIcon, Id, Layout, Rect, Response, Sense, Ui, UiBuilder,
};
use slidekit_core::{Carousel, Transition};

use crate::arrows::{ArrowButton, ArrowDirection};
use crate::dots::DotIndicator;
use crate::sizing;

/// Paints a [`Carousel`] and feeds it egui pointer input.
pub struct CarouselView {
    id: Id,
    height: f32,
    settle_time: f32,
}

impl CarouselView {
    /// Create a view. `id_salt` must be unique among carousels in the same `Ui`.
    pub fn new(id_salt: impl Hash) -> Self {
        Self {
            id: Id::new(id_salt),
            height: 160.0,
            settle_time: sizing::SETTLE_TIME,
        }
    }

    /// Set the viewport height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Seconds the track takes to settle after release or navigation.
    pub fn settle_time(mut self, seconds: f32) -> Self {
        self.settle_time = seconds.max(0.0);
        self
    }

    /// Show the viewport only. `add_slide` draws one slide into its cell.
    pub fn show<T>(
        self,
        ui: &mut Ui,
        carousel: &mut Carousel<T>,
        mut add_slide: impl FnMut(&mut Ui, &T, usize),
    ) -> Response {
        let width = ui.available_width().max(1.0);
        let (rect, response) = ui.allocate_exact_size(vec2(width, self.height), Sense::drag());

        self.route_pointer(ui, &response, rect, carousel);
        self.drive_rotation(ui, carousel);

        let target = carousel.render_offset_percent() as f32;
        let anim_id = ui.id().with(self.id).with("offset");
        let offset_percent = match carousel.transition() {
            Transition::None => {
                // Keep the animation state in sync so release animates from the finger.
                ui.ctx().animate_value_with_time(anim_id, target, 0.0);
                target
            }
            Transition::Smooth => ui.ctx().animate_value_with_time(anim_id, target, self.settle_time),
        };

        if ui.is_rect_visible(rect) {
            let visible = carousel.config().visible_count() as f32;
            let unit_px = rect.width() / visible;
            let offset_px = offset_percent / 100.0 * rect.width();

            for (index, slide) in carousel.slides().iter().enumerate() {
                let left = rect.left() + offset_px + index as f32 * unit_px;
                let cell = Rect::from_min_size(pos2(left, rect.top()), vec2(unit_px, rect.height()));
                // Cells that only touch the viewport edge are skipped.
                let overlap = cell.right().min(rect.right()) - cell.left().max(rect.left());
                if overlap < 0.5 {
                    continue;
                }

                let mut child = ui.new_child(
                    UiBuilder::new()
                        .id_salt(self.id.with(index))
                        .max_rect(cell)
                        .layout(Layout::top_down(Align::Center)),
                );
                child.set_clip_rect(cell.intersect(rect).intersect(ui.clip_rect()));
                add_slide(&mut child, slide, index);
            }
        }

        let cursor = if carousel.is_dragging() {
            CursorIcon::Grabbing
        } else {
            CursorIcon::Grab
        };
        if carousel.len() > 1 {
            response.on_hover_cursor(cursor)
        } else {
            response
        }
    }

    /// Show the viewport with arrows on either side and dots underneath.
    pub fn show_with_controls<T>(
        self,
        ui: &mut Ui,
        carousel: &mut Carousel<T>,
        add_slide: impl FnMut(&mut Ui, &T, usize),
    ) -> Response {
        let response = ui
            .horizontal(|ui| {
                if ArrowButton::new(ArrowDirection::Previous)
                    .enabled(carousel.current_index() > 0)
                    .show(ui)
                {
                    carousel.previous();
                }

                let viewport_width = (ui.available_width() - sizing::ARROW - ui.spacing().item_spacing.x).max(1.0);
                let response = ui
                    .allocate_ui(vec2(viewport_width, self.height), |ui| {
                        self.show(ui, carousel, add_slide)
                    })
                    .inner;

                if ArrowButton::new(ArrowDirection::Next)
                    .enabled(carousel.current_index() < carousel.max_index())
                    .show(ui)
                {
                    carousel.next();
                }
                response
            })
            .inner;

        ui.vertical_centered(|ui| {
            if let Some(page) = DotIndicator::new(carousel.page_count(), carousel.current_index()).show(ui) {
                carousel.go_to_slide(page as isize);
            }
        });
        response
    }

    fn route_pointer<T>(&self, ui: &Ui, response: &Response, rect: Rect, carousel: &mut Carousel<T>) {
        let to_local = |x: f32| (x - rect.left()) as f64;

        if response.drag_started() {
            // egui reports the drag after the pointer has crossed its threshold;
            // start from the press origin so that distance counts.
            let origin = ui
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            if let Some(origin) = origin {
                carousel.on_gesture_start(to_local(origin.x), rect.width() as f64);
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                carousel.on_gesture_move(to_local(pos.x));
            }
        }
        if response.drag_stopped() {
            if let Some(decision) = carousel.on_gesture_end() {
                log::debug!("Carousel {:?} settled on {}", self.id, decision.target_index);
            }
        }
    }

    fn drive_rotation<T>(&self, ui: &Ui, carousel: &mut Carousel<T>) {
        carousel.tick();
        if let Some(wait) = carousel.time_until_next_tick() {
            ui.ctx().request_repaint_after(wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_core::CarouselConfig;

    fn run_frame(mut f: impl FnMut(&mut Ui)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| f(ui));
        });
    }

    #[test]
    fn test_paints_only_slides_in_view() {
        let mut carousel = Carousel::new((0..5).collect::<Vec<_>>(), CarouselConfig::slider());
        let mut painted = Vec::new();

        run_frame(|ui| {
            painted.clear();
            CarouselView::new("slider").show(ui, &mut carousel, |_, slide, _| painted.push(*slide));
        });

        assert_eq!(painted, vec![0]);
    }

    #[test]
    fn test_paints_visible_count_items() {
        let mut carousel = Carousel::new((0..12).collect::<Vec<_>>(), CarouselConfig::category(4));
        carousel.go_to_slide(3);
        let mut painted = Vec::new();

        run_frame(|ui| {
            painted.clear();
            CarouselView::new("category").show(ui, &mut carousel, |_, slide, _| painted.push(*slide));
        });

        assert_eq!(painted, vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_empty_carousel_paints_nothing() {
        let mut carousel: Carousel<u8> = Carousel::new(Vec::new(), CarouselConfig::slider());
        let mut painted = 0;

        run_frame(|ui| {
            painted = 0;
            CarouselView::new("empty").show_with_controls(ui, &mut carousel, |_, _, _| painted += 1);
        });

        assert_eq!(painted, 0);
        assert_eq!(carousel.current_index(), 0);
    }
}
