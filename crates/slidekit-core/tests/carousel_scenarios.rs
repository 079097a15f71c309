//! End-to-end gesture and timer scenarios against the public engine API.

use slidekit_core::storage::{MemoryPreferences, SENSITIVITY_PREFERENCE_KEY};
use slidekit_core::{Carousel, CarouselConfig, ManualClock, SensitivityConfig, SnapRule};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

fn five_slides() -> Carousel<&'static str> {
    let mut carousel = Carousel::new(vec!["a", "b", "c", "d", "e"], CarouselConfig::slider());
    carousel.go_to_slide(1);
    carousel
}

fn assert_invariants<T>(carousel: &Carousel<T>) {
    let config = carousel.config();
    assert!(carousel.current_index() <= carousel.max_index());
    if !carousel.is_dragging() {
        assert_eq!(carousel.drag_offset(), 0.0);
    }
    let lower = -(carousel.max_index() as f64 * config.unit_width_percent() + config.elastic_overflow());
    let upper = config.elastic_overflow();
    assert!(carousel.drag_offset() >= lower && carousel.drag_offset() <= upper);
}

#[test]
fn test_scenario_a_swipe_past_threshold() {
    let mut carousel = five_slides();
    assert!((carousel.min_swipe_distance() - 30.0).abs() < f64::EPSILON);

    carousel.on_gesture_start(200.0, 300.0);
    carousel.on_gesture_move(160.0);
    let decision = carousel.on_gesture_end().unwrap();

    assert_eq!(decision.rule, SnapRule::Swipe);
    assert_eq!(decision.target_index, 2);
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn test_scenario_b_short_drag_stays() {
    let mut carousel = five_slides();

    carousel.on_gesture_start(200.0, 300.0);
    carousel.on_gesture_move(190.0);
    let decision = carousel.on_gesture_end().unwrap();

    assert_eq!(decision.rule, SnapRule::Stay);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_scenario_c_large_drag_moves_one_slide() {
    let mut carousel = five_slides();

    // 105px of 300px is 35% of one slide
    carousel.on_gesture_start(200.0, 300.0);
    carousel.on_gesture_move(95.0);
    let decision = carousel.on_gesture_end().unwrap();
    assert_eq!(decision.rule, SnapRule::LargeDrag);
    assert_eq!(carousel.current_index(), 2);

    carousel.on_gesture_start(95.0, 300.0);
    carousel.on_gesture_move(200.0);
    let decision = carousel.on_gesture_end().unwrap();
    assert_eq!(decision.rule, SnapRule::LargeDrag);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_large_drag_with_tiny_threshold_still_moves_one() {
    let mut carousel = Carousel::new(
        (0..10).collect::<Vec<_>>(),
        CarouselConfig::slider().with_sensitivity(1000),
    );

    carousel.on_gesture_start(1000.0, 300.0);
    carousel.on_gesture_move(0.0);
    carousel.on_gesture_end();

    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_boundary_elasticity_at_first_slide() {
    let mut carousel = Carousel::new(vec![1, 2, 3], CarouselConfig::slider());
    let overflow = carousel.config().elastic_overflow();

    carousel.on_gesture_start(0.0, 300.0);
    for x in [10.0, 50.0, 120.0, 280.0, 600.0] {
        let offset = carousel.on_gesture_move(x).unwrap();
        assert!(offset >= 0.0);
        assert!(offset <= overflow);
        assert_invariants(&carousel);
    }
    carousel.on_gesture_end();

    assert_eq!(carousel.current_index(), 0);
    assert_invariants(&carousel);
}

#[test]
fn test_boundary_elasticity_at_last_slide() {
    let mut carousel = Carousel::new(vec![1, 2, 3], CarouselConfig::slider());
    carousel.go_to_slide(2);

    carousel.on_gesture_start(600.0, 300.0);
    let offset = carousel.on_gesture_move(0.0).unwrap();
    assert!((offset + 210.0).abs() < f64::EPSILON);
    carousel.on_gesture_end();

    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn test_multi_item_carousel_swipes_by_item() {
    let mut carousel = Carousel::new((0..12).collect::<Vec<_>>(), CarouselConfig::category(4));
    assert!((carousel.min_swipe_distance() - 50.0).abs() < f64::EPSILON);

    // 60px of a 400px strip is 15% of the strip: under the large-drag cut
    carousel.on_gesture_start(300.0, 400.0);
    carousel.on_gesture_move(240.0);
    let decision = carousel.on_gesture_end().unwrap();

    assert_eq!(decision.rule, SnapRule::Swipe);
    assert_eq!(carousel.current_index(), 1);
    assert!((carousel.render_offset_percent() + 25.0).abs() < f64::EPSILON);
}

#[test]
fn test_multi_item_short_drag_below_threshold_stays() {
    let mut carousel = Carousel::new(
        (0..12).collect::<Vec<_>>(),
        CarouselConfig::category(4).with_sensitivity(25),
    );
    assert!((carousel.min_swipe_distance() - 100.0).abs() < f64::EPSILON);

    carousel.on_gesture_start(300.0, 400.0);
    carousel.on_gesture_move(270.0);
    let decision = carousel.on_gesture_end().unwrap();

    assert_eq!(decision.rule, SnapRule::Stay);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn test_multi_item_sensitivity_decides_short_swipes() {
    let drag = |sensitivity: i32| {
        let mut carousel = Carousel::new(
            (0..12).collect::<Vec<_>>(),
            CarouselConfig::category(4).with_sensitivity(sensitivity),
        );
        carousel.on_gesture_start(300.0, 400.0);
        carousel.on_gesture_move(230.0);
        carousel.on_gesture_end().unwrap()
    };

    // 70px: past the 50px threshold at S=50, short of 100px at S=25
    assert_eq!(drag(50).rule, SnapRule::Swipe);
    assert_eq!(drag(25).rule, SnapRule::Stay);
}

#[test]
fn test_multi_item_large_drag() {
    let mut carousel = Carousel::new((0..12).collect::<Vec<_>>(), CarouselConfig::category(4));
    carousel.go_to_slide(3);

    // 160px of 400px is 40% of the strip
    carousel.on_gesture_start(100.0, 400.0);
    carousel.on_gesture_move(260.0);
    let decision = carousel.on_gesture_end().unwrap();

    assert_eq!(decision.rule, SnapRule::LargeDrag);
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn test_gesture_start_cancels_pending_tick() {
    let clock = ManualClock::new();
    let mut carousel = Carousel::new(vec![1, 2, 3], CarouselConfig::slider().with_auto_rotate(true))
        .with_clock(clock.clone());
    let original = carousel.next_tick().unwrap();

    clock.advance_ms(4000);
    carousel.on_gesture_start(150.0, 300.0);
    assert!(!carousel.is_auto_rotating());
    assert_eq!(carousel.next_tick(), None);

    // The original deadline passes mid-drag
    clock.advance_ms(2000);
    assert!(!carousel.tick());
    assert!(!carousel.fire(original));
    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.is_dragging());

    carousel.on_gesture_end();
    let fresh = carousel.next_tick().unwrap();
    assert_ne!(fresh.generation, original.generation);
    assert!(fresh.deadline > original.deadline);

    clock.advance_ms(4999);
    assert!(!carousel.tick());
    clock.advance_ms(1);
    assert!(carousel.tick());
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_rotation_resumes_from_new_index_after_swipe() {
    let clock = ManualClock::new();
    let mut carousel = Carousel::new(vec![1, 2, 3, 4], CarouselConfig::slider().with_auto_rotate(true))
        .with_clock(clock.clone());
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    carousel.on_slide_change(move |i| sink.borrow_mut().push(i));

    carousel.on_gesture_start(250.0, 300.0);
    carousel.on_gesture_move(150.0);
    carousel.on_gesture_end();
    clock.advance_ms(5000);
    carousel.tick();

    assert_eq!(*calls.borrow(), vec![1, 2]);
}

#[test]
fn test_swapping_collection_cancels_pending_tick() {
    let clock = ManualClock::new();
    let mut carousel = Carousel::new(vec![1, 2, 3], CarouselConfig::slider().with_auto_rotate(true))
        .with_clock(clock.clone());
    let original = carousel.next_tick().unwrap();

    clock.advance_ms(3000);
    carousel.set_slides(vec![7, 8, 9, 10]);
    clock.advance_ms(2000);

    assert!(!carousel.fire(original));
    assert!(!carousel.tick());
    assert_eq!(carousel.current_index(), 0);

    carousel.set_slides(vec![7]);
    assert_eq!(carousel.next_tick(), None);
}

#[test]
fn test_sensitivity_ordering_and_floor() {
    let config = SensitivityConfig::new(30.0);
    let d25 = config.resolve_min_swipe_distance(Some(25));
    let d50 = config.resolve_min_swipe_distance(Some(50));
    let d100 = config.resolve_min_swipe_distance(Some(100));

    assert!(d25 > d50 && d50 > d100);
    assert!((config.resolve_min_swipe_distance(Some(500)) - 10.0).abs() < f64::EPSILON);
}

#[test]
fn test_malformed_preference_uses_default_threshold() {
    let store = Arc::new(MemoryPreferences::with_value(SENSITIVITY_PREFERENCE_KEY, "{}"));
    let carousel = Carousel::new(vec![1, 2], CarouselConfig::slider()).with_preferences(store);

    assert!((carousel.min_swipe_distance() - 30.0).abs() < f64::EPSILON);
}

#[test]
fn test_invariants_hold_over_mixed_interaction() {
    let clock = ManualClock::new();
    let mut carousel = Carousel::new((0..6).collect::<Vec<_>>(), CarouselConfig::slider().with_auto_rotate(true))
        .with_clock(clock.clone());

    let moves: [(f64, f64); 8] = [
        (100.0, 400.0),
        (400.0, 20.0),
        (300.0, 295.0),
        (0.0, 900.0),
        (900.0, -500.0),
        (50.0, 50.0),
        (280.0, 180.0),
        (10.0, 200.0),
    ];
    for (step, (from, to)) in moves.into_iter().enumerate() {
        carousel.on_gesture_start(from, if step % 3 == 0 { 0.0 } else { 320.0 });
        assert_invariants(&carousel);
        carousel.on_gesture_move((from + to) / 2.0);
        assert_invariants(&carousel);
        carousel.on_gesture_move(to);
        assert_invariants(&carousel);
        carousel.on_gesture_end();
        assert_invariants(&carousel);

        clock.advance_ms(2600 * step as u64);
        carousel.tick();
        assert_invariants(&carousel);
        carousel.go_to_slide(step as isize * 3 - 7);
        assert_invariants(&carousel);
    }
}
