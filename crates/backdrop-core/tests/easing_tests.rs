// Host-side tests for easing and the input mapping helpers.

use backdrop_core::*;
use glam::Vec2;

#[test]
fn single_step_never_overshoots() {
    let factors = [0.08_f32, 0.10, 0.5, 1.0];
    let cases = [(0.0_f32, 1.0_f32), (1.0, 0.0), (-3.0, 7.5), (0.25, 0.25), (0.9, -0.4)];
    for &f in &factors {
        for &(start, target) in &cases {
            let mut e = Eased::new(start);
            e.target = target;
            let next = e.step(f);
            assert!(
                (next - start).abs() <= (target - start).abs() + 1e-6,
                "f={f} start={start} target={target} next={next}"
            );
            // stays on the same side of the target
            assert!((target - next) * (target - start) >= 0.0);
        }
    }
}

#[test]
fn repeated_steps_converge_geometrically() {
    let f = POINTER_EASE_FACTOR;
    let mut e = Eased::new(0.0_f32);
    e.target = 1.0;
    for n in 1..=60 {
        e.step(f);
        let expected = (1.0 - f).powi(n);
        let remaining = (e.target - e.current).abs();
        assert!(
            (remaining - expected).abs() < 1e-4,
            "after {n} steps remaining={remaining} expected={expected}"
        );
    }
}

const POINTER_EASE_FACTOR: f32 = backdrop_core::constants::POINTER_EASE;

#[test]
fn vec2_easing_moves_each_axis_independently() {
    let mut e = Eased::new(Vec2::new(0.5, 0.5));
    e.target = Vec2::new(1.0, 0.0);
    let v = e.step(0.1);
    assert!((v.x - 0.55).abs() < 1e-6);
    assert!((v.y - 0.45).abs() < 1e-6);
}

#[test]
fn factor_one_snaps_to_target() {
    let mut e = Eased::new(Vec2::ZERO);
    e.target = Vec2::new(3.0, -2.0);
    assert_eq!(e.step(1.0), Vec2::new(3.0, -2.0));
}

#[test]
fn pointer_maps_into_rect_unit_square() {
    let rect = ClientRect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };
    assert_eq!(normalized_in_rect(100.0, 50.0, rect), Vec2::new(0.0, 0.0));
    assert_eq!(normalized_in_rect(200.0, 100.0, rect), Vec2::new(0.5, 0.5));
    assert_eq!(normalized_in_rect(300.0, 150.0, rect), Vec2::new(1.0, 1.0));
    // outside the rect is not clamped
    assert_eq!(normalized_in_rect(500.0, 0.0, rect), Vec2::new(2.0, -0.5));
}

#[test]
fn degenerate_rect_maps_to_center() {
    let rect = ClientRect {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 10.0,
    };
    assert_eq!(normalized_in_rect(5.0, 5.0, rect), Vec2::splat(0.5));
}

#[test]
fn orientation_divides_by_45_degrees() {
    assert_eq!(tilt_from_orientation(Some(45.0), Some(-90.0)), Vec2::new(1.0, -2.0));
    assert_eq!(tilt_from_orientation(None, Some(22.5)), Vec2::new(0.0, 0.5));
    assert_eq!(tilt_from_orientation(None, None), Vec2::ZERO);
}

#[test]
fn hover_target_toggles() {
    let mut t = InputTargets::default();
    assert_eq!(t.hover, 0.0);
    t.set_hovering(true);
    assert_eq!(t.hover, 1.0);
    t.set_hovering(false);
    assert_eq!(t.hover, 0.0);
}
