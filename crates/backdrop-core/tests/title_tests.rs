// Host-side tests for the title visual state and its CSS rendering.

use backdrop_core::*;
use glam::Vec2;

#[test]
fn centered_idle_title_is_neutral() {
    let v = TitleVisual::compute(Vec2::splat(0.5), 0.0, 0.0);
    assert_eq!(v.rot_x_deg, 0.0);
    assert_eq!(v.rot_y_deg, 0.0);
    assert_eq!(v.translate_z_px, 0.0);
    assert!((v.glow - 0.35).abs() < 1e-6);
    assert_eq!(v.grad_pos, 50.0);
}

#[test]
fn corners_map_to_full_tilt() {
    let v = TitleVisual::compute(Vec2::new(1.0, 0.0), 1.0, std::f32::consts::FRAC_PI_2);
    assert!((v.rot_x_deg - 7.0).abs() < 1e-5);
    assert!((v.rot_y_deg - 10.0).abs() < 1e-5);
    assert!((v.translate_z_px - 24.0).abs() < 1e-5);
    assert!((v.glow - 1.0).abs() < 1e-6);
    assert!((v.grad_pos - 100.0).abs() < 1e-4);
}

#[test]
fn gradient_position_stays_in_percent_range() {
    for i in 0..500 {
        let v = TitleVisual::compute(Vec2::splat(0.5), 0.0, i as f32 * 0.173);
        assert!((0.0..=100.0).contains(&v.grad_pos));
    }
}

#[test]
fn css_properties_use_expected_names_and_units() {
    let v = TitleVisual {
        rot_x_deg: -3.5,
        rot_y_deg: 1.23456,
        translate_z_px: 12.0,
        glow: 0.675,
        grad_pos: 33.333,
    };
    let props = v.css_properties();
    assert_eq!(props[0], ("--title-rot-x", "-3.500deg".to_string()));
    assert_eq!(props[1], ("--title-rot-y", "1.235deg".to_string()));
    assert_eq!(props[2], ("--title-translate-z", "12.000px".to_string()));
    assert_eq!(props[3].0, "--title-glow");
    assert_eq!(props[4], ("--grad-pos", "33.33".to_string()));
}
