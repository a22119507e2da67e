// Host-side tests for DPR clamping and buffer sizing.

use backdrop_core::*;

#[test]
fn dpr_is_clamped_to_supported_range() {
    assert_eq!(clamp_dpr(4.0), 2.25);
    assert_eq!(clamp_dpr(0.5), 1.0);
    assert_eq!(clamp_dpr(1.5), 1.5);
    assert_eq!(clamp_dpr(2.25), 2.25);
    assert_eq!(clamp_dpr(1.0), 1.0);
}

#[test]
fn dpr_handles_missing_and_extreme_inputs() {
    assert_eq!(clamp_dpr(0.0), 1.0);
    assert_eq!(clamp_dpr(-2.0), 1.0);
    assert_eq!(clamp_dpr(f64::NAN), 1.0);
    assert_eq!(clamp_dpr(f64::INFINITY), 1.0);
    assert_eq!(clamp_dpr(1e9), 2.25);
}

#[test]
fn buffer_size_floors_logical_times_dpr() {
    let cases = [
        (1280.0, 720.0, 1.0),
        (1280.0, 720.0, 1.5),
        (333.0, 517.0, 1.75),
        (1001.0, 999.0, 2.25),
        (801.0, 601.0, 3.0),
        (640.0, 480.0, 0.75),
    ];
    for (w, h, dpr) in cases {
        let size = BufferSize::from_logical(LogicalSize { width: w, height: h }, dpr);
        let d = clamp_dpr(dpr);
        assert_eq!(size.width, (w * d).floor() as u32, "width for {w}x{h}@{dpr}");
        assert_eq!(size.height, (h * d).floor() as u32, "height for {w}x{h}@{dpr}");
    }
}

#[test]
fn logical_size_falls_back_to_window_per_axis() {
    let s = LogicalSize::resolve((0, 400), (1920.0, 1080.0));
    assert_eq!(s.width, 1920.0);
    assert_eq!(s.height, 400.0);
    let s = LogicalSize::resolve((800, 600), (1920.0, 1080.0));
    assert_eq!((s.width, s.height), (800.0, 600.0));
}

#[test]
fn viewport_measure_combines_steps() {
    let vp = Viewport::measure((1000, 500), (0.0, 0.0), 3.0);
    assert_eq!(vp.dpr, 2.25);
    assert_eq!(vp.buffer, BufferSize { width: 2250, height: 1125 });
    assert!((vp.logical.aspect() - 2.0).abs() < 1e-6);
}

#[test]
fn empty_buffer_is_reported() {
    let size = BufferSize::from_logical(LogicalSize { width: 0.0, height: 10.0 }, 2.0);
    assert!(size.is_empty());
}
