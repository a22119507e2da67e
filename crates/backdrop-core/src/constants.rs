// Visual and animation tuning constants shared by the scene, the driver and
// the fallback renderer.

// Camera
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_Z: f32 = 6.0;

// Sphere mesh
pub const SPHERE_RADIUS: f32 = 1.45;
pub const SPHERE_DETAIL: u32 = 6;

// Starfield
pub const STAR_COUNT: usize = 2000;
pub const STAR_SHELL_RADIUS: f32 = 24.0;
pub const STAR_SIZE: f32 = 0.025; // world units, size-attenuated
pub const STAR_OPACITY: f32 = 0.8;
pub const STAR_COLOR: u32 = 0xbfd6ff;

// Palette
pub const CLEAR_COLOR: u32 = 0x070a11;
pub const ACCENT: u32 = 0xff5a3d;
pub const ACCENT2: u32 = 0x52c7ff;

// Easing factors (fraction of the remaining distance covered per frame)
pub const POINTER_EASE: f32 = 0.08;
pub const HOVER_EASE: f32 = 0.08;
pub const TITLE_EASE: f32 = 0.10;

// Title hover mapping
pub const TITLE_ROT_X_SPAN_DEG: f32 = 14.0;
pub const TITLE_ROT_Y_SPAN_DEG: f32 = 20.0;
pub const TITLE_POP_OUT_PX: f32 = 24.0;
pub const TITLE_GLOW_BASE: f32 = 0.35;
pub const TITLE_GLOW_SPAN: f32 = 0.65;
pub const GRADIENT_SWEEP_RATE: f32 = 0.35; // rad/s

// Shader motion multiplier: base * (MIN + SPAN * hover)
pub const MOTION_HOVER_MIN: f32 = 0.85;
pub const MOTION_HOVER_SPAN: f32 = 0.45;

// Sphere motion
pub const SPHERE_IDLE_SPIN: f32 = 0.002; // rad/frame
pub const PARALLAX_TILT_WEIGHT: f32 = 0.15;
pub const PARALLAX_X_GAIN: f32 = 0.5;
pub const PARALLAX_Y_GAIN: f32 = 0.6;
pub const PARALLAX_Y_SPIN: f32 = 0.02;
pub const BOB_RATE: f32 = 0.6; // rad/s
pub const BOB_AMPLITUDE: f32 = 0.15;

// Starfield motion
pub const STAR_DRIFT: f32 = 0.0006; // rad/frame
pub const STAR_TILT_GAIN: f32 = 0.08;

// Device orientation: degrees mapped to one unit of tilt
pub const TILT_DEG_PER_UNIT: f64 = 45.0;

// Device pixel ratio clamp
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 2.25;

// Fallback animation
pub const FALLBACK_TIME_STEP: f32 = 0.008;
pub const FALLBACK_DISC_SCALE: f32 = 0.18;
pub const FALLBACK_WOBBLE_RATE: f32 = 0.6;
pub const FALLBACK_WOBBLE_ANGLE: f32 = 0.05;

// Readiness polling for the accelerated backend
pub const READY_POLL_ATTEMPTS: u32 = 50;
pub const READY_POLL_INTERVAL_MS: u64 = 50;
