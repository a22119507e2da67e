// Page hooks and timings used by the web front-end.
//
// Visual tuning lives in `backdrop_core::constants`; this file only knows
// about the host page.

// Element hooks
pub const WEBGL_CANVAS_SELECTOR: &str = ".webgl";
pub const FALLBACK_CANVAS_SELECTOR: &str = ".fallback";
pub const STAGE_SELECTOR: &str = ".stage";
pub const NAV_BUTTON_SELECTOR: &str = ".nav .btn";
pub const RENDER_SURFACE_ID: &str = "renderSurface";
pub const ROUTE_ATTRIBUTE: &str = "data-route";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Resize is applied once the viewport has been still this long
pub const RESIZE_DEBOUNCE_MS: i32 = 120;

// Navigation micro-interaction
pub const NAV_PULSE_MS: i32 = 220;
pub const NAV_PULSE_SHADOW: &str =
    "0 0 34px 0 rgba(255,90,61,0.35), 0 0 60px 0 rgba(82,199,255,0.25)";
pub const NAV_PULSE_BORDER: &str = "rgba(255,90,61,0.8)";

// GPU
pub const MAX_FRAME_LATENCY: u32 = 2;
