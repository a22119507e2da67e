//! Visual state for the hero title's hover effect.
//!
//! The driver computes a [`TitleVisual`] each frame; the front-end's
//! presentation layer turns it into CSS custom properties on the document
//! root. The stylesheet owns the actual transforms.

use crate::constants::*;
use glam::Vec2;

pub const VAR_ROT_X: &str = "--title-rot-x";
pub const VAR_ROT_Y: &str = "--title-rot-y";
pub const VAR_TRANSLATE_Z: &str = "--title-translate-z";
pub const VAR_GLOW: &str = "--title-glow";
pub const VAR_GRAD_POS: &str = "--grad-pos";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleVisual {
    pub rot_x_deg: f32,
    pub rot_y_deg: f32,
    pub translate_z_px: f32,
    pub glow: f32,
    /// Position of the title gradient sweep, 0..100.
    pub grad_pos: f32,
}

impl TitleVisual {
    /// `follow` is the eased pointer position relative to the stage, `hover`
    /// the eased hover amount and `sweep` the gradient phase in radians.
    pub fn compute(follow: Vec2, hover: f32, sweep: f32) -> Self {
        Self {
            rot_x_deg: (0.5 - follow.y) * TITLE_ROT_X_SPAN_DEG,
            rot_y_deg: (follow.x - 0.5) * TITLE_ROT_Y_SPAN_DEG,
            translate_z_px: TITLE_POP_OUT_PX * hover,
            glow: TITLE_GLOW_BASE + TITLE_GLOW_SPAN * hover,
            grad_pos: (sweep.sin() * 0.5 + 0.5) * 100.0,
        }
    }

    /// Property name/value pairs ready for `style.setProperty`.
    pub fn css_properties(&self) -> [(&'static str, String); 5] {
        [
            (VAR_ROT_X, format!("{:.3}deg", self.rot_x_deg)),
            (VAR_ROT_Y, format!("{:.3}deg", self.rot_y_deg)),
            (VAR_TRANSLATE_Z, format!("{:.3}px", self.translate_z_px)),
            (VAR_GLOW, format!("{:.3}", self.glow)),
            (VAR_GRAD_POS, format!("{:.2}", self.grad_pos)),
        ]
    }
}

impl Default for TitleVisual {
    fn default() -> Self {
        Self::compute(Vec2::splat(0.5), 0.0, 0.0)
    }
}
