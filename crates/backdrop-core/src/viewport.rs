use crate::constants::{DPR_MAX, DPR_MIN};

/// Clamp a reported device pixel ratio to `[DPR_MIN, DPR_MAX]`.
/// Missing, zero or non-finite ratios are treated as 1.
#[inline]
pub fn clamp_dpr(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return DPR_MIN;
    }
    raw.clamp(DPR_MIN, DPR_MAX)
}

/// CSS size of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogicalSize {
    pub width: f64,
    pub height: f64,
}

impl LogicalSize {
    /// Prefer the element's client size, falling back per axis to the window's
    /// inner size when the element has not been laid out yet.
    pub fn resolve(client: (u32, u32), window: (f64, f64)) -> Self {
        let pick = |c: u32, w: f64| if c > 0 { c as f64 } else { w };
        Self {
            width: pick(client.0, window.0),
            height: pick(client.1, window.1),
        }
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            (self.width / self.height) as f32
        } else {
            1.0
        }
    }
}

/// Backing-store size of a drawing surface in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferSize {
    pub width: u32,
    pub height: u32,
}

impl BufferSize {
    /// `floor(logical * dpr)` on each axis; `dpr` is clamped first.
    pub fn from_logical(logical: LogicalSize, dpr: f64) -> Self {
        let dpr = clamp_dpr(dpr);
        Self {
            width: (logical.width * dpr).floor().max(0.0) as u32,
            height: (logical.height * dpr).floor().max(0.0) as u32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn as_vec(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}

/// Combined result of one resize pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub logical: LogicalSize,
    pub dpr: f64,
    pub buffer: BufferSize,
}

impl Viewport {
    pub fn measure(client: (u32, u32), window: (f64, f64), raw_dpr: f64) -> Self {
        let logical = LogicalSize::resolve(client, window);
        let dpr = clamp_dpr(raw_dpr);
        Self {
            logical,
            dpr,
            buffer: BufferSize::from_logical(logical, dpr),
        }
    }
}
