// File: crates/chart-core/src/types.rs
// Summary: Shared figure constants (sizes in points, resolutions, margins).

/// Points per inch; every layout value in this crate is expressed in points.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Default figure width in points (10 in).
pub const WIDTH_PT: f32 = 10.0 * POINTS_PER_INCH;
/// Default figure height in points (6 in).
pub const HEIGHT_PT: f32 = 6.0 * POINTS_PER_INCH;

/// Resolution used for the static raster export.
pub const STATIC_DPI: f32 = 300.0;
/// Resolution used for animation frames.
pub const ANIMATION_DPI: f32 = 100.0;

/// Figure margins around the axes area, in points.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    // Room for the tick labels and the bold axis labels, plus the title pad on top.
    fn default() -> Self {
        Self::new(64, 14, 46, 44)
    }
}

/// Device pixels for a length in points at `dpi`.
#[inline]
pub fn pt_to_px(pt: f32, dpi: f32) -> f32 {
    pt * dpi / POINTS_PER_INCH
}
