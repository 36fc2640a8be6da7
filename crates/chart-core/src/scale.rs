// File: crates/chart-core/src/scale.rs
// Summary: Data-to-point transforms for linear and log10 axes.

use crate::axis::{Axis, ScaleKind};

/// Maps a data range onto a span of points.
/// `start_pt` receives `min`, `end_pt` receives `max`; for a vertical axis pass
/// the bottom edge as `start_pt` so values grow upwards.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    pub start_pt: f32,
    pub end_pt: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl AxisScale {
    pub fn new_linear(start_pt: f32, end_pt: f32, vmin: f64, mut vmax: f64) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { start_pt, end_pt, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 }
    }

    pub fn new_log10(start_pt: f32, end_pt: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        Self { start_pt, end_pt, vmin, vmax, log: true, log_min: vmin.log10(), log_max: vmax.log10() }
    }

    pub fn for_axis(axis: &Axis, start_pt: f32, end_pt: f32) -> Self {
        match axis.kind {
            ScaleKind::Linear => Self::new_linear(start_pt, end_pt, axis.min, axis.max),
            ScaleKind::Log10 => Self::new_log10(start_pt, end_pt, axis.min, axis.max),
        }
    }

    /// Fraction of the span covered by `v` (0 at `vmin`, 1 at `vmax`).
    #[inline]
    pub fn fraction(&self, v: f64) -> f64 {
        if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (v.max(1e-12).log10() - self.log_min) / span
        } else {
            (v - self.vmin) / (self.vmax - self.vmin).max(1e-12)
        }
    }

    #[inline]
    pub fn to_pt(&self, v: f64) -> f32 {
        self.start_pt + self.fraction(v) as f32 * (self.end_pt - self.start_pt)
    }

    #[inline]
    pub fn from_pt(&self, p: f32) -> f64 {
        let t = ((p - self.start_pt) / (self.end_pt - self.start_pt)) as f64;
        if self.log {
            10f64.powf(self.log_min + t * (self.log_max - self.log_min))
        } else {
            self.vmin + t * (self.vmax - self.vmin)
        }
    }
}
