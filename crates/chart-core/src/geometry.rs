// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for point-space math.

use std::f32::consts::PI;

/// Axis-aligned rectangle in points, y growing downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    /// Rectangle of `width` x `height` centred on `(cx, cy)`.
    pub fn centered(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::from_ltwh(cx - width * 0.5, cy - height * 0.5, width, height)
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }

    /// Grow (or shrink, for negative `d`) by `d` on every side.
    pub fn outset(&self, d: f32) -> Self {
        Self::from_ltrb(self.left - d, self.top - d, self.right + d, self.bottom + d)
    }
}

/// Vertices of a five-pointed star centred on `(cx, cy)`, first tip pointing up.
/// `outer` is the tip radius; the inner radius follows the regular pentagram ratio.
pub fn star_vertices(cx: f32, cy: f32, outer: f32) -> Vec<(f32, f32)> {
    let inner = outer * 0.381_966;
    (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let theta = -PI / 2.0 + i as f32 * PI / 5.0;
            (cx + r * theta.cos(), cy + r * theta.sin())
        })
        .collect()
}

/// Expand a polyline into a "post" step path: each segment runs horizontally
/// to the next x first, then vertically to the next y.
pub fn step_post(points: &[(f32, f32)]) -> Vec<(f32, f32)> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for (i, &p) in points.iter().enumerate() {
        if i > 0 {
            let prev_y = points[i - 1].1;
            out.push((p.0, prev_y));
        }
        out.push(p);
    }
    out
}
