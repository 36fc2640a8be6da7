// File: crates/chart-core/src/painter.rs
// Summary: Backend-agnostic drawing seam in point space, and its Skia implementation.

use skia_safe as skia;

use crate::geometry::RectF;
use crate::text::{HAlign, TextShaper, VAlign};

/// Stroke colour and width (points).
pub type Stroke = (skia::Color, f32);

#[derive(Clone, Copy, Debug)]
pub struct TextSpec {
    pub size: f32,
    pub bold: bool,
    pub color: skia::Color,
    pub halign: HAlign,
    pub valign: VAlign,
    /// Degrees, counter-clockwise.
    pub rotation: f32,
}

impl TextSpec {
    pub fn new(size: f32, color: skia::Color) -> Self {
        Self { size, bold: false, color, halign: HAlign::Center, valign: VAlign::Center, rotation: 0.0 }
    }
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
    pub fn align(mut self, halign: HAlign, valign: VAlign) -> Self {
        self.halign = halign;
        self.valign = valign;
        self
    }
    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }
}

/// Drawing primitives used by the chart. Coordinates are points, y down.
pub trait Painter {
    fn clear(&mut self, color: skia::Color);
    fn polyline(&mut self, pts: &[(f32, f32)], stroke: Stroke);
    fn polygon(&mut self, pts: &[(f32, f32)], fill: skia::Color, edge: Option<Stroke>);
    fn circle(&mut self, center: (f32, f32), radius: f32, fill: skia::Color, edge: Option<Stroke>);
    fn rect(&mut self, rect: RectF, corner: f32, fill: Option<skia::Color>, edge: Option<Stroke>);
    /// Draw a single line of text anchored at `at`.
    fn text(&mut self, text: &str, at: (f32, f32), spec: &TextSpec);
    fn measure_text(&self, text: &str, size: f32, bold: bool) -> f32;
}

/// Painter over any Skia canvas (raster surface or SVG canvas).
/// The canvas is expected to be pre-scaled from points to device units.
pub struct SkiaPainter<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
}

impl<'a> SkiaPainter<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper }
    }

    fn fill_paint(color: skia::Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        paint
    }

    fn stroke_paint((color, width): Stroke) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_stroke_join(skia::paint::Join::Miter);
        paint.set_color(color);
        paint
    }
}

fn path_of(pts: &[(f32, f32)], close: bool) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some(&first) = pts.first() {
        path.move_to(first);
        for &p in &pts[1..] {
            path.line_to(p);
        }
        if close {
            path.close();
        }
    }
    path
}

impl Painter for SkiaPainter<'_> {
    fn clear(&mut self, color: skia::Color) {
        self.canvas.clear(color);
    }

    fn polyline(&mut self, pts: &[(f32, f32)], stroke: Stroke) {
        if pts.len() < 2 { return; }
        self.canvas.draw_path(&path_of(pts, false), &Self::stroke_paint(stroke));
    }

    fn polygon(&mut self, pts: &[(f32, f32)], fill: skia::Color, edge: Option<Stroke>) {
        if pts.len() < 3 { return; }
        let path = path_of(pts, true);
        self.canvas.draw_path(&path, &Self::fill_paint(fill));
        if let Some(edge) = edge {
            self.canvas.draw_path(&path, &Self::stroke_paint(edge));
        }
    }

    fn circle(&mut self, center: (f32, f32), radius: f32, fill: skia::Color, edge: Option<Stroke>) {
        self.canvas.draw_circle(center, radius, &Self::fill_paint(fill));
        if let Some(edge) = edge {
            self.canvas.draw_circle(center, radius, &Self::stroke_paint(edge));
        }
    }

    fn rect(&mut self, rect: RectF, corner: f32, fill: Option<skia::Color>, edge: Option<Stroke>) {
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        let rr = skia::RRect::new_rect_xy(r, corner, corner);
        if let Some(fill) = fill {
            self.canvas.draw_rrect(rr, &Self::fill_paint(fill));
        }
        if let Some(edge) = edge {
            self.canvas.draw_rrect(rr, &Self::stroke_paint(edge));
        }
    }

    fn text(&mut self, text: &str, at: (f32, f32), spec: &TextSpec) {
        self.shaper.draw(
            self.canvas,
            text,
            at,
            spec.size,
            spec.color,
            spec.bold,
            (spec.halign, spec.valign),
            spec.rotation,
        );
    }

    fn measure_text(&self, text: &str, size: f32, bold: bool) -> f32 {
        self.shaper.measure_width(text, size, bold)
    }
}
