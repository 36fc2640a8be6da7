// File: crates/chart-core/src/postscript.rs
// Summary: Encapsulated PostScript painter for the print-vector export.
// Notes:
// - PostScript has no transparency; translucent colours are composited
//   against the white figure background before being emitted.
// - Glyph metrics are not available here, so `measure_text` approximates
//   Times widths; centring of emitted strings is done by the interpreter.

use std::fmt::Write as FmtWrite;

use skia_safe as skia;

use crate::geometry::RectF;
use crate::painter::{Painter, Stroke, TextSpec};
use crate::text::{HAlign, VAlign};

/// Average Times advance width as a fraction of the font size.
const AVG_ADVANCE: f32 = 0.5;

pub struct PsPainter {
    width: f32,
    height: f32,
    fonts: (&'static str, &'static str),
    body: String,
}

impl PsPainter {
    /// New page of `width` x `height` points; `fonts` are the regular and bold font names.
    pub fn new(width: f32, height: f32, fonts: (&'static str, &'static str)) -> Self {
        Self { width, height, fonts, body: String::new() }
    }

    /// Complete EPS document.
    pub fn finish(self, title: &str) -> String {
        let mut out = String::with_capacity(self.body.len() + 512);
        let _ = writeln!(out, "%!PS-Adobe-3.0 EPSF-3.0");
        let _ = writeln!(out, "%%Title: {}", title);
        let _ = writeln!(out, "%%Creator: hilbert-chart");
        let _ = writeln!(out, "%%BoundingBox: 0 0 {} {}", self.width.ceil() as i32, self.height.ceil() as i32);
        let _ = writeln!(out, "%%HiResBoundingBox: 0 0 {:.2} {:.2}", self.width, self.height);
        let _ = writeln!(out, "%%Pages: 1");
        let _ = writeln!(out, "%%EndComments");
        let _ = writeln!(out, "%%BeginProlog");
        let _ = writeln!(out, "/F {{ findfont exch scalefont setfont }} bind def");
        let _ = writeln!(out, "/SL {{ show }} bind def");
        let _ = writeln!(out, "/SC {{ dup stringwidth pop 2 div neg 0 rmoveto show }} bind def");
        let _ = writeln!(out, "/SR {{ dup stringwidth pop neg 0 rmoveto show }} bind def");
        let _ = writeln!(out, "%%EndProlog");
        let _ = writeln!(out, "%%Page: 1 1");
        let _ = writeln!(out, "gsave");
        out.push_str(&self.body);
        let _ = writeln!(out, "grestore");
        let _ = writeln!(out, "showpage");
        let _ = writeln!(out, "%%EOF");
        out
    }

    #[inline]
    fn y(&self, y: f32) -> f32 {
        self.height - y
    }

    fn set_color(&mut self, c: skia::Color) {
        let (r, g, b) = composite_on_white(c);
        let _ = writeln!(self.body, "{:.4} {:.4} {:.4} setrgbcolor", r, g, b);
    }

    fn path(&mut self, pts: &[(f32, f32)], close: bool) {
        let _ = writeln!(self.body, "newpath");
        for (i, &(x, y)) in pts.iter().enumerate() {
            let op = if i == 0 { "moveto" } else { "lineto" };
            let _ = writeln!(self.body, "{:.3} {:.3} {}", x, self.y(y), op);
        }
        if close {
            let _ = writeln!(self.body, "closepath");
        }
    }

    fn fill_and_stroke(&mut self, fill: Option<skia::Color>, edge: Option<Stroke>) {
        match (fill, edge) {
            (Some(f), Some((ec, w))) => {
                let _ = writeln!(self.body, "gsave");
                self.set_color(f);
                let _ = writeln!(self.body, "fill grestore");
                self.set_color(ec);
                let _ = writeln!(self.body, "{:.3} setlinewidth stroke", w);
            }
            (Some(f), None) => {
                self.set_color(f);
                let _ = writeln!(self.body, "fill");
            }
            (None, Some((ec, w))) => {
                self.set_color(ec);
                let _ = writeln!(self.body, "{:.3} setlinewidth stroke", w);
            }
            (None, None) => {
                let _ = writeln!(self.body, "newpath");
            }
        }
    }
}

impl Painter for PsPainter {
    fn clear(&mut self, color: skia::Color) {
        let (w, h) = (self.width, self.height);
        self.path(&[(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)], true);
        self.fill_and_stroke(Some(color), None);
    }

    fn polyline(&mut self, pts: &[(f32, f32)], stroke: Stroke) {
        if pts.len() < 2 { return; }
        let _ = writeln!(self.body, "0 setlinejoin 0 setlinecap");
        self.path(pts, false);
        self.fill_and_stroke(None, Some(stroke));
    }

    fn polygon(&mut self, pts: &[(f32, f32)], fill: skia::Color, edge: Option<Stroke>) {
        if pts.len() < 3 { return; }
        self.path(pts, true);
        self.fill_and_stroke(Some(fill), edge);
    }

    fn circle(&mut self, (cx, cy): (f32, f32), radius: f32, fill: skia::Color, edge: Option<Stroke>) {
        let _ = writeln!(self.body, "newpath {:.3} {:.3} {:.3} 0 360 arc closepath", cx, self.y(cy), radius);
        self.fill_and_stroke(Some(fill), edge);
    }

    fn rect(&mut self, rect: RectF, corner: f32, fill: Option<skia::Color>, edge: Option<Stroke>) {
        let r = corner.min(rect.width() * 0.5).min(rect.height() * 0.5).max(0.0);
        let (l, t, rr, b) = (rect.left, self.y(rect.top), rect.right, self.y(rect.bottom));
        // Rounded rectangle via arct, counter-clockwise from the bottom edge.
        let _ = writeln!(self.body, "newpath {:.3} {:.3} moveto", l + r, b);
        let _ = writeln!(self.body, "{:.3} {:.3} {:.3} {:.3} {:.3} arct", rr, b, rr, t, r);
        let _ = writeln!(self.body, "{:.3} {:.3} {:.3} {:.3} {:.3} arct", rr, t, l, t, r);
        let _ = writeln!(self.body, "{:.3} {:.3} {:.3} {:.3} {:.3} arct", l, t, l, b, r);
        let _ = writeln!(self.body, "{:.3} {:.3} {:.3} {:.3} {:.3} arct closepath", l, b, rr, b, r);
        self.fill_and_stroke(fill, edge);
    }

    fn text(&mut self, text: &str, (x, y): (f32, f32), spec: &TextSpec) {
        let font = if spec.bold { self.fonts.1 } else { self.fonts.0 };
        // Offset from the anchor to the baseline, in y-down points.
        let baseline = match spec.valign {
            VAlign::Top => 0.8 * spec.size,
            VAlign::Center => 0.35 * spec.size,
            VAlign::Baseline => 0.0,
            VAlign::Bottom => -0.2 * spec.size,
        };
        let show = match spec.halign {
            HAlign::Left => "SL",
            HAlign::Center => "SC",
            HAlign::Right => "SR",
        };
        let _ = writeln!(self.body, "gsave");
        self.set_color(spec.color);
        let _ = writeln!(self.body, "{:.2} /{} F", spec.size, font);
        let _ = writeln!(self.body, "{:.3} {:.3} translate", x, self.y(y));
        if spec.rotation != 0.0 {
            let _ = writeln!(self.body, "{:.2} rotate", spec.rotation);
        }
        let _ = writeln!(self.body, "0 {:.3} moveto ({}) {}", -baseline, escape(text), show);
        let _ = writeln!(self.body, "grestore");
    }

    fn measure_text(&self, text: &str, size: f32, _bold: bool) -> f32 {
        text.chars().count() as f32 * size * AVG_ADVANCE
    }
}

/// Blend a possibly translucent colour over white, returning 0..=1 RGB.
pub fn composite_on_white(c: skia::Color) -> (f32, f32, f32) {
    let a = c.a() as f32 / 255.0;
    let mix = |v: u8| (v as f32 / 255.0) * a + (1.0 - a);
    (mix(c.r()), mix(c.g()), mix(c.b()))
}

/// Escape a string for a PostScript literal; non-ASCII is emitted as octal escapes.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
            c => {
                // Latin-1 range maps directly onto the standard font encoding slots.
                let code = if (c as u32) < 256 { c as u32 } else { '?' as u32 };
                let _ = write!(out, "\\{:03o}", code);
            }
        }
    }
    out
}
