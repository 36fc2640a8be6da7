// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with serif defaults and anchor handling.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Baseline,
    Bottom,
}

pub struct TextShaper {
    fonts: FontCollection,
    families: Vec<String>,
}

impl TextShaper {
    pub fn new(families: &[&str]) -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc, families: families.iter().map(|f| f.to_string()).collect() }
    }

    fn make_style(&self, size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(self.families.as_slice());
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = self.make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, bold: bool) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), bold);
        // width of the longest line
        p.longest_line()
    }

    /// Draw a single line anchored at `(x, y)`; `rotation` is in degrees, counter-clockwise.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        color: skia::Color,
        bold: bool,
        (halign, valign): (HAlign, VAlign),
        rotation: f32,
    ) {
        let mut p = self.layout(text, size, color, bold);
        let w = p.longest_line();
        let dx = match halign {
            HAlign::Left => 0.0,
            HAlign::Center => -w * 0.5,
            HAlign::Right => -w,
        };
        // Paragraph draws from its top-left corner.
        let dy = match valign {
            VAlign::Top => 0.0,
            VAlign::Center => -p.height() * 0.5,
            VAlign::Baseline => -p.alphabetic_baseline(),
            VAlign::Bottom => -p.height(),
        };
        canvas.save();
        canvas.translate((x, y));
        if rotation != 0.0 {
            canvas.rotate(-rotation, None);
        }
        p.paint(canvas, (dx, dy));
        canvas.restore();
    }
}
