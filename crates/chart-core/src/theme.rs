// File: crates/chart-core/src/theme.rs
// Summary: Plot styling passed explicitly into chart construction, plus the category marker styles.

use skia_safe as skia;

use crate::dataset::Category;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    /// Five-pointed star.
    Star,
}

/// Fixed visual style of a category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryStyle {
    pub color: skia::Color,
    /// Marker area in pt^2; the drawn diameter is `sqrt(base_size)` points.
    pub base_size: f32,
    pub marker: MarkerShape,
    pub edge_color: Option<skia::Color>,
}

/// One row of the legend: representative marker and caption.
#[derive(Clone, Copy, Debug)]
pub struct LegendEntry {
    pub category: Category,
    pub label: &'static str,
    /// Marker diameter in points.
    pub marker_size: f32,
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Preferred font families, first match wins.
    pub font_families: &'static [&'static str],
    /// Font family used by the PostScript backend (regular, bold).
    pub ps_fonts: (&'static str, &'static str),
    pub font_size: f32,
    pub title_size: f32,
    pub axis_label_size: f32,
    pub annotation_size: f32,
    pub background: skia::Color,
    pub axes_background: skia::Color,
    pub axis_line: skia::Color,
    pub text: skia::Color,
    pub grid: bool,
    pub grid_color: skia::Color,
    pub line_stroke: skia::Color,
    pub line_width: f32,
    pub annotation_fill: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_edge: skia::Color,
}

impl Theme {
    /// Serif "paper" look: white figure, light grey grid at half opacity.
    pub fn paper() -> Self {
        Self {
            name: "paper",
            font_families: &["Times New Roman", "Times", "Liberation Serif", "Nimbus Roman", "DejaVu Serif", "serif"],
            ps_fonts: ("Times-Roman", "Times-Bold"),
            font_size: 10.0,
            title_size: 14.0,
            axis_label_size: 12.0,
            annotation_size: 8.0,
            background: skia::Color::WHITE,
            axes_background: skia::Color::WHITE,
            axis_line: skia::Color::BLACK,
            text: skia::Color::BLACK,
            grid: true,
            grid_color: skia::Color::from_argb(128, 0xcc, 0xcc, 0xcc),
            line_stroke: skia::Color::BLACK,
            line_width: 1.5,
            annotation_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_edge: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
        }
    }

    /// Style for `category`. Total over the enum, so every category is styled.
    pub fn category_style(&self, category: Category) -> CategoryStyle {
        match category {
            Category::Start => CategoryStyle {
                color: skia::Color::from_rgb(0x00, 0x00, 0xff),
                base_size: 50.0,
                marker: MarkerShape::Circle,
                edge_color: None,
            },
            Category::Stuck => CategoryStyle {
                color: skia::Color::from_rgb(0xff, 0x00, 0x00),
                base_size: 100.0,
                marker: MarkerShape::Circle,
                edge_color: None,
            },
            Category::Breakthrough => CategoryStyle {
                color: skia::Color::from_rgb(0x00, 0x80, 0x00),
                base_size: 150.0,
                marker: MarkerShape::Circle,
                edge_color: None,
            },
            Category::Final => CategoryStyle {
                color: skia::Color::from_rgb(0xff, 0xd7, 0x00),
                base_size: 300.0,
                marker: MarkerShape::Star,
                edge_color: Some(skia::Color::BLACK),
            },
        }
    }

    /// Legend rows in display order.
    pub fn legend(&self) -> [LegendEntry; 4] {
        [
            LegendEntry { category: Category::Start, label: "Initial (13)", marker_size: 8.0 },
            LegendEntry { category: Category::Stuck, label: "Stuck Point", marker_size: 8.0 },
            LegendEntry { category: Category::Breakthrough, label: "Breakthrough", marker_size: 10.0 },
            LegendEntry { category: Category::Final, label: "Final Goal", marker_size: 15.0 },
        ]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::paper() }
}

/// Return `c` with its alpha channel multiplied by `alpha` (0..=1).
pub fn with_alpha(c: skia::Color, alpha: f32) -> skia::Color {
    let a = (c.a() as f32 * alpha.clamp(0.0, 1.0)).round() as u8;
    c.with_a(a)
}
