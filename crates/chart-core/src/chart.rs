// File: crates/chart-core/src/chart.rs
// Summary: Chart setup (axes, ticks, title) and the static/frame drawing pipeline
//          over Skia raster, Skia SVG and PostScript backends.

use log::debug;
use skia_safe as skia;

use crate::animation::{FrameState, PointVisual};
use crate::axis::{Axis, ScaleKind};
use crate::dataset::{Category, Dataset, Point};
use crate::error::{ChartError, Result};
use crate::geometry::{star_vertices, step_post, RectF};
use crate::grid::{log_decades, log_minor_ticks};
use crate::painter::{Painter, SkiaPainter, TextSpec};
use crate::postscript::PsPainter;
use crate::scale::AxisScale;
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::{with_alpha, MarkerShape, Theme};
use crate::types::{pt_to_px, Insets, HEIGHT_PT, STATIC_DPI, WIDTH_PT};

pub const TITLE: &str = "Research Breakthrough on Hilbert Number High-Dimensional Conjecture";
pub const X_LABEL: &str = "Dimension Space (Low to High)";
pub const Y_LABEL: &str = "Hilbert Number Value";

const TITLE_PAD: f32 = 20.0;
const TICK_LEN: f32 = 3.5;
const MINOR_TICK_LEN: f32 = 2.0;
const TICK_PAD: f32 = 3.5;
const SPINE_WIDTH: f32 = 0.8;
const GRID_WIDTH: f32 = 0.8;
/// Annotation offsets in points, positive up.
const LABEL_OFFSET_ABOVE: f32 = 15.0;
const LABEL_OFFSET_BELOW: f32 = -25.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width_pt: f32,
    pub height_pt: f32,
    pub dpi: f32,
    pub insets: Insets,
    /// Skip all text; used for pixel snapshots that must not depend on fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width_pt: WIDTH_PT,
            height_pt: HEIGHT_PT,
            dpi: STATIC_DPI,
            insets: Insets::default(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Device size in pixels at the configured resolution.
    pub fn pixel_size(&self) -> (i32, i32) {
        (
            pt_to_px(self.width_pt, self.dpi).round().max(1.0) as i32,
            pt_to_px(self.height_pt, self.dpi).round().max(1.0) as i32,
        )
    }

    /// Axes area in points.
    pub fn plot_rect(&self) -> RectF {
        RectF::from_ltrb(
            self.insets.left as f32,
            self.insets.top as f32,
            self.width_pt - self.insets.right as f32,
            self.height_pt - self.insets.bottom as f32,
        )
    }
}

pub struct Chart {
    pub dataset: Dataset,
    pub theme: Theme,
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    /// Plot setup: log10 value axis over [10, 1e6], dimension axis over
    /// [1.5, 8.5] with a `Dim {n}` tick per point, titled and labelled.
    pub fn hilbert(dataset: Dataset, theme: Theme) -> Self {
        let ticks = dataset
            .dimensions()
            .into_iter()
            .map(|d| (d as f64, format!("Dim {d}")))
            .collect();
        Self {
            dataset,
            theme,
            title: TITLE.to_string(),
            x_axis: Axis::new(X_LABEL, 1.5, 8.5).with_ticks(ticks),
            y_axis: Axis::log10(Y_LABEL, 10.0, 1_000_000.0),
        }
    }

    fn scales(&self, plot: &RectF) -> (AxisScale, AxisScale) {
        (
            AxisScale::for_axis(&self.x_axis, plot.left, plot.right),
            AxisScale::for_axis(&self.y_axis, plot.bottom, plot.top),
        )
    }

    /// Point-space position of a data point for the given options.
    pub fn project(&self, opts: &RenderOptions, x: f64, y: f64) -> (f32, f32) {
        let (sx, sy) = self.scales(&opts.plot_rect());
        (sx.to_pt(x), sy.to_pt(y))
    }

    // ---- drawing --------------------------------------------------------------

    /// Complete chart: step line, every marker and annotation, legend.
    pub fn draw_static(&self, p: &mut dyn Painter, opts: &RenderOptions) {
        self.draw_axes(p, opts);
        self.draw_step_line(p, opts, &self.dataset.xy());
        if opts.draw_labels {
            for point in self.dataset.points() {
                self.draw_annotation(p, opts, point);
            }
        }
        for (index, point) in self.dataset.points().iter().enumerate() {
            let style = self.theme.category_style(point.category);
            let visual = PointVisual {
                index,
                x: point.dimension as f64,
                y: point.value,
                category: point.category,
                alpha: 1.0,
                size: style.base_size,
                color: style.color,
                marker: style.marker,
                edge_color: style.edge_color,
            };
            self.draw_marker(p, opts, &visual);
        }
        self.draw_legend(p, opts);
    }

    /// One animation frame from its precomputed state.
    pub fn draw_frame(&self, p: &mut dyn Painter, opts: &RenderOptions, state: &FrameState) {
        self.draw_axes(p, opts);
        self.draw_step_line(p, opts, &state.line);
        if opts.draw_labels {
            for &i in &state.annotations {
                if let Some(point) = self.dataset.points().get(i) {
                    self.draw_annotation(p, opts, point);
                }
            }
        }
        for visual in &state.points {
            self.draw_marker(p, opts, visual);
        }
    }

    fn draw_axes(&self, p: &mut dyn Painter, opts: &RenderOptions) {
        let theme = &self.theme;
        let plot = opts.plot_rect();
        let (sx, sy) = self.scales(&plot);

        p.clear(theme.background);
        p.rect(plot, 0.0, Some(theme.axes_background), None);

        let y_decades: Vec<(f64, i32)> = match self.y_axis.kind {
            ScaleKind::Log10 => log_decades(self.y_axis.min, self.y_axis.max),
            ScaleKind::Linear => Vec::new(),
        };

        // Grid at major ticks
        if theme.grid {
            let grid = (theme.grid_color, GRID_WIDTH);
            for (x, _) in &self.x_axis.ticks {
                let px = sx.to_pt(*x);
                p.polyline(&[(px, plot.top), (px, plot.bottom)], grid);
            }
            for (y, _) in &y_decades {
                let py = sy.to_pt(*y);
                p.polyline(&[(plot.left, py), (plot.right, py)], grid);
            }
        }

        // Spines
        p.rect(plot, 0.0, None, Some((theme.axis_line, SPINE_WIDTH)));

        // Tick marks
        let tick = (theme.axis_line, SPINE_WIDTH);
        for (x, _) in &self.x_axis.ticks {
            let px = sx.to_pt(*x);
            p.polyline(&[(px, plot.bottom), (px, plot.bottom + TICK_LEN)], tick);
        }
        for (y, _) in &y_decades {
            let py = sy.to_pt(*y);
            p.polyline(&[(plot.left, py), (plot.left - TICK_LEN, py)], tick);
        }
        if self.y_axis.kind == ScaleKind::Log10 {
            for y in log_minor_ticks(self.y_axis.min, self.y_axis.max) {
                let py = sy.to_pt(y);
                p.polyline(&[(plot.left, py), (plot.left - MINOR_TICK_LEN, py)], (theme.axis_line, 0.6));
            }
        }

        if !opts.draw_labels {
            return;
        }

        let tick_text = TextSpec::new(theme.font_size, theme.text);
        for (x, label) in &self.x_axis.ticks {
            let at = (sx.to_pt(*x), plot.bottom + TICK_LEN + TICK_PAD);
            p.text(label, at, &tick_text.align(HAlign::Center, VAlign::Top));
        }
        for (y, exp) in &y_decades {
            let at = (plot.left - TICK_LEN - TICK_PAD, sy.to_pt(*y));
            draw_power_label(p, at, *exp, theme.font_size, theme.text);
        }

        let label = TextSpec::new(theme.axis_label_size, theme.text).bold();
        let x_label_y = plot.bottom + TICK_LEN + TICK_PAD + theme.font_size * 1.2 + 4.0;
        p.text(&self.x_axis.label, (plot.center_x(), x_label_y), &label.align(HAlign::Center, VAlign::Top));
        let y_label_x = plot.left - TICK_LEN - TICK_PAD - theme.font_size * 2.4 - 8.0;
        p.text(
            &self.y_axis.label,
            (y_label_x, plot.center_y()),
            &label.align(HAlign::Center, VAlign::Bottom).rotated(90.0),
        );

        let title = TextSpec::new(theme.title_size, theme.text).align(HAlign::Center, VAlign::Bottom);
        p.text(&self.title, (plot.center_x(), plot.top - TITLE_PAD), &title);
    }

    fn draw_step_line(&self, p: &mut dyn Painter, opts: &RenderOptions, data: &[(f64, f64)]) {
        if data.len() < 2 {
            return;
        }
        let pts: Vec<(f32, f32)> = data.iter().map(|&(x, y)| self.project(opts, x, y)).collect();
        p.polyline(&step_post(&pts), (self.theme.line_stroke, self.theme.line_width));
    }

    fn draw_marker(&self, p: &mut dyn Painter, opts: &RenderOptions, v: &PointVisual) {
        let center = self.project(opts, v.x, v.y);
        let radius = v.size.max(0.0).sqrt() * 0.5;
        let fill = with_alpha(v.color, v.alpha);
        let edge = v.edge_color.map(|c| (with_alpha(c, v.alpha), 1.0));
        draw_shape(p, v.marker, center, radius, fill, edge);
    }

    fn draw_annotation(&self, p: &mut dyn Painter, opts: &RenderOptions, point: &Point) {
        let theme = &self.theme;
        let (px, py) = self.project(opts, point.dimension as f64, point.value);
        let offset = match point.category {
            Category::Stuck => LABEL_OFFSET_BELOW,
            _ => LABEL_OFFSET_ABOVE,
        };
        let center = (px, py - offset);

        let size = theme.annotation_size;
        let lines: Vec<&str> = point.label.lines().collect();
        let line_h = size * 1.2;
        let block_h = line_h * lines.len() as f32;
        let block_w = lines.iter().map(|l| p.measure_text(l, size, false)).fold(0.0f32, f32::max);

        let pad = 0.3 * size;
        let bbox = RectF::centered(center.0, center.1, block_w, block_h).outset(pad);
        p.rect(bbox, pad, Some(theme.annotation_fill), None);

        let spec = TextSpec::new(size, theme.text).align(HAlign::Center, VAlign::Center);
        let top = center.1 - block_h * 0.5;
        for (i, line) in lines.iter().enumerate() {
            p.text(line, (center.0, top + line_h * (i as f32 + 0.5)), &spec);
        }
    }

    fn draw_legend(&self, p: &mut dyn Painter, opts: &RenderOptions) {
        let theme = &self.theme;
        let plot = opts.plot_rect();
        let entries = self.theme.legend();

        let size = theme.font_size;
        let row_h = size * 1.6;
        let pad = 5.0;
        let handle_w = 20.0;
        let gap = 6.0;
        let label_w = if opts.draw_labels {
            entries.iter().map(|e| p.measure_text(e.label, size, false)).fold(0.0f32, f32::max)
        } else {
            0.0
        };
        let w = pad * 2.0 + handle_w + gap + label_w;
        let h = pad * 2.0 + row_h * entries.len() as f32;
        let frame = RectF::from_ltwh(plot.right - 6.0 - w, plot.bottom - 6.0 - h, w, h);
        p.rect(frame, 2.0, Some(theme.legend_fill), Some((theme.legend_edge, 0.8)));

        for (i, e) in entries.iter().enumerate() {
            let cy = frame.top + pad + row_h * (i as f32 + 0.5);
            let cx = frame.left + pad + handle_w * 0.5;
            let style = theme.category_style(e.category);
            let edge = style.edge_color.map(|c| (c, 1.0));
            draw_shape(p, style.marker, (cx, cy), e.marker_size * 0.5, style.color, edge);
            if opts.draw_labels {
                let spec = TextSpec::new(size, theme.text).align(HAlign::Left, VAlign::Center);
                p.text(e.label, (frame.left + pad + handle_w + gap, cy), &spec);
            }
        }
    }

    // ---- backends -------------------------------------------------------------

    fn raster<F: FnOnce(&mut dyn Painter)>(&self, opts: &RenderOptions, draw: F) -> Result<skia::Surface> {
        let (w, h) = opts.pixel_size();
        let mut surface = skia::surfaces::raster_n32_premul((w, h)).ok_or(ChartError::Surface("raster"))?;
        let shaper = TextShaper::new(self.theme.font_families);
        {
            let canvas = surface.canvas();
            let s = pt_to_px(1.0, opts.dpi);
            canvas.scale((s, s));
            let mut painter = SkiaPainter::new(canvas, &shaper);
            draw(&mut painter);
        }
        debug!("rasterized {}x{} px at {} dpi", w, h, opts.dpi);
        Ok(surface)
    }

    fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Encode { format: "PNG", reason: "skia encoder returned no data".into() })?;
        Ok(data.as_bytes().to_vec())
    }

    fn read_rgba8(surface: &mut skia::Surface) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(ChartError::Encode { format: "RGBA", reason: "read_pixels failed".into() });
        }
        Ok((px, w as u32, h as u32, stride))
    }

    /// Render the static chart to PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(opts, |p| self.draw_static(p, opts))?;
        Self::encode_png(&mut surface)
    }

    /// Render the static chart to a PNG at `path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_creating_parent(path.as_ref(), &bytes)
    }

    /// Render the static chart into an RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster(opts, |p| self.draw_static(p, opts))?;
        Self::read_rgba8(&mut surface)
    }

    /// Render one animation frame into an RGBA8 buffer.
    pub fn render_frame_rgba8(&self, opts: &RenderOptions, state: &FrameState) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster(opts, |p| self.draw_frame(p, opts, state))?;
        Self::read_rgba8(&mut surface)
    }

    /// Render one animation frame to PNG bytes.
    pub fn render_frame_png_bytes(&self, opts: &RenderOptions, state: &FrameState) -> Result<Vec<u8>> {
        let mut surface = self.raster(opts, |p| self.draw_frame(p, opts, state))?;
        Self::encode_png(&mut surface)
    }

    /// Render the static chart as SVG (1 user unit = 1 pt).
    pub fn render_to_svg_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let bounds = skia::Rect::from_wh(opts.width_pt, opts.height_pt);
        let canvas = skia::svg::Canvas::new(bounds, None);
        let shaper = TextShaper::new(self.theme.font_families);
        {
            let mut painter = SkiaPainter::new(&canvas, &shaper);
            self.draw_static(&mut painter, opts);
        }
        let data = canvas.end();
        if data.as_bytes().is_empty() {
            return Err(ChartError::Encode { format: "SVG", reason: "empty document".into() });
        }
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_svg(&self, opts: &RenderOptions, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_svg_bytes(opts)?;
        write_creating_parent(path.as_ref(), &bytes)
    }

    /// Render the static chart as an EPS document (units are points).
    pub fn render_to_eps_string(&self, opts: &RenderOptions) -> String {
        let mut painter = PsPainter::new(opts.width_pt, opts.height_pt, self.theme.ps_fonts);
        self.draw_static(&mut painter, opts);
        painter.finish(&self.title)
    }

    pub fn render_to_eps(&self, opts: &RenderOptions, path: impl AsRef<std::path::Path>) -> Result<()> {
        let doc = self.render_to_eps_string(opts);
        write_creating_parent(path.as_ref(), doc.as_bytes())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_shape(
    p: &mut dyn Painter,
    shape: MarkerShape,
    center: (f32, f32),
    radius: f32,
    fill: skia::Color,
    edge: Option<(skia::Color, f32)>,
) {
    match shape {
        MarkerShape::Circle => p.circle(center, radius, fill, edge),
        MarkerShape::Star => p.polygon(&star_vertices(center.0, center.1, radius), fill, edge),
    }
}

/// Right-aligned `10^exp` tick label with the exponent raised and shrunk.
fn draw_power_label(p: &mut dyn Painter, (x, y): (f32, f32), exp: i32, size: f32, color: skia::Color) {
    let exp_size = size * 0.7;
    let exp_text = exp.to_string();
    let exp_w = p.measure_text(&exp_text, exp_size, false);
    let base_spec = TextSpec::new(size, color).align(HAlign::Right, VAlign::Center);
    p.text("10", (x - exp_w, y), &base_spec);
    let exp_spec = TextSpec::new(exp_size, color).align(HAlign::Left, VAlign::Center);
    p.text(&exp_text, (x - exp_w, y - size * 0.4), &exp_spec);
}

fn write_creating_parent(path: &std::path::Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
