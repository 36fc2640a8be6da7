// File: crates/chart-core/src/export.rs
// Summary: File export of the static chart (PNG/SVG/EPS) and the animated GIF.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use log::{debug, info};

use crate::animation::{Animation, AnimationConfig};
use crate::chart::{Chart, RenderOptions};
use crate::error::{ChartError, Result};
use crate::types::{ANIMATION_DPI, STATIC_DPI};

pub const STATIC_PNG: &str = "hilbert_chart_static.png";
pub const STATIC_SVG: &str = "hilbert_chart_static.svg";
pub const STATIC_EPS: &str = "hilbert_chart_static.eps";
pub const ANIMATION_GIF: &str = "hilbert_chart_animation.gif";

/// Default output directory when none is given on the command line.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// GIF quantizer speed (1 = best quality, 30 = fastest).
const GIF_SPEED: i32 = 10;

#[derive(Clone, Debug)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub static_dpi: f32,
    pub animation_dpi: f32,
    pub animation: AnimationConfig,
    /// Figure geometry shared by every output; `dpi` is overridden per output.
    pub render: RenderOptions,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            static_dpi: STATIC_DPI,
            animation_dpi: ANIMATION_DPI,
            animation: AnimationConfig::default(),
            render: RenderOptions::default(),
        }
    }
}

impl ExportConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), ..Self::default() }
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    fn static_options(&self) -> RenderOptions {
        self.render.clone().with_dpi(self.static_dpi)
    }

    fn animation_options(&self) -> RenderOptions {
        self.render.clone().with_dpi(self.animation_dpi)
    }
}

/// Write the static chart as PNG, SVG and EPS into the output directory.
/// Returns the written paths in that order.
pub fn export_static(chart: &Chart, cfg: &ExportConfig) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&cfg.output_dir)?;
    let opts = cfg.static_options();

    let png = cfg.path(STATIC_PNG);
    chart.render_to_png(&opts, &png)?;
    let svg = cfg.path(STATIC_SVG);
    chart.render_to_svg(&opts, &svg)?;
    let eps = cfg.path(STATIC_EPS);
    chart.render_to_eps(&opts, &eps)?;

    info!("Static charts saved to {}", cfg.output_dir.display());
    Ok(vec![png, svg, eps])
}

/// Render every animation frame into memory, in playback order.
pub fn render_animation_frames(chart: &Chart, cfg: &ExportConfig) -> Result<Vec<Frame>> {
    let opts = cfg.animation_options();
    let animation = Animation::new(&chart.dataset, &chart.theme, cfg.animation);
    let delay = Delay::from_numer_denom_ms(cfg.animation.frame_delay_ms(), 1);

    let mut frames = Vec::with_capacity(animation.total_frames());
    for step in animation.playback() {
        if !step.new_annotations.is_empty() {
            debug!("frame {:?}: annotating points {:?}", step.state.frame, step.new_annotations);
        }
        let (px, w, h, _stride) = chart.render_frame_rgba8(&opts, &step.state)?;
        let buffer = RgbaImage::from_raw(w, h, px).ok_or_else(|| ChartError::Encode {
            format: "GIF",
            reason: format!("frame buffer does not match {w}x{h}"),
        })?;
        frames.push(Frame::from_parts(buffer, 0, 0, delay));
    }
    debug!("rendered {} animation frames", frames.len());
    Ok(frames)
}

/// Encode `frames` as an infinitely looping GIF.
pub fn encode_gif<W: Write>(frames: Vec<Frame>, writer: W) -> Result<()> {
    if frames.is_empty() {
        return Err(ChartError::Encode { format: "GIF", reason: "no frames".into() });
    }
    let mut encoder = GifEncoder::new_with_speed(writer, GIF_SPEED);
    encoder.set_repeat(Repeat::Infinite)?;
    encoder.encode_frames(frames)?;
    Ok(())
}

/// Render the reveal animation and write it as a GIF into the output directory.
pub fn export_animation(chart: &Chart, cfg: &ExportConfig) -> Result<PathBuf> {
    std::fs::create_dir_all(&cfg.output_dir)?;
    let frames = render_animation_frames(chart, cfg)?;
    let path = cfg.path(ANIMATION_GIF);
    let file = File::create(&path)?;
    encode_gif(frames, BufWriter::new(file))?;
    info!("Animation saved to {}", path.display());
    Ok(path)
}

/// Write every animation frame as `frame_NNNN.png` under `dir`, for external
/// video tooling. Returns the number of frames written.
pub fn write_frame_sequence(chart: &Chart, dir: &Path, cfg: &ExportConfig) -> Result<usize> {
    std::fs::create_dir_all(dir)?;
    let opts = cfg.animation_options();
    let animation = Animation::new(&chart.dataset, &chart.theme, cfg.animation);
    let mut written = 0;
    for step in animation.playback() {
        let index = step.state.frame.unwrap_or(written);
        let bytes = chart.render_frame_png_bytes(&opts, &step.state)?;
        std::fs::write(dir.join(format!("frame_{index:04}.png")), bytes)?;
        written += 1;
    }
    info!("Wrote {} frames to {}", written, dir.display());
    Ok(written)
}
