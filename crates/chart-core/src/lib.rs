// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the dataset, chart setup, animation and export API.

pub mod animation;
pub mod axis;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod export;
pub mod geometry;
pub mod grid;
pub mod painter;
pub mod postscript;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;

pub use animation::{Animation, AnimationConfig, FrameState, Playback, PlaybackFrame, PointVisual};
pub use axis::{Axis, ScaleKind};
pub use chart::{Chart, RenderOptions};
pub use dataset::{Category, Dataset, Point};
pub use error::{ChartError, Result};
pub use export::{export_animation, export_static, write_frame_sequence, ExportConfig};
pub use painter::{Painter, SkiaPainter, TextSpec};
pub use postscript::PsPainter;
pub use text::TextShaper;
pub use theme::{CategoryStyle, MarkerShape, Theme};
