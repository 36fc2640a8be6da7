// File: crates/chart-core/src/animation.rs
// Summary: Frame-indexed reveal state machine with per-category blink/pulse effects.
// Notes:
// - Every frame's visual state is a pure function of the frame index; the
//   only thing accumulated across playback is which annotations were emitted.

use std::collections::BTreeSet;

use skia_safe as skia;

use crate::dataset::{Category, Dataset};
use crate::theme::{MarkerShape, Theme};

/// Timing and effect parameters of the reveal animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    /// Frames allotted to each successive point.
    pub frames_per_point: usize,
    /// Extra frames after the last reveal so the final pulse plays out.
    pub tail_frames: usize,
    /// Playback rate of the encoded animation.
    pub fps: u32,
    /// Blink period (frames) of "stuck" points; opaque for the first half.
    pub blink_period: usize,
    /// Alpha of "stuck" points during the second half of the blink period.
    pub blink_alpha: f32,
    /// Angular rate (radians per frame) of the "final" pulse.
    pub pulse_rate: f64,
    /// Relative amplitude of the "final" pulse.
    pub pulse_amplitude: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames_per_point: 10,
            tail_frames: 20,
            fps: 10,
            blink_period: 10,
            blink_alpha: 0.5,
            pulse_rate: 0.5,
            pulse_amplitude: 0.2,
        }
    }
}

impl AnimationConfig {
    pub fn total_frames(&self, point_count: usize) -> usize {
        point_count * self.frames_per_point + self.tail_frames
    }

    /// Highest visible point index at `frame`: `min(frame / frames_per_point, point_count - 1)`.
    pub fn reveal_index(&self, frame: usize, point_count: usize) -> usize {
        (frame / self.frames_per_point.max(1)).min(point_count.saturating_sub(1))
    }

    pub fn alpha(&self, category: Category, frame: usize) -> f32 {
        match category {
            Category::Stuck => {
                let period = self.blink_period.max(2);
                if frame % period < period / 2 { 1.0 } else { self.blink_alpha }
            }
            _ => 1.0,
        }
    }

    pub fn size(&self, category: Category, base_size: f32, frame: usize) -> f32 {
        match category {
            Category::Final => {
                let pulse = 1.0 + self.pulse_amplitude * (self.pulse_rate * frame as f64).sin();
                (base_size as f64 * pulse) as f32
            }
            _ => base_size,
        }
    }

    /// Per-frame display time in milliseconds.
    pub fn frame_delay_ms(&self) -> u32 {
        (1000 / self.fps.max(1)).max(1)
    }
}

/// Visual attributes of one visible point in one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointVisual {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub category: Category,
    pub alpha: f32,
    /// Marker area in pt^2.
    pub size: f32,
    pub color: skia::Color,
    pub marker: MarkerShape,
    pub edge_color: Option<skia::Color>,
}

/// Immutable visual state of one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameState {
    /// `None` for the init frame.
    pub frame: Option<usize>,
    pub reveal_index: Option<usize>,
    /// Vertices of the step line, in draw order.
    pub line: Vec<(f64, f64)>,
    pub points: Vec<PointVisual>,
    /// Indices of points whose annotation is on the canvas.
    pub annotations: Vec<usize>,
}

impl FrameState {
    /// Cleared canvas before playback: no line, no markers, no annotations.
    pub fn init() -> Self {
        Self { frame: None, reveal_index: None, line: Vec::new(), points: Vec::new(), annotations: Vec::new() }
    }

    pub fn visible_count(&self) -> usize {
        self.points.len()
    }
}

pub struct Animation<'a> {
    dataset: &'a Dataset,
    theme: &'a Theme,
    config: AnimationConfig,
}

impl<'a> Animation<'a> {
    pub fn new(dataset: &'a Dataset, theme: &'a Theme, config: AnimationConfig) -> Self {
        Self { dataset, theme, config }
    }

    pub fn config(&self) -> &AnimationConfig { &self.config }

    pub fn total_frames(&self) -> usize {
        self.config.total_frames(self.dataset.len())
    }

    pub fn reveal_index(&self, frame: usize) -> usize {
        self.config.reveal_index(frame, self.dataset.len())
    }

    /// Visual state of `frame`. Pure: same frame, same state.
    pub fn frame_state(&self, frame: usize) -> FrameState {
        if self.dataset.is_empty() {
            return FrameState { frame: Some(frame), ..FrameState::init() };
        }
        let reveal = self.reveal_index(frame);
        let visible = &self.dataset.points()[..=reveal];

        let line = visible.iter().map(|p| (p.dimension as f64, p.value)).collect();
        let points = visible
            .iter()
            .enumerate()
            .map(|(index, p)| {
                let style = self.theme.category_style(p.category);
                PointVisual {
                    index,
                    x: p.dimension as f64,
                    y: p.value,
                    category: p.category,
                    alpha: self.config.alpha(p.category, frame),
                    size: self.config.size(p.category, style.base_size, frame),
                    color: style.color,
                    marker: style.marker,
                    edge_color: style.edge_color,
                }
            })
            .collect();

        FrameState {
            frame: Some(frame),
            reveal_index: Some(reveal),
            line,
            points,
            annotations: (0..=reveal).collect(),
        }
    }

    /// Sequential playback from frame 0, tracking annotation emission.
    pub fn playback(&self) -> Playback<'_, 'a> {
        Playback { animation: self, next: 0, emitted: BTreeSet::new() }
    }
}

/// One step of playback: the frame state plus annotations first shown in it.
#[derive(Clone, Debug)]
pub struct PlaybackFrame {
    pub state: FrameState,
    pub new_annotations: Vec<usize>,
}

pub struct Playback<'b, 'a> {
    animation: &'b Animation<'a>,
    next: usize,
    emitted: BTreeSet<usize>,
}

impl Playback<'_, '_> {
    /// Annotation ids emitted so far.
    pub fn emitted(&self) -> &BTreeSet<usize> {
        &self.emitted
    }
}

impl Iterator for Playback<'_, '_> {
    type Item = PlaybackFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.animation.total_frames() {
            return None;
        }
        let state = self.animation.frame_state(self.next);
        self.next += 1;
        let new_annotations = state
            .annotations
            .iter()
            .copied()
            .filter(|id| self.emitted.insert(*id))
            .collect();
        Some(PlaybackFrame { state, new_annotations })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.animation.total_frames().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Playback<'_, '_> {}
