// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges, scale kind and optional custom ticks.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    /// Custom `(value, label)` ticks. When empty, log axes tick at decades.
    pub ticks: Vec<(f64, String)>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear, ticks: Vec::new() }
    }

    pub fn log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { kind: ScaleKind::Log10, ..Self::new(label, min, max) }
    }

    pub fn with_ticks(mut self, ticks: Vec<(f64, String)>) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}
