// File: crates/chart-core/src/dataset.rs
// Summary: The fixed milestone dataset (dimension, value, category, label).
// Notes:
// - Order is significant: it is both the step-line order and the reveal order.

use crate::error::{ChartError, Result};

/// Narrative role of a milestone; selects its fixed visual style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Start,
    Stuck,
    Breakthrough,
    Final,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Start, Category::Stuck, Category::Breakthrough, Category::Final];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Start => "start",
            Category::Stuck => "stuck",
            Category::Breakthrough => "breakthrough",
            Category::Final => "final",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub dimension: i32,
    pub value: f64,
    pub category: Category,
    /// Display label; may span several lines separated by `\n`.
    pub label: &'static str,
}

impl Point {
    pub const fn new(dimension: i32, value: f64, category: Category, label: &'static str) -> Self {
        Self { dimension, value, category, label }
    }
}

const HILBERT_POINTS: [Point; 7] = [
    Point::new(2, 13.0, Category::Start, "Initial State (13)\nBaseline"),
    Point::new(3, 13.0, Category::Stuck, "Complexity Barrier\n(Stuck)"),
    Point::new(4, 2500.0, Category::Breakthrough, "Algorithmic Opt.\n(Breakthrough)"),
    Point::new(5, 2500.0, Category::Stuck, "Memory Limit\n(Stuck)"),
    Point::new(6, 50000.0, Category::Breakthrough, "Distributed Comp.\n(Breakthrough)"),
    Point::new(7, 50000.0, Category::Stuck, "Precision Error\n(Stuck)"),
    Point::new(8, 531441.0, Category::Final, "Final Proof\n(500,000+)"),
];

/// Immutable, validated sequence of milestones.
#[derive(Clone, Debug)]
pub struct Dataset {
    points: Vec<Point>,
}

impl Dataset {
    /// Validate and wrap `points`.
    /// Requires a non-empty set, strictly ascending dimensions and positive values.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(ChartError::InvalidDataset("no points".into()));
        }
        for (i, p) in points.iter().enumerate() {
            if !(p.value.is_finite() && p.value > 0.0) {
                return Err(ChartError::InvalidDataset(format!(
                    "point {i} has non-positive value {} (log axis)",
                    p.value
                )));
            }
            if i > 0 && p.dimension <= points[i - 1].dimension {
                return Err(ChartError::InvalidDataset(format!(
                    "dimensions must ascend: point {i} has {} after {}",
                    p.dimension,
                    points[i - 1].dimension
                )));
            }
        }
        Ok(Self { points })
    }

    /// The seven research milestones rendered by this tool.
    pub fn hilbert() -> Self {
        Self { points: HILBERT_POINTS.to_vec() }
    }

    pub fn points(&self) -> &[Point] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Points as `(x, y)` pairs in draw order.
    pub fn xy(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.dimension as f64, p.value)).collect()
    }

    pub fn dimensions(&self) -> Vec<i32> {
        self.points.iter().map(|p| p.dimension).collect()
    }

    /// Smallest and largest value.
    pub fn value_range(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for p in &self.points {
            lo = lo.min(p.value);
            hi = hi.max(p.value);
        }
        (lo, hi)
    }
}

impl Default for Dataset {
    fn default() -> Self { Self::hilbert() }
}
