// File: crates/chart-core/tests/layout.rs
// Purpose: Plot setup (axes, ticks), scales and geometry helpers.

use hilbert_chart_core::geometry::{star_vertices, step_post};
use hilbert_chart_core::grid::{log_decades, log_minor_ticks};
use hilbert_chart_core::scale::AxisScale;
use hilbert_chart_core::{Chart, Dataset, RenderOptions, ScaleKind, Theme};

fn chart() -> Chart {
    Chart::hilbert(Dataset::hilbert(), Theme::paper())
}

#[test]
fn y_axis_is_log_and_covers_value_domain() {
    let c = chart();
    assert_eq!(c.y_axis.kind, ScaleKind::Log10);
    assert!(c.y_axis.min > 0.0 && c.y_axis.min < 13.0);
    assert!(c.y_axis.max > 531441.0);
    assert_eq!((c.y_axis.min, c.y_axis.max), (10.0, 1_000_000.0));
}

#[test]
fn x_axis_ticks_label_each_dimension() {
    let c = chart();
    assert_eq!(c.x_axis.kind, ScaleKind::Linear);
    assert_eq!((c.x_axis.min, c.x_axis.max), (1.5, 8.5));
    let labels: Vec<&str> = c.x_axis.ticks.iter().map(|(_, l)| l.as_str()).collect();
    assert_eq!(labels, ["Dim 2", "Dim 3", "Dim 4", "Dim 5", "Dim 6", "Dim 7", "Dim 8"]);
    for p in c.dataset.points() {
        assert!(c.x_axis.contains(p.dimension as f64));
        assert!(c.y_axis.contains(p.value));
    }
    assert!(!c.title.is_empty());
    assert!(!c.x_axis.label.is_empty() && !c.y_axis.label.is_empty());
}

#[test]
fn projected_points_sit_inside_axes_and_rise() {
    let c = chart();
    let opts = RenderOptions::default();
    let plot = opts.plot_rect();
    let mut prev: Option<(f32, f32)> = None;
    for (x, y) in c.dataset.xy() {
        let (px, py) = c.project(&opts, x, y);
        assert!(px > plot.left && px < plot.right);
        assert!(py > plot.top && py < plot.bottom);
        if let Some((qx, qy)) = prev {
            assert!(px > qx);
            assert!(py <= qy, "higher values must not sit lower on the page");
        }
        prev = Some((px, py));
    }
}

#[test]
fn log_scale_maps_decades_evenly() {
    let s = AxisScale::new_log10(100.0, 0.0, 10.0, 1_000_000.0);
    assert!((s.to_pt(10.0) - 100.0).abs() < 1e-4);
    assert!((s.to_pt(1_000_000.0) - 0.0).abs() < 1e-4);
    assert!((s.to_pt(1000.0) - 60.0).abs() < 1e-4);
    assert!((s.from_pt(60.0) - 1000.0).abs() < 1e-6 * 1000.0);
}

#[test]
fn linear_scale_maps_ends() {
    let s = AxisScale::new_linear(64.0, 706.0, 1.5, 8.5);
    assert!((s.to_pt(1.5) - 64.0).abs() < 1e-4);
    assert!((s.to_pt(8.5) - 706.0).abs() < 1e-4);
    assert!((s.to_pt(5.0) - 385.0).abs() < 1e-4);
}

#[test]
fn decade_and_minor_ticks() {
    let decades = log_decades(10.0, 1_000_000.0);
    let exps: Vec<i32> = decades.iter().map(|&(_, e)| e).collect();
    assert_eq!(exps, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(log_minor_ticks(10.0, 1_000_000.0).len(), 5 * 8);
    assert!(log_decades(0.0, 10.0).is_empty());
}

#[test]
fn post_step_runs_horizontal_then_vertical() {
    let path = step_post(&[(0.0, 0.0), (1.0, 1.0), (2.0, 1.0)]);
    assert_eq!(path, vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (2.0, 1.0), (2.0, 1.0)]);
    assert!(step_post(&[]).is_empty());
}

#[test]
fn star_has_five_tips_pointing_up() {
    let v = star_vertices(10.0, 10.0, 5.0);
    assert_eq!(v.len(), 10);
    assert!((v[0].0 - 10.0).abs() < 1e-4);
    assert!((v[0].1 - 5.0).abs() < 1e-4);
}

#[test]
fn pixel_size_follows_dpi() {
    assert_eq!(RenderOptions::default().pixel_size(), (3000, 1800));
    assert_eq!(RenderOptions::default().with_dpi(100.0).pixel_size(), (1000, 600));
    assert_eq!(RenderOptions::default().with_dpi(72.0).pixel_size(), (720, 432));
}
