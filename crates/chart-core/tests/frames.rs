// File: crates/chart-core/tests/frames.rs
// Purpose: Pixel-level checks of rendered animation frames (text disabled for determinism).

use hilbert_chart_core::{Animation, AnimationConfig, Chart, Dataset, RenderOptions, Theme};

fn setup() -> (Chart, RenderOptions) {
    let chart = Chart::hilbert(Dataset::hilbert(), Theme::paper());
    let mut opts = RenderOptions::default().with_dpi(72.0); // 1 px per pt
    opts.draw_labels = false;
    (chart, opts)
}

fn pixel_at(chart: &Chart, opts: &RenderOptions, frame: usize, point: usize) -> [u8; 4] {
    let anim = Animation::new(&chart.dataset, &chart.theme, AnimationConfig::default());
    let state = anim.frame_state(frame);
    let (px, _w, _h, stride) = chart.render_frame_rgba8(opts, &state).expect("render frame");
    let (x, y) = chart.dataset.xy()[point];
    let (cx, cy) = chart.project(opts, x, y);
    let i = cy.floor() as usize * stride + cx.floor() as usize * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn first_frame_draws_only_the_start_marker() {
    let (chart, opts) = setup();
    assert_eq!(pixel_at(&chart, &opts, 0, 0), [0, 0, 255, 255]);
    assert_ne!(pixel_at(&chart, &opts, 0, 6), [255, 215, 0, 255]);
}

#[test]
fn final_star_is_drawn_once_revealed() {
    let (chart, opts) = setup();
    assert_eq!(pixel_at(&chart, &opts, 69, 6), [255, 215, 0, 255]);
}

#[test]
fn stuck_marker_blinks() {
    let (chart, opts) = setup();
    let opaque = pixel_at(&chart, &opts, 10, 1);
    let faded = pixel_at(&chart, &opts, 15, 1);
    assert_eq!(opaque, [255, 0, 0, 255]);
    assert_ne!(opaque, faded);
}

#[test]
fn rendering_a_frame_twice_is_identical() {
    let (chart, opts) = setup();
    let anim = Animation::new(&chart.dataset, &chart.theme, AnimationConfig::default());
    let state = anim.frame_state(47);
    let a = chart.render_frame_rgba8(&opts, &state).expect("first");
    let b = chart.render_frame_rgba8(&opts, &anim.frame_state(47)).expect("second");
    assert_eq!(a.0, b.0);
}
