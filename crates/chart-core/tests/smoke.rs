// File: crates/chart-core/tests/smoke.rs
// Purpose: End-to-end renders of the static chart to PNG, RGBA, SVG and EPS.

use hilbert_chart_core::{Chart, Dataset, RenderOptions, Theme};

fn chart() -> Chart {
    Chart::hilbert(Dataset::hilbert(), Theme::paper())
}

#[test]
fn render_smoke_png() {
    let chart = chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke/static.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (3000, 1800));
}

#[test]
fn render_rgba8_buffer() {
    let chart = chart();
    let mut opts = RenderOptions::default().with_dpi(72.0);
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (720, 432));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Figure background is opaque white
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn render_svg_document() {
    let bytes = chart().render_to_svg_bytes(&RenderOptions::default()).expect("svg render");
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("<svg"), "should contain an svg root");
    assert!(text.trim_end().ends_with("</svg>"));
}

#[test]
fn render_eps_document() {
    let eps = chart().render_to_eps_string(&RenderOptions::default());
    assert!(eps.starts_with("%!PS-Adobe-3.0 EPSF-3.0\n"));
    assert!(eps.contains("%%BoundingBox: 0 0 720 432"));
    assert!(eps.contains("(Dim 2) SC"));
    assert!(eps.contains("(Hilbert Number Value) SC"));
    // Parentheses in labels are escaped
    assert!(eps.contains("(\\(Stuck\\)) SC"));
    assert!(eps.contains("/Times-Bold F"));
    assert!(eps.trim_end().ends_with("%%EOF"));

    let out = std::path::PathBuf::from("target/test_out/smoke/static.eps");
    chart().render_to_eps(&RenderOptions::default(), &out).expect("write eps");
    assert_eq!(std::fs::read_to_string(&out).expect("read eps"), eps);
}
