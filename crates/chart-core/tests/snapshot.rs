// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders the static chart and one animation frame without text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use hilbert_chart_core::{Animation, AnimationConfig, Chart, Dataset, RenderOptions, Theme};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn setup() -> (Chart, RenderOptions) {
    let chart = Chart::hilbert(Dataset::hilbert(), Theme::paper());
    let mut opts = RenderOptions::default().with_dpi(72.0);
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    (chart, opts)
}

#[test]
fn golden_static_chart() {
    let (chart, opts) = setup();
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/static.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_frame_69() {
    let (chart, opts) = setup();
    let anim = Animation::new(&chart.dataset, &chart.theme, AnimationConfig::default());
    let bytes = chart.render_frame_png_bytes(&opts, &anim.frame_state(69)).expect("render frame");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/frame_69.png");
    write_or_compare(&path, &bytes);
}
