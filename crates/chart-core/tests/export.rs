// File: crates/chart-core/tests/export.rs
// Purpose: Output files of the static and animated exports.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use hilbert_chart_core::export::{ANIMATION_GIF, STATIC_EPS, STATIC_PNG, STATIC_SVG};
use hilbert_chart_core::{export_animation, export_static, write_frame_sequence};
use hilbert_chart_core::{AnimationConfig, Chart, Dataset, ExportConfig, Theme};
use image::AnimationDecoder;

fn fresh_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn chart() -> Chart {
    Chart::hilbert(Dataset::hilbert(), Theme::paper())
}

#[test]
fn static_export_creates_directory_and_three_files() {
    let dir = fresh_dir("export_static/nested");
    let mut cfg = ExportConfig::new(&dir);
    cfg.static_dpi = 72.0;
    let written = export_static(&chart(), &cfg).expect("export static");

    assert_eq!(written, vec![dir.join(STATIC_PNG), dir.join(STATIC_SVG), dir.join(STATIC_EPS)]);
    for path in &written {
        assert!(std::fs::metadata(path).expect("exists").len() > 0, "{}", path.display());
    }
    let png = std::fs::read(dir.join(STATIC_PNG)).expect("read png");
    assert!(png.starts_with(&[137, 80, 78, 71]));
    let eps = std::fs::read_to_string(dir.join(STATIC_EPS)).expect("read eps");
    assert!(eps.starts_with("%!PS-Adobe-3.0 EPSF-3.0"));
}

#[test]
fn animation_export_writes_ninety_frame_gif() {
    let dir = fresh_dir("export_animation");
    let mut cfg = ExportConfig::new(&dir);
    cfg.animation_dpi = 14.4; // 144 x 86 px keeps quantization cheap
    let path = export_animation(&chart(), &cfg).expect("export animation");
    assert_eq!(path, dir.join(ANIMATION_GIF));

    let bytes = std::fs::read(&path).expect("read gif");
    assert!(bytes.starts_with(b"GIF89a"));

    let decoder = image::codecs::gif::GifDecoder::new(BufReader::new(File::open(&path).expect("open gif")))
        .expect("gif decoder");
    let frames = decoder.into_frames().collect_frames().expect("decode frames");
    assert_eq!(frames.len(), 90);
    let (num, den) = frames[0].delay().numer_denom_ms();
    assert_eq!(num as f64 / den as f64, 100.0);
    assert_eq!(frames[0].buffer().dimensions(), (144, 86));
}

#[test]
fn frame_sequence_is_numbered() {
    let dir = fresh_dir("frame_sequence");
    let mut cfg = ExportConfig::new(&dir);
    cfg.animation_dpi = 14.4;
    cfg.animation = AnimationConfig { frames_per_point: 1, tail_frames: 0, ..AnimationConfig::default() };
    let n = write_frame_sequence(&chart(), &dir, &cfg).expect("frames");
    assert_eq!(n, 7);
    assert!(dir.join("frame_0000.png").exists());
    assert!(dir.join("frame_0006.png").exists());
    assert!(!dir.join("frame_0007.png").exists());
}
