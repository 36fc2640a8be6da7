// File: crates/demo/src/main.rs
// Summary: Renders the Hilbert milestone chart (PNG/SVG/EPS) and its reveal animation (GIF).

use anyhow::{Context, Result};
use hilbert_chart_core::export::DEFAULT_OUTPUT_DIR;
use hilbert_chart_core::{export_animation, export_static, Chart, Dataset, ExportConfig, Theme};
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional output directory; everything else is fixed.
    let output_dir = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());
    let cfg = ExportConfig::new(&output_dir);

    let chart = Chart::hilbert(Dataset::hilbert(), Theme::paper());
    info!("Rendering {} milestones into {}", chart.dataset.len(), cfg.output_dir.display());

    let written = export_static(&chart, &cfg)
        .with_context(|| format!("failed to write static charts to '{}'", cfg.output_dir.display()))?;
    for path in &written {
        println!("Wrote {}", path.display());
    }

    let gif = export_animation(&chart, &cfg)
        .with_context(|| format!("failed to write animation to '{}'", cfg.output_dir.display()))?;
    println!("Wrote {}", gif.display());

    Ok(())
}
