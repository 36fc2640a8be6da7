// File: crates/chart-core/src/grid.rs
// Summary: Tick placement helpers for log axes.

/// Decade values `10^k` lying inside `[min, max]`, with their exponents.
pub fn log_decades(min: f64, max: f64) -> Vec<(f64, i32)> {
    if !(min > 0.0 && max > min) { return Vec::new(); }
    // Tolerate log10 rounding at exact powers of ten.
    let lo = (min.log10() - 1e-9).ceil() as i32;
    let hi = (max.log10() + 1e-9).floor() as i32;
    (lo..=hi).map(|k| (10f64.powi(k), k)).collect()
}

/// Minor ticks `m * 10^k` for `m` in 2..=9 inside `[min, max]`.
pub fn log_minor_ticks(min: f64, max: f64) -> Vec<f64> {
    if !(min > 0.0 && max > min) { return Vec::new(); }
    let lo = min.log10().floor() as i32;
    let hi = max.log10().ceil() as i32;
    let mut out = Vec::new();
    for k in lo..hi {
        let base = 10f64.powi(k);
        for m in 2..=9 {
            let v = base * m as f64;
            if v >= min && v <= max { out.push(v); }
        }
    }
    out
}
