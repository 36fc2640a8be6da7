// File: crates/chart-core/build.rs
// Summary: Build script linking the Windows system libraries Skia/ICU need for font lookup.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager reads the registry (RegOpenKeyExW, RegQueryInfoKeyW).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
