// File: crates/chart-render-skia/build.rs
// Summary: Links the Windows system libraries Skia/ICU need for PNG rasterization.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Target, not host: cross builds to Windows need the registry APIs too.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
