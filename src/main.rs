use convolve2d::config::convolve::{ImageConfig, KernelConfig};
use convolve2d::convolve_full;
use std::time::Instant;

fn main() {
    // Demo stub: synthetic mod-100 test image, 3x3 ramp kernel, one call
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let image = ImageConfig::default().materialize()?;
    let kernel = KernelConfig::default().materialize()?;

    let start = Instant::now();
    let out = convolve_full(&image, &kernel).map_err(|e| e.to_string())?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let checksum = out.data.last().copied().unwrap_or(0);
    println!(
        "output={}x{} checksum={checksum} latency_ms={elapsed_ms:.3}",
        out.rows, out.cols
    );
    Ok(())
}
