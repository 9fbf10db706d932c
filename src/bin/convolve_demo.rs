use convolve2d::config::convolve::load_config;
use convolve2d::convolve_full;
use convolve2d::matrix::io::{save_matrix_json, save_matrix_png, write_json_file};
use serde::Serialize;
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = config.image.materialize()?;
    let kernel = config.kernel.materialize()?;

    let start = Instant::now();
    let result = convolve_full(&image, &kernel).map_err(|e| e.to_string())?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let report = ConvolveReport {
        image_rows: image.rows,
        image_cols: image.cols,
        kernel_rows: kernel.rows,
        kernel_cols: kernel.cols,
        output_rows: result.rows,
        output_cols: result.cols,
        checksum: result.data.last().copied().unwrap_or(0),
        elapsed_ms,
    };

    if let Some(path) = &config.output.result_json {
        save_matrix_json(&result, path)?;
        println!("Saved result matrix to {}", path.display());
    }
    if let Some(path) = &config.output.result_png {
        save_matrix_png(&result, path)?;
        println!("Saved normalized result image to {}", path.display());
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("Saved timing report to {}", path.display());
    }

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| format!("Failed to serialize report: {e}"))?;
    println!("{json}");

    Ok(())
}

fn usage() -> String {
    "Usage: convolve_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConvolveReport {
    image_rows: usize,
    image_cols: usize,
    kernel_rows: usize,
    kernel_cols: usize,
    output_rows: usize,
    output_cols: usize,
    checksum: i64,
    elapsed_ms: f64,
}
