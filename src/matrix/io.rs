//! I/O helpers for matrices and JSON.
//!
//! - `load_matrix_json`: read a serialized matrix, re-validating its shape.
//! - `save_matrix_json`: pretty-print a matrix to disk.
//! - `save_matrix_png`: write a min/max-normalized grayscale PNG for
//!   eyeballing large results.
//! - `write_json_file`: pretty-print any serializable value to disk.
use super::{Matrix, MatrixView};
use image::{GrayImage, Luma};
use num_traits::ToPrimitive;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a matrix from a JSON file, enforcing the shape invariant.
pub fn load_matrix_json<T: DeserializeOwned>(path: &Path) -> Result<Matrix<T>, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read matrix {}: {e}", path.display()))?;
    let parsed: Matrix<T> = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse matrix {}: {e}", path.display()))?;
    Matrix::from_vec(parsed.rows, parsed.cols, parsed.data)
        .map_err(|e| format!("Invalid matrix in {}: {e}", path.display()))
}

/// Serialize a matrix as pretty JSON to `path`, creating parent directories.
pub fn save_matrix_json<T: Serialize>(matrix: &Matrix<T>, path: &Path) -> Result<(), String> {
    write_json_file(path, matrix)
}

/// Save a matrix as a grayscale PNG, mapping `[min, max]` onto `[0, 255]`.
pub fn save_matrix_png<T>(matrix: &Matrix<T>, path: &Path) -> Result<(), String>
where
    T: Copy + ToPrimitive,
{
    if matrix.is_empty() {
        return Err(format!("Cannot render empty matrix to {}", path.display()));
    }
    ensure_parent_dir(path)?;

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for row in matrix.iter_rows() {
        for v in row {
            let v = v
                .to_f64()
                .ok_or_else(|| format!("Matrix value not representable for {}", path.display()))?;
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    let span = if hi > lo { hi - lo } else { 1.0 };

    let mut out = GrayImage::new(matrix.cols as u32, matrix.rows as u32);
    for (y, row) in matrix.iter_rows().enumerate() {
        for (x, v) in row.iter().enumerate() {
            let v = v.to_f64().unwrap_or(lo);
            let px = ((v - lo) / span * 255.0).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([px as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
