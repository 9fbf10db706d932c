use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::matrix::io::load_matrix_json;
use crate::matrix::{Matrix, MatrixViewMut};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ConvolveToolConfig {
    pub image: ImageConfig,
    pub kernel: KernelConfig,
    pub output: OutputConfig,
}

impl Default for ConvolveToolConfig {
    fn default() -> Self {
        Self {
            image: ImageConfig::default(),
            kernel: KernelConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Image input: a JSON matrix on disk, or a synthesized deterministic
/// test image of sequential values reduced modulo `modulus`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub path: Option<PathBuf>,
    pub rows: usize,
    pub cols: usize,
    pub modulus: i32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            path: None,
            rows: 1080,
            cols: 1920,
            modulus: 100,
        }
    }
}

impl ImageConfig {
    pub fn materialize(&self) -> Result<Matrix<i32>, String> {
        if let Some(path) = &self.path {
            return load_matrix_json(path);
        }
        if self.modulus <= 0 {
            return Err(format!(
                "Image modulus must be positive, got {}",
                self.modulus
            ));
        }
        let mut matrix = Matrix::zeros(self.rows, self.cols);
        let mut next = 0i32;
        for row in matrix.iter_rows_mut() {
            for v in row {
                *v = next % self.modulus;
                next = next.wrapping_add(1);
            }
        }
        Ok(matrix)
    }
}

/// Kernel input: a JSON matrix on disk, or inline row-major taps.
/// Without explicit taps the `rows × cols` ramp `0, 1, 2, …` is used.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    pub path: Option<PathBuf>,
    pub rows: usize,
    pub cols: usize,
    pub values: Option<Vec<i32>>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            path: None,
            rows: 3,
            cols: 3,
            values: None,
        }
    }
}

impl KernelConfig {
    pub fn materialize(&self) -> Result<Matrix<i32>, String> {
        if let Some(path) = &self.path {
            return load_matrix_json(path);
        }
        let values = match &self.values {
            Some(v) => v.clone(),
            None => (0..(self.rows * self.cols) as i32).collect(),
        };
        Matrix::from_vec(self.rows, self.cols, values)
            .map_err(|e| format!("Kernel config does not form a matrix: {e}"))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(rename = "result_json")]
    pub result_json: Option<PathBuf>,
    #[serde(rename = "result_png")]
    pub result_png: Option<PathBuf>,
    #[serde(rename = "report_json")]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ConvolveToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_image_follows_the_modulo_rule() {
        let cfg = ImageConfig {
            rows: 3,
            cols: 50,
            modulus: 100,
            ..ImageConfig::default()
        };
        let image = cfg.materialize().expect("synthesis cannot fail");
        assert_eq!((image.rows, image.cols), (3, 50));
        assert_eq!(image.get(0, 0), 0);
        assert_eq!(image.get(1, 49), 99);
        assert_eq!(image.get(2, 0), 0);
    }

    #[test]
    fn kernel_defaults_to_the_ramp() {
        let kernel = KernelConfig::default().materialize().expect("default kernel");
        assert_eq!((kernel.rows, kernel.cols), (3, 3));
        assert_eq!(kernel.data, (0..9).collect::<Vec<i32>>());
    }

    #[test]
    fn config_json_overrides_defaults() {
        let cfg: ConvolveToolConfig = serde_json::from_str(
            r#"{"image": {"rows": 4, "cols": 5}, "kernel": {"rows": 1, "cols": 1, "values": [1]}}"#,
        )
        .expect("valid config JSON");
        assert_eq!((cfg.image.rows, cfg.image.cols), (4, 5));
        assert_eq!(cfg.kernel.values.as_deref(), Some(&[1][..]));
        assert!(cfg.output.result_json.is_none());
    }

    #[test]
    fn non_positive_modulus_is_rejected() {
        let cfg = ImageConfig {
            modulus: 0,
            ..ImageConfig::default()
        };
        assert!(cfg.materialize().is_err());
    }
}
