#![doc = include_str!("../README.md")]

pub mod config;
pub mod convolve;
pub mod error;
pub mod matrix;

// --- High-level re-exports -------------------------------------------------

// Main entry point: the engine plus its element contract.
pub use crate::convolve::{convolve_full, Element};
pub use crate::error::Error;

// Matrix containers most callers need.
pub use crate::matrix::{Matrix, MatrixRef};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use convolve2d::prelude::*;
///
/// let image = Matrix::from_vec(2, 2, vec![1i32, 2, 3, 4]).unwrap();
/// let kernel = Matrix::from_vec(1, 1, vec![1i32]).unwrap();
///
/// let out = convolve_full(&image, &kernel).unwrap();
/// assert_eq!((out.rows, out.cols), (2, 2));
/// ```
pub mod prelude {
    pub use crate::convolve::{convolve_full, Element};
    pub use crate::error::Error;
    pub use crate::matrix::{Matrix, MatrixRef, MatrixView, MatrixViewMut};
}
