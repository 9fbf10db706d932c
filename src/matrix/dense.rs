//! Owned dense matrix in row-major layout.
//!
//! The workhorse container for the convolution engine. Elements live in a
//! single contiguous buffer of length `rows * cols`; either dimension may
//! be zero, which makes the matrix empty but valid.
use num_traits::{NumCast, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use super::traits::{MatrixView, MatrixViewMut};
use super::view::MatrixRef;
use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix<T> {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Backing storage in row-major order, `rows * cols` elements
    pub data: Vec<T>,
}

impl<T: Zero + Clone> Matrix<T> {
    /// Construct a zero-initialized `rows × cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }
}

impl<T> Matrix<T> {
    /// Wrap an existing buffer, validating that its length matches the
    /// claimed dimensions.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, Error> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(Error::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    #[inline]
    /// Convert (r, c) to a linear index into `data`.
    pub fn idx(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    /// Borrow as a read-only `MatrixRef` view.
    pub fn as_view(&self) -> MatrixRef<'_, T> {
        MatrixRef {
            rows: self.rows,
            cols: self.cols,
            data: &self.data,
        }
    }
}

impl<T: Copy> Matrix<T> {
    #[inline]
    /// Get the element at (r, c).
    pub fn get(&self, r: usize, c: usize) -> T {
        self.data[self.idx(r, c)]
    }

    #[inline]
    /// Set the element at (r, c).
    pub fn set(&mut self, r: usize, c: usize, v: T) {
        let i = self.idx(r, c);
        self.data[i] = v;
    }
}

impl<T: Copy + ToPrimitive> Matrix<T> {
    /// Element-wise checked narrowing into another numeric type.
    ///
    /// Returns `None` if any element does not fit in `U`; narrowing a
    /// widened convolution result back to the input type is the caller's
    /// call, not the engine's.
    pub fn try_cast<U: NumCast>(&self) -> Option<Matrix<U>> {
        let data = self
            .data
            .iter()
            .map(|&v| U::from(v))
            .collect::<Option<Vec<U>>>()?;
        Some(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }
}

impl<T: Copy> MatrixView for Matrix<T> {
    type Elem = T;

    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }
    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }
    #[inline]
    fn row(&self, r: usize) -> &[T] {
        let start = r * self.cols;
        &self.data[start..start + self.cols]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[T]> {
        Some(&self.data)
    }
}

impl<T: Copy> MatrixViewMut for Matrix<T> {
    #[inline]
    fn row_mut(&mut self, r: usize) -> &mut [T] {
        let start = r * self.cols;
        let end = start + self.cols;
        &mut self.data[start..end]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        Some(&mut self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_accepts_consistent_shape() {
        let m = Matrix::from_vec(2, 3, vec![0i32; 6]).expect("consistent shape");
        assert_eq!((m.rows, m.cols), (2, 3));
        assert!(!m.is_empty());
    }

    #[test]
    fn from_vec_rejects_inconsistent_buffer() {
        let err = Matrix::from_vec(2, 3, vec![0i32; 5]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidShape {
                rows: 2,
                cols: 3,
                len: 5
            }
        );
    }

    #[test]
    fn empty_matrix_is_valid() {
        let m = Matrix::from_vec(0, 7, Vec::<i32>::new()).expect("empty is valid");
        assert!(m.is_empty());
        assert_eq!(m.iter_rows().count(), 0);
    }

    #[test]
    fn get_set_round_trip() {
        let mut m = Matrix::zeros(3, 4);
        m.set(2, 1, 42i32);
        assert_eq!(m.get(2, 1), 42);
        assert_eq!(m.row(2), &[0, 42, 0, 0]);
    }

    #[test]
    fn row_iteration_walks_row_major_order() {
        let m = Matrix::from_vec(2, 2, vec![1i32, 2, 3, 4]).expect("shape");
        let rows: Vec<&[i32]> = m.iter_rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..]]);
    }

    #[test]
    fn try_cast_narrows_when_in_range() {
        let m = Matrix::from_vec(1, 3, vec![1i64, 2, 3]).expect("shape");
        let narrowed: Matrix<i32> = m.try_cast().expect("values fit in i32");
        assert_eq!(narrowed.data, vec![1, 2, 3]);
    }

    #[test]
    fn try_cast_rejects_out_of_range_values() {
        let m = Matrix::from_vec(1, 2, vec![1i64, <i64 as From<i32>>::from(i32::MAX) + 1]).expect("shape");
        assert!(m.try_cast::<i32>().is_none());
    }

    #[test]
    fn as_view_borrows_the_same_buffer() {
        let m = Matrix::from_vec(2, 2, vec![1i32, 2, 3, 4]).expect("shape");
        let v = m.as_view();
        assert_eq!((v.rows, v.cols), (2, 2));
        assert_eq!(v.row(1), m.row(1));
    }
}
