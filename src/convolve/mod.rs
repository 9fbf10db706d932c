//! Full-mode 2D convolution with analytically clipped index ranges.
//!
//! - Output extents are `image + kernel - 1` per axis; positions where the
//!   kernel only partially overlaps the image contribute the in-bounds
//!   products (implicit zero padding, no padded copy is materialized).
//! - The fill is organized per output row: the valid kernel-row range is
//!   derived up front, column clipping falls out of the slice placement,
//!   and the innermost loop is a contiguous branch-free multiply-accumulate
//!   over one image row.
//! - Products are summed in the element's accumulator type ([`Element`]).
//!
//! Complexity: O(R_img·C_img·R_ker·C_ker); memory: the result buffer only.

mod element;

pub use element::Element;

use log::debug;
use num_traits::Zero;

use crate::error::Error;
use crate::matrix::{Matrix, MatrixView};

/// Full 2D convolution of `image` with `kernel`.
///
/// Output element `(i, j)` is the sum of `image[i-m, j-n] * kernel[m, n]`
/// over all kernel positions `(m, n)` that map inside the image. The
/// kernel is spatially flipped relative to cross-correlation. A zero
/// dimension on either input zeroes the corresponding output dimension and
/// skips the computation entirely.
///
/// Fails with [`Error::InvalidShape`] only when a view's reported
/// dimensions disagree with its backing buffer; otherwise this is a pure,
/// total function whose single side effect is the result allocation.
pub fn convolve_full<T, I, K>(image: &I, kernel: &K) -> Result<Matrix<T::Acc>, Error>
where
    T: Element,
    I: MatrixView<Elem = T> + Sync,
    K: MatrixView<Elem = T> + Sync,
{
    check_consistent(image)?;
    check_consistent(kernel)?;

    let (img_rows, img_cols) = (image.rows(), image.cols());
    let (ker_rows, ker_cols) = (kernel.rows(), kernel.cols());

    let out_rows = full_extent(img_rows, ker_rows).ok_or(Error::InvalidShape {
        rows: img_rows,
        cols: img_cols,
        len: img_rows.saturating_mul(img_cols),
    })?;
    let out_cols = full_extent(img_cols, ker_cols).ok_or(Error::InvalidShape {
        rows: img_rows,
        cols: img_cols,
        len: img_rows.saturating_mul(img_cols),
    })?;

    debug!(
        "convolve_full: image {img_rows}x{img_cols}, kernel {ker_rows}x{ker_cols} -> output {out_rows}x{out_cols} ({})",
        fill_mode()
    );

    let mut out = Matrix::zeros(out_rows, out_cols);
    if image.is_empty() || kernel.is_empty() {
        return Ok(out);
    }
    fill_rows(&mut out, image, kernel);
    Ok(out)
}

/// Extent of the full-convolution output along one axis.
fn full_extent(image: usize, kernel: usize) -> Option<usize> {
    if image == 0 || kernel == 0 {
        Some(0)
    } else {
        image.checked_add(kernel - 1)
    }
}

/// Boundary validation for views whose buffers are observable.
fn check_consistent<V: MatrixView>(v: &V) -> Result<(), Error> {
    if let Some(buf) = v.as_slice() {
        if v.rows().checked_mul(v.cols()) != Some(buf.len()) {
            return Err(Error::InvalidShape {
                rows: v.rows(),
                cols: v.cols(),
                len: buf.len(),
            });
        }
    }
    Ok(())
}

fn fill_mode() -> &'static str {
    if cfg!(feature = "parallel") {
        "parallel rows"
    } else {
        "serial rows"
    }
}

#[cfg(not(feature = "parallel"))]
fn fill_rows<T, I, K>(out: &mut Matrix<T::Acc>, image: &I, kernel: &K)
where
    T: Element,
    I: MatrixView<Elem = T>,
    K: MatrixView<Elem = T>,
{
    let cols = out.cols;
    for (i, out_row) in out.data.chunks_exact_mut(cols).enumerate() {
        accumulate_row(out_row, i, image, kernel);
    }
}

/// Row-partitioned fill: workers read the shared inputs and each owns a
/// disjoint output row, so the only synchronization is the final join.
#[cfg(feature = "parallel")]
fn fill_rows<T, I, K>(out: &mut Matrix<T::Acc>, image: &I, kernel: &K)
where
    T: Element,
    I: MatrixView<Elem = T> + Sync,
    K: MatrixView<Elem = T> + Sync,
{
    use rayon::prelude::*;

    let cols = out.cols;
    out.data
        .par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(i, out_row)| accumulate_row(out_row, i, image, kernel));
}

/// Accumulate one output row.
///
/// The kernel rows that overlap the image for output row `i` satisfy
/// `i+1-img_rows <= m < min(ker_rows, i+1)`; within a row, tap `n` touches
/// `out_row[n .. n+img_cols]`, which always fits since the row holds
/// `img_cols + ker_cols - 1` elements. Zero taps are skipped.
fn accumulate_row<T, I, K>(out_row: &mut [T::Acc], i: usize, image: &I, kernel: &K)
where
    T: Element,
    I: MatrixView<Elem = T>,
    K: MatrixView<Elem = T>,
{
    let (img_rows, img_cols) = (image.rows(), image.cols());
    let m_lo = (i + 1).saturating_sub(img_rows);
    let m_hi = kernel.rows().min(i + 1);

    for m in m_lo..m_hi {
        let img_row = image.row(i - m);
        for (n, &tap) in kernel.row(m).iter().enumerate() {
            if tap.is_zero() {
                continue;
            }
            let tap = tap.widen();
            for (acc, &px) in out_row[n..n + img_cols].iter_mut().zip(img_row) {
                *acc = *acc + px.widen() * tap;
            }
        }
    }
}
