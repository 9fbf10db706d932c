mod common;

use common::synthetic::{ramp_kernel, sequential_mod_matrix};
use convolve2d::prelude::*;

/// Direct per-cell evaluation of the full-convolution definition. Slow but
/// obviously correct; the engine must agree with it exactly.
fn reference_full(image: &Matrix<i32>, kernel: &Matrix<i32>) -> Matrix<i64> {
    let out_rows = image.rows + kernel.rows - 1;
    let out_cols = image.cols + kernel.cols - 1;
    let mut out = Matrix::zeros(out_rows, out_cols);
    for i in 0..out_rows {
        for j in 0..out_cols {
            let mut acc = 0i64;
            for m in 0..kernel.rows {
                for n in 0..kernel.cols {
                    if i >= m && j >= n && i - m < image.rows && j - n < image.cols {
                        acc += i64::from(image.get(i - m, j - n)) * i64::from(kernel.get(m, n));
                    }
                }
            }
            out.set(i, j, acc);
        }
    }
    out
}

#[test]
fn engine_matches_reference_on_synthetic_image() {
    let image = sequential_mod_matrix(37, 53, 100);
    let kernel = ramp_kernel(3, 3);

    let expected = reference_full(&image, &kernel);
    let got = convolve_full(&image, &kernel).expect("valid inputs");

    assert_eq!(got, expected);
}

#[test]
fn engine_matches_reference_with_kernel_larger_than_image() {
    let image = sequential_mod_matrix(2, 3, 10);
    let kernel = ramp_kernel(5, 4);

    let expected = reference_full(&image, &kernel);
    let got = convolve_full(&image, &kernel).expect("valid inputs");

    assert_eq!((got.rows, got.cols), (6, 6));
    assert_eq!(got, expected);
}

#[test]
fn borrowed_view_matches_owned_input() {
    let image = sequential_mod_matrix(16, 24, 100);
    let kernel = ramp_kernel(3, 3);

    let view = MatrixRef {
        rows: image.rows,
        cols: image.cols,
        data: &image.data,
    };

    let from_owned = convolve_full(&image, &kernel).expect("valid inputs");
    let from_view = convolve_full(&view, &kernel).expect("valid inputs");

    assert_eq!(from_owned, from_view);
}

#[test]
fn benchmark_shape_scenario_has_expected_extents() {
    // Scaled-down rendition of the 30720x17280 / 3x3 reference scenario;
    // the shape law is what is being pinned here.
    let image = sequential_mod_matrix(307, 172, 100);
    let kernel = ramp_kernel(3, 3);

    let out = convolve_full(&image, &kernel).expect("valid inputs");

    assert_eq!((out.rows, out.cols), (309, 174));
    assert_eq!(out.data.len(), 309 * 174);
}

#[test]
fn narrowing_back_to_the_element_type_is_callers_choice() {
    let image = sequential_mod_matrix(8, 8, 100);
    let kernel = ramp_kernel(3, 3);

    let wide = convolve_full(&image, &kernel).expect("valid inputs");
    let narrowed: Matrix<i32> = wide
        .try_cast()
        .expect("mod-100 inputs with a 3x3 ramp stay well inside i32");

    assert_eq!(narrowed.rows, wide.rows);
    assert_eq!(
        narrowed.data,
        wide.data.iter().map(|&v| v as i32).collect::<Vec<_>>()
    );
}
