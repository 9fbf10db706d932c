use convolve2d::Matrix;

/// Deterministic test image: sequential values reduced modulo `modulus`.
pub fn sequential_mod_matrix(rows: usize, cols: usize, modulus: i32) -> Matrix<i32> {
    assert!(modulus > 0, "modulus must be positive");

    let data: Vec<i32> = (0..(rows * cols) as i32).map(|v| v % modulus).collect();
    Matrix::from_vec(rows, cols, data).expect("generator produces a consistent shape")
}

/// Row-major ramp kernel `0, 1, 2, …`.
pub fn ramp_kernel(rows: usize, cols: usize) -> Matrix<i32> {
    let data: Vec<i32> = (0..(rows * cols) as i32).collect();
    Matrix::from_vec(rows, cols, data).expect("generator produces a consistent shape")
}
