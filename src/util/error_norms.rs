use russell_lab::Matrix;

/// Returns the maximum absolute difference max |a[i] - b[i]|
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn error_linf(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    let mut err = 0.0;
    for i in 0..a.len() {
        err = f64::max(err, f64::abs(a[i] - b[i]));
    }
    err
}

/// Returns the discrete L2 error √(Σ (a - b)² h²) over all nodes of a 2D field
///
/// # Panics
///
/// Panics if the matrices have different dimensions.
pub fn error_l2_2d(a: &Matrix, b: &Matrix, h: f64) -> f64 {
    assert_eq!(a.dims(), b.dims());
    let (nrow, ncol) = a.dims();
    let mut sum = 0.0;
    for j in 0..nrow {
        for i in 0..ncol {
            let diff = a.get(j, i) - b.get(j, i);
            sum += diff * diff;
        }
    }
    f64::sqrt(sum * h * h)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{error_l2_2d, error_linf};
    use russell_lab::{approx_eq, Matrix};

    #[test]
    fn error_linf_works() {
        assert_eq!(error_linf(&[], &[]), 0.0);
        assert_eq!(error_linf(&[1.0, 2.0, 3.0], &[1.0, 2.5, 2.0]), 1.0);
    }

    #[test]
    fn error_l2_2d_works() {
        let a = Matrix::from(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from(&[[1.0, 2.0], [3.0, 1.0]]);
        approx_eq(error_l2_2d(&a, &b, 0.5), 1.5, 1e-15);
        approx_eq(error_l2_2d(&a, &a, 0.5), 0.0, 1e-15);
    }
}
