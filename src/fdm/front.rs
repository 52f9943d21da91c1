use russell_lab::Matrix;

/// Finds the position where a decreasing profile crosses the given level
///
/// The most advanced crossing is returned; i.e., the largest i such that
/// `theta[i] ≥ level > theta[i+1]`, linearly interpolated between `x[i]` and `x[i+1]`.
///
/// Returns None if the profile does not cross the level.
pub fn front_position(x: &[f64], theta: &[f64], level: f64) -> Option<f64> {
    let n = usize::min(x.len(), theta.len());
    if n < 2 {
        return None;
    }
    for i in (0..(n - 1)).rev() {
        if theta[i] >= level && theta[i + 1] < level {
            let s = (theta[i] - level) / (theta[i] - theta[i + 1]);
            return Some(x[i] + s * (x[i + 1] - x[i]));
        }
    }
    None
}

/// Returns the distances from the center to the level contour along x and y
///
/// The field must be square with the row index corresponding to y and the column index to x.
/// The distances are measured along the horizontal and vertical lines through the central node.
///
/// Returns `(half_width_x, half_width_y)` or None if the contour is not crossed.
pub fn contour_half_widths(coords: &[f64], theta: &Matrix, level: f64) -> Option<(f64, f64)> {
    let n = coords.len();
    let c = n / 2;
    let row: Vec<_> = (c..n).map(|i| theta.get(c, i)).collect();
    let col: Vec<_> = (c..n).map(|j| theta.get(j, c)).collect();
    let xc = coords[c];
    let along_x = front_position(&coords[c..], &row, level)?;
    let along_y = front_position(&coords[c..], &col, level)?;
    Some((along_x - xc, along_y - xc))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{contour_half_widths, front_position};
    use russell_lab::{approx_eq, Matrix};

    #[test]
    fn front_position_works() {
        let x = [0.0, 1.0, 2.0, 3.0];
        approx_eq(front_position(&x, &[1.0, 0.8, 0.2, 0.0], 0.5).unwrap(), 1.5, 1e-15);
        approx_eq(front_position(&x, &[1.0, 0.5, 0.0, 0.0], 0.5).unwrap(), 1.0, 1e-15);
        approx_eq(front_position(&x, &[1.0, 0.75, 0.25, 0.0], 0.5).unwrap(), 1.5, 1e-15);
        assert_eq!(front_position(&x, &[0.4, 0.3, 0.2, 0.1], 0.5), None);
        assert_eq!(front_position(&x, &[1.0, 0.9, 0.8, 0.7], 0.5), None);
        assert_eq!(front_position(&x[..1], &[1.0], 0.5), None);
    }

    #[test]
    fn front_position_takes_the_most_advanced_crossing() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let theta = [1.0, 0.0, 1.0, 0.0, 0.0];
        approx_eq(front_position(&x, &theta, 0.5).unwrap(), 2.5, 1e-15);
    }

    #[test]
    fn contour_half_widths_works() {
        let coords = [0.0, 1.0, 2.0, 3.0, 4.0];
        let mut theta = Matrix::new(5, 5);
        // center (2,2); along x: 1.0, 0.6, 0.0; along y: 1.0, 0.2, 0.0
        theta.set(2, 2, 1.0);
        theta.set(2, 3, 0.6);
        theta.set(3, 2, 0.2);
        let (a, b) = contour_half_widths(&coords, &theta, 0.5).unwrap();
        approx_eq(a, 1.0 + 0.1 / 0.6, 1e-15);
        approx_eq(b, 0.5 / 0.8, 1e-15);
    }
}
