use std::f64::consts::PI;

/// Returns θ₀(x) = sin(πx/L)
pub fn ic_sine(ll: f64) -> impl Fn(f64) -> f64 {
    move |x| f64::sin(PI * x / ll)
}

/// Returns θ₀(x, y) = sin(πx/L) sin(πy/L)
pub fn ic_product_of_sines(ll: f64) -> impl Fn(f64, f64) -> f64 {
    move |x, y| f64::sin(PI * x / ll) * f64::sin(PI * y / ll)
}

/// Returns the step function θ₀(r) = 1 if r ≤ R₀ or 0 otherwise
pub fn ic_radial_step(radius: f64) -> impl Fn(f64) -> f64 {
    move |r| if r <= radius { 1.0 } else { 0.0 }
}

/// Returns a circular drop of unit saturation centered in the square [0, L] × [0, L]
pub fn ic_circular_drop(ll: f64, radius: f64) -> impl Fn(f64, f64) -> f64 {
    let (xc, yc) = (ll / 2.0, ll / 2.0);
    move |x, y| {
        let dist = f64::sqrt((x - xc) * (x - xc) + (y - yc) * (y - yc));
        if dist <= radius {
            1.0
        } else {
            0.0
        }
    }
}

/// Returns an elliptical drop of unit saturation centered in the square [0, L] × [0, L]
///
/// * `a` -- semi-axis along x
/// * `b` -- semi-axis along y
pub fn ic_elliptical_drop(ll: f64, a: f64, b: f64) -> impl Fn(f64, f64) -> f64 {
    let (xc, yc) = (ll / 2.0, ll / 2.0);
    move |x, y| {
        let u = (x - xc) / a;
        let v = (y - yc) / b;
        if u * u + v * v <= 1.0 {
            1.0
        } else {
            0.0
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
