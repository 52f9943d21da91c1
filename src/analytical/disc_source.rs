/// Returns the value at the center of an initially uniform disc diffusing in the infinite plane
///
/// The initial condition is θ = 1 for r ≤ R₀ and θ = 0 elsewhere. At the center:
///
/// ```text
/// θ(0, t) = 1 - exp(-R₀² / (4 D t))
/// ```
///
/// Returns 1.0 at t = 0.
pub fn disc_center_value(r0: f64, d: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return 1.0;
    }
    1.0 - f64::exp(-r0 * r0 / (4.0 * d * t))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::disc_center_value;
    use russell_lab::approx_eq;

    #[test]
    fn disc_center_value_works() {
        assert_eq!(disc_center_value(0.4, 0.1, 0.0), 1.0);
        approx_eq(disc_center_value(0.4, 0.1, 0.4), 1.0 - f64::exp(-1.0), 1e-15);
        assert!(disc_center_value(0.4, 0.1, 100.0) < 0.01);
    }
}
