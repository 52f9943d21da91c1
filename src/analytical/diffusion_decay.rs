use std::f64::consts::PI;

/// Returns the solution of ∂θ/∂t = D ∂²θ/∂x² with θ₀ = sin(πx/L) and zero boundary values
///
/// ```text
/// θ(x, t) = exp(-D (π/L)² t) sin(πx/L)
/// ```
pub fn sine_decay_1d(x: f64, t: f64, d: f64, ll: f64) -> f64 {
    let k = PI / ll;
    f64::exp(-d * k * k * t) * f64::sin(k * x)
}

/// Returns the solution of ∂θ/∂t = D ∇²θ with θ₀ = sin(πx/L) sin(πy/L) and zero boundary values
///
/// ```text
/// θ(x, y, t) = exp(-2 D (π/L)² t) sin(πx/L) sin(πy/L)
/// ```
pub fn product_sines_decay_2d(x: f64, y: f64, t: f64, d: f64, ll: f64) -> f64 {
    let k = PI / ll;
    f64::exp(-2.0 * d * k * k * t) * f64::sin(k * x) * f64::sin(k * y)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
