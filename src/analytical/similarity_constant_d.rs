use russell_lab::math::{erf_inv, erfc};

/// Implements the similarity solution of the wetting problem with constant diffusivity
///
/// With φ = x / √t, θ(0) = θs and θ(∞) = θr:
///
/// ```text
/// θ(φ) = θr + (θs - θr) erfc(φ / (2 √D))
/// dθ/dφ(0) = (θr - θs) / √(π D)
/// ```
pub struct SimilarityConstantD {
    theta_r: f64,
    theta_s: f64,
    d: f64,
}

impl SimilarityConstantD {
    /// Allocates a new instance
    pub fn new(theta_r: f64, theta_s: f64, d: f64) -> Self {
        SimilarityConstantD { theta_r, theta_s, d }
    }

    /// Returns θ(φ)
    pub fn theta(&self, phi: f64) -> f64 {
        self.theta_r + (self.theta_s - self.theta_r) * erfc(phi / (2.0 * f64::sqrt(self.d)))
    }

    /// Returns the slope dθ/dφ at φ = 0
    pub fn slope_at_origin(&self) -> f64 {
        (self.theta_r - self.theta_s) / f64::sqrt(std::f64::consts::PI * self.d)
    }

    /// Returns φ where θ equals the mid-range value (θr + θs) / 2
    pub fn phi_mid_range(&self) -> f64 {
        2.0 * f64::sqrt(self.d) * erf_inv(0.5)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
