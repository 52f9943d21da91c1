use serde::{Deserialize, Serialize};

/// Holds parameters for diffusivity models D(θ)
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum ParamDiffusivity {
    /// Constant diffusivity
    Constant {
        /// Diffusivity D₀
        d0: f64,
    },

    /// Van Genuchten–Mualem diffusivity
    ///
    /// ```text
    /// D(θ) = Dᵣ √Se (1 - (1 - Se^(1/m))^m)²
    /// Se = (θ - θr) / (θs - θr)
    /// Dᵣ = ((1 - m) Ks/α) / (m (θs - θr))
    /// m = 1 - 1/n
    /// ```
    VanGenuchten {
        /// Residual saturation θr
        theta_r: f64,

        /// Maximum saturation θs
        theta_s: f64,

        /// n parameter (> 1)
        n: f64,

        /// Ratio between the saturated conductivity and the α parameter
        ks_over_alpha: f64,
    },
}
