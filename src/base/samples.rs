use super::ParamDiffusivity;

/// Holds samples of parameters
pub struct Samples;

impl Samples {
    /// Returns the constant diffusivity used by the linear verification cases
    pub fn constant_diffusivity() -> ParamDiffusivity {
        ParamDiffusivity::Constant { d0: 0.1 }
    }

    /// Returns Van Genuchten parameters for Whatman No. 1 filter paper
    pub fn whatman_paper() -> ParamDiffusivity {
        ParamDiffusivity::VanGenuchten {
            theta_r: 0.004943,
            theta_s: 1.0,
            n: 2.344,
            ks_over_alpha: 2.079e-6,
        }
    }
}
