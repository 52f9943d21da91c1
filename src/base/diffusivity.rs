use super::{ParamDiffusivity, DERIVATIVE_STEP, D_MAX_NPOINT, SATURATION_EPSILON};
use crate::StrError;

/// Implements diffusivity models D(θ)
///
/// By default, saturation values outside the admissible range are silently clamped.
/// The strict mode (see [DiffusivityModel::set_strict]) defines a tolerance band: values
/// inside the band are regarded as discretization overshoot; values outside the band are
/// rejected by [DiffusivityModel::check_saturation].
#[derive(Clone, Copy, Debug)]
pub struct DiffusivityModel {
    /// Material parameters
    param: ParamDiffusivity,

    /// m = 1 - 1/n (Van Genuchten only)
    m: f64,

    /// Reference diffusivity (D₀ or Dᵣ)
    d_ref: f64,

    /// Residual saturation
    theta_r: f64,

    /// Maximum saturation
    theta_s: f64,

    /// Tolerance band for the strict mode (None means lenient)
    strict_tolerance: Option<f64>,
}

impl DiffusivityModel {
    /// Allocates a new instance
    pub fn new(param: &ParamDiffusivity) -> Result<Self, StrError> {
        match *param {
            ParamDiffusivity::Constant { d0 } => {
                if !(d0 > 0.0) || !d0.is_finite() {
                    return Err("d0 parameter for the constant diffusivity model is invalid");
                }
                Ok(DiffusivityModel {
                    param: *param,
                    m: 0.0,
                    d_ref: d0,
                    theta_r: 0.0,
                    theta_s: 1.0,
                    strict_tolerance: None,
                })
            }
            ParamDiffusivity::VanGenuchten {
                theta_r,
                theta_s,
                n,
                ks_over_alpha,
            } => {
                if theta_r < 0.0 {
                    return Err("theta_r parameter for the van Genuchten diffusivity model is invalid");
                }
                if theta_s <= theta_r {
                    return Err("theta_s parameter for the van Genuchten diffusivity model is invalid");
                }
                if !(n > 1.0) {
                    return Err("n parameter for the van Genuchten diffusivity model is invalid");
                }
                if !(ks_over_alpha > 0.0) {
                    return Err("ks_over_alpha parameter for the van Genuchten diffusivity model is invalid");
                }
                let m = 1.0 - 1.0 / n;
                let d_ref = ((1.0 - m) * ks_over_alpha) / (m * (theta_s - theta_r));
                Ok(DiffusivityModel {
                    param: *param,
                    m,
                    d_ref,
                    theta_r,
                    theta_s,
                    strict_tolerance: None,
                })
            }
        }
    }

    /// Enables the strict mode with the given tolerance band
    pub fn set_strict(&mut self, tolerance: f64) -> Result<&mut Self, StrError> {
        if !(tolerance >= 0.0) {
            return Err("the tolerance band of the strict mode must be non-negative");
        }
        self.strict_tolerance = Some(tolerance);
        Ok(self)
    }

    /// Disables the strict mode (saturation values are silently clamped)
    pub fn set_lenient(&mut self) -> &mut Self {
        self.strict_tolerance = None;
        self
    }

    /// Returns the parameters
    pub fn param(&self) -> &ParamDiffusivity {
        &self.param
    }

    /// Returns the saturation limits (θr, θs)
    pub fn saturation_limits(&self) -> (f64, f64) {
        (self.theta_r, self.theta_s)
    }

    /// Returns the reference diffusivity (D₀ or Dᵣ)
    pub fn d_ref(&self) -> f64 {
        self.d_ref
    }

    /// Indicates whether D depends on θ or not
    pub fn has_variable_d(&self) -> bool {
        match self.param {
            ParamDiffusivity::Constant { .. } => false,
            ParamDiffusivity::VanGenuchten { .. } => true,
        }
    }

    /// Calculates the effective saturation Se of a clamped θ
    pub fn effective_saturation(&self, theta: f64) -> f64 {
        let theta_safe = f64::min(f64::max(theta, self.theta_r + SATURATION_EPSILON), self.theta_s);
        (theta_safe - self.theta_r) / (self.theta_s - self.theta_r)
    }

    /// Calculates the diffusivity D(θ)
    ///
    /// The saturation is clamped into [θr + ε, θs]; thus the result is always ≥ 0.
    pub fn calc_d(&self, theta: f64) -> f64 {
        match self.param {
            ParamDiffusivity::Constant { d0 } => d0,
            ParamDiffusivity::VanGenuchten { .. } => {
                let m = self.m;
                let se = self.effective_saturation(theta);
                let aux = 1.0 - f64::powf(1.0 - f64::powf(se, 1.0 / m), m);
                self.d_ref * f64::sqrt(se) * aux * aux
            }
        }
    }

    /// Calculates dD/dθ using a central difference with fixed step
    pub fn calc_dd_dtheta(&self, theta: f64) -> f64 {
        if !self.has_variable_d() {
            return 0.0;
        }
        let d_plus = self.calc_d(theta + DERIVATIVE_STEP);
        let d_minus = self.calc_d(theta - DERIVATIVE_STEP);
        (d_plus - d_minus) / (2.0 * DERIVATIVE_STEP)
    }

    /// Returns the maximum of D(θ) over the admissible range [θr, θs]
    pub fn d_max(&self) -> f64 {
        let mut d_max = 0.0;
        let delta = (self.theta_s - self.theta_r) / ((D_MAX_NPOINT - 1) as f64);
        for i in 0..D_MAX_NPOINT {
            let theta = if i == D_MAX_NPOINT - 1 {
                self.theta_s // exact endpoint
            } else {
                self.theta_r + (i as f64) * delta
            };
            d_max = f64::max(d_max, self.calc_d(theta));
        }
        d_max
    }

    /// Checks the saturation value against the strict-mode tolerance band
    ///
    /// Always succeeds in lenient mode.
    pub fn check_saturation(&self, theta: f64) -> Result<(), StrError> {
        if let Some(tol) = self.strict_tolerance {
            if !theta.is_finite() || theta < self.theta_r - tol || theta > self.theta_s + tol {
                return Err("saturation is outside the admissible range of the diffusivity model");
            }
        }
        Ok(())
    }

    /// Checks all saturation values of a field against the strict-mode tolerance band
    pub fn check_field(&self, theta: &[f64]) -> Result<(), StrError> {
        if self.strict_tolerance.is_none() {
            return Ok(());
        }
        for value in theta {
            self.check_saturation(*value)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
