use super::{STABILITY_LIMIT_1D, STABILITY_LIMIT_2D, STABILITY_LIMIT_RADIAL};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the finite-difference stencils and their stability bounds
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Stencil {
    /// 3-point stencil in 1D Cartesian coordinates
    Cartesian1d,

    /// 3-point stencil in cylindrical coordinates with the r = 0 limit
    Radial1d,

    /// 5-point stencil in 2D Cartesian coordinates
    Cartesian2d,
}

impl Stencil {
    /// Returns the admissible (upper) bound of the stability factor
    pub fn stability_limit(&self) -> f64 {
        match self {
            Stencil::Cartesian1d => STABILITY_LIMIT_1D,
            Stencil::Radial1d => STABILITY_LIMIT_RADIAL,
            Stencil::Cartesian2d => STABILITY_LIMIT_2D,
        }
    }
}

/// Holds the time-step plan of an explicit run
///
/// ```text
/// Δt = f h² / D
/// Nt = ⌊T / Δt⌋
/// T_real = Nt Δt
/// α = D Δt / h²
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TimeStepPlan {
    /// Stability factor f
    pub factor: f64,

    /// Time increment Δt
    pub dt: f64,

    /// Number of time steps Nt
    pub nt: usize,

    /// Requested final time T
    pub t_fin: f64,

    /// Simulated time T_real = Nt Δt (may be slightly smaller than T)
    pub t_real: f64,

    /// Coefficient α = D Δt / h²
    pub alpha: f64,
}

impl TimeStepPlan {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `stencil` -- defines the admissible bound of the stability factor
    /// * `factor` -- the stability factor f
    /// * `h` -- the grid spacing
    /// * `d_ref` -- the (maximum) diffusivity used to compute Δt
    /// * `t_fin` -- the requested final time
    pub fn new(stencil: Stencil, factor: f64, h: f64, d_ref: f64, t_fin: f64) -> Result<Self, StrError> {
        if !(factor > 0.0) {
            return Err("the stability factor must be positive");
        }
        if factor > stencil.stability_limit() {
            return Err("stability factor exceeds the admissible bound of the stencil");
        }
        if !(h > 0.0) {
            return Err("the grid spacing must be positive");
        }
        if !(d_ref > 0.0) || !d_ref.is_finite() {
            return Err("the diffusivity must be positive");
        }
        if !(t_fin > 0.0) || !t_fin.is_finite() {
            return Err("the final time must be positive");
        }
        let dt = factor * h * h / d_ref;
        let nt = f64::floor(t_fin / dt) as usize;
        Ok(TimeStepPlan {
            factor,
            dt,
            nt,
            t_fin,
            t_real: (nt as f64) * dt,
            alpha: d_ref * dt / (h * h),
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Stencil, TimeStepPlan};
    use russell_lab::approx_eq;

    #[test]
    fn new_captures_errors() {
        assert_eq!(
            TimeStepPlan::new(Stencil::Cartesian1d, 0.51, 0.1, 1.0, 1.0).err(),
            Some("stability factor exceeds the admissible bound of the stencil")
        );
        assert_eq!(
            TimeStepPlan::new(Stencil::Cartesian2d, 0.26, 0.1, 1.0, 1.0).err(),
            Some("stability factor exceeds the admissible bound of the stencil")
        );
        assert_eq!(
            TimeStepPlan::new(Stencil::Radial1d, 0.3, 0.1, 1.0, 1.0).err(),
            Some("stability factor exceeds the admissible bound of the stencil")
        );
        assert_eq!(
            TimeStepPlan::new(Stencil::Cartesian1d, 0.0, 0.1, 1.0, 1.0).err(),
            Some("the stability factor must be positive")
        );
        assert_eq!(
            TimeStepPlan::new(Stencil::Cartesian1d, 0.4, 0.1, 0.0, 1.0).err(),
            Some("the diffusivity must be positive")
        );
        assert_eq!(
            TimeStepPlan::new(Stencil::Cartesian1d, 0.4, 0.1, 1.0, -1.0).err(),
            Some("the final time must be positive")
        );
    }

    #[test]
    fn new_works() {
        // L = 1, N = 51, D = 0.1, T = 0.5, f = 0.45
        let plan = TimeStepPlan::new(Stencil::Cartesian1d, 0.45, 0.02, 0.1, 0.5).unwrap();
        approx_eq(plan.dt, 1.8e-3, 1e-15);
        assert_eq!(plan.nt, 277);
        approx_eq(plan.t_real, 277.0 * 1.8e-3, 1e-14);
        approx_eq(plan.alpha, 0.45, 1e-14);
        assert!(plan.t_real <= plan.t_fin);

        // bounds are inclusive
        assert!(TimeStepPlan::new(Stencil::Cartesian1d, 0.5, 0.1, 1.0, 1.0).is_ok());
        assert!(TimeStepPlan::new(Stencil::Cartesian2d, 0.25, 0.1, 1.0, 1.0).is_ok());
    }
}
