use russell_ode::Method;

/// Holds parameters for the shooting method
///
/// The initial guess of the slope depends on the diffusivity model; the defaults
/// correspond to Whatman No. 1 paper (see [crate::base::Samples::whatman_paper]).
#[derive(Clone, Copy, Debug)]
pub struct ParamShooting {
    /// Initial guess of the slope C = dθ/dφ at φ = 0
    pub c_guess: f64,

    /// Cutoff φ_max where the far-field condition θ = θr is imposed
    pub phi_max: f64,

    /// Upper limit of the output profile θ(φ)
    pub phi_profile_max: f64,

    /// Number of stations of the output profile
    pub n_profile: usize,

    /// Tolerance on the far-field residual |θ(φ_max) - θr|
    pub tol_residual: f64,

    /// Factor to expand or contract the slope while bracketing the root (> 1)
    pub bracket_factor: f64,

    /// Maximum number of trials while bracketing the root
    pub n_bracket_max: usize,

    /// ODE integration method
    pub ode_method: Method,

    /// Absolute tolerance of the ODE integration
    pub ode_abs_tol: f64,

    /// Relative tolerance of the ODE integration
    pub ode_rel_tol: f64,

    /// Prints the trials
    pub verbose: bool,
}

impl ParamShooting {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        ParamShooting {
            c_guess: -180.0,
            phi_max: 5.0,
            phi_profile_max: 5e-3,
            n_profile: 1001,
            tol_residual: 1e-4,
            bracket_factor: 1.5,
            n_bracket_max: 30,
            ode_method: Method::Radau5,
            ode_abs_tol: 1e-8,
            ode_rel_tol: 1e-6,
            verbose: false,
        }
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if !(self.c_guess < 0.0) || !self.c_guess.is_finite() {
            return Some(format!("c_guess = {:?} is incorrect; it must be < 0.0", self.c_guess));
        }
        if !(self.phi_max > 0.0) || !self.phi_max.is_finite() {
            return Some(format!("phi_max = {:?} is incorrect; it must be > 0.0", self.phi_max));
        }
        if !(self.phi_profile_max > 0.0) || !self.phi_profile_max.is_finite() {
            return Some(format!(
                "phi_profile_max = {:?} is incorrect; it must be > 0.0",
                self.phi_profile_max
            ));
        }
        if self.n_profile < 2 {
            return Some(format!("n_profile = {} is incorrect; it must be ≥ 2", self.n_profile));
        }
        if !(self.tol_residual > 0.0) {
            return Some(format!(
                "tol_residual = {:?} is incorrect; it must be > 0.0",
                self.tol_residual
            ));
        }
        if !(self.bracket_factor > 1.0) {
            return Some(format!(
                "bracket_factor = {:?} is incorrect; it must be > 1.0",
                self.bracket_factor
            ));
        }
        if self.n_bracket_max < 1 {
            return Some(format!("n_bracket_max = {} is incorrect; it must be ≥ 1", self.n_bracket_max));
        }
        None // all good
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ParamShooting;

    #[test]
    fn new_works() {
        let param = ParamShooting::new();
        assert_eq!(param.c_guess, -180.0);
        assert_eq!(param.phi_max, 5.0);
        assert_eq!(param.tol_residual, 1e-4);
        assert_eq!(param.validate(), None);
    }

    #[test]
    fn validate_captures_errors() {
        let mut param = ParamShooting::new();
        param.c_guess = 1.0;
        assert_eq!(
            param.validate(),
            Some("c_guess = 1.0 is incorrect; it must be < 0.0".to_string())
        );
        param.c_guess = -1.0;
        param.phi_max = 0.0;
        assert_eq!(
            param.validate(),
            Some("phi_max = 0.0 is incorrect; it must be > 0.0".to_string())
        );
        param.phi_max = 1.0;
        param.bracket_factor = 1.0;
        assert_eq!(
            param.validate(),
            Some("bracket_factor = 1.0 is incorrect; it must be > 1.0".to_string())
        );
        param.bracket_factor = 2.0;
        param.n_profile = 1;
        assert_eq!(
            param.validate(),
            Some("n_profile = 1 is incorrect; it must be ≥ 2".to_string())
        );
    }
}
