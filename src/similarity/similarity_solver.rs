use super::ParamShooting;
use crate::base::{DiffusivityModel, FRONT_LEVEL, SATURATION_EPSILON};
use crate::fdm::front_position;
use crate::StrError;
use russell_lab::{RootFinder, Vector};
use russell_ode::{OdeSolver, Params, System};
use serde::{Deserialize, Serialize};

/// Lower bound of D(θ) inside the ODE right-hand side
const D_FLOOR: f64 = 1e-16;

/// Residual reported for a failed trial integration
const FAILED_TRIAL_RESIDUAL: f64 = 100.0;

/// Holds the results of the shooting method
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShootingSolution {
    /// Converged slope C = dθ/dφ at φ = 0
    pub c_shot: f64,

    /// Stations φ of the profile
    pub phi: Vector,

    /// Profile θ(φ)
    pub theta: Vector,

    /// φ where θ crosses 0.5 (linear interpolation)
    pub phi_front: f64,

    /// Far-field residual θ(φ_max) - θr at the converged slope
    pub residual: f64,

    /// Number of trial integrations
    pub n_trials: usize,
}

/// Holds the arguments of the ODE right-hand side
struct BoltzmannArgs {
    model: DiffusivityModel,
    d_ref: f64,
    theta_min: f64,
    theta_max: f64,
}

/// Solves the Boltzmann similarity ODE by the shooting method
///
/// The ODE is integrated in the scaled variable ξ = φ / √D_ref:
///
/// ```text
/// dθ/dξ  = z
/// dz/dξ  = -(1/D̃(θ)) ((ξ/2) z + D̃'(θ) z²)
/// D̃ = D / D_ref    z = √D_ref y₂
/// ```
///
/// Inside the right-hand side θ is clamped into [θr + ε, θs] and D is floored, thus
/// overshoot of the integrator never reaches the diffusivity model. A trial that fails
/// is reported to the root finder as a large residual.
pub struct SimilaritySolver {
    /// Holds the diffusivity model
    model: DiffusivityModel,

    /// Holds the parameters
    param: ParamShooting,

    /// Holds the parameters of the ODE solver
    ode_params: Params,

    /// Holds √D_ref
    scale: f64,
}

impl SimilaritySolver {
    /// Allocates a new instance
    pub fn new(model: &DiffusivityModel, param: ParamShooting) -> Result<Self, StrError> {
        if let Some(msg) = param.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate similarity solver because param.validate() failed");
        }
        let mut ode_params = Params::new(param.ode_method);
        ode_params.newton.use_numerical_jacobian = true;
        ode_params.set_tolerances(param.ode_abs_tol, param.ode_rel_tol, None)?;
        Ok(SimilaritySolver {
            model: *model,
            param,
            ode_params,
            scale: f64::sqrt(model.d_ref()),
        })
    }

    /// Returns the far-field residual θ(φ_max) - θr for a given slope C
    ///
    /// Returns +100 if the trial integration fails.
    pub fn residual(&self, c: f64) -> f64 {
        if !c.is_finite() {
            return FAILED_TRIAL_RESIDUAL;
        }
        let (theta_r, _) = self.model.saturation_limits();
        let xi_max = self.param.phi_max / self.scale;
        match self.integrate(c, &[0.0, xi_max]) {
            Ok(values) => values[1] - theta_r,
            Err(_) => FAILED_TRIAL_RESIDUAL,
        }
    }

    /// Finds the slope C and computes the profile θ(φ)
    pub fn solve(&self) -> Result<ShootingSolution, StrError> {
        let mut n_trials = 0;
        let c_shot = self.find_slope(&mut n_trials)?;

        // check the converged slope
        let residual = self.residual(c_shot);
        n_trials += 1;
        if self.param.verbose {
            println!("converged: C = {:.6e}, residual = {:.3e}, trials = {}", c_shot, residual, n_trials);
        }
        if !(f64::abs(residual) <= self.param.tol_residual) {
            return Err("shooting method did not converge within the residual tolerance");
        }

        // profile
        let n = self.param.n_profile;
        let dphi = self.param.phi_profile_max / ((n - 1) as f64);
        let mut phi = Vector::new(n);
        let mut xi = vec![0.0; n];
        for k in 0..n {
            phi[k] = (k as f64) * dphi;
            xi[k] = phi[k] / self.scale;
        }
        let theta = Vector::from(&self.integrate(c_shot, &xi)?);
        let phi_front = front_position(phi.as_data(), theta.as_data(), FRONT_LEVEL)
            .ok_or("the similarity profile does not cross the front level")?;
        Ok(ShootingSolution {
            c_shot,
            phi,
            theta,
            phi_front,
            residual,
            n_trials,
        })
    }

    /// Finds the slope C such that the far-field residual vanishes
    fn find_slope(&self, n_trials: &mut usize) -> Result<f64, StrError> {
        self.bracket_and_refine(|c| self.residual(c), n_trials)
    }

    /// Brackets the root of the residual by expanding or contracting the guess, then runs Brent's method
    ///
    /// A failed trial yields a large positive residual and only steers the bracketing.
    fn bracket_and_refine<F>(&self, residual: F, n_trials: &mut usize) -> Result<f64, StrError>
    where
        F: Fn(f64) -> f64,
    {
        let factor = self.param.bracket_factor;
        let mut c_a = self.param.c_guess;
        let mut r_a = self.trial(c_a, &residual, n_trials);
        if r_a == 0.0 {
            return Ok(c_a);
        }
        let mut bracket = None;
        for _ in 0..self.param.n_bracket_max {
            // positive residual: the slope must be steeper
            let c_b = if r_a > 0.0 { c_a * factor } else { c_a / factor };
            let r_b = self.trial(c_b, &residual, n_trials);
            if r_b == 0.0 {
                return Ok(c_b);
            }
            if r_a * r_b < 0.0 {
                bracket = Some((c_a, c_b));
                break;
            }
            c_a = c_b;
            r_a = r_b;
        }
        let (c_a, c_b) = bracket.ok_or("shooting method failed to bracket the far-field residual")?;
        let (xa, xb) = if c_a < c_b { (c_a, c_b) } else { (c_b, c_a) };
        let root_finder = RootFinder::new();
        let (c_root, _) = root_finder
            .brent(xa, xb, n_trials, |c, count| {
                *count += 1;
                Ok(residual(c))
            })
            .map_err(|_| "shooting method did not converge within the residual tolerance")?;
        Ok(c_root)
    }

    /// Runs one trial and prints it in verbose mode
    fn trial<F>(&self, c: f64, residual: &F, n_trials: &mut usize) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let value = residual(c);
        *n_trials += 1;
        if self.param.verbose {
            println!("trial {:>3}: C = {:>13.6e}, residual = {:>10.3e}", n_trials, c, value);
        }
        value
    }

    /// Integrates the scaled ODE and returns θ at the given stations
    ///
    /// The first station must be ξ = 0.
    fn integrate(&self, c: f64, xi_stations: &[f64]) -> Result<Vec<f64>, StrError> {
        if !c.is_finite() {
            return Err("the slope must be finite");
        }
        let (theta_r, theta_s) = self.model.saturation_limits();
        let mut args = BoltzmannArgs {
            model: self.model,
            d_ref: self.model.d_ref(),
            theta_min: theta_r + SATURATION_EPSILON,
            theta_max: theta_s,
        };

        // ODE system: dθ/dξ = z and dz/dξ = -((ξ/2) z + D̃' z²) / D̃
        let system = System::new(2, |f: &mut Vector, xi: f64, y: &Vector, args: &mut BoltzmannArgs| {
            let theta = f64::max(args.theta_min, f64::min(y[0], args.theta_max));
            let d = f64::max(args.model.calc_d(theta), D_FLOOR) / args.d_ref;
            let dd = args.model.calc_dd_dtheta(theta) / args.d_ref;
            f[0] = y[1];
            f[1] = -(0.5 * xi * y[1] + dd * y[1] * y[1]) / d;
            Ok(())
        });
        let mut ode = OdeSolver::new(self.ode_params, system)?;

        // integrate from station to station
        let mut y = Vector::from(&[theta_s, c * self.scale]);
        let mut values = Vec::with_capacity(xi_stations.len());
        values.push(theta_s);
        for k in 1..xi_stations.len() {
            ode.solve(&mut y, xi_stations[k - 1], xi_stations[k], None, &mut args)?;
            if !y[0].is_finite() || !y[1].is_finite() {
                return Err("the similarity ODE produced non-finite values");
            }
            values.push(y[0]);
        }
        Ok(values)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
