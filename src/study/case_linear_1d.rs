use crate::analytical::sine_decay_1d;
use crate::base::{ic_sine, Control, Grid1d};
use crate::fdm::SolverLinear1d;
use crate::util::{error_linf, CacheKey};
use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};

/// Defines the linear 1D case: decay of θ₀ = sin(πx/L) with zero boundary values
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CaseLinear1d {
    /// Domain length
    pub ll: f64,

    /// Number of nodes
    pub npoint: usize,

    /// Diffusivity
    pub diffusivity: f64,

    /// Final time
    pub t_fin: f64,

    /// Stability factor
    pub factor: f64,
}

/// Holds the summary of the linear 1D case
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SummaryLinear1d {
    pub case: CaseLinear1d,
    pub h: f64,
    pub dt: f64,
    pub nt: usize,
    pub t_real: f64,
    pub x: Vector,
    pub theta: Vector,
    pub theta_ana: Vector,
    pub error_linf: f64,
    pub work: usize,
    pub elapsed_ns: u128,
}

impl CaseLinear1d {
    /// Allocates a new instance with L = 1, N = 51, D = 0.1, T = 0.5 and f = 0.45
    pub fn new() -> Self {
        CaseLinear1d {
            ll: 1.0,
            npoint: 51,
            diffusivity: 0.1,
            t_fin: 0.5,
            factor: 0.45,
        }
    }

    /// Returns the key identifying this case in a cache
    pub fn key(&self) -> CacheKey {
        CacheKey::new(
            "linear_1d",
            &[self.ll, self.npoint as f64, self.diffusivity, self.t_fin, self.factor],
        )
    }

    /// Runs the case
    pub fn run(&self, verbose: bool) -> Result<SummaryLinear1d, StrError> {
        let grid = Grid1d::new(self.ll, self.npoint)?;
        let mut control = Control::new();
        control.t_fin = self.t_fin;
        control.stability_factor = Some(self.factor);
        control.verbose = verbose;
        let solver = SolverLinear1d::new(grid, self.diffusivity, &control)?;
        let out = solver.solve(ic_sine(self.ll))?;
        let mut theta_ana = Vector::new(grid.npoint);
        for i in 0..grid.npoint {
            theta_ana[i] = sine_decay_1d(out.x[i], out.plan.t_real, self.diffusivity, self.ll);
        }
        let error = error_linf(out.theta.as_data(), theta_ana.as_data());
        if verbose {
            println!("L∞ error = {:.6e}", error);
        }
        Ok(SummaryLinear1d {
            case: *self,
            h: grid.h,
            dt: out.plan.dt,
            nt: out.plan.nt,
            t_real: out.plan.t_real,
            x: out.x,
            theta: out.theta,
            theta_ana,
            error_linf: error,
            work: grid.npoint * out.plan.nt,
            elapsed_ns: out.elapsed_ns,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::CaseLinear1d;

    #[test]
    fn run_works() {
        let case = CaseLinear1d::new();
        let summary = case.run(false).unwrap();
        assert_eq!(summary.nt, 277);
        assert!(summary.error_linf <= 1e-3);
        let mut other = CaseLinear1d::new();
        assert_eq!(case.key(), other.key());
        other.npoint = 101;
        assert_ne!(case.key(), other.key());
    }
}
