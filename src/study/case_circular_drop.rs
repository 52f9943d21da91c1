use crate::analytical::disc_center_value;
use crate::base::{ic_circular_drop, Control, Grid2d};
use crate::fdm::{SolverIsotropic2d, SolverRadial1d};
use crate::util::{error_linf, CacheKey};
use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};

/// Defines the circular-drop case comparing the 2D solver with the radial solver
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CaseCircularDrop {
    /// Side length of the square (2D)
    pub ll: f64,

    /// Outer radius (radial)
    pub outer_radius: f64,

    /// Grid spacing (both solvers)
    pub spacing: f64,

    /// Initial radius of the drop
    pub r0: f64,

    /// Diffusivity
    pub diffusivity: f64,

    /// Final time
    pub t_fin: f64,
}

/// Holds the summary of the circular-drop case
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SummaryCircularDrop {
    pub case: CaseCircularDrop,
    pub npoint_2d: usize,
    pub npoint_radial: usize,
    pub dt: f64,
    pub t_real: f64,
    pub center_2d: f64,
    pub center_radial: f64,
    pub center_analytic: f64,
    pub r: Vector,
    pub theta_radial: Vector,
    pub cut_2d: Vector,
    pub max_cut_difference: f64,
    pub work: usize,
    pub elapsed_2d_ns: u128,
    pub elapsed_radial_ns: u128,
}

impl CaseCircularDrop {
    /// Allocates a new instance with L = 2, Lr = 1, h = 0.02, R₀ = 0.4, D = 0.1 and T = 0.4
    pub fn new() -> Self {
        CaseCircularDrop {
            ll: 2.0,
            outer_radius: 1.0,
            spacing: 0.02,
            r0: 0.4,
            diffusivity: 0.1,
            t_fin: 0.4,
        }
    }

    /// Returns the key identifying this case in a cache
    pub fn key(&self) -> CacheKey {
        CacheKey::new(
            "circular_drop",
            &[
                self.ll,
                self.outer_radius,
                self.spacing,
                self.r0,
                self.diffusivity,
                self.t_fin,
            ],
        )
    }

    /// Runs the case
    pub fn run(&self, verbose: bool) -> Result<SummaryCircularDrop, StrError> {
        if self.outer_radius > 0.5 * self.ll {
            return Err("the outer radius must not exceed half the side length");
        }
        let mut control = Control::new();
        control.t_fin = self.t_fin;
        control.verbose = verbose;

        // 2D
        let grid = Grid2d::from_spacing(self.ll, self.spacing)?;
        let solver_2d = SolverIsotropic2d::new(grid, self.diffusivity, &control)?;
        let out_2d = solver_2d.solve(ic_circular_drop(self.ll, self.r0))?;

        // radial
        let solver_r = SolverRadial1d::new(self.outer_radius, self.spacing, self.diffusivity, &control)?;
        let out_r = solver_r.solve_drop(self.r0)?;

        // comparison along the common radial stations
        let cut_2d = out_2d.radial_cut();
        let n = usize::min(cut_2d.dim(), out_r.theta.dim());
        let max_cut_difference = error_linf(&cut_2d.as_data()[..n], &out_r.theta.as_data()[..n]);
        let npoint_radial = out_r.x.dim();
        let work = grid.npoint * grid.npoint * out_2d.plan.nt + npoint_radial * out_r.plan.nt;
        let center_analytic = disc_center_value(self.r0, self.diffusivity, out_r.plan.t_real);
        if verbose {
            println!(
                "center: 2D = {:.6}, radial = {:.6}, analytic = {:.6}",
                out_2d.center_value(),
                out_r.theta[0],
                center_analytic
            );
        }
        Ok(SummaryCircularDrop {
            case: *self,
            npoint_2d: grid.npoint,
            npoint_radial,
            dt: out_r.plan.dt,
            t_real: out_r.plan.t_real,
            center_2d: out_2d.center_value(),
            center_radial: out_r.theta[0],
            center_analytic,
            r: out_r.x,
            theta_radial: out_r.theta,
            cut_2d,
            max_cut_difference,
            work,
            elapsed_2d_ns: out_2d.elapsed_ns,
            elapsed_radial_ns: out_r.elapsed_ns,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::CaseCircularDrop;

    #[test]
    fn run_captures_errors() {
        let mut case = CaseCircularDrop::new();
        case.outer_radius = 1.5;
        assert_eq!(
            case.run(false).err(),
            Some("the outer radius must not exceed half the side length")
        );
    }
}
