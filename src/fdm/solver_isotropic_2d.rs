use super::{ftcs_step_2d, set_zero_edges_2d, Output2d};
use crate::base::{Control, Grid2d, Stencil, TimeStepPlan, DEFAULT_FACTOR_ISOTROPIC_2D};
use crate::StrError;
use russell_lab::{Matrix, Stopwatch};

/// Implements the explicit (FTCS) solver for isotropic diffusion in 2D
///
/// Solves ∂θ/∂t = D (∂²θ/∂x² + ∂²θ/∂y²) on [0, L] × [0, L] with θ = 0 on the four edges.
pub struct SolverIsotropic2d<'a> {
    /// Holds the square grid
    grid: Grid2d,

    /// Holds the (constant) diffusivity
    diffusivity: f64,

    /// Holds the time-loop options
    control: &'a Control,

    /// Holds the time-step plan
    plan: TimeStepPlan,
}

impl<'a> SolverIsotropic2d<'a> {
    /// Allocates a new instance
    pub fn new(grid: Grid2d, diffusivity: f64, control: &'a Control) -> Result<Self, StrError> {
        if let Some(msg) = control.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate solver because control.validate() failed");
        }
        let factor = control.factor_or(DEFAULT_FACTOR_ISOTROPIC_2D);
        let plan = TimeStepPlan::new(Stencil::Cartesian2d, factor, grid.h, diffusivity, control.t_fin)?;
        Ok(SolverIsotropic2d {
            grid,
            diffusivity,
            control,
            plan,
        })
    }

    /// Returns the grid
    pub fn grid(&self) -> &Grid2d {
        &self.grid
    }

    /// Returns the time-step plan
    pub fn plan(&self) -> &TimeStepPlan {
        &self.plan
    }

    /// Returns the diffusivity
    pub fn diffusivity(&self) -> f64 {
        self.diffusivity
    }

    /// Solves the problem with the initial condition θ₀(x, y)
    pub fn solve<F>(&self, initial: F) -> Result<Output2d, StrError>
    where
        F: Fn(f64, f64) -> f64,
    {
        let mut stopwatch = Stopwatch::new();
        let (n, plan, control) = (self.grid.npoint, &self.plan, self.control);

        // initial field
        let coords = self.grid.coords();
        let mut theta = Matrix::new(n, n);
        for j in 0..n {
            for i in 0..n {
                let value = initial(coords[i], coords[j]);
                if !value.is_finite() {
                    return Err("the initial condition must be finite");
                }
                theta.set(j, i, value);
            }
        }
        set_zero_edges_2d(&mut theta);
        let theta_ini = theta.clone();

        // time loop (double buffer)
        let mut theta_new = Matrix::new(n, n);
        control.print_plan("isotropic diffusion 2D", n, self.grid.h, plan);
        for timestep in 0..plan.nt {
            ftcs_step_2d(&mut theta_new, &theta, plan.alpha);
            set_zero_edges_2d(&mut theta_new);
            std::mem::swap(&mut theta, &mut theta_new);
            control.print_timestep(timestep, plan);
        }

        // results
        let elapsed_ns = stopwatch.stop();
        control.print_elapsed(elapsed_ns);
        Ok(Output2d {
            coords,
            theta_ini,
            theta,
            plan: *plan,
            elapsed_ns,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SolverIsotropic2d;
    use crate::analytical::product_sines_decay_2d;
    use crate::base::{ic_circular_drop, ic_product_of_sines, Control, Grid2d};
    use crate::util::error_l2_2d;
    use russell_lab::{approx_eq, Matrix};

    #[test]
    fn new_captures_errors() {
        let grid = Grid2d::new(1.0, 11).unwrap();
        let mut control = Control::new();
        control.stability_factor = Some(0.26);
        assert_eq!(
            SolverIsotropic2d::new(grid, 0.1, &control).err(),
            Some("stability factor exceeds the admissible bound of the stencil")
        );
        control.stability_factor = Some(0.25);
        assert!(SolverIsotropic2d::new(grid, 0.1, &control).is_ok());
    }

    #[test]
    fn solve_keeps_zero_edges() {
        let grid = Grid2d::new(1.0, 11).unwrap();
        let mut control = Control::new();
        control.t_fin = 0.1;
        let solver = SolverIsotropic2d::new(grid, 0.1, &control).unwrap();
        let out = solver.solve(|_, _| 1.0).unwrap();
        for k in 0..11 {
            assert_eq!(out.theta_ini.get(0, k), 0.0);
            assert_eq!(out.theta.get(0, k), 0.0);
            assert_eq!(out.theta.get(10, k), 0.0);
            assert_eq!(out.theta.get(k, 0), 0.0);
            assert_eq!(out.theta.get(k, 10), 0.0);
        }
        assert_eq!(out.theta_ini.get(5, 5), 1.0);
        assert!(out.center_value() < 1.0);
    }

    #[test]
    fn solve_matches_product_of_sines() {
        let (ll, d) = (1.0, 0.1);
        let grid = Grid2d::new(ll, 21).unwrap();
        let mut control = Control::new();
        control.t_fin = 0.2;
        let solver = SolverIsotropic2d::new(grid, d, &control).unwrap();
        let out = solver.solve(ic_product_of_sines(ll)).unwrap();
        let mut ana = Matrix::new(21, 21);
        for j in 0..21 {
            for i in 0..21 {
                let value = product_sines_decay_2d(out.coords[i], out.coords[j], out.plan.t_real, d, ll);
                ana.set(j, i, value);
            }
        }
        let err = error_l2_2d(&out.theta, &ana, grid.h);
        assert!(err < 1e-3);
    }

    #[test]
    fn solve_preserves_symmetry() {
        let grid = Grid2d::new(2.0, 41).unwrap();
        let mut control = Control::new();
        control.t_fin = 0.1;
        let solver = SolverIsotropic2d::new(grid, 0.1, &control).unwrap();
        let out = solver.solve(ic_circular_drop(2.0, 0.37)).unwrap();
        for j in 0..41 {
            for i in 0..41 {
                approx_eq(out.theta.get(j, i), out.theta.get(i, j), 1e-14);
                approx_eq(out.theta.get(j, i), out.theta.get(j, 40 - i), 1e-14);
            }
        }
    }
}
