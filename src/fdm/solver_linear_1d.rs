use super::{ftcs_step_1d, Output1d, SnapshotRecorder};
use crate::base::{Control, Grid1d, Stencil, TimeStepPlan, DEFAULT_FACTOR_LINEAR_1D};
use crate::StrError;
use russell_lab::{Stopwatch, Vector};

/// Implements the explicit (FTCS) solver for linear diffusion in 1D
///
/// Solves ∂θ/∂t = D ∂²θ/∂x² on [0, L] with θ = 0 at both ends.
pub struct SolverLinear1d<'a> {
    /// Holds the grid
    grid: Grid1d,

    /// Holds the (constant) diffusivity
    diffusivity: f64,

    /// Holds the time-loop options
    control: &'a Control,

    /// Holds the time-step plan
    plan: TimeStepPlan,
}

impl<'a> SolverLinear1d<'a> {
    /// Allocates a new instance
    pub fn new(grid: Grid1d, diffusivity: f64, control: &'a Control) -> Result<Self, StrError> {
        if let Some(msg) = control.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate solver because control.validate() failed");
        }
        let factor = control.factor_or(DEFAULT_FACTOR_LINEAR_1D);
        let plan = TimeStepPlan::new(Stencil::Cartesian1d, factor, grid.h, diffusivity, control.t_fin)?;
        Ok(SolverLinear1d {
            grid,
            diffusivity,
            control,
            plan,
        })
    }

    /// Returns the time-step plan
    pub fn plan(&self) -> &TimeStepPlan {
        &self.plan
    }

    /// Returns the diffusivity
    pub fn diffusivity(&self) -> f64 {
        self.diffusivity
    }

    /// Solves the problem with the initial condition θ₀(x)
    pub fn solve<F>(&self, initial: F) -> Result<Output1d, StrError>
    where
        F: Fn(f64) -> f64,
    {
        let mut stopwatch = Stopwatch::new();
        let (n, plan, control) = (self.grid.npoint, &self.plan, self.control);

        // initial field
        let x = self.grid.coords();
        let mut theta = Vector::new(n);
        for i in 0..n {
            theta[i] = initial(x[i]);
            if !theta[i].is_finite() {
                return Err("the initial condition must be finite");
            }
        }
        theta[0] = 0.0;
        theta[n - 1] = 0.0;
        let theta_ini = theta.clone();

        // time loop
        let mut theta_new = Vector::new(n);
        let mut recorder = SnapshotRecorder::new(&control.t_snapshots);
        control.print_plan("linear diffusion 1D", n, self.grid.h, plan);
        for timestep in 0..plan.nt {
            recorder.record((timestep as f64) * plan.dt, &theta);
            ftcs_step_1d(&mut theta_new, &theta, plan.alpha);
            theta_new[0] = 0.0;
            theta_new[n - 1] = 0.0;
            std::mem::swap(&mut theta, &mut theta_new);
            control.print_timestep(timestep, plan);
        }
        recorder.finish(plan, &theta);

        // results
        let elapsed_ns = stopwatch.stop();
        control.print_elapsed(elapsed_ns);
        Ok(Output1d {
            x,
            theta_ini,
            theta,
            plan: *plan,
            snapshots: recorder.snapshots,
            front: Vec::new(),
            mass_balance: None,
            elapsed_ns,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SolverLinear1d;
    use crate::analytical::sine_decay_1d;
    use crate::base::{ic_sine, Control, Grid1d};
    use crate::util::error_linf;
    use russell_lab::{approx_eq, Vector};

    #[test]
    fn new_captures_errors() {
        let grid = Grid1d::new(1.0, 11).unwrap();
        let mut control = Control::new();
        control.t_fin = -1.0;
        assert_eq!(
            SolverLinear1d::new(grid, 0.1, &control).err(),
            Some("cannot allocate solver because control.validate() failed")
        );
        control.t_fin = 1.0;
        assert_eq!(
            SolverLinear1d::new(grid, 0.0, &control).err(),
            Some("the diffusivity must be positive")
        );
        control.stability_factor = Some(0.55);
        assert_eq!(
            SolverLinear1d::new(grid, 0.1, &control).err(),
            Some("stability factor exceeds the admissible bound of the stencil")
        );
    }

    #[test]
    fn solve_captures_errors() {
        let grid = Grid1d::new(1.0, 11).unwrap();
        let control = Control::new();
        let solver = SolverLinear1d::new(grid, 0.1, &control).unwrap();
        assert_eq!(
            solver.solve(|_| f64::NAN).err(),
            Some("the initial condition must be finite")
        );
    }

    #[test]
    fn solve_matches_sine_decay() {
        // L = 1, N = 51, D = 0.1, T = 0.5, f = 0.45
        let (ll, d) = (1.0, 0.1);
        let grid = Grid1d::new(ll, 51).unwrap();
        let mut control = Control::new();
        control.t_fin = 0.5;
        control.stability_factor = Some(0.45);
        control.t_snapshots = vec![0.0, 0.25];
        let solver = SolverLinear1d::new(grid, d, &control).unwrap();
        let out = solver.solve(ic_sine(ll)).unwrap();
        assert_eq!(out.plan.nt, 277);
        approx_eq(out.plan.alpha, 0.45, 1e-14);
        let mut ana = Vector::new(51);
        for i in 0..51 {
            ana[i] = sine_decay_1d(out.x[i], out.plan.t_real, d, ll);
        }
        let err = error_linf(out.theta.as_data(), ana.as_data());
        assert!(err <= 1e-3);
        assert_eq!(out.theta[0], 0.0);
        assert_eq!(out.theta[50], 0.0);
        assert_eq!(out.snapshots.len(), 2);
        assert_eq!(out.snapshots[0].t, 0.0);
        assert!(out.snapshots[1].t >= 0.25);
    }

    #[test]
    fn solve_is_deterministic() {
        let grid = Grid1d::new(1.0, 21).unwrap();
        let mut control = Control::new();
        control.t_fin = 0.1;
        let solver = SolverLinear1d::new(grid, 0.1, &control).unwrap();
        let a = solver.solve(ic_sine(1.0)).unwrap();
        let b = solver.solve(ic_sine(1.0)).unwrap();
        assert_eq!(a.theta.as_data(), b.theta.as_data());
    }
}
