use super::{radial_step_1d, Output1d, SnapshotRecorder};
use crate::base::{ic_radial_step, Control, Grid1d, Stencil, TimeStepPlan, DEFAULT_FACTOR_RADIAL_1D};
use crate::StrError;
use russell_lab::{Stopwatch, Vector};

/// Implements the explicit solver for axisymmetric diffusion in cylindrical coordinates
///
/// Solves ∂θ/∂t = D (∂²θ/∂r² + (1/r) ∂θ/∂r) on [0, Lr] with θ(Lr) = 0.
///
/// At r = 0 the radial Laplacian equals the 2D Laplacian 2 ∂²θ/∂r², thus the update of the
/// central node carries 4α and the admissible stability factor is 0.25 (same as in 2D).
pub struct SolverRadial1d<'a> {
    /// Holds the radial grid
    grid: Grid1d,

    /// Holds the (constant) diffusivity
    diffusivity: f64,

    /// Holds the time-loop options
    control: &'a Control,

    /// Holds the time-step plan
    plan: TimeStepPlan,
}

impl<'a> SolverRadial1d<'a> {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `outer_radius` -- the outer radius Lr
    /// * `spacing` -- the desired spacing (the actual spacing is Lr / round(Lr / spacing))
    /// * `diffusivity` -- the constant diffusivity D
    /// * `control` -- the time-loop options
    pub fn new(outer_radius: f64, spacing: f64, diffusivity: f64, control: &'a Control) -> Result<Self, StrError> {
        if let Some(msg) = control.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate solver because control.validate() failed");
        }
        let grid = Grid1d::from_spacing(outer_radius, spacing)?;
        let factor = control.factor_or(DEFAULT_FACTOR_RADIAL_1D);
        let plan = TimeStepPlan::new(Stencil::Radial1d, factor, grid.h, diffusivity, control.t_fin)?;
        Ok(SolverRadial1d {
            grid,
            diffusivity,
            control,
            plan,
        })
    }

    /// Returns the radial grid
    pub fn grid(&self) -> &Grid1d {
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

    /// Solves the spreading of a drop with θ = 1 for r ≤ R₀ and θ = 0 elsewhere
    pub fn solve_drop(&self, drop_radius: f64) -> Result<Output1d, StrError> {
        if !(drop_radius > 0.0) || drop_radius >= self.grid.ll {
            return Err("the drop radius must be positive and smaller than the outer radius");
        }
        self.solve_from(ic_radial_step(drop_radius))
    }

    /// Solves the problem with the initial condition θ₀(r)
    pub fn solve_from<F>(&self, initial: F) -> Result<Output1d, StrError>
    where
        F: Fn(f64) -> f64,
    {
        let mut stopwatch = Stopwatch::new();
        let (n, h, plan, control) = (self.grid.npoint, self.grid.h, &self.plan, self.control);

        // initial field
        let r = self.grid.coords();
        let mut theta = Vector::new(n);
        for i in 0..n {
            theta[i] = initial(r[i]);
            if !theta[i].is_finite() {
                return Err("the initial condition must be finite");
            }
        }
        theta[n - 1] = 0.0;
        let theta_ini = theta.clone();

        // time loop
        let mut theta_new = Vector::new(n);
        let mut recorder = SnapshotRecorder::new(&control.t_snapshots);
        control.print_plan("radial diffusion 1D", n, h, plan);
        for timestep in 0..plan.nt {
            recorder.record((timestep as f64) * plan.dt, &theta);
            radial_step_1d(&mut theta_new, &theta, &r, h, plan.alpha);
            theta_new[n - 1] = 0.0;
            std::mem::swap(&mut theta, &mut theta_new);
            control.print_timestep(timestep, plan);
        }
        recorder.finish(plan, &theta);

        // results
        let elapsed_ns = stopwatch.stop();
        control.print_elapsed(elapsed_ns);
        Ok(Output1d {
            x: r,
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
