use super::{conservative_step_1d, front_position, FrontSample, MassBalance, Output1d, SnapshotRecorder};
use crate::base::{Control, DiffusivityModel, Grid1d, Stencil, TimeStepPlan, DEFAULT_FACTOR_CONSERVATIVE_1D};
use crate::StrError;
use russell_lab::{Stopwatch, Vector};

/// Implements the flux-conservative explicit solver for nonlinear diffusion in 1D
///
/// Solves ∂θ/∂t = ∂/∂x (D(θ) ∂θ/∂x) on [0, L] with θ(0) = θs and θ(L) = θr.
///
/// The time step is computed once from the maximum diffusivity over [θr, θs], thus the
/// scheme remains stable although D(θ) vanishes at the dry end.
pub struct SolverConservative1d<'a> {
    /// Holds the grid
    grid: Grid1d,

    /// Holds the diffusivity model
    model: &'a DiffusivityModel,

    /// Holds the time-loop options
    control: &'a Control,

    /// Holds the time-step plan (computed with D_max)
    plan: TimeStepPlan,

    /// Holds β = Δt / h²
    beta: f64,
}

impl<'a> SolverConservative1d<'a> {
    /// Allocates a new instance
    pub fn new(grid: Grid1d, model: &'a DiffusivityModel, control: &'a Control) -> Result<Self, StrError> {
        if let Some(msg) = control.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate solver because control.validate() failed");
        }
        let d_max = model.d_max();
        let factor = control.factor_or(DEFAULT_FACTOR_CONSERVATIVE_1D);
        let plan = TimeStepPlan::new(Stencil::Cartesian1d, factor, grid.h, d_max, control.t_fin)?;
        let beta = plan.dt / (grid.h * grid.h);
        Ok(SolverConservative1d {
            grid,
            model,
            control,
            plan,
            beta,
        })
    }

    /// Returns the time-step plan
    pub fn plan(&self) -> &TimeStepPlan {
        &self.plan
    }

    /// Solves the wetting problem starting from a dry domain (θ = θr everywhere)
    pub fn solve(&self) -> Result<Output1d, StrError> {
        let (theta_r, _) = self.model.saturation_limits();
        self.solve_from(|_| theta_r)
    }

    /// Solves the problem with the initial condition θ₀(x)
    ///
    /// The boundary values θs (left) and θr (right) replace θ₀ at the ends.
    pub fn solve_from<F>(&self, initial: F) -> Result<Output1d, StrError>
    where
        F: Fn(f64) -> f64,
    {
        let mut stopwatch = Stopwatch::new();
        let (n, h, plan, control) = (self.grid.npoint, self.grid.h, &self.plan, self.control);
        let (theta_r, theta_s) = self.model.saturation_limits();

        // initial field
        let x = self.grid.coords();
        let mut theta = Vector::new(n);
        for i in 0..n {
            theta[i] = initial(x[i]);
        }
        self.model.check_field(theta.as_data())?;
        theta[0] = theta_s;
        theta[n - 1] = theta_r;
        let theta_ini = theta.clone();

        // auxiliary
        let mut theta_new = theta.clone();
        let mut d_node = Vector::new(n);
        let mut recorder = SnapshotRecorder::new(&control.t_snapshots);
        let mut front = Vec::new();
        let mut balance = if control.track_mass_balance {
            let mass = interior_mass(&theta, h);
            Some(MassBalance {
                mass_ini: mass,
                mass_fin: mass,
                boundary_exchange: 0.0,
                max_discrepancy: 0.0,
            })
        } else {
            None
        };

        // time loop
        control.print_plan("conservative nonlinear diffusion 1D", n, h, plan);
        for timestep in 0..plan.nt {
            let t = (timestep as f64) * plan.dt;
            recorder.record(t, &theta);
            if control.n_front_interval > 0 && timestep % control.n_front_interval == 0 {
                if let Some(xf) = front_position(x.as_data(), theta.as_data(), control.front_level) {
                    front.push(FrontSample { t, x: xf });
                }
            }

            // update
            let (flux_first, flux_last) =
                conservative_step_1d(&mut theta_new, &theta, &mut d_node, self.model, self.beta);
            theta_new[0] = theta_s;
            theta_new[n - 1] = theta_r;

            // mass balance: Δ(Σθ h) = (Δt/h) (F[N-3/2] - F[½])
            if let Some(mb) = balance.as_mut() {
                let mass_new = interior_mass(&theta_new, h);
                let exchange = (plan.dt / h) * (flux_last - flux_first);
                let discrepancy = f64::abs((mass_new - mb.mass_fin) - exchange);
                mb.max_discrepancy = f64::max(mb.max_discrepancy, discrepancy);
                mb.boundary_exchange += exchange;
                mb.mass_fin = mass_new;
            }

            std::mem::swap(&mut theta, &mut theta_new);
            control.print_timestep(timestep, plan);
        }
        recorder.finish(plan, &theta);

        // results
        let elapsed_ns = stopwatch.stop();
        control.print_elapsed(elapsed_ns);
        if let Some(mb) = balance.as_ref() {
            if control.verbose {
                println!("mass balance: max discrepancy = {:e}", mb.max_discrepancy);
            }
        }
        Ok(Output1d {
            x,
            theta_ini,
            theta,
            plan: *plan,
            snapshots: recorder.snapshots,
            front,
            mass_balance: balance,
            elapsed_ns,
        })
    }
}

/// Returns Σθ h over the interior nodes
fn interior_mass(theta: &Vector, h: f64) -> f64 {
    let n = theta.dim();
    let mut sum = 0.0;
    for i in 1..(n - 1) {
        sum += theta[i];
    }
    sum * h
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
