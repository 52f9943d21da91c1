use crate::base::{Control, DiffusivityModel, Grid1d, ParamDiffusivity, Samples, FRONT_LEVEL};
use crate::fdm::{front_position, FrontSample, MassBalance, Snapshot, SolverConservative1d};
use crate::similarity::{ParamShooting, SimilaritySolver};
use crate::util::CacheKey;
use crate::StrError;
use russell_lab::{Stopwatch, Vector};
use serde::{Deserialize, Serialize};

/// Defines the nonlinear wetting case validated by the similarity solution
///
/// A dry strip (θ = θr) is wetted from the left end (θ = θs). The fronts at the
/// snapshot times, scaled by √t, are compared with φ(0.5) from the shooting method.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseWetting1d {
    /// Parameters of the diffusivity model
    pub diffusivity: ParamDiffusivity,

    /// Domain length
    pub ll: f64,

    /// Number of nodes
    pub npoint: usize,

    /// Final time
    pub t_fin: f64,

    /// Snapshot times
    pub t_snapshots: Vec<f64>,

    /// Number of time steps between front samples
    pub n_front_interval: usize,

    /// Initial guess of the slope for the shooting method
    pub c_guess: f64,
}

/// Holds the summary of the nonlinear wetting case
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SummaryWetting1d {
    pub case: CaseWetting1d,
    pub c_shot: f64,
    pub phi_front_ref: f64,
    pub residual: f64,
    pub n_trials: usize,
    pub phi: Vector,
    pub theta_similarity: Vector,
    pub h: f64,
    pub dt: f64,
    pub nt: usize,
    pub x: Vector,
    pub snapshots: Vec<Snapshot>,
    pub front: Vec<FrontSample>,
    pub snapshot_fronts: Vec<FrontSample>,
    pub max_front_deviation: f64,
    pub mass_balance: Option<MassBalance>,
    pub work: usize,
    pub elapsed_shooting_ns: u128,
    pub elapsed_fdm_ns: u128,
}

impl CaseWetting1d {
    /// Allocates a new instance for Whatman No. 1 paper with L = 0.05, N = 301 and T = 2000
    pub fn new() -> Self {
        CaseWetting1d {
            diffusivity: Samples::whatman_paper(),
            ll: 0.05,
            npoint: 301,
            t_fin: 2000.0,
            t_snapshots: vec![100.0, 500.0, 1000.0, 1500.0, 2000.0],
            n_front_interval: 50,
            c_guess: -180.0,
        }
    }

    /// Returns the key identifying this case in a cache
    pub fn key(&self) -> CacheKey {
        let mut values = match self.diffusivity {
            ParamDiffusivity::Constant { d0 } => vec![d0],
            ParamDiffusivity::VanGenuchten {
                theta_r,
                theta_s,
                n,
                ks_over_alpha,
            } => vec![theta_r, theta_s, n, ks_over_alpha],
        };
        values.extend(&[
            self.ll,
            self.npoint as f64,
            self.t_fin,
            self.n_front_interval as f64,
            self.c_guess,
        ]);
        values.extend(&self.t_snapshots);
        CacheKey::new("wetting_1d", &values)
    }

    /// Runs the case
    pub fn run(&self, verbose: bool) -> Result<SummaryWetting1d, StrError> {
        let model = DiffusivityModel::new(&self.diffusivity)?;

        // reference solution
        let mut stopwatch = Stopwatch::new();
        let mut param = ParamShooting::new();
        param.c_guess = self.c_guess;
        param.verbose = verbose;
        let shooting = SimilaritySolver::new(&model, param)?.solve()?;
        let elapsed_shooting_ns = stopwatch.stop();
        if verbose {
            println!("φ(0.5) = {:.6e} (similarity)", shooting.phi_front);
        }

        // finite differences
        let grid = Grid1d::new(self.ll, self.npoint)?;
        let mut control = Control::new();
        control.t_fin = self.t_fin;
        control.t_snapshots = self.t_snapshots.clone();
        control.n_front_interval = self.n_front_interval;
        control.track_mass_balance = true;
        control.verbose = verbose;
        let solver = SolverConservative1d::new(grid, &model, &control)?;
        let out = solver.solve()?;

        // fronts at the snapshot times
        let mut snapshot_fronts = Vec::new();
        let mut max_front_deviation = 0.0;
        for snap in &out.snapshots {
            if snap.t <= 0.0 {
                continue;
            }
            if let Some(xf) = front_position(out.x.as_data(), snap.theta.as_data(), FRONT_LEVEL) {
                let deviation = f64::abs(xf / f64::sqrt(snap.t) / shooting.phi_front - 1.0);
                max_front_deviation = f64::max(max_front_deviation, deviation);
                snapshot_fronts.push(FrontSample { t: snap.t, x: xf });
                if verbose {
                    println!("t = {:>10.3}: x/√t = {:.6e}", snap.t, xf / f64::sqrt(snap.t));
                }
            }
        }
        Ok(SummaryWetting1d {
            case: self.clone(),
            c_shot: shooting.c_shot,
            phi_front_ref: shooting.phi_front,
            residual: shooting.residual,
            n_trials: shooting.n_trials,
            phi: shooting.phi,
            theta_similarity: shooting.theta,
            h: grid.h,
            dt: out.plan.dt,
            nt: out.plan.nt,
            x: out.x,
            snapshots: out.snapshots,
            front: out.front,
            snapshot_fronts,
            max_front_deviation,
            mass_balance: out.mass_balance,
            work: grid.npoint * out.plan.nt,
            elapsed_shooting_ns,
            elapsed_fdm_ns: out.elapsed_ns,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
