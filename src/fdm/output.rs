use crate::base::TimeStepPlan;
use crate::util::write_json;
use crate::StrError;
use russell_lab::{Matrix, Vector};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;

/// Holds a copy of the field at some elapsed time
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Elapsed time
    pub t: f64,

    /// Saturation values
    pub theta: Vector,
}

/// Holds the front position at some elapsed time
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FrontSample {
    /// Elapsed time
    pub t: f64,

    /// Front position
    pub x: f64,
}

/// Holds the discrete mass balance Σθh of a conservative run
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MassBalance {
    /// Initial mass Σθh
    pub mass_ini: f64,

    /// Final mass Σθh
    pub mass_fin: f64,

    /// Cumulated mass exchanged through the faces adjacent to the fixed boundary nodes
    pub boundary_exchange: f64,

    /// Largest per-step discrepancy |Δ(Σθh) - exchange|
    pub max_discrepancy: f64,
}

/// Holds the results of a 1D run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Output1d {
    /// Node coordinates (x or r)
    pub x: Vector,

    /// Initial field (with boundary values imposed)
    pub theta_ini: Vector,

    /// Final field at T_real
    pub theta: Vector,

    /// Time-step plan
    pub plan: TimeStepPlan,

    /// Requested snapshots
    pub snapshots: Vec<Snapshot>,

    /// Front positions (conservative solver only)
    pub front: Vec<FrontSample>,

    /// Mass balance (conservative solver with tracking enabled)
    pub mass_balance: Option<MassBalance>,

    /// Elapsed wall-clock time in nanoseconds
    pub elapsed_ns: u128,
}

impl Output1d {
    /// Returns the pairs (√t, x_front / √t) for all front samples with t > 0
    pub fn front_similarity(&self) -> Vec<(f64, f64)> {
        self.front
            .iter()
            .filter(|s| s.t > 0.0)
            .map(|s| {
                let sqrt_t = f64::sqrt(s.t);
                (sqrt_t, s.x / sqrt_t)
            })
            .collect()
    }

    /// Writes a JSON file with the results
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        write_json(self, full_path)
    }
}

/// Holds the results of a 2D run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Output2d {
    /// Node coordinates along each axis
    pub coords: Vector,

    /// Initial field (with boundary values imposed); row index is y, column index is x
    pub theta_ini: Matrix,

    /// Final field at T_real; row index is y, column index is x
    pub theta: Matrix,

    /// Time-step plan
    pub plan: TimeStepPlan,

    /// Elapsed wall-clock time in nanoseconds
    pub elapsed_ns: u128,
}

impl Output2d {
    /// Returns the value at the central node
    pub fn center_value(&self) -> f64 {
        let c = self.coords.dim() / 2;
        self.theta.get(c, c)
    }

    /// Returns the values along the horizontal line through the center, from the center to the edge
    pub fn radial_cut(&self) -> Vector {
        let n = self.coords.dim();
        let c = n / 2;
        let mut cut = Vector::new(n - c);
        for i in c..n {
            cut[i - c] = self.theta.get(c, i);
        }
        cut
    }

    /// Writes a JSON file with the results
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        write_json(self, full_path)
    }
}

/// Records snapshots of the field at requested times
pub(crate) struct SnapshotRecorder<'a> {
    times: &'a [f64],
    next: usize,
    pub(crate) snapshots: Vec<Snapshot>,
}

impl<'a> SnapshotRecorder<'a> {
    /// Allocates a new instance
    pub(crate) fn new(times: &'a [f64]) -> Self {
        SnapshotRecorder {
            times,
            next: 0,
            snapshots: Vec::with_capacity(times.len()),
        }
    }

    /// Saves a copy of the field for every pending time that has been reached
    pub(crate) fn record(&mut self, t: f64, theta: &Vector) {
        while self.next < self.times.len() && t >= self.times[self.next] {
            self.snapshots.push(Snapshot { t, theta: theta.clone() });
            self.next += 1;
        }
    }

    /// Saves the final field for every pending time up to the requested final time
    ///
    /// Since T_real ≤ T, times in (T_real, T] receive the field at T_real.
    pub(crate) fn finish(&mut self, plan: &TimeStepPlan, theta: &Vector) {
        while self.next < self.times.len() && self.times[self.next] <= plan.t_fin {
            self.snapshots.push(Snapshot {
                t: plan.t_real,
                theta: theta.clone(),
            });
            self.next += 1;
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{FrontSample, Output1d, SnapshotRecorder};
    use crate::base::{Stencil, TimeStepPlan};
    use russell_lab::{approx_eq, Vector};

    #[test]
    fn snapshot_recorder_works() {
        let times = [0.0, 0.25, 0.3];
        let mut recorder = SnapshotRecorder::new(&times);
        let theta = Vector::from(&[1.0, 2.0]);
        recorder.record(0.0, &theta);
        assert_eq!(recorder.snapshots.len(), 1);
        recorder.record(0.2, &theta);
        assert_eq!(recorder.snapshots.len(), 1);
        recorder.record(0.4, &theta);
        assert_eq!(recorder.snapshots.len(), 3);
        assert_eq!(recorder.snapshots[2].t, 0.4);
        recorder.record(0.5, &theta);
        assert_eq!(recorder.snapshots.len(), 3);
    }

    #[test]
    fn snapshot_recorder_finish_works() {
        // dt = 0.3, nt = 3, T_real = 0.9
        let plan = TimeStepPlan::new(Stencil::Cartesian1d, 0.3, 1.0, 1.0, 1.0).unwrap();
        let times = [0.5, 1.0, 2.0];
        let mut recorder = SnapshotRecorder::new(&times);
        let theta = Vector::from(&[1.0, 2.0]);
        recorder.record(0.6, &theta);
        recorder.finish(&plan, &theta);
        assert_eq!(recorder.snapshots.len(), 2);
        approx_eq(recorder.snapshots[1].t, 0.9, 1e-15);
    }

    #[test]
    fn front_similarity_works() {
        let output = Output1d {
            x: Vector::new(3),
            theta_ini: Vector::new(3),
            theta: Vector::new(3),
            plan: TimeStepPlan::new(Stencil::Cartesian1d, 0.4, 0.5, 1.0, 1.0).unwrap(),
            snapshots: Vec::new(),
            front: vec![
                FrontSample { t: 0.0, x: 0.1 },
                FrontSample { t: 4.0, x: 1.0 },
                FrontSample { t: 16.0, x: 2.0 },
            ],
            mass_balance: None,
            elapsed_ns: 0,
        };
        let res = output.front_similarity();
        assert_eq!(res.len(), 2);
        approx_eq(res[0].0, 2.0, 1e-15);
        approx_eq(res[0].1, 0.5, 1e-15);
        approx_eq(res[1].0, 4.0, 1e-15);
        approx_eq(res[1].1, 0.5, 1e-15);
    }
}
