use super::{error_l2_2d, ConvergenceRecord};
use crate::analytical::product_sines_decay_2d;
use crate::base::{ic_product_of_sines, Control, Grid2d};
use crate::fdm::SolverIsotropic2d;
use crate::StrError;
use russell_lab::Matrix;
use serde::{Deserialize, Serialize};

/// Classifies the error reduction per halving of the grid spacing
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum OrderVerdict {
    /// Ratio > 3.5 (second order confirmed)
    Quadratic,

    /// Ratio in [2.0, 3.5]
    SubOptimal,

    /// Ratio < 2.0
    Suspect,
}

impl OrderVerdict {
    /// Returns the verdict corresponding to an error ratio per halving of h
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 3.5 {
            OrderVerdict::Quadratic
        } else if ratio >= 2.0 {
            OrderVerdict::SubOptimal
        } else {
            OrderVerdict::Suspect
        }
    }
}

/// Holds the observed error reduction between two successive resolutions
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ObservedRate {
    /// Raw ratio e[i-1] / e[i]
    pub ratio: f64,

    /// Observed order p = ln(ratio) / ln(h[i-1] / h[i])
    pub order: f64,

    /// Ratio per halving of the spacing 2ᵖ (equals the raw ratio if h is exactly halved)
    pub halving_ratio: f64,

    /// Classification of the ratio per halving
    pub verdict: OrderVerdict,
}

/// Runs the 2D solver at increasing resolutions and measures the order of convergence
///
/// The problem has the separable solution:
///
/// ```text
/// θ₀(x, y) = sin(πx/L) sin(πy/L)
/// θ(x, y, t) = exp(-2 D (π/L)² t) θ₀(x, y)
/// ```
///
/// The classification of the observed orders is for reporting only; it never fails the run.
pub struct ConvergenceAnalyzer {
    /// Side length of the square
    pub ll: f64,

    /// Constant diffusivity
    pub diffusivity: f64,

    /// Time-loop options shared by all resolutions
    pub control: Control,

    /// Number of nodes along each axis (strictly increasing)
    pub resolutions: Vec<usize>,
}

impl ConvergenceAnalyzer {
    /// Allocates a new instance
    pub fn new(ll: f64, diffusivity: f64, t_fin: f64, resolutions: &[usize]) -> Result<Self, StrError> {
        if resolutions.is_empty() {
            return Err("at least one resolution is required");
        }
        for i in 0..resolutions.len() {
            if resolutions[i] < 3 {
                return Err("the number of nodes must be at least 3");
            }
            if i > 0 && resolutions[i] <= resolutions[i - 1] {
                return Err("the resolutions must be strictly increasing");
            }
        }
        let mut control = Control::new();
        control.t_fin = t_fin;
        if let Some(msg) = control.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate analyzer because control.validate() failed");
        }
        Ok(ConvergenceAnalyzer {
            ll,
            diffusivity,
            control,
            resolutions: resolutions.to_vec(),
        })
    }

    /// Runs all resolutions
    pub fn run(&self) -> Result<ConvergenceRecord, StrError> {
        let (ll, d) = (self.ll, self.diffusivity);
        let mut record = ConvergenceRecord::new("isotropic diffusion 2D: product of sines");
        for npoint in &self.resolutions {
            let grid = Grid2d::new(ll, *npoint)?;
            let solver = SolverIsotropic2d::new(grid, d, &self.control)?;
            let out = solver.solve(ic_product_of_sines(ll))?;
            let mut reference = Matrix::new(grid.npoint, grid.npoint);
            for j in 0..grid.npoint {
                for i in 0..grid.npoint {
                    let value = product_sines_decay_2d(out.coords[i], out.coords[j], out.plan.t_real, d, ll);
                    reference.set(j, i, value);
                }
            }
            let error = error_l2_2d(&out.theta, &reference, grid.h);
            record.push(grid.npoint, grid.h, out.plan.dt, error, out.elapsed_ns);
        }
        if self.control.verbose {
            ConvergenceAnalyzer::print_table(&record);
        }
        Ok(record)
    }

    /// Returns the observed rates between successive resolutions
    pub fn rates(record: &ConvergenceRecord) -> Vec<ObservedRate> {
        let mut rates = Vec::new();
        for i in 1..record.len() {
            let ratio = record.error[i - 1] / record.error[i];
            let order = f64::ln(ratio) / f64::ln(record.h[i - 1] / record.h[i]);
            let halving_ratio = f64::powf(2.0, order);
            rates.push(ObservedRate {
                ratio,
                order,
                halving_ratio,
                verdict: OrderVerdict::from_ratio(halving_ratio),
            });
        }
        rates
    }

    /// Prints a table with the errors and observed rates
    pub fn print_table(record: &ConvergenceRecord) {
        let rates = ConvergenceAnalyzer::rates(record);
        println!("{}", record.name);
        println!(
            "{:>6} {:>11} {:>11} {:>11} {:>8} {:>7} {:>8} {:>11}",
            "N", "h", "dt", "L2 error", "ratio", "p", "2^p", "verdict"
        );
        for i in 0..record.len() {
            let line = format!(
                "{:>6} {:>11.4e} {:>11.4e} {:>11.4e}",
                record.npoint[i], record.h[i], record.dt[i], record.error[i]
            );
            if i == 0 {
                println!("{}", line);
            } else {
                let r = &rates[i - 1];
                println!(
                    "{} {:>8.3} {:>7.3} {:>8.3} {:>11}",
                    line,
                    r.ratio,
                    r.order,
                    r.halving_ratio,
                    format!("{:?}", r.verdict)
                );
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ConvergenceAnalyzer, OrderVerdict};
    use crate::util::ConvergenceRecord;
    use russell_lab::approx_eq;

    #[test]
    fn new_captures_errors() {
        assert_eq!(
            ConvergenceAnalyzer::new(1.0, 0.1, 0.2, &[]).err(),
            Some("at least one resolution is required")
        );
        assert_eq!(
            ConvergenceAnalyzer::new(1.0, 0.1, 0.2, &[2, 11]).err(),
            Some("the number of nodes must be at least 3")
        );
        assert_eq!(
            ConvergenceAnalyzer::new(1.0, 0.1, 0.2, &[21, 11]).err(),
            Some("the resolutions must be strictly increasing")
        );
        assert_eq!(
            ConvergenceAnalyzer::new(1.0, 0.1, 0.0, &[11, 21]).err(),
            Some("cannot allocate analyzer because control.validate() failed")
        );
    }

    #[test]
    fn verdict_works() {
        assert_eq!(OrderVerdict::from_ratio(4.0), OrderVerdict::Quadratic);
        assert_eq!(OrderVerdict::from_ratio(3.5), OrderVerdict::SubOptimal);
        assert_eq!(OrderVerdict::from_ratio(2.0), OrderVerdict::SubOptimal);
        assert_eq!(OrderVerdict::from_ratio(1.9), OrderVerdict::Suspect);
    }

    #[test]
    fn rates_work() {
        let mut record = ConvergenceRecord::new("test");
        record.push(11, 0.1, 0.0, 4e-2, 0);
        record.push(21, 0.05, 0.0, 1e-2, 0);
        record.push(31, 0.1 / 3.0, 0.0, 1e-2 / 2.25, 0);
        record.push(41, 0.025, 0.0, 1e-2 / 2.25 / 1.5, 0);
        let rates = ConvergenceAnalyzer::rates(&record);
        assert_eq!(rates.len(), 3);
        approx_eq(rates[0].ratio, 4.0, 1e-14);
        approx_eq(rates[0].order, 2.0, 1e-14);
        approx_eq(rates[1].ratio, 2.25, 1e-14);
        approx_eq(rates[1].order, 2.0, 1e-13);
        approx_eq(rates[1].halving_ratio, 4.0, 1e-12);
        assert_eq!(rates[1].verdict, OrderVerdict::Quadratic);
        approx_eq(rates[2].order, f64::ln(1.5) / f64::ln(4.0 / 3.0), 1e-13);
        assert_eq!(rates[2].verdict, OrderVerdict::SubOptimal);
    }

    #[test]
    fn run_works() {
        let analyzer = ConvergenceAnalyzer::new(1.0, 0.1, 0.05, &[11, 21]).unwrap();
        let record = analyzer.run().unwrap();
        assert_eq!(record.npoint, &[11, 21]);
        assert!(record.error[1] < record.error[0]);
        let rates = ConvergenceAnalyzer::rates(&record);
        assert!(rates[0].order > 1.8);
    }
}
