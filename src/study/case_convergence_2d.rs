use crate::util::{CacheKey, ConvergenceAnalyzer, ConvergenceRecord, ObservedRate};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the 2D convergence case with θ₀ = sin(πx/L) sin(πy/L)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseConvergence2d {
    /// Side length
    pub ll: f64,

    /// Diffusivity
    pub diffusivity: f64,

    /// Final time
    pub t_fin: f64,

    /// Number of nodes along each axis (increasing)
    pub resolutions: Vec<usize>,
}

/// Holds the summary of the 2D convergence case
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SummaryConvergence2d {
    pub case: CaseConvergence2d,
    pub record: ConvergenceRecord,
    pub rates: Vec<ObservedRate>,
    pub work: usize,
    pub elapsed_ns: u128,
}

impl CaseConvergence2d {
    /// Allocates a new instance with L = 1, D = 0.1, T = 0.2 and N ∈ {11, 21, 31, 41}
    pub fn new() -> Self {
        CaseConvergence2d {
            ll: 1.0,
            diffusivity: 0.1,
            t_fin: 0.2,
            resolutions: vec![11, 21, 31, 41],
        }
    }

    /// Returns the key identifying this case in a cache
    pub fn key(&self) -> CacheKey {
        let mut values = vec![self.ll, self.diffusivity, self.t_fin];
        values.extend(self.resolutions.iter().map(|n| *n as f64));
        CacheKey::new("convergence_2d", &values)
    }

    /// Runs the case
    pub fn run(&self, verbose: bool) -> Result<SummaryConvergence2d, StrError> {
        let mut analyzer = ConvergenceAnalyzer::new(self.ll, self.diffusivity, self.t_fin, &self.resolutions)?;
        analyzer.control.verbose = verbose;
        let record = analyzer.run()?;
        let rates = ConvergenceAnalyzer::rates(&record);
        let elapsed_ns: u128 = record.time.iter().sum();
        let mut work = 0;
        for i in 0..record.len() {
            let nt = f64::floor(self.t_fin / record.dt[i]) as usize;
            work += record.npoint[i] * record.npoint[i] * nt;
        }
        Ok(SummaryConvergence2d {
            case: self.clone(),
            record,
            rates,
            work,
            elapsed_ns,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::CaseConvergence2d;
    use crate::util::OrderVerdict;

    #[test]
    fn run_works() {
        let case = CaseConvergence2d::new();
        let summary = case.run(false).unwrap();
        assert_eq!(summary.record.len(), 4);
        assert_eq!(summary.rates.len(), 3);
        for rate in &summary.rates {
            assert_eq!(rate.verdict, OrderVerdict::Quadratic);
        }
    }
}
