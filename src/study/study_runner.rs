use super::{
    CaseCircularDrop, CaseConvergence2d, CaseEllipticalDrop, CaseLinear1d, CaseWetting1d, SummaryCircularDrop,
    SummaryConvergence2d, SummaryEllipticalDrop, SummaryLinear1d, SummaryWetting1d,
};
use crate::util::{CacheKey, ConvergenceAnalyzer, CostReport, RunCache};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Defines the available cases
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Case {
    /// Linear 1D diffusion against the sine-decay solution
    A,

    /// Nonlinear wetting against the similarity solution
    B,

    /// 2D convergence study
    C,

    /// Circular drop: 2D against radial
    D,

    /// Elliptical drop
    E,

    /// Computational cost of cases A to E
    F,
}

impl Case {
    /// Returns the cases that run a solver
    pub fn simulations() -> [Case; 5] {
        [Case::A, Case::B, Case::C, Case::D, Case::E]
    }

    /// Returns a short description
    pub fn description(&self) -> &'static str {
        match self {
            Case::A => "A: linear diffusion 1D",
            Case::B => "B: nonlinear wetting 1D",
            Case::C => "C: convergence 2D",
            Case::D => "D: circular drop",
            Case::E => "E: elliptical drop",
            Case::F => "F: computational cost",
        }
    }
}

impl FromStr for Case {
    type Err = StrError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a" => Ok(Case::A),
            "b" => Ok(Case::B),
            "c" => Ok(Case::C),
            "d" => Ok(Case::D),
            "e" => Ok(Case::E),
            "f" => Ok(Case::F),
            _ => Err("the case must be one of a, b, c, d, e, f"),
        }
    }
}

/// Holds the summary of any case
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CaseSummary {
    A(SummaryLinear1d),
    B(SummaryWetting1d),
    C(SummaryConvergence2d),
    D(SummaryCircularDrop),
    E(SummaryEllipticalDrop),
    F(CostReport),
}

impl CaseSummary {
    /// Returns the elapsed wall-clock time in nanoseconds
    pub fn elapsed_ns(&self) -> u128 {
        match self {
            CaseSummary::A(s) => s.elapsed_ns,
            CaseSummary::B(s) => s.elapsed_shooting_ns + s.elapsed_fdm_ns,
            CaseSummary::C(s) => s.elapsed_ns,
            CaseSummary::D(s) => s.elapsed_2d_ns + s.elapsed_radial_ns,
            CaseSummary::E(s) => s.elapsed_ns,
            CaseSummary::F(r) => r.total_ns(),
        }
    }

    /// Returns the number of node updates
    pub fn work(&self) -> usize {
        match self {
            CaseSummary::A(s) => s.work,
            CaseSummary::B(s) => s.work,
            CaseSummary::C(s) => s.work,
            CaseSummary::D(s) => s.work,
            CaseSummary::E(s) => s.work,
            CaseSummary::F(r) => r.entries.iter().map(|e| e.work).sum(),
        }
    }

    /// Prints a short summary
    pub fn print(&self) {
        match self {
            CaseSummary::A(s) => {
                println!("N = {}, Δt = {:.4e}, Nt = {}", s.case.npoint, s.dt, s.nt);
                println!("L∞ error = {:.6e}", s.error_linf);
            }
            CaseSummary::B(s) => {
                println!("C = {:.6e} (residual = {:.3e})", s.c_shot, s.residual);
                println!("φ(0.5) = {:.6e}", s.phi_front_ref);
                for f in &s.snapshot_fronts {
                    println!("t = {:>10.3}: x = {:.6e}, x/√t = {:.6e}", f.t, f.x, f.x / f64::sqrt(f.t));
                }
                println!("max deviation of x/√t = {:.3}%", 100.0 * s.max_front_deviation);
                if let Some(mb) = &s.mass_balance {
                    println!("mass balance: max discrepancy = {:.3e}", mb.max_discrepancy);
                }
            }
            CaseSummary::C(s) => ConvergenceAnalyzer::print_table(&s.record),
            CaseSummary::D(s) => {
                println!("center (2D)       = {:.6}", s.center_2d);
                println!("center (radial)   = {:.6}", s.center_radial);
                println!("center (analytic) = {:.6}", s.center_analytic);
                println!("max |2D - radial| = {:.3e}", s.max_cut_difference);
            }
            CaseSummary::E(s) => {
                println!("aspect ratio (initial) = {:.4}", s.aspect_ini);
                println!("aspect ratio (final)   = {:.4}", s.aspect_fin);
            }
            CaseSummary::F(r) => r.print(),
        }
    }
}

/// Runs the cases and memoizes their summaries
pub struct Study {
    /// Parameters of case A
    pub linear_1d: CaseLinear1d,

    /// Parameters of case B
    pub wetting_1d: CaseWetting1d,

    /// Parameters of case C
    pub convergence_2d: CaseConvergence2d,

    /// Parameters of case D
    pub circular_drop: CaseCircularDrop,

    /// Parameters of case E
    pub elliptical_drop: CaseEllipticalDrop,

    /// Prints the progress of the runs
    pub verbose: bool,

    /// Holds the summaries keyed by the case parameters
    cache: RunCache<CaseSummary>,
}

impl Study {
    /// Allocates a new instance with the default parameters of each case
    pub fn new() -> Self {
        Study {
            linear_1d: CaseLinear1d::new(),
            wetting_1d: CaseWetting1d::new(),
            convergence_2d: CaseConvergence2d::new(),
            circular_drop: CaseCircularDrop::new(),
            elliptical_drop: CaseEllipticalDrop::new(),
            verbose: false,
            cache: RunCache::new(),
        }
    }

    /// Returns the cache
    pub fn cache(&self) -> &RunCache<CaseSummary> {
        &self.cache
    }

    /// Runs a case (or returns the memoized summary)
    ///
    /// Case F runs all other cases (memoized) and gathers their cost.
    pub fn run(&mut self, case: Case) -> Result<&CaseSummary, StrError> {
        let verbose = self.verbose;
        if verbose {
            println!("\n{}", case.description());
        }
        match case {
            Case::A => {
                let c = self.linear_1d;
                self.cache.get_or_compute(c.key(), || Ok(CaseSummary::A(c.run(verbose)?)))
            }
            Case::B => {
                let c = &self.wetting_1d;
                self.cache.get_or_compute(c.key(), || Ok(CaseSummary::B(c.run(verbose)?)))
            }
            Case::C => {
                let c = &self.convergence_2d;
                self.cache.get_or_compute(c.key(), || Ok(CaseSummary::C(c.run(verbose)?)))
            }
            Case::D => {
                let c = self.circular_drop;
                self.cache.get_or_compute(c.key(), || Ok(CaseSummary::D(c.run(verbose)?)))
            }
            Case::E => {
                let c = self.elliptical_drop;
                self.cache.get_or_compute(c.key(), || Ok(CaseSummary::E(c.run(verbose)?)))
            }
            Case::F => {
                let mut report = CostReport::new();
                for sim in Case::simulations() {
                    let summary = self.run(sim)?;
                    report.add(sim.description(), summary.work(), summary.elapsed_ns());
                }
                Ok(self.cache.insert(CacheKey::new("cost_report", &[]), CaseSummary::F(report)))
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Case, CaseSummary, Study};
    use std::str::FromStr;

    #[test]
    fn case_from_str_works() {
        assert_eq!(Case::from_str("a"), Ok(Case::A));
        assert_eq!(Case::from_str("F"), Ok(Case::F));
        assert_eq!(
            Case::from_str("g").err(),
            Some("the case must be one of a, b, c, d, e, f")
        );
    }

    #[test]
    fn run_memoizes_summaries() {
        let mut study = Study::new();
        let error = match study.run(Case::A).unwrap() {
            CaseSummary::A(s) => s.error_linf,
            _ => panic!("wrong summary"),
        };
        assert!(error <= 1e-3);
        assert!(study.run(Case::A).unwrap().elapsed_ns() > 0);
        assert_eq!(study.cache().misses(), 1);
        assert_eq!(study.cache().hits(), 1);
        study.linear_1d.npoint = 21;
        study.run(Case::A).unwrap();
        assert_eq!(study.cache().misses(), 2);
    }
}
