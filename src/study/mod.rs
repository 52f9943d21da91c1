//! Implements the validation cases and the computational-cost summary
//!
//! Each case is a pure function of its parameters returning a serializable summary.
//! The [Study] runner memoizes the summaries with a caller-owned [crate::util::RunCache].

mod case_circular_drop;
mod case_convergence_2d;
mod case_elliptical_drop;
mod case_linear_1d;
mod case_wetting_1d;
mod study_runner;
pub use crate::study::case_circular_drop::*;
pub use crate::study::case_convergence_2d::*;
pub use crate::study::case_elliptical_drop::*;
pub use crate::study::case_linear_1d::*;
pub use crate::study::case_wetting_1d::*;
pub use crate::study::study_runner::*;
