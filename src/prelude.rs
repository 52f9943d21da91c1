//! Makes available common structures needed to run a simulation
//!
//! You may write `use wicksim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{
    ic_circular_drop, ic_elliptical_drop, ic_product_of_sines, ic_radial_step, ic_sine, Control, DiffusivityModel,
    Grid1d, Grid2d, ParamDiffusivity, Samples, Stencil, TimeStepPlan, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR,
};
pub use crate::fdm::{
    contour_half_widths, front_position, Output1d, Output2d, SolverConservative1d, SolverIsotropic2d, SolverLinear1d,
    SolverRadial1d,
};
pub use crate::similarity::{ParamShooting, ShootingSolution, SimilaritySolver};
pub use crate::study::{Case, CaseSummary, Study};
pub use crate::util::{ConvergenceAnalyzer, ConvergenceRecord, OrderVerdict};
