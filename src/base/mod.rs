//! Implements the base structures for a finite-difference diffusion simulation

mod constants;
mod control;
mod diffusivity;
mod grid;
mod initial_conditions;
mod param_diffusivity;
mod samples;
mod time_step_plan;
pub use crate::base::constants::*;
pub use crate::base::control::*;
pub use crate::base::diffusivity::*;
pub use crate::base::grid::*;
pub use crate::base::initial_conditions::*;
pub use crate::base::param_diffusivity::*;
pub use crate::base::samples::*;
pub use crate::base::time_step_plan::*;
