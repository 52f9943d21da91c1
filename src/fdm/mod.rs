//! Implements explicit finite-difference solvers for the diffusion equation

mod front;
mod output;
mod solver_conservative_1d;
mod solver_isotropic_2d;
mod solver_linear_1d;
mod solver_radial_1d;
mod stencils;
pub use crate::fdm::front::*;
pub use crate::fdm::output::*;
pub use crate::fdm::solver_conservative_1d::*;
pub use crate::fdm::solver_isotropic_2d::*;
pub use crate::fdm::solver_linear_1d::*;
pub use crate::fdm::solver_radial_1d::*;
pub use crate::fdm::stencils::*;
