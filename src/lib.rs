//! Explicit finite-difference solvers for moisture diffusion in porous media
//!
//! The crate implements linear and nonlinear (degenerate) diffusion solvers in 1D Cartesian,
//! 1D cylindrical and 2D Cartesian coordinates, a Boltzmann-similarity shooting solver used
//! to validate the nonlinear case, and a mesh-convergence analyzer.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod analytical;
pub mod base;
pub mod fdm;
pub mod prelude;
pub mod similarity;
pub mod study;
pub mod util;
