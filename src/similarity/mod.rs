//! Implements the Boltzmann similarity solution of the nonlinear wetting problem
//!
//! With φ = x / √t, the equation ∂θ/∂t = ∂/∂x (D(θ) ∂θ/∂x) becomes the ODE:
//!
//! ```text
//! dθ/dφ  = y₂
//! dy₂/dφ = -(1/D(θ)) ((φ/2) y₂ + D'(θ) y₂²)
//! θ(0) = θs    θ(φ → ∞) = θr
//! ```
//!
//! The unknown slope y₂(0) = C is found by the shooting method.

mod param_shooting;
mod similarity_solver;
pub use crate::similarity::param_shooting::*;
pub use crate::similarity::similarity_solver::*;
