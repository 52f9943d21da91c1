//! This module contains analytical solutions used as references for verifications

mod diffusion_decay;
mod disc_source;
mod similarity_constant_d;

pub use diffusion_decay::*;
pub use disc_source::*;
pub use similarity_constant_d::*;
