//! Contains some utility functions and structures

mod convergence_analyzer;
mod convergence_record;
mod cost_report;
mod error_norms;
mod file_io;
mod run_cache;

pub use convergence_analyzer::*;
pub use convergence_record::*;
pub use cost_report::*;
pub use error_norms::*;
pub use file_io::*;
pub use run_cache::*;
