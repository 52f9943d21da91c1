use super::{read_json, write_json};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;

/// Holds numerical results from a convergence analysis with varying grid sizes
///
/// The entries are ordered by decreasing spacing h.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConvergenceRecord {
    pub name: String,       // name of the study
    pub npoint: Vec<usize>, // number of nodes along each axis
    pub h: Vec<f64>,        // grid spacing
    pub dt: Vec<f64>,       // time increment
    pub error: Vec<f64>,    // discrete L2 error
    pub time: Vec<u128>,    // simulation time in nanoseconds
}

impl ConvergenceRecord {
    /// Allocates a new (empty) structure
    pub fn new(name: &str) -> Self {
        ConvergenceRecord {
            name: name.to_string(),
            npoint: Vec::new(),
            h: Vec::new(),
            dt: Vec::new(),
            error: Vec::new(),
            time: Vec::new(),
        }
    }

    /// Appends the results of one resolution
    pub fn push(&mut self, npoint: usize, h: f64, dt: f64, error: f64, time: u128) {
        self.npoint.push(npoint);
        self.h.push(h);
        self.dt.push(dt);
        self.error.push(error);
        self.time.push(time);
    }

    /// Returns the number of resolutions
    pub fn len(&self) -> usize {
        self.npoint.len()
    }

    /// Returns true if there are no results
    pub fn is_empty(&self) -> bool {
        self.npoint.is_empty()
    }

    /// Reads a JSON file containing the results
    pub fn from<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        read_json(full_path)
    }

    /// Writes a JSON file with the results (pretty-printed)
    pub fn write<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        write_json(self, full_path)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
