use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};

/// Holds a uniform 1D grid over [0, L]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Grid1d {
    /// Domain length L
    pub ll: f64,

    /// Number of nodes N (≥ 3)
    pub npoint: usize,

    /// Spacing h = L / (N - 1)
    pub h: f64,
}

impl Grid1d {
    /// Allocates a new instance
    pub fn new(ll: f64, npoint: usize) -> Result<Self, StrError> {
        if !(ll > 0.0) || !ll.is_finite() {
            return Err("the domain length must be positive");
        }
        if npoint < 3 {
            return Err("the number of nodes must be at least 3");
        }
        let h = ll / ((npoint - 1) as f64);
        Ok(Grid1d { ll, npoint, h })
    }

    /// Allocates a new instance given the desired spacing
    ///
    /// The number of nodes is N = round(L/h) + 1 and the spacing is then recomputed as L/(N-1).
    pub fn from_spacing(ll: f64, h: f64) -> Result<Self, StrError> {
        if !(h > 0.0) || !h.is_finite() {
            return Err("the grid spacing must be positive");
        }
        if !(ll > 0.0) || !ll.is_finite() {
            return Err("the domain length must be positive");
        }
        let ndiv = f64::round(ll / h) as usize;
        Grid1d::new(ll, ndiv + 1)
    }

    /// Returns the node coordinates
    pub fn coords(&self) -> Vector {
        let mut x = Vector::new(self.npoint);
        for i in 0..self.npoint {
            x[i] = (i as f64) * self.h;
        }
        x[self.npoint - 1] = self.ll; // exact endpoint
        x
    }
}

/// Holds a uniform square 2D grid over [0, L] × [0, L]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Grid2d {
    /// Side length L
    pub ll: f64,

    /// Number of nodes along each axis N (≥ 3)
    pub npoint: usize,

    /// Spacing h = L / (N - 1)
    pub h: f64,
}

impl Grid2d {
    /// Allocates a new instance
    pub fn new(ll: f64, npoint: usize) -> Result<Self, StrError> {
        let g = Grid1d::new(ll, npoint)?;
        Ok(Grid2d {
            ll,
            npoint,
            h: g.h,
        })
    }

    /// Allocates a new instance given the desired spacing
    pub fn from_spacing(ll: f64, h: f64) -> Result<Self, StrError> {
        let g = Grid1d::from_spacing(ll, h)?;
        Ok(Grid2d {
            ll,
            npoint: g.npoint,
            h: g.h,
        })
    }

    /// Returns the node coordinates along one axis (same for x and y)
    pub fn coords(&self) -> Vector {
        Grid1d {
            ll: self.ll,
            npoint: self.npoint,
            h: self.h,
        }
        .coords()
    }

    /// Returns the index of the central node along one axis
    pub fn center_index(&self) -> usize {
        self.npoint / 2
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Grid1d, Grid2d};
    use russell_lab::{approx_eq, array_approx_eq};

    #[test]
    fn new_captures_errors() {
        assert_eq!(Grid1d::new(0.0, 11).err(), Some("the domain length must be positive"));
        assert_eq!(Grid1d::new(-1.0, 11).err(), Some("the domain length must be positive"));
        assert_eq!(Grid1d::new(1.0, 2).err(), Some("the number of nodes must be at least 3"));
        assert_eq!(Grid1d::from_spacing(1.0, 0.0).err(), Some("the grid spacing must be positive"));
        assert_eq!(Grid2d::new(1.0, 1).err(), Some("the number of nodes must be at least 3"));
    }

    #[test]
    fn new_works() {
        let grid = Grid1d::new(1.0, 5).unwrap();
        assert_eq!(grid.npoint, 5);
        approx_eq(grid.h, 0.25, 1e-15);
        array_approx_eq(grid.coords().as_data(), &[0.0, 0.25, 0.5, 0.75, 1.0], 1e-15);
    }

    #[test]
    fn from_spacing_works() {
        let grid = Grid1d::from_spacing(1.0, 0.02).unwrap();
        assert_eq!(grid.npoint, 51);
        approx_eq(grid.h, 0.02, 1e-15);
        let grid = Grid2d::from_spacing(2.0, 0.02).unwrap();
        assert_eq!(grid.npoint, 101);
        assert_eq!(grid.center_index(), 50);
        approx_eq(grid.coords()[50], 1.0, 1e-14);
    }
}
