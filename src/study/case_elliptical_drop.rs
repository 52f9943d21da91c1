use crate::base::{ic_elliptical_drop, Control, Grid2d};
use crate::fdm::{contour_half_widths, SolverIsotropic2d};
use crate::util::CacheKey;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the elliptical-drop case (2D isotropic diffusion)
///
/// The aspect ratio is measured on the half-maximum contour, i.e., the contour at half the
/// current value at the center.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CaseEllipticalDrop {
    /// Side length of the square
    pub ll: f64,

    /// Grid spacing
    pub spacing: f64,

    /// Semi-axis along x
    pub a: f64,

    /// Semi-axis along y
    pub b: f64,

    /// Diffusivity
    pub diffusivity: f64,

    /// Final time
    pub t_fin: f64,
}

/// Holds the summary of the elliptical-drop case
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SummaryEllipticalDrop {
    pub case: CaseEllipticalDrop,
    pub npoint: usize,
    pub dt: f64,
    pub nt: usize,
    pub half_widths_ini: (f64, f64),
    pub half_widths_fin: (f64, f64),
    pub aspect_ini: f64,
    pub aspect_fin: f64,
    pub center_fin: f64,
    pub work: usize,
    pub elapsed_ns: u128,
}

impl CaseEllipticalDrop {
    /// Allocates a new instance with L = 2, h = 0.02, a = 0.6, b = 0.3, D = 0.1 and T = 0.4
    pub fn new() -> Self {
        CaseEllipticalDrop {
            ll: 2.0,
            spacing: 0.02,
            a: 0.6,
            b: 0.3,
            diffusivity: 0.1,
            t_fin: 0.4,
        }
    }

    /// Returns the key identifying this case in a cache
    pub fn key(&self) -> CacheKey {
        CacheKey::new(
            "elliptical_drop",
            &[self.ll, self.spacing, self.a, self.b, self.diffusivity, self.t_fin],
        )
    }

    /// Runs the case
    pub fn run(&self, verbose: bool) -> Result<SummaryEllipticalDrop, StrError> {
        let grid = Grid2d::from_spacing(self.ll, self.spacing)?;
        let mut control = Control::new();
        control.t_fin = self.t_fin;
        control.verbose = verbose;
        let solver = SolverIsotropic2d::new(grid, self.diffusivity, &control)?;
        let out = solver.solve(ic_elliptical_drop(self.ll, self.a, self.b))?;
        let c = grid.center_index();
        let level_ini = 0.5 * out.theta_ini.get(c, c);
        let level_fin = 0.5 * out.center_value();
        let not_found = "the half-maximum contour is not crossed along the axes";
        let half_widths_ini = contour_half_widths(out.coords.as_data(), &out.theta_ini, level_ini).ok_or(not_found)?;
        let half_widths_fin = contour_half_widths(out.coords.as_data(), &out.theta, level_fin).ok_or(not_found)?;
        let aspect_ini = half_widths_ini.0 / half_widths_ini.1;
        let aspect_fin = half_widths_fin.0 / half_widths_fin.1;
        if verbose {
            println!("aspect ratio: initial = {:.4}, final = {:.4}", aspect_ini, aspect_fin);
        }
        Ok(SummaryEllipticalDrop {
            case: *self,
            npoint: grid.npoint,
            dt: out.plan.dt,
            nt: out.plan.nt,
            half_widths_ini,
            half_widths_fin,
            aspect_ini,
            aspect_fin,
            center_fin: out.center_value(),
            work: grid.npoint * grid.npoint * out.plan.nt,
            elapsed_ns: out.elapsed_ns,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::CaseEllipticalDrop;

    #[test]
    fn run_works() {
        let mut case = CaseEllipticalDrop::new();
        case.spacing = 0.04;
        let summary = case.run(false).unwrap();
        assert!(summary.aspect_ini > 1.8);
        assert!(summary.aspect_fin < summary.aspect_ini);
        assert!(summary.aspect_fin > 1.0);
    }
}
