use russell_lab::*;
use wicksim::prelude::*;

// Spreading of an elliptical drop
//
// TEST GOAL
//
// This test verifies that isotropic diffusion makes an elliptical drop rounder; i.e.,
// the aspect ratio of the half-maximum contour decreases monotonically with time.
//
// GRID
//
// [0, 2] × [0, 2] with h = 0.04 (center at (1, 1))
//
// INITIAL CONDITIONS
//
// θ = 1 inside the ellipse with semi-axes a = 0.6 (x) and b = 0.3 (y); θ = 0 elsewhere
//
// BOUNDARY CONDITIONS
//
// θ = 0 on the four edges
//
// CONFIGURATION AND PARAMETERS
//
// D = 0.1, T ∈ {0.05, 0.2, 0.4}

#[test]
fn test_elliptical_drop() -> Result<(), StrError> {
    let grid = Grid2d::from_spacing(2.0, 0.04)?;
    let mut aspect_ratios = Vec::new();
    for t_fin in [0.05, 0.2, 0.4] {
        let mut control = Control::new();
        control.t_fin = t_fin;
        let solver = SolverIsotropic2d::new(grid, 0.1, &control)?;
        let out = solver.solve(ic_elliptical_drop(2.0, 0.6, 0.3))?;
        let level = 0.5 * out.center_value();
        let (hx, hy) = contour_half_widths(out.coords.as_data(), &out.theta, level).ok_or("contour not found")?;
        println!("t = {:.2}: half widths = ({:.4}, {:.4}), aspect = {:.4}", t_fin, hx, hy, hx / hy);
        aspect_ratios.push(hx / hy);
    }
    for i in 1..aspect_ratios.len() {
        assert!(aspect_ratios[i] < aspect_ratios[i - 1]);
    }
    assert!(aspect_ratios[2] > 1.0);

    // symmetric about both axes
    let mut control = Control::new();
    control.t_fin = 0.1;
    let solver = SolverIsotropic2d::new(grid, 0.1, &control)?;
    let out = solver.solve(ic_elliptical_drop(2.0, 0.62, 0.3))?;
    let n = grid.npoint;
    for j in 0..n {
        for i in 0..n {
            approx_eq(out.theta.get(j, i), out.theta.get(n - 1 - j, i), 1e-12);
        }
    }
    Ok(())
}
