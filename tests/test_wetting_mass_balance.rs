use russell_lab::*;
use wicksim::prelude::*;

// Wetting of a dry strip of Whatman No. 1 paper
//
// TEST GOAL
//
// This test verifies that the flux-conservative scheme changes the discrete mass Σθh
// only by the amount entering or leaving through the faces next to the fixed ends.
//
// GRID
//
// o----o----o----o----o  ...  o
// x = 0                       x = L = 0.02
//
// INITIAL CONDITIONS
//
// θ = θr everywhere
//
// BOUNDARY CONDITIONS
//
// θ = θs at x = 0 and θ = θr at x = L
//
// CONFIGURATION AND PARAMETERS
//
// Van Genuchten diffusivity with θr = 0.004943, θs = 1, n = 2.344, Ks/α = 2.079e-6
// N = 81, T = 50

#[test]
fn test_wetting_mass_balance() -> Result<(), StrError> {
    let model = DiffusivityModel::new(&Samples::whatman_paper())?;
    let (theta_r, theta_s) = model.saturation_limits();
    let grid = Grid1d::new(0.02, 81)?;
    let mut control = Control::new();
    control.t_fin = 50.0;
    control.track_mass_balance = true;
    let solver = SolverConservative1d::new(grid, &model, &control)?;
    let out = solver.solve()?;

    // mass balance
    let mb = out.mass_balance.ok_or("mass balance is missing")?;
    println!("mass: initial = {:e}, final = {:e}", mb.mass_ini, mb.mass_fin);
    println!("boundary exchange = {:e}", mb.boundary_exchange);
    println!("max discrepancy per step = {:e}", mb.max_discrepancy);
    assert!(mb.max_discrepancy < 1e-15);
    approx_eq(mb.mass_fin - mb.mass_ini, mb.boundary_exchange, 1e-12);
    assert!(mb.mass_fin > mb.mass_ini);

    // the field stays within the admissible range
    for value in out.theta.as_data() {
        assert!(*value >= theta_r - 1e-12 && *value <= theta_s + 1e-12);
    }

    // the dry end is not reached
    assert!(out.theta[70] - theta_r < 1e-6);
    Ok(())
}
