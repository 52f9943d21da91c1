use wicksim::base::Samples;
use wicksim::study::CaseWetting1d;
use wicksim::StrError;

// Front positions of the nonlinear wetting problem scaled by √t
//
// TEST GOAL
//
// This test verifies that the fronts (θ = 0.5) computed by the conservative scheme at
// several times collapse onto the similarity variable φ(0.5) = x/√t obtained by the
// shooting method (Boltzmann transform).
//
// GRID
//
// o----o----o----o----o  ...  o
// x = 0                       x = L = 0.03
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
// Whatman No. 1 paper, N = 241, snapshots at t = 100, 225, 400

#[test]
fn test_wetting_front_similarity() -> Result<(), StrError> {
    let case = CaseWetting1d {
        diffusivity: Samples::whatman_paper(),
        ll: 0.03,
        npoint: 241,
        t_fin: 400.0,
        t_snapshots: vec![100.0, 225.0, 400.0],
        n_front_interval: 100,
        c_guess: -180.0,
    };
    let summary = case.run(false)?;
    println!("C = {:.6e}, φ(0.5) = {:.6e}", summary.c_shot, summary.phi_front_ref);
    for f in &summary.snapshot_fronts {
        println!("t = {:>6.1}: x/√t = {:.6e}", f.t, f.x / f64::sqrt(f.t));
    }

    // all snapshots have a front
    assert_eq!(summary.snapshot_fronts.len(), 3);

    // collapse within 5%
    println!("max deviation = {:.3}%", 100.0 * summary.max_front_deviation);
    assert!(summary.max_front_deviation < 0.05);

    // the front advances
    let fronts = &summary.snapshot_fronts;
    assert!(fronts[0].x < fronts[1].x && fronts[1].x < fronts[2].x);
    Ok(())
}
