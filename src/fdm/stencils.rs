use crate::base::DiffusivityModel;
use russell_lab::{Matrix, Vector};

/// Performs one FTCS step with the 3-point stencil (interior nodes only)
///
/// ```text
/// θ_new[i] = θ[i] + α (θ[i+1] - 2 θ[i] + θ[i-1])
/// ```
///
/// The boundary values of `theta_new` are not modified.
pub fn ftcs_step_1d(theta_new: &mut Vector, theta: &Vector, alpha: f64) {
    let n = theta.dim();
    for i in 1..(n - 1) {
        theta_new[i] = theta[i] + alpha * (theta[i + 1] - 2.0 * theta[i] + theta[i - 1]);
    }
}

/// Performs one flux-conservative step with a θ-dependent diffusivity (interior nodes only)
///
/// ```text
/// D[i+½] = (D(θ[i]) + D(θ[i+1])) / 2
/// F[i+½] = D[i+½] (θ[i+1] - θ[i])
/// θ_new[i] = θ[i] + β (F[i+½] - F[i-½])
/// β = Δt / h²
/// ```
///
/// The mass leaving one cell through a face is exactly the mass entering the neighbor.
///
/// Returns the face values `(F[½], F[N-3/2])`, i.e., the fluxes through the faces adjacent
/// to the boundary nodes. The boundary values of `theta_new` are not modified.
///
/// * `d_node` -- workspace (N) holding D(θ) at the nodes
pub fn conservative_step_1d(
    theta_new: &mut Vector,
    theta: &Vector,
    d_node: &mut Vector,
    model: &DiffusivityModel,
    beta: f64,
) -> (f64, f64) {
    let n = theta.dim();
    for i in 0..n {
        d_node[i] = model.calc_d(theta[i]);
    }
    let mut flux_in = 0.5 * (d_node[0] + d_node[1]) * (theta[1] - theta[0]);
    let flux_first = flux_in;
    for i in 1..(n - 1) {
        let flux_out = 0.5 * (d_node[i] + d_node[i + 1]) * (theta[i + 1] - theta[i]);
        theta_new[i] = theta[i] + beta * (flux_out - flux_in);
        flux_in = flux_out;
    }
    (flux_first, flux_in)
}

/// Performs one explicit step in cylindrical coordinates (interior nodes and r = 0)
///
/// ```text
/// r > 0:  θ_new[i] = θ[i] + α ((θ[i+1] - 2 θ[i] + θ[i-1]) + (h / (2 rᵢ)) (θ[i+1] - θ[i-1]))
/// r = 0:  θ_new[0] = θ[0] + 4 α (θ[1] - θ[0])
/// ```
///
/// The r = 0 formula follows from L'Hôpital's rule: (1/r) ∂θ/∂r → ∂²θ/∂r² as r → 0.
/// The outer boundary value of `theta_new` is not modified.
pub fn radial_step_1d(theta_new: &mut Vector, theta: &Vector, r: &Vector, h: f64, alpha: f64) {
    let n = theta.dim();
    theta_new[0] = theta[0] + 4.0 * alpha * (theta[1] - theta[0]);
    for i in 1..(n - 1) {
        let second = theta[i + 1] - 2.0 * theta[i] + theta[i - 1];
        let first = (h / (2.0 * r[i])) * (theta[i + 1] - theta[i - 1]);
        theta_new[i] = theta[i] + alpha * (second + first);
    }
}

/// Performs one FTCS step with the 5-point stencil (interior nodes only)
///
/// All interior values are computed from `theta` (start of the step); `theta` is never
/// partially updated. The row index corresponds to y and the column index to x.
/// The boundary values of `theta_new` are not modified.
pub fn ftcs_step_2d(theta_new: &mut Matrix, theta: &Matrix, alpha: f64) {
    let (nrow, ncol) = theta.dims();
    for j in 1..(nrow - 1) {
        for i in 1..(ncol - 1) {
            let c = theta.get(j, i);
            let term_x = theta.get(j, i + 1) - 2.0 * c + theta.get(j, i - 1);
            let term_y = theta.get(j + 1, i) - 2.0 * c + theta.get(j - 1, i);
            theta_new.set(j, i, c + alpha * (term_x + term_y));
        }
    }
}

/// Sets θ = 0 on the four edges of a 2D field
pub fn set_zero_edges_2d(theta: &mut Matrix) {
    let (nrow, ncol) = theta.dims();
    for i in 0..ncol {
        theta.set(0, i, 0.0);
        theta.set(nrow - 1, i, 0.0);
    }
    for j in 0..nrow {
        theta.set(j, 0, 0.0);
        theta.set(j, ncol - 1, 0.0);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
