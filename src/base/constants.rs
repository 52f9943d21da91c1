/// Defines the directory where the simulation result files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/wicksim/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/wicksim/test";

/// Defines the admissible stability factor for the 3-point stencil (1D Cartesian)
pub const STABILITY_LIMIT_1D: f64 = 0.5;

/// Defines the admissible stability factor for the 5-point stencil (2D Cartesian)
pub const STABILITY_LIMIT_2D: f64 = 0.25;

/// Defines the admissible stability factor for the cylindrical stencil
///
/// The node at r = 0 carries the full 2D Laplacian (coefficient 4α), hence the 2D bound.
pub const STABILITY_LIMIT_RADIAL: f64 = 0.25;

/// Holds the default stability factor of the linear 1D solver
pub const DEFAULT_FACTOR_LINEAR_1D: f64 = 0.45;

/// Holds the default (safety) stability factor of the conservative nonlinear 1D solver
pub const DEFAULT_FACTOR_CONSERVATIVE_1D: f64 = 0.4;

/// Holds the default stability factor of the radial 1D solver
pub const DEFAULT_FACTOR_RADIAL_1D: f64 = 0.20;

/// Holds the default stability factor of the isotropic 2D solver
pub const DEFAULT_FACTOR_ISOTROPIC_2D: f64 = 0.20;

/// Holds the offset above θr used when clamping the saturation
pub const SATURATION_EPSILON: f64 = 1e-9;

/// Holds the step used by the central-difference derivative of D(θ)
pub const DERIVATIVE_STEP: f64 = 1e-5;

/// Holds the number of saturation samples used to find max(D) over [θr, θs]
pub const D_MAX_NPOINT: usize = 101;

/// Holds the default saturation level that identifies the wetting front
pub const FRONT_LEVEL: f64 = 0.5;
