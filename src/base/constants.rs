/// Defines the maximum number of nodes of an element
pub const MAX_NODES: usize = 8;

/// Defines the maximum number of local equations (U and V at all nodes plus S at the corners)
pub const MAX_EQ: usize = 3 * MAX_NODES;

/// Defines the default gravity acceleration (m/s²)
pub const DEFAULT_GRAVITY: f64 = 9.81;

/// Defines the default kinematic viscosity of water (m²/s)
pub const DEFAULT_KINEMATIC_VISCOSITY: f64 = 1.0e-6;

/// Defines the default minimum flow depth (m)
pub const DEFAULT_H_MIN: f64 = 0.01;

/// Defines the speed below which the reciprocal speed in the friction derivative is taken as zero
pub const SPEED_THRESHOLD: f64 = 1.0e-9;

/// Defines the tolerance on the length of the unit normal of slip and inlet nodes
pub const NORMAL_TOLERANCE: f64 = 1.0e-8;

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/swsim/test";
