//! Shallow-water simulator: element assembly of the depth-averaged flow equations
//!
//! The crate computes, for every element of a mixed-order (quadratic velocity, linear surface
//! elevation) finite element mesh, the local residual vector and the Newton-Raphson Jacobian
//! matrix of the coupled unknowns U, V (velocity) and S (water-surface elevation).

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod fem;
pub mod prelude;
