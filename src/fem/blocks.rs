use crate::base::MixedPad;
use russell_lab::{Matrix, Vector};

/// Holds the values and gradients of one shape family at an integration point
#[derive(Clone, Copy)]
pub(crate) struct Basis<'a> {
    pub val: &'a [f64],
    pub grad: &'a [[f64; 2]],
}

impl<'a> Basis<'a> {
    /// Returns the quadratic (all nodes) family
    pub fn quadratic(pad: &'a MixedPad) -> Self {
        Basis {
            val: &pad.nn[..pad.nnode],
            grad: &pad.gg[..pad.nnode],
        }
    }

    /// Returns the linear (corner nodes) family
    pub fn linear(pad: &'a MixedPad) -> Self {
        Basis {
            val: &pad.mm[..pad.ncorner],
            grad: &pad.mg[..pad.ncorner],
        }
    }

    /// Returns [N, ∂N/∂x, ∂N/∂y] of node j
    #[inline]
    fn triple(&self, j: usize) -> [f64; 3] {
        [self.val[j], self.grad[j][0], self.grad[j][1]]
    }
}

/// Subtracts the weak form of a residual term from a block of the force vector
///
/// ```text
/// force[r0 + j] -= w (N_j f + ∂N_j/∂x fx + ∂N_j/∂y fy)
/// ```
///
/// with `terms = [f, fx, fy]`.
pub(crate) fn sub_force(force: &mut Vector, r0: usize, test: Basis, w: f64, terms: &[f64; 3]) {
    for j in 0..test.val.len() {
        let t = test.triple(j);
        force[r0 + j] -= w * (t[0] * terms[0] + t[1] * terms[1] + t[2] * terms[2]);
    }
}

/// Adds an outer product of test and trial functions to a block of the Jacobian matrix
///
/// ```text
/// jacobian[r0 + j][c0 + k] += w Σ_a Σ_b test_a(j) coef[a][b] trial_b(k)
/// ```
///
/// where a, b ∈ {value, ∂/∂x, ∂/∂y}. The rows of `coef` correspond to the derivatives of
/// [f, fx, fy] (see `sub_force`) and the columns to the unknown, its x-gradient and y-gradient.
pub(crate) fn add_block(
    jacobian: &mut Matrix,
    r0: usize,
    c0: usize,
    test: Basis,
    trial: Basis,
    w: f64,
    coef: &[[f64; 3]; 3],
) {
    for j in 0..test.val.len() {
        let t = test.triple(j);
        // contract the test side first
        let mut row = [0.0; 3];
        for b in 0..3 {
            row[b] = w * (t[0] * coef[0][b] + t[1] * coef[1][b] + t[2] * coef[2][b]);
        }
        for k in 0..trial.val.len() {
            let s = trial.triple(k);
            jacobian.add(r0 + j, c0 + k, row[0] * s[0] + row[1] * s[1] + row[2] * s[2]);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
