use super::{ElementState, LocalSystem};
use crate::base::MixedPad;

/// Adds the hydrostatic pressure flux of a boundary edge at one integration point
///
/// The flux closes the integration by parts of the `−θp g H²/2` term of the region elements:
///
/// ```text
/// force[u_j] −= w N_j θp g H²/2 n_x
/// force[v_j] −= w N_j θp g H²/2 n_y
/// ```
///
/// where n is the outward unit normal and `factor` is θp (full form) or 1 (reduced form).
pub(crate) fn add_edge_force(lsys: &mut LocalSystem, pad: &MixedPad, st: &ElementState, factor: f64, g: f64, w: f64) {
    let h = edge_depth(pad, st);
    let flux = factor * g * h * h / 2.0;
    let nnode = lsys.nnode;
    for j in 0..nnode {
        lsys.force[j] -= w * pad.nn[j] * flux * pad.normal[0];
        lsys.force[nnode + j] -= w * pad.nn[j] * flux * pad.normal[1];
    }
}

/// Adds the derivative of the pressure flux with respect to S at one integration point
///
/// ```text
/// J[u_j][s_k] += w N_j θp g H n_x M_k
/// J[v_j][s_k] += w N_j θp g H n_y M_k
/// ```
///
/// Corners with a prescribed water level are skipped (their S is not an unknown).
pub(crate) fn add_edge_jacobian(lsys: &mut LocalSystem, pad: &MixedPad, st: &ElementState, factor: f64, g: f64, w: f64) {
    let h = edge_depth(pad, st);
    let nnode = lsys.nnode;
    for j in 0..nnode {
        let c = w * pad.nn[j] * factor * g * h;
        for k in 0..lsys.ncorner {
            if st.fixed[k] {
                continue;
            }
            lsys.jacobian.add(j, 2 * nnode + k, c * pad.normal[0] * pad.mm[k]);
            lsys.jacobian.add(nnode + j, 2 * nnode + k, c * pad.normal[1] * pad.mm[k]);
        }
    }
}

/// Interpolates the depth along the edge with the linear family
fn edge_depth(pad: &MixedPad, st: &ElementState) -> f64 {
    (0..st.ncorner).map(|k| pad.mm[k] * st.h[k]).sum()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
