use super::LocalSystem;
use crate::base::Node;

/// Rotates the velocity rows and columns of nodes carrying a local (normal, tangential) frame
///
/// For every node m with `bc.rotated()` and outward normal (c, s), the rotation
///
/// ```text
///     ┌        ┐
/// R = │  c   s │
///     │ -s   c │
///     └        ┘
/// ```
///
/// is applied to the pair (U_m, V_m) of the force vector (f' = R f) and of the Jacobian matrix
/// (K' = R K Rᵀ). The S rows and columns are not affected.
///
/// # Input
///
/// * `lsys` -- the local system (with the layout of the element already set)
/// * `nodes` -- the nodes of the element in local order
/// * `with_force` -- rotates the force vector
/// * `with_jacobian` -- rotates the Jacobian matrix
pub fn rotate_2d(lsys: &mut LocalSystem, nodes: &[&Node], with_force: bool, with_jacobian: bool) {
    let nnode = lsys.nnode;
    let neq = lsys.neq();
    for (m, node) in nodes.iter().enumerate() {
        if !node.bc.rotated() {
            continue;
        }
        let (c, s) = (node.bc.normal[0], node.bc.normal[1]);
        let (iu, iv) = (m, nnode + m);
        if with_force {
            let (fu, fv) = (lsys.force[iu], lsys.force[iv]);
            lsys.force[iu] = c * fu + s * fv;
            lsys.force[iv] = -s * fu + c * fv;
        }
        if with_jacobian {
            let jac = &mut lsys.jacobian;
            // rows
            for col in 0..neq {
                let (ku, kv) = (jac.get(iu, col), jac.get(iv, col));
                jac.set(iu, col, c * ku + s * kv);
                jac.set(iv, col, -s * ku + c * kv);
            }
            // columns
            for row in 0..neq {
                let (ku, kv) = (jac.get(row, iu), jac.get(row, iv));
                jac.set(row, iu, c * ku + s * kv);
                jac.set(row, iv, -s * ku + c * kv);
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::rotate_2d;
    use crate::base::Node;
    use crate::fem::LocalSystem;
    use russell_lab::approx_eq;

    fn sample_system() -> LocalSystem {
        // two nodes, one corner: U0 U1 V0 V1 S0
        let mut lsys = LocalSystem::new();
        lsys.reset(2, 1);
        for i in 0..5 {
            lsys.force[i] = (i + 1) as f64;
            for j in 0..5 {
                lsys.jacobian.set(i, j, (10 * i + j) as f64);
            }
        }
        lsys
    }

    #[test]
    fn rotate_2d_skips_unrotated_nodes() {
        let a = Node::new(0, 0.0, 0.0, 0.0);
        let b = Node::new(1, 1.0, 0.0, 0.0);
        let mut lsys = sample_system();
        rotate_2d(&mut lsys, &[&a, &b], true, true);
        let original = sample_system();
        assert_eq!(lsys.force.as_data(), original.force.as_data());
        assert_eq!(lsys.jacobian.as_data(), original.jacobian.as_data());
    }

    #[test]
    fn rotate_2d_by_ninety_degrees_works() {
        // normal (0, 1): U' = V and V' = -U
        let a = Node::new(0, 0.0, 0.0, 0.0);
        let mut b = Node::new(1, 1.0, 0.0, 0.0);
        b.bc.slip = true;
        b.bc.normal = [0.0, 1.0];
        let mut lsys = sample_system();
        rotate_2d(&mut lsys, &[&a, &b], true, true);
        // node 1: U at 1, V at 3
        assert_eq!(lsys.force[1], 4.0);
        assert_eq!(lsys.force[3], -2.0);
        assert_eq!(lsys.force[0], 1.0);
        assert_eq!(lsys.force[4], 5.0);
        // row 1 becomes row 3 (with columns 1 and 3 rotated as well)
        assert_eq!(lsys.jacobian.get(1, 0), 30.0);
        assert_eq!(lsys.jacobian.get(3, 0), -10.0);
        assert_eq!(lsys.jacobian.get(0, 1), 3.0);
        assert_eq!(lsys.jacobian.get(0, 3), -1.0);
        // K'[1][1] = K[3][3], K'[1][3] = -K[3][1], K'[3][3] = K[1][1]
        assert_eq!(lsys.jacobian.get(1, 1), 33.0);
        assert_eq!(lsys.jacobian.get(1, 3), -31.0);
        assert_eq!(lsys.jacobian.get(3, 3), 11.0);
        // S row keeps its place
        assert_eq!(lsys.jacobian.get(4, 4), 44.0);
        assert_eq!(lsys.jacobian.get(4, 1), 43.0);
    }

    #[test]
    fn rotate_2d_preserves_the_norm_of_the_velocity_pair() {
        let mut a = Node::new(0, 0.0, 0.0, 0.0);
        a.bc.inlet = Some(1.0);
        let angle = 0.3;
        a.bc.normal = [f64::cos(angle), f64::sin(angle)];
        let b = Node::new(1, 1.0, 0.0, 0.0);
        let mut lsys = sample_system();
        rotate_2d(&mut lsys, &[&a, &b], true, false);
        let norm = f64::sqrt(lsys.force[0] * lsys.force[0] + lsys.force[2] * lsys.force[2]);
        approx_eq(norm, f64::sqrt(1.0 + 9.0), 1e-14);
        // the Jacobian is left untouched
        assert_eq!(lsys.jacobian.get(0, 0), 0.0);
        assert_eq!(lsys.jacobian.get(2, 0), 20.0);
    }
}
