use super::{effective_depth, LocalSystem};
use crate::base::{mid_side_corners, Node};
use gemlab::shapes::GeoKind;

/// Replaces the momentum rows of inflow nodes by a flux constraint
///
/// For every node i with a prescribed specific discharge q (`bc.inlet`), the row i (U block,
/// which holds the normal component after the rotation) is overwritten by
///
/// ```text
/// force[i] = area (q − Un H)
/// J[i][i] = area H
/// J[i][2 nnode + i] = area Un                      (corner node)
/// J[i][2 nnode + l] = J[i][2 nnode + r] = area Un / 2  (mid-side node with corners l and r)
/// ```
///
/// where `Un = U n_x + V n_y` and H is the depth of the node (corner) or the mean depth of the
/// flanking corners (mid-side). If that depth is not positive, H = h_min and q = 0.
///
/// The rows are overwritten, not accumulated; thus, calling this function twice is harmless.
pub fn inflow_override(
    lsys: &mut LocalSystem,
    kind: GeoKind,
    nodes: &[&Node],
    area: f64,
    h_min: f64,
    with_force: bool,
    with_jacobian: bool,
) {
    let nnode = lsys.nnode;
    let neq = lsys.neq();
    for (i, node) in nodes.iter().enumerate() {
        let mut q = match node.bc.inlet {
            Some(q) => q,
            None => continue,
        };
        let normal = node.bc.normal;
        let un = node.now.u * normal[0] + node.now.v * normal[1];
        let (natural, corners) = match mid_side_corners(kind, i) {
            Some((l, r)) => ((nodes[l].depth() + nodes[r].depth()) / 2.0, Some((l, r))),
            None => (node.depth(), None),
        };
        if natural <= 0.0 {
            q = 0.0;
        }
        let h = effective_depth(natural, h_min);
        if with_force {
            lsys.force[i] = area * (q - un * h);
        }
        if with_jacobian {
            for col in 0..neq {
                lsys.jacobian.set(i, col, 0.0);
            }
            lsys.jacobian.set(i, i, area * h);
            match corners {
                Some((l, r)) => {
                    lsys.jacobian.set(i, 2 * nnode + l, area * un / 2.0);
                    lsys.jacobian.set(i, 2 * nnode + r, area * un / 2.0);
                }
                None => lsys.jacobian.set(i, 2 * nnode + i, area * un),
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::inflow_override;
    use crate::base::{Node, SampleMeshes};
    use crate::fem::LocalSystem;
    use gemlab::shapes::GeoKind;
    use russell_lab::approx_eq;

    fn filled_system(nnode: usize, ncorner: usize) -> LocalSystem {
        let mut lsys = LocalSystem::new();
        lsys.reset(nnode, ncorner);
        let neq = lsys.neq();
        for i in 0..neq {
            lsys.force[i] = 1.0;
            for j in 0..neq {
                lsys.jacobian.set(i, j, 1.0);
            }
        }
        lsys
    }

    #[test]
    fn inflow_override_works_for_corner_and_mid_side_nodes() {
        let mut mesh = SampleMeshes::one_tri6_with_edges(2.0);
        mesh.nodes[0].set_surface(1.0);
        for p in [0, 3] {
            mesh.nodes[p].bc.inlet = Some(0.5);
            mesh.nodes[p].bc.normal = [-1.0, 0.0];
            mesh.nodes[p].set_velocity(-0.2, 0.1);
        }
        let nodes: Vec<&Node> = mesh.elements[0].points.iter().map(|p| &mesh.nodes[*p]).collect();
        let mut lsys = filled_system(6, 3);
        inflow_override(&mut lsys, GeoKind::Tri6, &nodes, 0.5, 0.01, true, true);

        // corner 0: H = 1, Un = 0.2
        approx_eq(lsys.force[0], 0.5 * (0.5 - 0.2 * 1.0), 1e-15);
        approx_eq(lsys.jacobian.get(0, 0), 0.5, 1e-15);
        approx_eq(lsys.jacobian.get(0, 12), 0.5 * 0.2, 1e-15);
        assert_eq!(lsys.jacobian.get(0, 1), 0.0);
        assert_eq!(lsys.jacobian.get(0, 6), 0.0);
        assert_eq!(lsys.jacobian.get(0, 13), 0.0);

        // mid-side 3 between corners 0 and 1: H = (1 + 2)/2
        approx_eq(lsys.force[3], 0.5 * (0.5 - 0.2 * 1.5), 1e-15);
        approx_eq(lsys.jacobian.get(3, 3), 0.5 * 1.5, 1e-15);
        approx_eq(lsys.jacobian.get(3, 12), 0.5 * 0.2 / 2.0, 1e-15);
        approx_eq(lsys.jacobian.get(3, 13), 0.5 * 0.2 / 2.0, 1e-15);
        assert_eq!(lsys.jacobian.get(3, 14), 0.0);

        // other rows are untouched
        assert_eq!(lsys.force[1], 1.0);
        assert_eq!(lsys.force[6], 1.0);
        assert_eq!(lsys.jacobian.get(6, 0), 1.0);
    }

    #[test]
    fn inflow_override_is_idempotent() {
        let mut mesh = SampleMeshes::one_tri6_with_edges(1.0);
        mesh.nodes[4].bc.inlet = Some(0.3);
        mesh.nodes[4].bc.normal = [f64::sqrt(0.5), f64::sqrt(0.5)];
        mesh.nodes[4].set_velocity(-0.4, -0.1);
        let nodes: Vec<&Node> = mesh.elements[2].points.iter().map(|p| &mesh.nodes[*p]).collect();
        let mut once = filled_system(3, 2);
        inflow_override(&mut once, GeoKind::Lin3, &nodes, 1.4, 0.01, true, true);
        let mut twice = once.clone();
        inflow_override(&mut twice, GeoKind::Lin3, &nodes, 1.4, 0.01, true, true);
        assert_eq!(once.force.as_data(), twice.force.as_data());
        assert_eq!(once.jacobian.as_data(), twice.jacobian.as_data());
    }

    #[test]
    fn inflow_override_handles_dry_nodes() {
        let mut mesh = SampleMeshes::one_tri6_with_edges(1.0);
        mesh.nodes[1].set_surface(-0.5);
        mesh.nodes[1].bc.inlet = Some(0.8);
        mesh.nodes[1].bc.normal = [1.0, 0.0];
        mesh.nodes[1].set_velocity(0.1, 0.0);
        let nodes: Vec<&Node> = mesh.elements[0].points.iter().map(|p| &mesh.nodes[*p]).collect();
        let mut lsys = filled_system(6, 3);
        inflow_override(&mut lsys, GeoKind::Tri6, &nodes, 0.5, 0.01, true, true);
        // q is dropped and the depth is floored
        approx_eq(lsys.force[1], 0.5 * (0.0 - 0.1 * 0.01), 1e-15);
        approx_eq(lsys.jacobian.get(1, 1), 0.5 * 0.01, 1e-15);
        approx_eq(lsys.jacobian.get(1, 13), 0.5 * 0.1, 1e-15);
    }
}
