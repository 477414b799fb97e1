use super::NodalReduction;
use crate::base::{gauss_points, Mesh, MixedPad, Role};
use crate::StrError;

/// Computes the nodal average of the velocity-gradient product Φ
///
/// ```text
/// Φ = 2 (∂U/∂x)² + 2 (∂V/∂y)² + (∂U/∂y + ∂V/∂x)²
/// ```
///
/// Φ is integrated over each wet region element with the quadratic family. Each node receives the
/// integral and the area of all elements touching it; after the reduction, the nodal value is the
/// ratio of both sums. Dry nodes and nodes without wet elements get zero.
pub fn phi_2d(mesh: &Mesh, reduction: &dyn NodalReduction) -> Result<Vec<f64>, StrError> {
    let npoint = mesh.nodes.len();
    let mut integral = vec![0.0; npoint];
    let mut area = vec![0.0; npoint];
    for element in &mesh.elements {
        if element.role != Role::Region || element.dry {
            continue;
        }
        let mut pad = MixedPad::new(element.kind)?;
        pad.set_coords(&mesh.element_coords(element)?);
        let gauss = gauss_points(element.kind)?;
        let (mut phi_e, mut area_e) = (0.0, 0.0);
        for p in 0..gauss.npoint() {
            let w = pad.calc_at(gauss.coords(p))? * gauss.weight(p);
            let (mut ux, mut uy, mut vx, mut vy) = (0.0, 0.0, 0.0, 0.0);
            for (m, p) in element.points.iter().enumerate() {
                let now = &mesh.nodes[*p].now;
                ux += pad.gg[m][0] * now.u;
                uy += pad.gg[m][1] * now.u;
                vx += pad.gg[m][0] * now.v;
                vy += pad.gg[m][1] * now.v;
            }
            phi_e += w * (2.0 * ux * ux + 2.0 * vy * vy + (uy + vx) * (uy + vx));
            area_e += w;
        }
        for p in &element.points {
            integral[*p] += phi_e;
            area[*p] += area_e;
        }
    }
    reduction.sum(&mut integral);
    reduction.sum(&mut area);
    Ok(integral
        .iter()
        .zip(&area)
        .zip(&mesh.nodes)
        .map(|((phi, a), node)| if *a > 0.0 && !node.dry { phi / a } else { 0.0 })
        .collect())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::phi_2d;
    use crate::base::SampleMeshes;
    use crate::fem::{NodalReduction, SerialReduction};
    use russell_lab::approx_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn phi_2d_of_a_linear_field_is_uniform() {
        // U = a x + b y, V = c x + d y  ⇒  Φ = 2a² + 2d² + (b + c)²
        let (a, b, c, d) = (0.5, -0.2, 0.7, 0.1);
        let mut mesh = SampleMeshes::two_tri6();
        for node in &mut mesh.nodes {
            let (x, y) = (node.x, node.y);
            node.set_velocity(a * x + b * y, c * x + d * y);
        }
        let phi = phi_2d(&mesh, &SerialReduction).unwrap();
        let correct = 2.0 * a * a + 2.0 * d * d + (b + c) * (b + c);
        for value in phi {
            approx_eq(value, correct, 1e-13);
        }
    }

    #[test]
    fn phi_2d_skips_dry_elements_and_calls_the_reduction() {
        struct Counter(AtomicUsize);
        impl NodalReduction for Counter {
            fn sum(&self, _values: &mut [f64]) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
        let mut mesh = SampleMeshes::one_tri6_with_edges(1.0);
        for node in &mut mesh.nodes {
            let x = node.x;
            node.set_velocity(x, 0.0);
        }
        let counter = Counter(AtomicUsize::new(0));
        let phi = phi_2d(&mesh, &counter).unwrap();
        assert_eq!(counter.0.load(Ordering::SeqCst), 2);
        approx_eq(phi[4], 2.0, 1e-13);

        mesh.elements[0].dry = true;
        let phi = phi_2d(&mesh, &SerialReduction).unwrap();
        assert!(phi.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn phi_2d_is_zero_at_dry_nodes() {
        let mut mesh = SampleMeshes::one_tri6_with_edges(1.0);
        for node in &mut mesh.nodes {
            let x = node.x;
            node.set_velocity(x, 0.0);
        }
        mesh.nodes[4].dry = true;
        let phi = phi_2d(&mesh, &SerialReduction).unwrap();
        assert_eq!(phi[4], 0.0);
        approx_eq(phi[0], 2.0, 1e-13);
        approx_eq(phi[3], 2.0, 1e-13);
    }
}
