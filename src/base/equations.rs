use super::{corner_count, Mesh};
use crate::StrError;
use std::fmt;

/// Holds equation numbers (DOF numbers)
///
/// U and V are numbered at every node, and S at every node that is a corner of some element.
/// The local-to-global maps follow the block layout of the local systems:
///
/// ```text
/// local:  0 .. nnode → U,   nnode .. 2 nnode → V,   2 nnode .. 2 nnode + ncorner → S
/// ```
///
/// # Examples
///
/// ```
/// use swsim::base::{Equations, SampleMeshes};
/// use swsim::StrError;
///
/// fn main() -> Result<(), StrError> {
///     let mesh = SampleMeshes::one_tri6_with_edges(1.0);
///     let eqs = Equations::new(&mesh)?;
///     assert_eq!(
///         format!("{}", eqs),
///         "Points: U, V, S equation numbers\n\
///          ================================\n\
///          0: 0, 1, Some(2)\n\
///          1: 3, 4, Some(5)\n\
///          2: 6, 7, Some(8)\n\
///          3: 9, 10, None\n\
///          4: 11, 12, None\n\
///          5: 13, 14, None\n\
///          \n\
///          Elements: Local-to-Global\n\
///          =========================\n\
///          0: [0, 3, 6, 9, 11, 13, 1, 4, 7, 10, 12, 14, 2, 5, 8]\n\
///          1: [0, 3, 9, 1, 4, 10, 2, 5]\n\
///          2: [3, 6, 11, 4, 7, 12, 5, 8]\n\
///          3: [6, 0, 13, 7, 1, 14, 8, 2]\n\
///          \n\
///          Information\n\
///          ===========\n\
///          number of equations = 15\n\
///          number of non-zeros = 417\n"
///     );
///     Ok(())
/// }
/// ```
pub struct Equations {
    /// Equation numbers of U (npoint)
    pub u: Vec<usize>,

    /// Equation numbers of V (npoint)
    pub v: Vec<usize>,

    /// Equation numbers of S (npoint); None for nodes that are never corners
    pub s: Vec<Option<usize>>,

    /// Local-to-global maps (nelement)
    pub local_to_global: Vec<Vec<usize>>,

    /// Total number of global equations
    pub n_equation: usize,

    /// Supremum of the number of nonzero values in the global matrix, i.e., Σ (n_equation_local)²
    pub nnz_sup: usize,
}

impl Equations {
    /// Allocates a new instance
    pub fn new(mesh: &Mesh) -> Result<Self, StrError> {
        // find corner nodes
        let npoint = mesh.nodes.len();
        let mut is_corner = vec![false; npoint];
        for element in &mesh.elements {
            for p in element.points.iter().take(corner_count(element.kind)) {
                if *p >= npoint {
                    return Err("cannot find equation number because point_id is out of bounds");
                }
                is_corner[*p] = true;
            }
        }

        // number the DOFs point by point
        let mut u = vec![0; npoint];
        let mut v = vec![0; npoint];
        let mut s = vec![None; npoint];
        let mut n_equation = 0;
        for p in 0..npoint {
            u[p] = n_equation;
            v[p] = n_equation + 1;
            n_equation += 2;
            if is_corner[p] {
                s[p] = Some(n_equation);
                n_equation += 1;
            }
        }

        // local-to-global maps
        let mut local_to_global = Vec::with_capacity(mesh.elements.len());
        let mut nnz_sup = 0;
        for element in &mesh.elements {
            let (nnode, ncorner) = (element.kind.nnode(), corner_count(element.kind));
            let mut l2g = vec![0; 2 * nnode + ncorner];
            for (m, p) in element.points.iter().enumerate() {
                if *p >= npoint {
                    return Err("cannot find equation number because point_id is out of bounds");
                }
                l2g[m] = u[*p];
                l2g[nnode + m] = v[*p];
                if m < ncorner {
                    l2g[2 * nnode + m] = s[*p].ok_or("cannot find the S equation of a corner node")?;
                }
            }
            nnz_sup += l2g.len() * l2g.len();
            local_to_global.push(l2g);
        }
        Ok(Equations {
            u,
            v,
            s,
            local_to_global,
            n_equation,
            nnz_sup,
        })
    }
}

impl fmt::Display for Equations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Points: U, V, S equation numbers\n")?;
        write!(f, "================================\n")?;
        for p in 0..self.u.len() {
            write!(f, "{}: {}, {}, {:?}\n", p, self.u[p], self.v[p], self.s[p])?;
        }
        write!(f, "\nElements: Local-to-Global\n")?;
        write!(f, "=========================\n")?;
        for (e, l2g) in self.local_to_global.iter().enumerate() {
            write!(f, "{}: {:?}\n", e, l2g)?;
        }
        write!(f, "\nInformation\n")?;
        write!(f, "===========\n")?;
        write!(f, "number of equations = {}\n", self.n_equation)?;
        write!(f, "number of non-zeros = {}\n", self.nnz_sup)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Equations;
    use crate::base::SampleMeshes;

    #[test]
    fn new_captures_errors() {
        let mut mesh = SampleMeshes::two_tri6();
        mesh.elements[1].points[0] = 100; // never do this!
        assert_eq!(
            Equations::new(&mesh).err(),
            Some("cannot find equation number because point_id is out of bounds")
        );
        let mut mesh = SampleMeshes::two_tri6();
        mesh.elements[1].points[4] = 100; // never do this!
        assert_eq!(
            Equations::new(&mesh).err(),
            Some("cannot find equation number because point_id is out of bounds")
        );
    }

    #[test]
    fn new_works() {
        let mesh = SampleMeshes::two_tri6();
        let eqs = Equations::new(&mesh).unwrap();
        // 9 nodes with U and V plus 4 corners with S
        assert_eq!(eqs.n_equation, 22);
        assert_eq!(eqs.s[5], None);
        assert_eq!(eqs.s[3], Some(11));
        assert_eq!(eqs.u[4], 12);
        let l2g = &eqs.local_to_global[1];
        assert_eq!(l2g.len(), 15);
        // first U, first V and first S of element 1 belong to node 1
        assert_eq!(l2g[0], eqs.u[1]);
        assert_eq!(l2g[6], eqs.v[1]);
        assert_eq!(l2g[12], eqs.s[1].unwrap());
        assert_eq!(eqs.nnz_sup, 2 * 225);
    }
}
