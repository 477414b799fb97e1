use crate::base::MAX_EQ;
use russell_lab::{Matrix, Vector};

/// Holds the local force vector and Jacobian matrix of one element
///
/// The capacity is fixed (MAX_EQ) so that the buffers can be allocated once and reused for all
/// elements. The rows and columns are organized in three blocks:
///
/// ```text
///   0 .. nnode                      → U (all nodes)
///   nnode .. 2 nnode                → V (all nodes)
///   2 nnode .. 2 nnode + ncorner    → S (corner nodes only)
/// ```
///
/// Entries beyond `2 nnode + ncorner` are always zero.
///
/// **Note:** `force` holds the negative residual, i.e., `force = -R`, whereas `jacobian = ∂R/∂u`.
#[derive(Clone, Debug)]
pub struct LocalSystem {
    /// Negative residual vector (MAX_EQ)
    pub force: Vector,

    /// Jacobian matrix (MAX_EQ, MAX_EQ)
    pub jacobian: Matrix,

    /// Number of nodes of the current element
    pub nnode: usize,

    /// Number of corner nodes of the current element
    pub ncorner: usize,
}

impl LocalSystem {
    /// Allocates a new instance
    pub fn new() -> Self {
        LocalSystem {
            force: Vector::new(MAX_EQ),
            jacobian: Matrix::new(MAX_EQ, MAX_EQ),
            nnode: 0,
            ncorner: 0,
        }
    }

    /// Clears all values and sets the layout of the next element
    pub fn reset(&mut self, nnode: usize, ncorner: usize) {
        self.force.fill(0.0);
        self.jacobian.fill(0.0);
        self.nnode = nnode;
        self.ncorner = ncorner;
    }

    /// Returns the number of local equations (2 nnode + ncorner)
    #[inline]
    pub fn neq(&self) -> usize {
        2 * self.nnode + self.ncorner
    }

    /// Returns the local equation of U at node m
    #[inline]
    pub fn iu(&self, m: usize) -> usize {
        m
    }

    /// Returns the local equation of V at node m
    #[inline]
    pub fn iv(&self, m: usize) -> usize {
        self.nnode + m
    }

    /// Returns the local equation of S at corner m
    #[inline]
    pub fn is(&self, m: usize) -> usize {
        2 * self.nnode + m
    }
}

impl Default for LocalSystem {
    fn default() -> Self {
        Self::new()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::LocalSystem;
    use crate::base::MAX_EQ;

    #[test]
    fn new_and_reset_work() {
        let mut lsys = LocalSystem::new();
        assert_eq!(lsys.force.dim(), MAX_EQ);
        assert_eq!(lsys.jacobian.dims(), (MAX_EQ, MAX_EQ));
        lsys.force[3] = 1.0;
        lsys.jacobian.set(2, 7, 1.0);
        lsys.reset(6, 3);
        assert_eq!(lsys.neq(), 15);
        assert_eq!(lsys.force[3], 0.0);
        assert_eq!(lsys.jacobian.get(2, 7), 0.0);
        assert_eq!(lsys.iu(2), 2);
        assert_eq!(lsys.iv(2), 8);
        assert_eq!(lsys.is(2), 14);
    }
}
