use super::{Assembler, Contribution, LocalSystem};
use crate::base::{assemble_matrix, assemble_vector, Config, Element, Equations, Mesh};
use crate::StrError;
use rayon::prelude::*;
use russell_lab::Vector;
use russell_sparse::CooMatrix;

/// Holds the local system of one element and its connection to the global system
pub struct LocalElement<'a> {
    /// The element
    pub element: &'a Element,

    /// Local-to-global mapping
    pub local_to_global: &'a [usize],

    /// Local force vector and Jacobian matrix
    pub lsys: LocalSystem,

    /// Result of the last computation
    pub contribution: Contribution,
}

/// Holds a collection of local elements and runs assembly passes over them
pub struct ElementVec<'a> {
    /// Computes the local systems
    pub assembler: Assembler<'a>,

    /// All elements
    pub all: Vec<LocalElement<'a>>,
}

impl<'a> LocalElement<'a> {
    /// Computes the local system
    pub fn calc(&mut self, assembler: &Assembler, want_force: bool, want_jacobian: bool) -> Result<(), StrError> {
        self.contribution = assembler.compute(self.element, &mut self.lsys, want_force, want_jacobian)?;
        Ok(())
    }
}

impl<'a> ElementVec<'a> {
    /// Allocates a new instance
    pub fn new(mesh: &'a Mesh, config: &'a Config, equations: &'a Equations) -> Result<Self, StrError> {
        if equations.local_to_global.len() != mesh.elements.len() {
            return Err("number of local-to-global maps must equal the number of elements");
        }
        let all = mesh
            .elements
            .iter()
            .zip(&equations.local_to_global)
            .map(|(element, l2g)| LocalElement {
                element,
                local_to_global: l2g.as_slice(),
                lsys: LocalSystem::new(),
                contribution: Contribution::Skipped,
            })
            .collect();
        Ok(ElementVec {
            assembler: Assembler::new(config, &mesh.nodes),
            all,
        })
    }

    /// Computes all local systems
    pub fn calc_all(&mut self, want_force: bool, want_jacobian: bool) -> Result<(), StrError> {
        let assembler = &self.assembler;
        self.all
            .iter_mut()
            .map(|e| e.calc(assembler, want_force, want_jacobian))
            .collect::<Result<(), _>>()?;
        self.log_summary();
        Ok(())
    }

    /// Computes all local systems in parallel
    pub fn calc_all_parallel(&mut self, want_force: bool, want_jacobian: bool) -> Result<(), StrError> {
        let assembler = &self.assembler;
        self.all
            .par_iter_mut()
            .map(|e| e.calc(assembler, want_force, want_jacobian))
            .collect::<Result<(), _>>()?;
        self.log_summary();
        Ok(())
    }

    /// Returns the number of assembled and skipped elements of the last pass
    pub fn counts(&self) -> (usize, usize) {
        let assembled = self
            .all
            .iter()
            .filter(|e| e.contribution == Contribution::Assembled)
            .count();
        (assembled, self.all.len() - assembled)
    }

    /// Assembles the local force vectors
    ///
    /// **Notes:**
    ///
    /// 1. You must call calc_all (or calc_all_parallel) first
    /// 2. The global vector will be cleared (with zeros) at the beginning
    pub fn assemble_force(&self, ff: &mut Vector, prescribed: &[bool]) {
        ff.fill(0.0); // << important
        self.all
            .iter()
            .filter(|e| e.contribution == Contribution::Assembled)
            .for_each(|e| assemble_vector(ff, &e.lsys.force, e.local_to_global, prescribed));
    }

    /// Assembles the local Jacobian matrices
    ///
    /// **Notes:**
    ///
    /// 1. You must call calc_all (or calc_all_parallel) first
    /// 2. The CooMatrix position in the global matrix K will be reset at the beginning
    /// 3. The CooMatrix must be allocated with room for `Equations::nnz_sup` entries
    pub fn assemble_jacobian(&self, kk: &mut CooMatrix, prescribed: &[bool]) -> Result<(), StrError> {
        kk.reset(); // << important
        for e in self.all.iter().filter(|e| e.contribution == Contribution::Assembled) {
            assemble_matrix(kk, &e.lsys.jacobian, e.local_to_global, prescribed)?;
        }
        Ok(())
    }

    fn log_summary(&self) {
        let (assembled, skipped) = self.counts();
        log::debug!(
            "assembly pass ({}): {} elements assembled, {} skipped",
            if self.assembler.reduced { "reduced" } else { "full" },
            assembled,
            skipped
        );
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ElementVec;
    use crate::base::{Equations, SampleMeshes, SampleParams};
    use crate::fem::Contribution;
    use russell_lab::{approx_eq, Vector};
    use russell_sparse::{CooMatrix, Sym};

    #[test]
    fn new_captures_errors() {
        let mesh = SampleMeshes::one_tri6_with_edges(1.0);
        let config = SampleParams::config_inviscid();
        let mut eqs = Equations::new(&mesh).unwrap();
        eqs.local_to_global.pop();
        assert_eq!(
            ElementVec::new(&mesh, &config, &eqs).err(),
            Some("number of local-to-global maps must equal the number of elements")
        );
    }

    #[test]
    fn calc_all_and_assemble_work() {
        let mut mesh = SampleMeshes::one_tri6_with_edges(1.0);
        mesh.elements[3].dry = true;
        let config = SampleParams::config_inviscid();
        let eqs = Equations::new(&mesh).unwrap();
        let mut evec = ElementVec::new(&mesh, &config, &eqs).unwrap();
        evec.calc_all(true, true).unwrap();
        assert_eq!(evec.counts(), (3, 1));
        assert_eq!(evec.all[3].contribution, Contribution::Skipped);

        let neq = eqs.n_equation;
        let mut ff = Vector::new(neq);
        ff.fill(123.0);
        let mut coo = CooMatrix::new(neq, neq, eqs.nnz_sup, Sym::No).unwrap();
        let mut prescribed = vec![false; neq];
        prescribed[eqs.u[2]] = true;
        evec.assemble_force(&mut ff, &prescribed);
        evec.assemble_jacobian(&mut coo, &prescribed).unwrap();
        // a second pass starts from scratch
        evec.assemble_jacobian(&mut coo, &prescribed).unwrap();
        let kk = coo.as_dense();
        assert_eq!(ff[eqs.u[2]], 0.0);
        for j in 0..neq {
            assert_eq!(kk.get(eqs.u[2], j), 0.0);
            assert_eq!(kk.get(j, eqs.u[2]), 0.0);
        }
        // the S-S block of the region is the only contribution to the continuity rows
        let s0 = eqs.s[0].unwrap();
        approx_eq(
            kk.get(s0, s0),
            evec.all[0].lsys.jacobian.get(12, 12),
            1e-15,
        );
    }
}
