use super::corner_count;
use gemlab::shapes::GeoKind;
use serde::{Deserialize, Serialize};

/// Defines the role of an element in the assembly
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Role {
    /// Interior (area) element
    Region,

    /// Boundary edge
    Boundary,
}

/// Holds the data of an element
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Element {
    /// Identification number (equal to the index in the mesh arena)
    pub id: usize,

    /// Geometry kind
    pub kind: GeoKind,

    /// Node indices: corner nodes first, then mid-side nodes
    pub points: Vec<usize>,

    /// Material (element type) identification number
    pub material: usize,

    /// Role of the element
    pub role: Role,

    /// Dry element (excluded from the assembly)
    pub dry: bool,
}

impl Element {
    /// Allocates a new (wet) region element
    pub fn region(id: usize, kind: GeoKind, points: &[usize], material: usize) -> Self {
        Element {
            id,
            kind,
            points: points.to_vec(),
            material,
            role: Role::Region,
            dry: false,
        }
    }

    /// Allocates a new (wet) boundary edge
    pub fn boundary(id: usize, kind: GeoKind, points: &[usize], material: usize) -> Self {
        Element {
            id,
            kind,
            points: points.to_vec(),
            material,
            role: Role::Boundary,
            dry: false,
        }
    }

    /// Returns the number of local equations (2 nnode + ncorner)
    pub fn n_equation_local(&self) -> usize {
        2 * self.kind.nnode() + corner_count(self.kind)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Element, Role};
    use gemlab::shapes::GeoKind;

    #[test]
    fn constructors_work() {
        let e = Element::region(0, GeoKind::Tri6, &[0, 1, 2, 3, 4, 5], 1);
        assert_eq!(e.role, Role::Region);
        assert_eq!(e.n_equation_local(), 15);
        let b = Element::boundary(1, GeoKind::Lin3, &[0, 1, 3], 1);
        assert_eq!(b.role, Role::Boundary);
        assert_eq!(b.n_equation_local(), 8);
        assert!(!b.dry);
    }
}
