use super::{add_edge_force, add_edge_jacobian, add_region_force, add_region_jacobian, add_region_mass};
use super::{inflow_override, rotate_2d, ElementState, Factors, FlowPoint, LocalSystem};
use crate::base::{corner_count, gauss_points, Config, Element, MixedPad, Node, Role, MAX_NODES};
use crate::StrError;

/// Defines the assembly mode of an element
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Interior element; full unsteady Newton-Raphson form
    RegionFull,

    /// Interior element; reduced (steady) form with mass-like Jacobian blocks
    RegionReduced,

    /// Boundary edge; full form
    BoundFull,

    /// Boundary edge; reduced form
    BoundReduced,
}

impl Mode {
    /// Selects the mode from the element role and the reduced flag
    pub fn select(role: Role, reduced: bool) -> Self {
        match (role, reduced) {
            (Role::Region, false) => Mode::RegionFull,
            (Role::Region, true) => Mode::RegionReduced,
            (Role::Boundary, false) => Mode::BoundFull,
            (Role::Boundary, true) => Mode::BoundReduced,
        }
    }

    /// Returns whether the mode integrates over an area (region) or not (boundary edge)
    pub fn is_region(&self) -> bool {
        matches!(self, Mode::RegionFull | Mode::RegionReduced)
    }
}

/// Indicates whether an element has contributed to the global system
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Contribution {
    /// The local system holds the contribution of the element
    Assembled,

    /// The element is dry; the local system is zero
    Skipped,
}

/// Computes the local systems of the shallow-water equations
///
/// The assembler only reads the nodes and the configuration; thus, it may be shared by
/// many threads, each one writing into its own `LocalSystem`.
pub struct Assembler<'a> {
    /// Global configuration
    pub config: &'a Config,

    /// Node arena
    pub nodes: &'a [Node],

    /// Requests the reduced form instead of the full Newton-Raphson form
    pub reduced: bool,
}

impl<'a> Assembler<'a> {
    /// Allocates a new instance (full form)
    pub fn new(config: &'a Config, nodes: &'a [Node]) -> Self {
        Assembler {
            config,
            nodes,
            reduced: false,
        }
    }

    /// Computes the local force vector and/or the local Jacobian matrix of an element
    ///
    /// The local system is reset first. Dry elements return `Contribution::Skipped` and leave
    /// the local system zeroed.
    ///
    /// # Input
    ///
    /// * `element` -- the element (region or boundary edge)
    /// * `lsys` -- the local system (output)
    /// * `want_force` -- computes the force vector
    /// * `want_jacobian` -- computes the Jacobian matrix
    ///
    /// # Errors
    ///
    /// Errors are returned only for structural misuse; the numerics never fail.
    pub fn compute(
        &self,
        element: &Element,
        lsys: &mut LocalSystem,
        want_force: bool,
        want_jacobian: bool,
    ) -> Result<Contribution, StrError> {
        let kind = element.kind;
        let mut pad = MixedPad::new(kind)?;
        let (nnode, ncorner) = (kind.nnode(), corner_count(kind));
        lsys.reset(nnode, ncorner);

        // check
        if element.points.len() != nnode {
            return Err("number of points does not match the geometry kind");
        }
        let mode = Mode::select(element.role, self.reduced);
        if mode.is_region() && kind.ndim() != 2 {
            return Err("region element must be two-dimensional");
        }
        if !mode.is_region() && kind.ndim() != 1 {
            return Err("boundary element must be one-dimensional");
        }
        if element.dry {
            log::trace!("element {} is dry; skipping", element.id);
            return Ok(Contribution::Skipped);
        }

        // nodes in local order
        let first = self.nodes.get(element.points[0]).ok_or("point index is out of bounds")?;
        let mut refs: [&Node; MAX_NODES] = [first; MAX_NODES];
        for (m, p) in element.points.iter().enumerate() {
            refs[m] = self.nodes.get(*p).ok_or("point index is out of bounds")?;
        }
        let nodes = &refs[..nnode];

        // eddy-viscosity floor
        let vt_floor = if self.config.vt_min && mode.is_region() {
            Some(self.config.material_vt_min(element.material)?)
        } else {
            None
        };

        // shapes and nodal values
        let mut coords = [[0.0; 2]; MAX_NODES];
        for (m, node) in nodes.iter().enumerate() {
            coords[m] = node.coords();
        }
        pad.set_coords(&coords);
        let st = ElementState::gather(nodes, ncorner, self.config.h_min, !mode.is_region());

        // integration
        let factors = match mode {
            Mode::RegionFull | Mode::BoundFull => Factors::full(self.config),
            Mode::RegionReduced | Mode::BoundReduced => Factors::reduced(self.config),
        };
        let gauss = gauss_points(kind)?;
        let mut area = 0.0;
        for p in 0..gauss.npoint() {
            let w = pad.calc_at(gauss.coords(p))? * gauss.weight(p);
            area += w;
            match mode {
                Mode::RegionFull | Mode::RegionReduced => {
                    if want_force || (want_jacobian && mode == Mode::RegionFull) {
                        let p = FlowPoint::interpolate(&st, &pad, self.config, vt_floor);
                        if want_force {
                            add_region_force(lsys, &pad, &p, &factors, w);
                        }
                        if want_jacobian && mode == Mode::RegionFull {
                            add_region_jacobian(lsys, &pad, &p, &factors, w);
                        }
                    }
                    if want_jacobian && mode == Mode::RegionReduced {
                        add_region_mass(lsys, &pad, w);
                    }
                }
                Mode::BoundFull | Mode::BoundReduced => {
                    if want_force {
                        add_edge_force(lsys, &pad, &st, factors.pressure, factors.g, w);
                    }
                    if want_jacobian && mode == Mode::BoundFull {
                        add_edge_jacobian(lsys, &pad, &st, factors.pressure, factors.g, w);
                    }
                }
            }
        }

        // boundary frames and inflow constraints
        rotate_2d(lsys, nodes, want_force, want_jacobian);
        inflow_override(lsys, kind, nodes, area, self.config.h_min, want_force, want_jacobian);
        Ok(Contribution::Assembled)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
