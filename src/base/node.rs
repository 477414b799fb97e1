use serde::{Deserialize, Serialize};

/// Holds the flow variables of a node at one time level
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct FlowState {
    /// Velocity along x (m/s)
    pub u: f64,

    /// Velocity along y (m/s)
    pub v: f64,

    /// Water-surface elevation (m)
    pub s: f64,

    /// Time derivative of u
    pub du_dt: f64,

    /// Time derivative of v
    pub dv_dt: f64,

    /// Time derivative of s
    pub ds_dt: f64,
}

/// Holds a point source (or sink, if negative) attached to a node
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct PointSource {
    /// Discharge Q (m³/s)
    pub discharge: f64,

    /// Total area of the elements connected to the node (m²)
    ///
    /// See `Mesh::init_source_areas`.
    pub area: f64,
}

/// Holds the boundary-condition descriptor of a node
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct NodalBc {
    /// Velocity-specified inflow with the prescribed specific discharge q (m²/s)
    pub inlet: Option<f64>,

    /// Point source or sink
    pub source: Option<PointSource>,

    /// Prescribed water-surface elevation at an open boundary (m)
    pub outlet: Option<f64>,

    /// Impermeable (slip) wall
    pub slip: bool,

    /// Outward unit normal
    pub normal: [f64; 2],
}

/// Holds the data of a mesh node
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Node {
    /// Identification number (equal to the index in the mesh arena)
    pub id: usize,

    /// x-coordinate
    pub x: f64,

    /// y-coordinate
    pub y: f64,

    /// Bed elevation
    pub z: f64,

    /// Flow variables at the current iteration
    pub now: FlowState,

    /// Flow variables at the previous time step
    pub old: FlowState,

    /// Eddy viscosity (m²/s)
    pub vt: f64,

    /// Anisotropy factor xx of the eddy viscosity
    pub exx: f64,

    /// Anisotropy factor xy of the eddy viscosity
    pub exy: f64,

    /// Anisotropy factor yy of the eddy viscosity
    pub eyy: f64,

    /// Depth-averaged Reynolds stress uu
    pub re_uu: f64,

    /// Depth-averaged Reynolds stress uv
    pub re_uv: f64,

    /// Depth-averaged Reynolds stress vv
    pub re_vv: f64,

    /// Dispersion coefficient xx
    pub disp_xx: f64,

    /// Dispersion coefficient xy
    pub disp_xy: f64,

    /// Dispersion coefficient yy
    pub disp_yy: f64,

    /// Bottom friction coefficient
    pub cf: f64,

    /// Boundary conditions
    pub bc: NodalBc,

    /// Dry node (set by the wetting-drying driver); nodal post-processing values are zero
    pub dry: bool,
}

impl NodalBc {
    /// Returns whether the node carries a rotated (normal, tangential) frame
    pub fn rotated(&self) -> bool {
        self.slip || self.inlet.is_some()
    }
}

impl Node {
    /// Allocates a new node at rest with the water surface at the bed
    ///
    /// The eddy viscosity is isotropic (exx = eyy = 1, exy = 0) and zero.
    pub fn new(id: usize, x: f64, y: f64, z: f64) -> Self {
        let state = FlowState {
            s: z,
            ..Default::default()
        };
        Node {
            id,
            x,
            y,
            z,
            now: state,
            old: state,
            vt: 0.0,
            exx: 1.0,
            exy: 0.0,
            eyy: 1.0,
            re_uu: 0.0,
            re_uv: 0.0,
            re_vv: 0.0,
            disp_xx: 0.0,
            disp_xy: 0.0,
            disp_yy: 0.0,
            cf: 0.0,
            bc: NodalBc::default(),
            dry: false,
        }
    }

    /// Sets the current and previous water-surface elevations
    pub fn set_surface(&mut self, s: f64) -> &mut Self {
        self.now.s = s;
        self.old.s = s;
        self
    }

    /// Sets the current and previous velocities
    pub fn set_velocity(&mut self, u: f64, v: f64) -> &mut Self {
        self.now.u = u;
        self.now.v = v;
        self.old.u = u;
        self.old.v = v;
        self
    }

    /// Returns the current flow depth S - z (may be non-positive)
    pub fn depth(&self) -> f64 {
        self.now.s - self.z
    }

    /// Returns the coordinates
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
