//! Makes available common structures needed to run an assembly pass
//!
//! You may write `use swsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{
    Config, Element, Equations, FlowState, Mesh, NodalBc, Node, ParamMaterial, PointSource, Role, ThetaWeights,
    TimeIntegration,
};
pub use crate::fem::{
    inflow_override, phi_2d, rotate_2d, Assembler, Contribution, ElementVec, LocalSystem, Mode, NodalReduction,
    SerialReduction,
};
pub use gemlab::shapes::GeoKind;
