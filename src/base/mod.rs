//! Implements the base structures: data model, configuration, numbering, and scatter helpers

mod assembly;
mod config;
mod constants;
mod element;
mod equations;
mod mesh;
mod mixed_pad;
mod node;
mod parameters;
mod sample_meshes;
mod sample_params;
pub use crate::base::assembly::*;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::element::*;
pub use crate::base::equations::*;
pub use crate::base::mesh::*;
pub use crate::base::mixed_pad::*;
pub use crate::base::node::*;
pub use crate::base::parameters::*;
pub use crate::base::sample_meshes::*;
pub use crate::base::sample_params::*;
