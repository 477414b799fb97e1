//! Implements the shallow-water element assembler and the element collections

mod assembler;
mod blocks;
mod boundary;
mod elements;
mod flow_gradients;
mod flow_point;
mod inflow;
mod local_system;
mod reduction;
mod region;
mod rotation;
pub use crate::fem::assembler::*;
pub(crate) use crate::fem::boundary::*;
pub use crate::fem::elements::*;
pub use crate::fem::flow_gradients::*;
pub(crate) use crate::fem::flow_point::*;
pub use crate::fem::inflow::*;
pub use crate::fem::local_system::*;
pub use crate::fem::reduction::*;
pub(crate) use crate::fem::region::*;
pub use crate::fem::rotation::*;
