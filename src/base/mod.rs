//! Implements the base structures: constants, control options, and soil and drain parameters

mod compression;
mod constants;
mod control;
mod drains;
mod soil;
pub use crate::base::compression::*;
pub use crate::base::constants::*;
pub use crate::base::control::*;
pub use crate::base::drains::*;
pub use crate::base::soil::*;
