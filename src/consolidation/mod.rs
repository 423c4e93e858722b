//! Implements the consolidation theories and the superposition of loading stages

mod combined;
mod radial;
mod solver;
mod stage;
mod staged;
mod state;
mod vertical;
pub use crate::consolidation::combined::*;
pub use crate::consolidation::radial::*;
pub use crate::consolidation::solver::*;
pub use crate::consolidation::stage::*;
pub use crate::consolidation::staged::*;
pub use crate::consolidation::state::*;
pub use crate::consolidation::vertical::*;
