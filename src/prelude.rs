//! Makes available common structures needed to run a consolidation analysis
//!
//! You may write `use geoconsol::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Compression, Control, PostConstruction, DrainPattern, Drains, RadialFactor, SoilLayer};
pub use crate::base::{ParamCompression, ParamDrains, ParamSoilLayer, DEFAULT_TEST_DIR, SECONDS_PER_DAY};
pub use crate::consolidation::{ConsolidationSolver, ConsolidationState, LoadingStage, StagedLoading};
pub use crate::consolidation::{ScheduleEvent, ScheduleReport, WaitingPeriod};
pub use crate::StrError;
