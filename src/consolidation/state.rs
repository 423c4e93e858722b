use serde::{Deserialize, Serialize};

/// Holds the degrees of consolidation at some elapsed time
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ConsolidationState {
    /// Degree of consolidation due to vertical flow Uv
    pub uv: f64,

    /// Degree of consolidation due to radial flow Ur
    pub ur: f64,

    /// Degree of consolidation due to combined vertical and radial flow Uvr
    pub uvr: f64,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
