//! Geoconsol -- Consolidation of soft soils under staged embankments with vertical drains
//!
//! The crate computes the degree of consolidation due to vertical flow (Terzaghi),
//! radial flow towards vertical drains (Barron), and their combination. Staged
//! construction is handled by superposition of the excess pore-water pressure
//! generated by each loading stage.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod consolidation;
pub mod prelude;
