use crate::base::SECONDS_PER_DAY;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds data for a loading stage (e.g., one lift of an embankment)
///
/// The load is applied linearly from `t_ini` to `t_fin`. For consolidation purposes, the elapsed time
/// is measured from the middle of the loading ramp (the shift time).
///
/// ```text
///  load
///   ^          t_fin
///   |            .-----------
///   |          /
///   |        /
///   |      /
///   +----.---:---.---------> t
///      t_ini shift
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct LoadingStage {
    /// Initial excess pore-water pressure u(0) generated by the load increment (kPa)
    pub pressure: f64,

    /// Time at the beginning of the construction (s)
    pub t_ini: f64,

    /// Time at the end of the construction (s)
    pub t_fin: f64,
}

impl LoadingStage {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `pressure` -- stress increment equal to the initial excess pore-water pressure (kPa)
    /// * `t_ini` -- time at the beginning of the construction (s)
    /// * `t_fin` -- time at the end of the construction (s)
    pub fn new(pressure: f64, t_ini: f64, t_fin: f64) -> Result<Self, StrError> {
        if pressure < 0.0 {
            return Err("pressure must be ≥ 0.0");
        }
        if t_ini < 0.0 {
            return Err("t_ini must be ≥ 0.0");
        }
        if t_fin < t_ini {
            return Err("t_fin must be ≥ t_ini");
        }
        Ok(LoadingStage { pressure, t_ini, t_fin })
    }

    /// Allocates a new instance corresponding to the construction of a fill layer
    ///
    /// The construction period is rounded up to a whole number of days.
    ///
    /// # Input
    ///
    /// * `height` -- height of the fill (m)
    /// * `unit_weight` -- unit weight of the fill (kN/m³)
    /// * `t_ini` -- time at the beginning of the construction (s)
    /// * `rate` -- construction rate (m/day)
    pub fn fill(height: f64, unit_weight: f64, t_ini: f64, rate: f64) -> Result<Self, StrError> {
        if height <= 0.0 {
            return Err("height of fill must be > 0.0");
        }
        if unit_weight <= 0.0 {
            return Err("unit weight of fill must be > 0.0");
        }
        if rate <= 0.0 {
            return Err("construction rate must be > 0.0");
        }
        let period = f64::ceil(height / rate);
        LoadingStage::new(height * unit_weight, t_ini, t_ini + period * SECONDS_PER_DAY)
    }

    /// Returns the shift time (middle of the loading ramp)
    #[inline]
    pub fn shift(&self) -> f64 {
        (self.t_ini + self.t_fin) / 2.0
    }

    /// Returns the elapsed time since the shift time (zero before the shift time)
    #[inline]
    pub fn elapsed(&self, t: f64) -> f64 {
        f64::max(t - self.shift(), 0.0)
    }

    /// Returns the construction period in days
    #[inline]
    pub fn period_days(&self) -> f64 {
        (self.t_fin - self.t_ini) / SECONDS_PER_DAY
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
