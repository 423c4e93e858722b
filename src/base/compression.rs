use super::{STRENGTH_GAIN_RATIO, UNIT_WEIGHT_WATER};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds parameters for the one-dimensional compression of a normally consolidated clay
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamCompression {
    /// Compression index Cc
    pub cc: f64,

    /// Secondary compression index Cα
    pub ca: f64,

    /// Initial void ratio e0
    pub e0: f64,
}

/// Holds the settlements expected after the end of construction (m)
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct PostConstruction {
    /// Primary consolidation settlement not yet developed at the end of construction
    pub remaining: f64,

    /// Additional primary settlement due to the traffic load
    pub traffic: f64,

    /// Secondary compression settlement
    pub secondary: f64,

    /// Sum of the remaining, traffic, and secondary settlements
    pub total: f64,
}

/// Implements the primary and secondary settlement of a normally consolidated clay layer
#[derive(Clone, Copy, Debug)]
pub struct Compression {
    cc: f64, // compression index
    ca: f64, // secondary compression index
    e0: f64, // initial void ratio
}

impl Compression {
    /// Allocates a new instance
    pub fn new(param: &ParamCompression) -> Result<Self, StrError> {
        if param.cc <= 0.0 {
            return Err("compression index must be > 0.0");
        }
        if param.ca < 0.0 {
            return Err("secondary compression index must be ≥ 0.0");
        }
        if param.e0 <= 0.0 {
            return Err("void ratio must be > 0.0");
        }
        Ok(Compression {
            cc: param.cc,
            ca: param.ca,
            e0: param.e0,
        })
    }

    /// Calculates the total primary consolidation settlement (m)
    ///
    /// ```text
    ///     H Cc        σ'0 + Δσ'
    /// S = ———— log₁₀ ——————————
    ///     1+e0           σ'0
    /// ```
    ///
    /// # Input
    ///
    /// * `thickness` -- thickness of the layer H
    /// * `sig_ini` -- initial effective vertical stress at the middle of the layer σ'0 (kPa)
    /// * `dsig` -- effective vertical stress increment Δσ' (kPa)
    pub fn primary_settlement(&self, thickness: f64, sig_ini: f64, dsig: f64) -> Result<f64, StrError> {
        if thickness <= 0.0 {
            return Err("thickness must be > 0.0");
        }
        if sig_ini <= 0.0 {
            return Err("initial effective stress must be > 0.0");
        }
        if dsig < 0.0 {
            return Err("stress increment must be ≥ 0.0");
        }
        Ok(thickness * self.cc * f64::log10((sig_ini + dsig) / sig_ini) / (1.0 + self.e0))
    }

    /// Calculates the secondary compression settlement (m) between the end of primary consolidation and a final time
    ///
    /// ```text
    ///     H Cα        t_end
    /// S = ———— log₁₀ ———————
    ///     1+e0        t_prim
    /// ```
    ///
    /// **Note:** Times must have the same units (e.g., days).
    pub fn secondary_settlement(&self, thickness: f64, t_primary: f64, t_end: f64) -> Result<f64, StrError> {
        if thickness <= 0.0 {
            return Err("thickness must be > 0.0");
        }
        if t_primary <= 0.0 {
            return Err("time at the end of primary consolidation must be > 0.0");
        }
        if t_end < t_primary {
            return Err("final time must be ≥ the time at the end of primary consolidation");
        }
        Ok(thickness * self.ca * f64::log10(t_end / t_primary) / (1.0 + self.e0))
    }

    /// Calculates the additional primary settlement caused by a traffic load on top of the fill (m)
    ///
    /// ```text
    ///     H Cc        σ'0 + Δσ' + Δσt
    /// S = ———— log₁₀ ————————————————  -  S(Δσ')
    ///     1+e0             σ'0
    /// ```
    pub fn traffic_settlement(&self, thickness: f64, sig_ini: f64, dsig: f64, dsig_traffic: f64) -> Result<f64, StrError> {
        if dsig_traffic < 0.0 {
            return Err("traffic load must be ≥ 0.0");
        }
        let s_fill = self.primary_settlement(thickness, sig_ini, dsig)?;
        let s_all = self.primary_settlement(thickness, sig_ini, dsig + dsig_traffic)?;
        Ok(s_all - s_fill)
    }

    /// Calculates the settlements after the end of construction
    ///
    /// # Input
    ///
    /// * `thickness` -- thickness of the layer H
    /// * `sig_ini` -- initial effective vertical stress σ'0 (kPa)
    /// * `dsig` -- stress increment due to the whole fill (kPa)
    /// * `dsig_traffic` -- stress increment due to the traffic load (kPa)
    /// * `s_end` -- consolidation settlement developed at the end of construction
    /// * `t_primary` -- time at the end of primary consolidation (e.g., Uvr = 99 %)
    /// * `t_end` -- end of the design life (same units as `t_primary`)
    pub fn post_construction(
        &self,
        thickness: f64,
        sig_ini: f64,
        dsig: f64,
        dsig_traffic: f64,
        s_end: f64,
        t_primary: f64,
        t_end: f64,
    ) -> Result<PostConstruction, StrError> {
        let s_total = self.primary_settlement(thickness, sig_ini, dsig)?;
        if s_end < 0.0 || s_end > s_total {
            return Err("settlement at the end of construction must be in [0, total primary settlement]");
        }
        let remaining = s_total - s_end;
        let traffic = self.traffic_settlement(thickness, sig_ini, dsig, dsig_traffic)?;
        let secondary = self.secondary_settlement(thickness, t_primary, t_end)?;
        Ok(PostConstruction {
            remaining,
            traffic,
            secondary,
            total: remaining + traffic + secondary,
        })
    }
}

/// Calculates the gain of undrained shear strength due to consolidation (kPa)
///
/// ```text
/// Δcu = 0.25 Uvr Δσ
/// ```
///
/// # Input
///
/// * `uvr` -- the degree of consolidation under the load increment
/// * `dsig` -- the stress increment (kPa)
pub fn strength_gain(uvr: f64, dsig: f64) -> Result<f64, StrError> {
    if uvr < 0.0 || uvr > 1.0 {
        return Err("degree of consolidation must be in [0, 1]");
    }
    if dsig < 0.0 {
        return Err("stress increment must be ≥ 0.0");
    }
    Ok(STRENGTH_GAIN_RATIO * uvr * dsig)
}

/// Calculates the effective vertical stress σ'0 = (γ - γw)・z of a submerged soil (kPa)
pub fn effective_overburden(unit_weight: f64, depth: f64) -> Result<f64, StrError> {
    if unit_weight <= UNIT_WEIGHT_WATER {
        return Err("unit weight of the soil must be greater than the unit weight of water");
    }
    if depth < 0.0 {
        return Err("depth must be ≥ 0.0");
    }
    Ok((unit_weight - UNIT_WEIGHT_WATER) * depth)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
