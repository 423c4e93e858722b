use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the installation pattern of vertical drains (or granular columns)
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum DrainPattern {
    /// Equilateral triangular pattern
    Triangular,

    /// Square pattern
    Square,
}

impl DrainPattern {
    /// Returns the coefficient converting the spacing into the influence diameter `de = coef・s`
    pub fn influence_coefficient(&self) -> f64 {
        match self {
            DrainPattern::Triangular => 1.06,
            DrainPattern::Square => 1.13,
        }
    }
}

/// Defines the factor F in Barron's solution for radial consolidation
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub enum RadialFactor {
    /// Ideal drain with the F(N) factor
    ///
    /// ```text
    ///           N²              3N² - 1
    /// F(N) = ——————— ln(N)  -  —————————
    ///        N² - 1               4N²
    /// ```
    Barron,

    /// Drain with finite discharge capacity (well resistance)
    ///
    /// ```text
    ///                          π z (2 hdr - z) kr
    /// Fm = ln(N) - 0.75  +  ————————————————————
    ///                                Qc
    /// ```
    WellResistance {
        /// Depth z within the layer where the degree of consolidation is evaluated (m)
        depth: f64,

        /// Discharge capacity of the drain Qc (m³/s)
        discharge: f64,

        /// Radial permeability of the soil kr (m/s)
        kr: f64,
    },
}

/// Holds parameters for vertical drains
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamDrains {
    /// Equivalent diameter of the drain dc (m)
    pub diameter: f64,

    /// Diameter of the zone of influence (unit cell) de (m)
    pub influence_diameter: f64,

    /// Option for the factor F in the radial consolidation equation
    pub radial: RadialFactor,
}

/// Implements the geometry of vertical drains
#[derive(Clone, Copy, Debug)]
pub struct Drains {
    /// Equivalent diameter of the drain dc (m)
    ///
    /// **(readonly)**
    pub dc: f64,

    /// Diameter of the zone of influence de (m)
    ///
    /// **(readonly)**
    pub de: f64,

    /// Diameter ratio `N = de / dc`
    ///
    /// **(readonly)**
    pub nn: f64,

    /// Option for the factor F
    ///
    /// **(readonly)**
    pub radial: RadialFactor,
}

impl Drains {
    /// Allocates a new instance
    pub fn new(param: &ParamDrains) -> Result<Self, StrError> {
        if param.diameter <= 0.0 {
            return Err("drain diameter must be > 0.0");
        }
        if param.influence_diameter <= param.diameter {
            return Err("diameter ratio must be > 1");
        }
        if let RadialFactor::WellResistance { depth, discharge, kr } = param.radial {
            if depth < 0.0 {
                return Err("depth for the well resistance must be ≥ 0.0");
            }
            if discharge <= 0.0 {
                return Err("discharge capacity must be > 0.0");
            }
            if kr <= 0.0 {
                return Err("radial permeability must be > 0.0");
            }
        }
        Ok(Drains {
            dc: param.diameter,
            de: param.influence_diameter,
            nn: param.influence_diameter / param.diameter,
            radial: param.radial,
        })
    }

    /// Allocates a new instance given the spacing and the installation pattern
    ///
    /// # Input
    ///
    /// * `dc` -- equivalent diameter of the drain
    /// * `spacing` -- center-to-center distance between drains
    /// * `pattern` -- installation pattern
    /// * `radial` -- option for the factor F
    pub fn from_spacing(dc: f64, spacing: f64, pattern: DrainPattern, radial: RadialFactor) -> Result<Self, StrError> {
        if spacing <= 0.0 {
            return Err("drain spacing must be > 0.0");
        }
        Drains::new(&ParamDrains {
            diameter: dc,
            influence_diameter: pattern.influence_coefficient() * spacing,
            radial,
        })
    }
}

/// Calculates the equivalent diameter of a prefabricated (band-shaped) vertical drain
///
/// ```text
/// dc = (b + t) / 2
/// ```
///
/// **Note:** Width and thickness must have the same units; e.g., mm in, mm out.
pub fn prefabricated_diameter(width: f64, thickness: f64) -> Result<f64, StrError> {
    if width <= 0.0 || thickness <= 0.0 {
        return Err("width and thickness of the drain must be > 0.0");
    }
    Ok((width + thickness) / 2.0)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
