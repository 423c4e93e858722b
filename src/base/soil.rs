use super::UNIT_WEIGHT_WATER;
use crate::consolidation::time_factor_vertical;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds parameters for a soft soil layer undergoing consolidation
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamSoilLayer {
    /// Thickness of the layer H (m)
    pub thickness: f64,

    /// Length of the drainage path hdr (m)
    ///
    /// Equal to the thickness for a singly-drained layer or half the thickness for a doubly-drained layer
    pub drainage_length: f64,

    /// Coefficient of consolidation due to vertical flow cv (m²/s)
    pub cv: f64,

    /// Coefficient of consolidation due to radial flow cr (m²/s)
    pub cr: f64,
}

/// Implements a soft soil layer with validated consolidation parameters
#[derive(Clone, Copy, Debug)]
pub struct SoilLayer {
    /// Thickness H (m)
    ///
    /// **(readonly)**
    pub thickness: f64,

    /// Drainage length hdr (m)
    ///
    /// **(readonly)**
    pub hdr: f64,

    /// Coefficient of consolidation due to vertical flow cv (m²/s)
    ///
    /// **(readonly)**
    pub cv: f64,

    /// Coefficient of consolidation due to radial flow cr (m²/s)
    ///
    /// **(readonly)**
    pub cr: f64,

    /// Auxiliary coefficient `bv = cv / hdr²` such that `Tv = bv・t` (1/s)
    ///
    /// **(readonly)**
    pub bv: f64,
}

impl SoilLayer {
    /// Allocates a new instance
    pub fn new(param: &ParamSoilLayer) -> Result<Self, StrError> {
        if param.thickness <= 0.0 {
            return Err("thickness must be > 0.0");
        }
        if param.drainage_length <= 0.0 {
            return Err("drainage length must be > 0.0");
        }
        if param.drainage_length > param.thickness {
            return Err("drainage length must be ≤ thickness");
        }
        if param.cv <= 0.0 {
            return Err("coefficient of consolidation cv must be > 0.0");
        }
        if param.cr <= 0.0 {
            return Err("coefficient of consolidation cr must be > 0.0");
        }
        Ok(SoilLayer {
            thickness: param.thickness,
            hdr: param.drainage_length,
            cv: param.cv,
            cr: param.cr,
            bv: param.cv / (param.drainage_length * param.drainage_length),
        })
    }

    /// Calculates the radial permeability `kr = cr・mv・γw` (m/s)
    ///
    /// # Input
    ///
    /// * `mv` -- coefficient of volume compressibility (1/kPa)
    pub fn radial_permeability(&self, mv: f64) -> Result<f64, StrError> {
        permeability_from_cv(self.cr, mv)
    }

    /// Calculates the time (s) to reach a degree of vertical consolidation (without drains)
    ///
    /// ```text
    /// t = Tv(Uv) hdr² / cv
    /// ```
    pub fn time_for_vertical_degree(&self, uv: f64) -> Result<f64, StrError> {
        let tv = time_factor_vertical(uv)?;
        Ok(tv / self.bv)
    }
}

/// Calculates the coefficient of volume compressibility mv (1/kPa) from the compression index
///
/// ```text
///       Cc    log₁₀(σb/σa)
/// mv = ———— ・ ————————————
///      1+e0     σb - σa
/// ```
///
/// # Input
///
/// * `cc` -- compression index
/// * `e0` -- initial void ratio
/// * `sig_a` -- smaller effective vertical stress of the range (kPa)
/// * `sig_b` -- larger effective vertical stress of the range (kPa)
pub fn compressibility_mv(cc: f64, e0: f64, sig_a: f64, sig_b: f64) -> Result<f64, StrError> {
    if cc <= 0.0 {
        return Err("compression index must be > 0.0");
    }
    if e0 <= 0.0 {
        return Err("void ratio must be > 0.0");
    }
    if sig_a <= 0.0 || sig_b <= sig_a {
        return Err("stresses must satisfy 0 < σa < σb");
    }
    Ok((cc / (1.0 + e0)) * f64::log10(sig_b / sig_a) / (sig_b - sig_a))
}

/// Calculates the permeability `k = c・mv・γw` (m/s) corresponding to a coefficient of consolidation
pub fn permeability_from_cv(cv: f64, mv: f64) -> Result<f64, StrError> {
    if cv <= 0.0 {
        return Err("coefficient of consolidation must be > 0.0");
    }
    if mv <= 0.0 {
        return Err("coefficient of volume compressibility must be > 0.0");
    }
    Ok(cv * mv * UNIT_WEIGHT_WATER)
}

/// Calculates the coefficient of consolidation `c = k / (mv・γw)` (m²/s) from the permeability
pub fn cv_from_permeability(k: f64, mv: f64) -> Result<f64, StrError> {
    if k <= 0.0 {
        return Err("permeability must be > 0.0");
    }
    if mv <= 0.0 {
        return Err("coefficient of volume compressibility must be > 0.0");
    }
    Ok(k / (mv * UNIT_WEIGHT_WATER))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{compressibility_mv, cv_from_permeability, permeability_from_cv, ParamSoilLayer, SoilLayer};
    use crate::base::SECONDS_PER_DAY;
    use russell_lab::approx_eq;

    fn sample_param() -> ParamSoilLayer {
        ParamSoilLayer {
            thickness: 6.0,
            drainage_length: 6.0,
            cv: 1.8e-8,
            cr: 4.5e-8,
        }
    }

    #[test]
    fn new_captures_errors() {
        let mut p = sample_param();
        p.thickness = -1.0;
        assert_eq!(SoilLayer::new(&p).err(), Some("thickness must be > 0.0"));
        let mut p = sample_param();
        p.drainage_length = 0.0;
        assert_eq!(SoilLayer::new(&p).err(), Some("drainage length must be > 0.0"));
        let mut p = sample_param();
        p.drainage_length = 7.0;
        assert_eq!(SoilLayer::new(&p).err(), Some("drainage length must be ≤ thickness"));
        let mut p = sample_param();
        p.cv = 0.0;
        assert_eq!(
            SoilLayer::new(&p).err(),
            Some("coefficient of consolidation cv must be > 0.0")
        );
        let mut p = sample_param();
        p.cr = -1e-8;
        assert_eq!(
            SoilLayer::new(&p).err(),
            Some("coefficient of consolidation cr must be > 0.0")
        );
    }

    #[test]
    fn new_works() {
        let soil = SoilLayer::new(&sample_param()).unwrap();
        approx_eq(soil.bv, 5e-10, 1e-22);
        assert_eq!(soil.hdr, 6.0);
    }

    #[test]
    fn derived_parameters_work() {
        let mv = compressibility_mv(0.8, 1.0, 100.0, 200.0).unwrap();
        approx_eq(mv, 0.0012041199826559248, 1e-15);
        let kv = permeability_from_cv(1.8e-8, mv).unwrap();
        approx_eq(kv, 2.1240676494050514e-10, 1e-22);
        approx_eq(cv_from_permeability(kv, mv).unwrap(), 1.8e-8, 1e-20);
        let soil = SoilLayer::new(&sample_param()).unwrap();
        approx_eq(soil.radial_permeability(mv).unwrap(), 5.310169123512628e-10, 1e-22);
    }

    #[test]
    fn derived_parameters_capture_errors() {
        assert_eq!(
            compressibility_mv(0.0, 1.0, 100.0, 200.0).err(),
            Some("compression index must be > 0.0")
        );
        assert_eq!(compressibility_mv(0.8, 0.0, 100.0, 200.0).err(), Some("void ratio must be > 0.0"));
        assert_eq!(
            compressibility_mv(0.8, 1.0, 200.0, 100.0).err(),
            Some("stresses must satisfy 0 < σa < σb")
        );
        assert_eq!(
            permeability_from_cv(1e-8, 0.0).err(),
            Some("coefficient of volume compressibility must be > 0.0")
        );
        assert_eq!(cv_from_permeability(0.0, 1e-3).err(), Some("permeability must be > 0.0"));
    }

    #[test]
    fn time_for_vertical_degree_works() {
        // 8 m thick singly-drained layer
        let soil = SoilLayer::new(&ParamSoilLayer {
            thickness: 8.0,
            drainage_length: 8.0,
            cv: 2e-7,
            cr: 2e-7,
        })
        .unwrap();
        let seconds_per_year = SECONDS_PER_DAY * 365.0;
        let t50 = soil.time_for_vertical_degree(0.5).unwrap();
        let t90 = soil.time_for_vertical_degree(0.9).unwrap();
        approx_eq(t50 / seconds_per_year, 1.9923849908611069, 1e-12);
        approx_eq(t90 / seconds_per_year, 8.604769152714358, 1e-12);
        assert_eq!(
            soil.time_for_vertical_degree(1.0).err(),
            Some("degree of consolidation must be in [0, 1)")
        );
    }
}
