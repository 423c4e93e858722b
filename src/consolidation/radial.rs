use crate::StrError;
use russell_lab::math::PI;

/// Calculates the factor F(N) of Barron's solution for an ideal drain
///
/// ```text
///           N²              3N² - 1
/// F(N) = ——————— ln(N)  -  —————————
///        N² - 1               4N²
/// ```
///
/// # Input
///
/// * `nn` -- diameter ratio `N = de / dc` (must be > 1)
pub fn barron_factor(nn: f64) -> Result<f64, StrError> {
    if nn <= 1.0 {
        return Err("diameter ratio must be > 1");
    }
    let nn2 = nn * nn;
    Ok(f64::ln(nn) * nn2 / (nn2 - 1.0) - (3.0 * nn2 - 1.0) / (4.0 * nn2))
}

/// Calculates the factor Fm of Barron's solution considering the discharge capacity of the drain
///
/// ```text
///                          π z (2 hdr - z) kr
/// Fm = ln(N) - 0.75  +  ————————————————————
///                                Qc
/// ```
///
/// # Input
///
/// * `nn` -- diameter ratio `N = de / dc` (must be > 1)
/// * `z` -- depth within the layer (0 ≤ z ≤ hdr)
/// * `hdr` -- drainage length
/// * `kr` -- radial permeability of the soil
/// * `qc` -- discharge capacity of the drain
pub fn well_resistance_factor(nn: f64, z: f64, hdr: f64, kr: f64, qc: f64) -> Result<f64, StrError> {
    if nn <= 1.0 {
        return Err("diameter ratio must be > 1");
    }
    if hdr <= 0.0 {
        return Err("drainage length must be > 0.0");
    }
    if z < 0.0 || z > hdr {
        return Err("depth must satisfy 0 ≤ z ≤ hdr");
    }
    if kr <= 0.0 {
        return Err("radial permeability must be > 0.0");
    }
    if qc <= 0.0 {
        return Err("discharge capacity must be > 0.0");
    }
    Ok(f64::ln(nn) - 0.75 + PI * z * (2.0 * hdr - z) * kr / qc)
}

/// Calculates the degree of radial consolidation Ur given the time factor Tr and the factor F
///
/// ```text
/// Ur = 1 - exp(-8 Tr / F)
/// ```
pub fn degree_radial(tr: f64, ff: f64) -> Result<f64, StrError> {
    if tr < 0.0 {
        return Err("time factor must be ≥ 0.0");
    }
    if ff <= 0.0 {
        return Err("factor F must be > 0.0");
    }
    Ok(1.0 - f64::exp(-8.0 * tr / ff))
}

/// Calculates the degree of radial consolidation Ur given Tr and the diameter ratio N (ideal drain)
pub fn degree_radial_barron(tr: f64, nn: f64) -> Result<f64, StrError> {
    let ff = barron_factor(nn)?;
    degree_radial(tr, ff)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
