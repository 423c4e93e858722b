use crate::base::{TV_BRANCH, UV_BRANCH};
use crate::StrError;
use russell_lab::math::PI;

/// Calculates the time factor Tv given the degree of vertical consolidation Uv (approximation formula)
///
/// ```text
///      ⎧ (π/4) Uv²                     if Uv ≤ 0.526
/// Tv = ⎨
///      ⎩ -0.085 - 0.933 log₁₀(1 - Uv)  otherwise
/// ```
///
/// The formula corresponds to Terzaghi's solution for a uniform initial excess pore pressure.
pub fn time_factor_vertical(uv: f64) -> Result<f64, StrError> {
    if uv < 0.0 || uv >= 1.0 {
        return Err("degree of consolidation must be in [0, 1)");
    }
    if uv <= UV_BRANCH {
        Ok((PI / 4.0) * uv * uv)
    } else {
        Ok(-0.085 - 0.933 * f64::log10(1.0 - uv))
    }
}

/// Calculates the degree of vertical consolidation Uv given the time factor Tv (approximation formula)
///
/// ```text
///      ⎧ 2 √(Tv/π)                          if Tv ≤ 0.217
/// Uv = ⎨
///      ⎩ 1 - 10^((1.781 - Tv)/0.933) / 100  otherwise
/// ```
///
/// **Note:** The two branches are the inverses of the branches of [time_factor_vertical].
pub fn degree_vertical(tv: f64) -> Result<f64, StrError> {
    if tv < 0.0 {
        return Err("time factor must be ≥ 0.0");
    }
    if tv <= TV_BRANCH {
        Ok(2.0 * f64::sqrt(tv / PI))
    } else {
        Ok(1.0 - f64::powf(10.0, (1.781 - tv) / 0.933) / 100.0)
    }
}

/// Calculates the degree of vertical consolidation Uv given the time factor Tv (truncated Fourier series)
///
/// ```text
///              N-1   2               (2m+1) π
/// Uv = 1  -    Σ   ——— exp(-M² Tv)   M = ————————
///             m=0   M²                   2
/// ```
///
/// # Input
///
/// * `tv` -- the time factor
/// * `n_series` -- the number of terms in the series (e.g., 100)
///
/// **Note:** Small time factors need more terms; 100 terms are enough for Tv > 0.001.
pub fn degree_vertical_series(tv: f64, n_series: usize) -> Result<f64, StrError> {
    if tv < 0.0 {
        return Err("time factor must be ≥ 0.0");
    }
    if n_series < 1 {
        return Err("the number of terms in the series must be ≥ 1");
    }
    let mut sum = 0.0;
    for m in 0..n_series {
        let mm = (2.0 * (m as f64) + 1.0) * PI / 2.0;
        let mm2 = mm * mm;
        sum += 2.0 * f64::exp(-mm2 * tv) / mm2;
    }
    Ok(1.0 - sum)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
