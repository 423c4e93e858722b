/// Calculates the degree of consolidation due to combined vertical and radial flow
///
/// ```text
/// Uvr = 1 - (1 - Uv) (1 - Ur)
/// ```
///
/// The vertical and radial flows act independently on the undissipated fraction of the excess pore pressure.
#[inline]
pub fn degree_combined(uv: f64, ur: f64) -> f64 {
    1.0 - (1.0 - uv) * (1.0 - ur)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
