use super::{barron_factor, degree_combined, degree_radial, degree_vertical, degree_vertical_series};
use super::{well_resistance_factor, ConsolidationState};
use crate::base::{Control, Drains, RadialFactor, SoilLayer, SECONDS_PER_DAY};
use crate::StrError;
use plotpy::linspace;
use russell_lab::RootFinder;

/// Implements the solver for the degree of consolidation due to vertical and radial flow
///
/// The time factors are linear in the elapsed time τ:
///
/// ```text
/// Tv = bv τ    bv = cv / hdr²
/// Tr = br τ    br = cr / de²
/// ```
///
/// Without drains, only vertical flow is considered (Ur = 0).
///
/// # References
///
/// 1. Terzaghi K (1943) Theoretical Soil Mechanics, Wiley, 510p
/// 2. Barron RA (1948) Consolidation of fine-grained soils by drain wells,
///    Transactions of the ASCE, 113(1), 718-742
pub struct ConsolidationSolver {
    bv: f64,       // cv / hdr²
    br: f64,       // cr / de²
    ff: f64,       // factor F(N) or Fm
    drains: bool,  // with radial flow
    control: Control,
}

impl ConsolidationSolver {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `soil` -- the soft soil layer
    /// * `drains` -- the vertical drains, if any
    /// * `control` -- options such as the use of the Fourier series
    pub fn new(soil: &SoilLayer, drains: Option<&Drains>, control: &Control) -> Result<Self, StrError> {
        if let Some(msg) = control.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate solver because control.validate() failed");
        }
        let (br, ff) = match drains {
            Some(d) => {
                let ff = match d.radial {
                    RadialFactor::Barron => barron_factor(d.nn)?,
                    RadialFactor::WellResistance { depth, discharge, kr } => {
                        well_resistance_factor(d.nn, depth, soil.hdr, kr, discharge)?
                    }
                };
                (soil.cr / (d.de * d.de), ff)
            }
            None => (0.0, 1.0),
        };
        Ok(ConsolidationSolver {
            bv: soil.bv,
            br,
            ff,
            drains: drains.is_some(),
            control: *control,
        })
    }

    /// Returns the factor F used by the radial consolidation equation (1.0 without drains)
    pub fn radial_factor(&self) -> f64 {
        self.ff
    }

    /// Returns the control options
    pub fn control(&self) -> &Control {
        &self.control
    }

    /// Calculates the time factors `(Tv, Tr)` at the elapsed time τ
    #[inline]
    pub fn time_factors(&self, tau: f64) -> (f64, f64) {
        (self.bv * tau, self.br * tau)
    }

    /// Calculates the degrees of consolidation at the elapsed time τ (s)
    pub fn state(&self, tau: f64) -> Result<ConsolidationState, StrError> {
        if tau < 0.0 {
            return Err("elapsed time must be ≥ 0.0");
        }
        let (tv, tr) = self.time_factors(tau);
        let uv = if self.control.series {
            degree_vertical_series(tv, self.control.n_series)?
        } else {
            degree_vertical(tv)?
        };
        let ur = if self.drains { degree_radial(tr, self.ff)? } else { 0.0 };
        Ok(ConsolidationState {
            uv,
            ur,
            uvr: degree_combined(uv, ur),
        })
    }

    /// Finds the elapsed time τ (s) at which a target degree of consolidation Uvr is reached
    ///
    /// Solves `Uvr(τ) - target = 0` with Brent's method in the bracket `[lo, hi]`.
    ///
    /// # Errors
    ///
    /// * The target must be in (0, 1) and the bounds must satisfy 0 ≤ lo < hi
    /// * If `Uvr(lo) ≥ target`, the target is already reached at the lower bound
    /// * If `Uvr(hi) < target`, the target is unreachable within the given bound; the caller may try again
    ///   with a larger upper bound
    pub fn time_for_degree(&self, target: f64, lo: f64, hi: f64) -> Result<f64, StrError> {
        if target <= 0.0 || target >= 1.0 {
            return Err("target degree of consolidation must be in (0, 1)");
        }
        if lo < 0.0 || hi <= lo {
            return Err("bounds must satisfy 0 ≤ lo < hi");
        }
        if self.state(lo)?.uvr >= target {
            return Err("target degree of consolidation is already reached at the lower bound");
        }
        let f_hi = self.state(hi)?.uvr - target;
        if f_hi < 0.0 {
            return Err("target degree of consolidation is unreachable within the given bound");
        }
        let tau = if f_hi == 0.0 {
            hi
        } else {
            let args = &mut 0;
            let solver = RootFinder::new();
            let (root, _) = solver.brent(lo, hi, args, |tau, _| Ok(self.state(tau)?.uvr - target))?;
            root
        };
        self.control.print_root(target, lo, hi, tau);
        Ok(tau)
    }

    /// Finds the number of whole days (rounded up) to reach a target degree of consolidation from τ = 0
    ///
    /// Returns `(days, state)` where `state` is recomputed at the rounded time.
    ///
    /// # Input
    ///
    /// * `target` -- the target degree of consolidation Uvr
    /// * `max_days` -- the upper bound of the search interval (days)
    pub fn days_for_degree(&self, target: f64, max_days: f64) -> Result<(f64, ConsolidationState), StrError> {
        let tau = self.time_for_degree(target, 0.0, max_days * SECONDS_PER_DAY)?;
        let days = f64::ceil(tau / SECONDS_PER_DAY);
        let state = self.state(days * SECONDS_PER_DAY)?;
        Ok((days, state))
    }

    /// Calculates the degrees of consolidation along a sequence of elapsed times
    ///
    /// # Input
    ///
    /// * `tau_max` -- the largest elapsed time
    /// * `np` -- number of points
    ///
    /// # Output
    ///
    /// Returns `(tt, ss)` where `tt` are the elapsed times from 0 to `tau_max` and `ss` the states.
    pub fn curve(&self, tau_max: f64, np: usize) -> Result<(Vec<f64>, Vec<ConsolidationState>), StrError> {
        if tau_max <= 0.0 {
            return Err("tau_max must be > 0.0");
        }
        let tt = linspace(0.0, tau_max, np);
        let mut ss = Vec::with_capacity(np);
        for tau in &tt {
            ss.push(self.state(*tau)?);
        }
        Ok((tt, ss))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
