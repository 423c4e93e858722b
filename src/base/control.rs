use super::{DEFAULT_N_SERIES, SECONDS_PER_DAY};
use serde::{Deserialize, Serialize};

/// Defines the largest allowed number of terms in the Fourier series (Control)
pub const CONTROL_MAX_N_SERIES: usize = 100_000;

/// Holds the options to control the consolidation calculations
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Control {
    /// Number of terms in the Fourier series of Terzaghi's solution
    pub n_series: usize,

    /// Computes Uv with the (truncated) Fourier series instead of the approximation formula
    pub series: bool,

    /// Verbose mode during root-finding and scheduling
    pub verbose: bool,
}

impl Control {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Control {
            n_series: DEFAULT_N_SERIES,
            series: false,
            verbose: false,
        }
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.n_series < 1 {
            return Some(format!("n_series = {:?} is incorrect; it must be ≥ 1", self.n_series));
        }
        if self.n_series > CONTROL_MAX_N_SERIES {
            return Some(format!(
                "n_series = {:?} is incorrect; it must be ≤ {:?}",
                self.n_series, CONTROL_MAX_N_SERIES
            ));
        }
        None // all good
    }

    /// Prints the result of a root-finding for a target degree of consolidation
    #[inline]
    pub fn print_root(&self, target: f64, lo: f64, hi: f64, tau: f64) {
        if !self.verbose {
            return;
        }
        println!(
            "Uvr = {:>6.2} % → τ = {:>13.6e} s ({:.2} days) in [{:.2}, {:.2}] days",
            target * 100.0,
            tau,
            tau / SECONDS_PER_DAY,
            lo / SECONDS_PER_DAY,
            hi / SECONDS_PER_DAY
        );
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
