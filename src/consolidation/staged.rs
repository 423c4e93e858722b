use super::{ConsolidationSolver, ConsolidationState, LoadingStage};
use crate::base::{strength_gain, SECONDS_PER_DAY};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the end of a waiting period computed for a target degree of consolidation
#[derive(Clone, Copy, Debug)]
pub struct WaitingPeriod {
    /// Time at the end of the waiting period (s), rounded up to whole days
    pub t_wait: f64,

    /// Degrees of consolidation of the stage recomputed at `t_wait`
    pub state: ConsolidationState,
}

/// Holds the results at an instant of the construction schedule
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ScheduleEvent {
    /// Description of the event (e.g., "end of construction, stage 1")
    pub label: String,

    /// Time (days)
    pub t_days: f64,

    /// Degrees of consolidation of each stage
    pub states: Vec<ConsolidationState>,

    /// Excess pore-water pressure remaining from each stage (kPa)
    pub pressures: Vec<f64>,

    /// Overall degree of consolidation
    pub degree: f64,

    /// Consolidation settlement (m)
    pub settlement: f64,

    /// Gain of undrained shear strength due to consolidation (kPa)
    pub strength_gain: f64,
}

/// Holds the results of a construction schedule
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ScheduleReport {
    /// Results at each instant of the schedule (e.g., end of construction and end of waiting period)
    pub events: Vec<ScheduleEvent>,
}

/// Implements the superposition of loading stages on the excess pore-water pressure
///
/// The excess pore-water pressure remaining from stage i at time t is
///
/// ```text
/// uᵢ(t) = uᵢ(0) (1 - Uvrᵢ(t - tᵢ))
/// ```
///
/// where tᵢ is the shift time of stage i. The overall degree of consolidation is
///
/// ```text
///          Σ uᵢ(t)
/// U = 1 - —————————
///          Σ uᵢ(0)
/// ```
///
/// **Note:** A stage that has not started yet contributes its full initial pressure uᵢ(0).
pub struct StagedLoading {
    solver: ConsolidationSolver,
    stages: Vec<LoadingStage>,
}

impl StagedLoading {
    /// Allocates a new instance
    pub fn new(solver: ConsolidationSolver) -> Self {
        StagedLoading {
            solver,
            stages: Vec::new(),
        }
    }

    /// Appends a loading stage
    pub fn push(&mut self, stage: LoadingStage) -> Result<&mut Self, StrError> {
        if let Some(last) = self.stages.last() {
            if stage.t_ini < last.t_ini {
                return Err("stages must be given in chronological order");
            }
        }
        self.stages.push(stage);
        Ok(self)
    }

    /// Returns the loading stages
    pub fn stages(&self) -> &[LoadingStage] {
        &self.stages
    }

    /// Returns the consolidation solver
    pub fn solver(&self) -> &ConsolidationSolver {
        &self.solver
    }

    /// Returns the stage with given index
    fn get(&self, index: usize) -> Result<&LoadingStage, StrError> {
        self.stages.get(index).ok_or("index of stage is out of bounds")
    }

    /// Calculates the degrees of consolidation of a single stage at time t (s)
    pub fn stage_state(&self, index: usize, t: f64) -> Result<ConsolidationState, StrError> {
        let stage = self.get(index)?;
        self.solver.state(stage.elapsed(t))
    }

    /// Calculates the excess pore-water pressure remaining from a single stage at time t (s)
    pub fn stage_pressure(&self, index: usize, t: f64) -> Result<f64, StrError> {
        let stage = self.get(index)?;
        let state = self.solver.state(stage.elapsed(t))?;
        Ok(stage.pressure * (1.0 - state.uvr))
    }

    /// Calculates the overall degree of consolidation at time t (s)
    pub fn degree(&self, t: f64) -> Result<f64, StrError> {
        if self.stages.len() == 0 {
            return Err("there are no loading stages");
        }
        let mut sum_ini = 0.0;
        let mut sum_now = 0.0;
        for i in 0..self.stages.len() {
            sum_ini += self.stages[i].pressure;
            sum_now += self.stage_pressure(i, t)?;
        }
        if sum_ini <= 0.0 {
            return Err("the sum of initial pressures must be > 0.0");
        }
        Ok(1.0 - sum_now / sum_ini)
    }

    /// Calculates the consolidation settlement at time t (s)
    ///
    /// # Input
    ///
    /// * `t` -- the time
    /// * `s_total` -- the total (ultimate) primary consolidation settlement
    pub fn settlement(&self, t: f64, s_total: f64) -> Result<f64, StrError> {
        Ok(self.degree(t)? * s_total)
    }

    /// Calculates the gain of undrained shear strength at time t (s) due to all stages
    ///
    /// ```text
    /// Δcu = 0.25 U Σ uᵢ(0)
    /// ```
    pub fn strength_gain(&self, t: f64) -> Result<f64, StrError> {
        let dsig: f64 = self.stages.iter().map(|s| s.pressure).sum();
        strength_gain(self.degree(t)?, dsig)
    }

    /// Finds the end of the waiting period for a stage to reach a target degree of consolidation
    ///
    /// The search starts at the end of the construction of the stage. The resulting time is rounded
    /// up to whole days and the degrees of consolidation are recomputed at the rounded time.
    ///
    /// If the target is already reached at the end of the construction, there is no waiting period
    /// and `t_wait` equals `t_fin`.
    ///
    /// # Input
    ///
    /// * `index` -- index of the stage
    /// * `target` -- the target degree of consolidation Uvr of the stage
    /// * `bound` -- the length of the search interval (s) after the end of the construction
    pub fn waiting_time(&self, index: usize, target: f64, bound: f64) -> Result<WaitingPeriod, StrError> {
        let stage = self.get(index)?;
        if target <= 0.0 || target >= 1.0 {
            return Err("target degree of consolidation must be in (0, 1)");
        }
        if bound <= 0.0 {
            return Err("bound must be > 0.0");
        }
        let lo = stage.elapsed(stage.t_fin);
        let state = self.solver.state(lo)?;
        if state.uvr >= target {
            return Ok(WaitingPeriod {
                t_wait: stage.t_fin,
                state,
            });
        }
        let tau = self.solver.time_for_degree(target, lo, lo + bound)?;
        let t_wait = f64::ceil((tau + stage.shift()) / SECONDS_PER_DAY) * SECONDS_PER_DAY;
        let state = self.solver.state(stage.elapsed(t_wait))?;
        Ok(WaitingPeriod { t_wait, state })
    }

    /// Collects the results at time t (s)
    pub fn event(&self, label: &str, t: f64, s_total: f64) -> Result<ScheduleEvent, StrError> {
        let mut states = Vec::with_capacity(self.stages.len());
        let mut pressures = Vec::with_capacity(self.stages.len());
        for i in 0..self.stages.len() {
            states.push(self.stage_state(i, t)?);
            pressures.push(self.stage_pressure(i, t)?);
        }
        let degree = self.degree(t)?;
        let strength_gain = self.strength_gain(t)?;
        Ok(ScheduleEvent {
            label: label.to_string(),
            t_days: t / SECONDS_PER_DAY,
            states,
            pressures,
            degree,
            settlement: degree * s_total,
            strength_gain,
        })
    }
}

impl ScheduleReport {
    /// Reads a JSON file containing the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let report = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(report)
    }

    /// Writes a JSON file with the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
