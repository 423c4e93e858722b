use geoconsol::base::effective_overburden;
use geoconsol::prelude::*;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "geoconsol_stages",
    about = "Computes the construction schedule of an embankment built in stages on soft soil"
)]
struct Options {
    /// JSON file with the input data
    input: String,

    /// JSON file to write the results
    #[structopt(short, long)]
    output: Option<String>,
}

/// Holds the data of one stage (lift) of the embankment
#[derive(Clone, Copy, Debug, Deserialize)]
struct InputStage {
    /// Height of the fill (m)
    height: f64,

    /// Target degree of consolidation Uvr at the end of the waiting period
    target: Option<f64>,

    /// Fixed time at the end of the waiting period (days); used if there is no target
    t_end_days: Option<f64>,
}

/// Holds the input data
#[derive(Clone, Debug, Deserialize)]
struct Input {
    control: Control,
    soil: ParamSoilLayer,
    drains: Option<ParamDrains>,
    compression: ParamCompression,
    unit_weight_soil: f64,
    unit_weight_fill: f64,
    rate: f64, // m/day
    traffic_load: f64,
    search_days: f64,
    design_life_days: f64,
    stages: Vec<InputStage>,
}

fn read_input(full_path: &str) -> Result<Input, StrError> {
    let file = File::open(full_path).map_err(|_| "file not found")?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|_| "deserialize failed")
}

fn print_event(event: &ScheduleEvent) {
    let uvr: Vec<_> = event.states.iter().map(|s| format!("{:6.2}", 100.0 * s.uvr)).collect();
    println!(
        "{:>8.1} {:>10.2} {:>10.4} {:>10.2}   {:<36} {}",
        event.t_days,
        100.0 * event.degree,
        event.settlement,
        event.strength_gain,
        event.label,
        uvr.join(" ")
    );
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // load data
    let input = read_input(&options.input)?;
    if input.stages.len() == 0 {
        return Err("there must be at least one stage");
    }
    let soil = SoilLayer::new(&input.soil)?;
    let drains = match &input.drains {
        Some(p) => Some(Drains::new(p)?),
        None => None,
    };
    let compression = Compression::new(&input.compression)?;
    let solver = ConsolidationSolver::new(&soil, drains.as_ref(), &input.control)?;
    let sig_ini = effective_overburden(input.unit_weight_soil, soil.thickness / 2.0)?;
    let bound = input.search_days * SECONDS_PER_DAY;

    // header
    let thin_line = format!("{:─^1$}", "", 100);
    println!("{}", thin_line);
    println!(
        "{:>8} {:>10} {:>10} {:>10}   {:<36} {}",
        "t (days)", "U (%)", "S (m)", "Δcu (kPa)", "event", "Uvr of each stage (%)"
    );
    println!("{}", thin_line);

    // run the schedule
    let mut staged = StagedLoading::new(solver);
    let mut events = Vec::new();
    let mut t_ini = 0.0;
    let mut height = 0.0;
    let mut s_end = 0.0;
    for (i, data) in input.stages.iter().enumerate() {
        let stage = LoadingStage::fill(data.height, input.unit_weight_fill, t_ini, input.rate)?;
        staged.push(stage)?;
        height += data.height;
        let s_total = compression.primary_settlement(soil.thickness, sig_ini, height * input.unit_weight_fill)?;

        let label = format!("end of construction, stage {}", i + 1);
        events.push(staged.event(&label, stage.t_fin, s_total)?);

        let t_wait = match (data.target, data.t_end_days) {
            (Some(target), _) => staged.waiting_time(i, target, bound)?.t_wait,
            (None, Some(days)) => {
                let t = days * SECONDS_PER_DAY;
                if t < stage.t_fin {
                    return Err("t_end_days must be ≥ the end of the construction");
                }
                t
            }
            (None, None) => stage.t_fin,
        };
        if t_wait > stage.t_fin {
            let label = format!("end of waiting period, stage {}", i + 1);
            events.push(staged.event(&label, t_wait, s_total)?);
        }
        s_end = staged.settlement(t_wait, s_total)?;
        t_ini = t_wait;
    }
    for event in &events {
        print_event(event);
    }
    println!("{}", thin_line);

    // post-construction settlement
    let (t99, _) = staged.solver().days_for_degree(0.99, input.search_days)?;
    let post = compression.post_construction(
        soil.thickness,
        sig_ini,
        height * input.unit_weight_fill,
        input.traffic_load,
        s_end,
        t99,
        input.design_life_days,
    )?;
    println!("end of primary consolidation (Uvr = 99 %) = {} days", t99);
    println!("remaining settlement                      = {:.4} m", post.remaining);
    println!("settlement due to traffic                 = {:.4} m", post.traffic);
    println!(
        "secondary settlement after {:>6} days     = {:.4} m",
        input.design_life_days, post.secondary
    );
    println!("post-construction settlement              = {:.4} m", post.total);

    // results
    if let Some(path) = &options.output {
        let report = ScheduleReport { events };
        report.write_json(path)?;
        println!("results written to {}", path);
    }
    println!("{}", thin_line);
    Ok(())
}
