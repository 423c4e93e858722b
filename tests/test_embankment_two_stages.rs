use geoconsol::base::{compressibility_mv, effective_overburden, prefabricated_diameter, strength_gain, DrainPattern};
use geoconsol::prelude::*;
use russell_lab::approx_eq;

// This test reproduces the construction of an embankment in two stages on a soft clay
// layer improved with prefabricated vertical drains
//
//     fill: 4.5 m (stage 1) + 3.5 m (stage 2), γ = 19.7 kN/m³, built at 0.3 m/week
// ▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀ drainage boundary
//  |  |  |  |  |  |  |  |  |  |  |  |  |  |
//  |  |  |  |  |  | soft clay H = 6 m      |   cv = 1.8e-8 m²/s, cr = 2.5 cv
//  |  |  |  |  |  | γ = 18.1 kN/m³         |   Cc = 0.8, Cα = 0.032, e0 = 1.0
//  |  |  |  |  |  |  |  |  |  |  |  |  |  |
// ////////////////////////////////////////// impervious
//
// Drains: 100 mm × 4 mm band drains in a triangular pattern with 1 m spacing,
// discharge capacity Qc = 1.09e-4 m³/s; the well resistance is evaluated at mid-depth.
//
// Stage 1 waits until Uvr = 80 %; stage 2 waits until day 365.

const THICKNESS: f64 = 6.0;
const CV: f64 = 1.8e-8;
const GAMMA_SOIL: f64 = 18.1;
const GAMMA_FILL: f64 = 19.7;
const RATE: f64 = 0.3 / 7.0; // m/day

fn allocate_solver(control: &Control) -> Result<(SoilLayer, ConsolidationSolver), StrError> {
    let soil = SoilLayer::new(&ParamSoilLayer {
        thickness: THICKNESS,
        drainage_length: THICKNESS,
        cv: CV,
        cr: 2.5 * CV,
    })?;
    let mv = compressibility_mv(0.8, 1.0, 100.0, 200.0)?;
    let radial = RadialFactor::WellResistance {
        depth: THICKNESS / 2.0,
        discharge: 0.000109,
        kr: soil.radial_permeability(mv)?,
    };
    let dc = prefabricated_diameter(100.0, 4.0)? / 1000.0;
    let drains = Drains::from_spacing(dc, 1.0, DrainPattern::Triangular, radial)?;
    let solver = ConsolidationSolver::new(&soil, Some(&drains), control)?;
    Ok((soil, solver))
}

#[test]
fn test_embankment_two_stages() -> Result<(), StrError> {
    let (soil, solver) = allocate_solver(&Control::new())?;
    let compression = Compression::new(&ParamCompression {
        cc: 0.8,
        ca: 0.032,
        e0: 1.0,
    })?;
    let sig_ini = effective_overburden(GAMMA_SOIL, soil.thickness / 2.0)?;
    approx_eq(sig_ini, 24.9, 1e-14);
    let mut staged = StagedLoading::new(solver);

    // stage 1: construction ------------------------------------------------------------
    let stage1 = LoadingStage::fill(4.5, GAMMA_FILL, 0.0, RATE)?;
    assert_eq!(stage1.period_days(), 105.0);
    staged.push(stage1)?;
    let s_total = compression.primary_settlement(soil.thickness, sig_ini, 4.5 * GAMMA_FILL)?;
    approx_eq(s_total, 1.5815706995040426, 1e-14);
    let state = staged.stage_state(0, stage1.t_fin)?;
    approx_eq(state.uv, 0.05373739189297661, 1e-13);
    approx_eq(state.ur, 0.4735459925403984, 1e-12);
    approx_eq(state.uvr, 0.5018362578528831, 1e-12);
    approx_eq(staged.settlement(stage1.t_fin, s_total)?, 0.5018362578528831 * s_total, 1e-12);

    // stage 1: waiting period
    let wait1 = staged.waiting_time(0, 0.8, 365.0 * SECONDS_PER_DAY)?;
    assert_eq!(wait1.t_wait, 178.0 * SECONDS_PER_DAY);
    approx_eq(wait1.state.uvr, 0.8021900282811665, 1e-12);
    assert!(wait1.state.uvr >= 0.8);

    // stage 1: strength gain at the end of the waiting period
    let dcu = strength_gain(wait1.state.uvr, 4.5 * GAMMA_FILL)?;
    approx_eq(dcu, 17.77853650178135, 1e-10);
    approx_eq(staged.strength_gain(wait1.t_wait)?, dcu, 1e-12);

    // stage 2: construction ------------------------------------------------------------
    let stage2 = LoadingStage::fill(3.5, GAMMA_FILL, wait1.t_wait, RATE)?;
    assert_eq!(stage2.period_days(), 82.0);
    assert_eq!(stage2.t_fin, 260.0 * SECONDS_PER_DAY);
    staged.push(stage2)?;
    let s_total = compression.primary_settlement(soil.thickness, sig_ini, 8.0 * GAMMA_FILL)?;
    approx_eq(s_total, 2.0761524520722174, 1e-14);
    approx_eq(staged.stage_state(0, stage2.t_fin)?.uvr, 0.9292636092919343, 1e-12);
    approx_eq(staged.stage_state(1, stage2.t_fin)?.uvr, 0.42288019743225325, 1e-12);
    approx_eq(staged.degree(stage2.t_fin)?, 0.7077208666033239, 1e-12);
    approx_eq(staged.settlement(stage2.t_fin, s_total)?, 1.4693364125811657, 1e-12);

    // excess pore-water pressures
    let u1 = staged.stage_pressure(0, stage2.t_fin)?;
    let u2 = staged.stage_pressure(1, stage2.t_fin)?;
    approx_eq(u1, 4.5 * GAMMA_FILL * (1.0 - 0.9292636092919343), 1e-10);
    approx_eq(u2, 3.5 * GAMMA_FILL * (1.0 - 0.42288019743225325), 1e-10);

    // stage 2: waiting period until day 365
    let t_end = 365.0 * SECONDS_PER_DAY;
    approx_eq(staged.degree(t_end)?, 0.9223882203897942, 1e-12);
    approx_eq(staged.settlement(t_end, s_total)?, 1.9150185655248, 1e-12);

    // post-construction settlement ---------------------------------------------------------
    let (t99, state) = staged.solver().days_for_degree(0.99, 10000.0)?;
    assert_eq!(t99, 365.0);
    assert!(state.uvr >= 0.99);
    let s_end = staged.settlement(t_end, s_total)?;
    let post = compression.post_construction(soil.thickness, sig_ini, 8.0 * GAMMA_FILL, 12.0, s_end, t99, 36500.0)?;
    approx_eq(post.remaining, 0.16113388654741745, 1e-12);
    approx_eq(post.traffic, 0.06637616848615924, 1e-14);
    approx_eq(post.secondary, 0.192, 1e-14);
    approx_eq(post.total, 0.4195100550335767, 1e-12);

    // report ----------------------------------------------------------------------------
    let report = ScheduleReport {
        events: vec![
            staged.event("end of construction, stage 2", stage2.t_fin, s_total)?,
            staged.event("end of waiting period, stage 2", t_end, s_total)?,
        ],
    };
    assert_eq!(report.events[0].t_days, 260.0);
    assert_eq!(report.events[0].states.len(), 2);
    approx_eq(report.events[1].degree, 0.9223882203897942, 1e-12);
    let path = format!("{}/test_embankment_two_stages.json", DEFAULT_TEST_DIR);
    report.write_json(&path)?;
    let read = ScheduleReport::read_json(&path)?;
    assert_eq!(read.events.len(), 2);
    approx_eq(read.events[0].settlement, 1.4693364125811657, 1e-12);
    Ok(())
}

#[test]
fn test_embankment_series_agrees() -> Result<(), StrError> {
    // the Fourier series for Uv gives practically the same schedule
    let mut control = Control::new();
    control.series = true;
    let (_, solver) = allocate_solver(&control)?;
    let mut staged = StagedLoading::new(solver);
    let stage1 = LoadingStage::fill(4.5, GAMMA_FILL, 0.0, RATE)?;
    staged.push(stage1)?;
    let wait1 = staged.waiting_time(0, 0.8, 365.0 * SECONDS_PER_DAY)?;
    assert_eq!(wait1.t_wait, 178.0 * SECONDS_PER_DAY);
    approx_eq(wait1.state.uvr, 0.8021900282811665, 1e-8);
    Ok(())
}

#[test]
fn test_second_stage_delays_consolidation() -> Result<(), StrError> {
    // two equal instantaneous stages at t = 0 and t = T
    let (_, solver) = allocate_solver(&Control::new())?;
    let tt = 100.0 * SECONDS_PER_DAY;
    let mut staged = StagedLoading::new(solver);
    staged
        .push(LoadingStage::new(50.0, 0.0, 0.0)?)?
        .push(LoadingStage::new(50.0, tt, tt)?)?;
    for days in [1.0, 5.0, 20.0] {
        let t = tt + days * SECONDS_PER_DAY;
        let single = staged.solver().state(t)?;
        assert!(staged.degree(t)? < single.uvr);
    }
    // long after, both stages are practically consolidated
    let t = 5000.0 * SECONDS_PER_DAY;
    approx_eq(staged.degree(t)?, staged.solver().state(t)?.uvr, 1e-6);
    Ok(())
}
