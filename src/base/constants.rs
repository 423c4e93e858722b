/// Defines the unit weight of water γw (kN/m³)
pub const UNIT_WEIGHT_WATER: f64 = 9.8;

/// Defines the number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 24.0 * 60.0 * 60.0;

/// Defines the default number of terms in the Fourier series of Terzaghi's solution
pub const DEFAULT_N_SERIES: usize = 100;

/// Defines the degree of vertical consolidation where the two approximations of Tv(Uv) meet
pub const UV_BRANCH: f64 = 0.526;

/// Defines the time factor where the two approximations of Uv(Tv) meet
pub const TV_BRANCH: f64 = 0.217;

/// Defines the ratio between the gain of undrained strength and the consolidated stress increment Δcu/Δσ'
pub const STRENGTH_GAIN_RATIO: f64 = 0.25;

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/geoconsol/test";
