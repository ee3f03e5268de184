//! Greedy radius-bounded grouping of cities.
//!
//! Cities are integer points on a square grid. Each group collects cities that
//! all lie within a fixed coverage radius of the group's rounded mean, and the
//! group's center becomes one tower location.

pub mod geometry;
pub mod grouping;
pub mod placement;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Grid coordinates of cities and towers.
pub type Coord = i32;
/// Euclidean distances and radii.
pub type Distance = f64;
/// Placement cost of a tower layout.
pub type Penalty = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// PENALTY MODEL
// Each tower pays PENALTY_BASE · exp(PENALTY_EXPONENT · w), where w counts the
// other towers within the penalty radius.
// ============================================================================
/// Cost of an isolated tower.
pub const PENALTY_BASE: Penalty = 170.0;
/// Growth rate of the cost per overlapping neighbor.
pub const PENALTY_EXPONENT: Penalty = 0.17;

// ============================================================================
// RANDOM DATA
// ============================================================================
/// Side length of the grid that Arbitrary points are drawn from.
pub const RANDOM_GRID: Coord = 100;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr so stdout stays free for output.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
