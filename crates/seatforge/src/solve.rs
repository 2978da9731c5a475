//! Engine entry point that hides configuration loading.

use seatforge_config::SeatingConfig;
use seatforge_core::SeatingProblem;
use seatforge_solver::{SeatingEngine, SeatingResult};

/// Configuration file read by [`solve`], relative to the working directory.
pub const CONFIG_FILE: &str = "seating.toml";

/// Seats `problem` using `seating.toml` if present, defaults otherwise.
pub fn solve(problem: &SeatingProblem) -> SeatingResult {
    let config = SeatingConfig::load(CONFIG_FILE).unwrap_or_default();
    solve_with_config(problem, config)
}

/// Seats `problem` with an explicit configuration.
pub fn solve_with_config(problem: &SeatingProblem, config: SeatingConfig) -> SeatingResult {
    #[cfg(feature = "console")]
    crate::console::init();

    SeatingEngine::new(config).solve(problem)
}
