use crate::core::models::entry::WordEntry;
use crate::core::models::grid::Grid;
use crate::core::models::placement::WordOutcome;
use crate::engine::config::GenerationConfig;
use crate::engine::error::EngineError;
use crate::engine::placement;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::validator;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub grid: Grid,
    /// One entry per input word, in processing order.
    pub outcomes: Vec<WordOutcome>,
    /// Whether the finished grid passed the adjacency check.
    pub is_valid: bool,
}

impl GenerationResult {
    pub fn placed(&self) -> impl Iterator<Item = &WordOutcome> {
        self.outcomes.iter().filter(|o| o.is_placed())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &WordOutcome> {
        self.outcomes.iter().filter(|o| !o.is_placed())
    }
}

#[instrument(skip_all, name = "generate_workflow", fields(grid_size = config.grid_size))]
pub fn run(
    entries: &[WordEntry],
    config: &GenerationConfig,
    reporter: &ProgressReporter,
) -> Result<GenerationResult, EngineError> {
    let mut grid = Grid::new(config.grid_size)?;

    let outcomes = placement::place(&mut grid, entries, config.policy, reporter)?;

    let is_valid = validator::validate(&grid);
    reporter.report(Progress::ValidationFinished { is_valid });

    if is_valid {
        info!(
            occupied_cells = grid.occupied_count(),
            "Generation complete; grid is valid."
        );
    } else {
        warn!("Generation complete but the grid failed validation.");
    }

    Ok(GenerationResult {
        grid,
        outcomes,
        is_valid,
    })
}
