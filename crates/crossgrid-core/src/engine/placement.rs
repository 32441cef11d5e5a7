use super::config::PlacementPolicy;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use crate::core::models::entry::WordEntry;
use crate::core::models::grid::{Grid, GridError};
use crate::core::models::placement::{Orientation, Placement, PlacementOutcome, WordOutcome};
use std::cmp::Reverse;
use tracing::{debug, info, trace};

/// Scores a candidate placement of `word` anchored at `(row, col)`.
///
/// Returns `None` if any letter would fall outside the grid or onto a cell
/// holding a different character. Otherwise returns the number of cells that
/// already hold the matching letter; `Some(0)` is a legal placement that
/// crosses nothing.
pub fn evaluate(
    grid: &Grid,
    word: &[char],
    row: usize,
    col: usize,
    orientation: Orientation,
) -> Option<usize> {
    let size = grid.size();
    let mut intersections = 0;
    for (i, &letter) in word.iter().enumerate() {
        let (r, c) = orientation.step(row, col, i, size)?;
        match grid.get(r, c) {
            Ok(None) => {}
            Ok(Some(existing)) if existing == letter => intersections += 1,
            _ => return None,
        }
    }
    Some(intersections)
}

/// Scans every anchor cell in row-major order, horizontal before vertical,
/// and returns the first placement with the highest score above the
/// acceptance threshold.
fn find_best_placement(
    grid: &Grid,
    word: &[char],
    policy: PlacementPolicy,
) -> Option<(Placement, usize)> {
    let accept_unanchored = policy == PlacementPolicy::SeedFirstWord && grid.is_blank();
    let size = grid.size();

    let mut best: Option<Placement> = None;
    let mut best_score = 0;

    for row in 0..size {
        for col in 0..size {
            for orientation in Orientation::ALL {
                let Some(score) = evaluate(grid, word, row, col, orientation) else {
                    continue;
                };
                if score > best_score || (accept_unanchored && best.is_none()) {
                    trace!(row, col, %orientation, score, "New best candidate.");
                    best = Some(Placement::new(row, col, orientation));
                    best_score = score;
                }
            }
        }
    }

    best.map(|p| (p, best_score))
}

/// Writes `word` into the grid at `placement`, overwriting matching letters.
///
/// # Errors
///
/// Returns [`EngineError::Grid`] if any letter falls outside the grid. The
/// placement search only hands out in-bounds placements.
pub fn commit(grid: &mut Grid, word: &[char], placement: Placement) -> Result<(), EngineError> {
    let size = grid.size();
    for (i, &letter) in word.iter().enumerate() {
        let (r, c) = placement
            .orientation
            .step(placement.row, placement.col, i, size)
            .ok_or_else(|| match placement.orientation {
                Orientation::Horizontal => GridError::OutOfBounds {
                    row: placement.row,
                    col: placement.col.saturating_add(i),
                    size,
                },
                Orientation::Vertical => GridError::OutOfBounds {
                    row: placement.row.saturating_add(i),
                    col: placement.col,
                    size,
                },
            })?;
        grid.set(r, c, letter)?;
    }
    Ok(())
}

/// Places every entry onto `grid`, longest word first.
///
/// Entries of equal length keep their input order. Each word gets exactly one
/// attempt: it is committed at its best-scoring legal position, or skipped if
/// none clears the threshold. Earlier words are never revisited.
///
/// The returned outcomes are in processing order; each carries the input
/// index of its entry.
pub fn place(
    grid: &mut Grid,
    entries: &[WordEntry],
    policy: PlacementPolicy,
    reporter: &ProgressReporter,
) -> Result<Vec<WordOutcome>, EngineError> {
    info!(
        words = entries.len(),
        grid_size = grid.size(),
        %policy,
        "Starting word placement."
    );

    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by_key(|&i| Reverse(entries[i].len()));

    reporter.report(Progress::PlacementStarted {
        total_words: order.len(),
        grid_size: grid.size(),
    });

    let mut outcomes = Vec::with_capacity(order.len());
    for index in order {
        let entry = &entries[index];
        let letters = entry.letters();

        let outcome = if letters.is_empty() {
            debug!(index, "Skipping empty word.");
            reporter.report(Progress::WordSkipped {
                index,
                word: &entry.word,
            });
            PlacementOutcome::Skipped
        } else {
            match find_best_placement(grid, &letters, policy) {
                Some((placement, score)) => {
                    commit(grid, &letters, placement)?;
                    debug!(
                        word = %entry.word,
                        row = placement.row,
                        col = placement.col,
                        orientation = %placement.orientation,
                        intersections = score,
                        "Placed word."
                    );
                    reporter.report(Progress::WordPlaced {
                        index,
                        word: &entry.word,
                        placement,
                        intersections: score,
                    });
                    PlacementOutcome::Placed(placement)
                }
                None => {
                    debug!(word = %entry.word, "No acceptable position; skipping word.");
                    reporter.report(Progress::WordSkipped {
                        index,
                        word: &entry.word,
                    });
                    PlacementOutcome::Skipped
                }
            }
        };

        outcomes.push(WordOutcome {
            index,
            word: entry.word.clone(),
            outcome,
        });
    }

    let placed = outcomes.iter().filter(|o| o.is_placed()).count();
    let skipped = outcomes.len() - placed;
    info!(placed, skipped, "Word placement finished.");
    reporter.report(Progress::PlacementFinished { placed, skipped });

    Ok(outcomes)
}
