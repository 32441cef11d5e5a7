use crate::core::models::grid::Grid;
use crate::core::models::placement::Orientation;
use tracing::warn;

/// A filled cell whose two flanking neighbours along one axis disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyViolation {
    pub row: usize,
    pub col: usize,
    /// `Horizontal` for left/right neighbours, `Vertical` for above/below.
    pub axis: Orientation,
    pub before: char,
    pub after: char,
}

fn cell(grid: &Grid, row: usize, col: usize) -> Option<char> {
    grid.get(row, col).ok().flatten()
}

/// Both flanking cells around `(row, col)` along `axis`, if each is in
/// bounds and occupied.
fn flanks(grid: &Grid, row: usize, col: usize, axis: Orientation) -> Option<(char, char)> {
    let (before, after) = match axis {
        Orientation::Horizontal => (
            cell(grid, row, col.checked_sub(1)?)?,
            cell(grid, row, col + 1)?,
        ),
        Orientation::Vertical => (
            cell(grid, row.checked_sub(1)?, col)?,
            cell(grid, row + 1, col)?,
        ),
    };
    Some((before, after))
}

/// Returns the first violation in row-major order, horizontal before vertical.
///
/// Only the two neighbours are compared with each other; the centre cell's
/// own letter plays no part beyond being occupied.
pub fn find_violation(grid: &Grid) -> Option<AdjacencyViolation> {
    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            if cell(grid, row, col).is_none() {
                continue;
            }
            for axis in Orientation::ALL {
                if let Some((before, after)) = flanks(grid, row, col, axis) {
                    if before != after {
                        return Some(AdjacencyViolation {
                            row,
                            col,
                            axis,
                            before,
                            after,
                        });
                    }
                }
            }
        }
    }
    None
}

/// Accepts the grid unless some filled cell is flanked on one axis by two
/// different letters.
pub fn validate(grid: &Grid) -> bool {
    match find_violation(grid) {
        Some(v) => {
            warn!(
                row = v.row,
                col = v.col,
                axis = %v.axis,
                before = %v.before,
                after = %v.after,
                "Grid rejected: mismatched neighbours."
            );
            false
        }
        None => true,
    }
}
