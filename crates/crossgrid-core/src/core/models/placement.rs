use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Grows along increasing column.
    Horizontal,
    /// Grows along increasing row.
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Returns the cell reached `offset` steps from `(row, col)`, or `None`
    /// when it falls outside a grid of side `size`.
    #[inline]
    pub fn step(self, row: usize, col: usize, offset: usize, size: usize) -> Option<(usize, usize)> {
        let (r, c) = match self {
            Orientation::Horizontal => (row, col.checked_add(offset)?),
            Orientation::Vertical => (row.checked_add(offset)?, col),
        };
        (r < size && c < size).then_some((r, c))
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// The anchor cell of a word (its first letter) and its direction of growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    /// Iterates over the cells covered by a word of `len` characters,
    /// stopping at the first cell outside the grid.
    pub fn cells(&self, len: usize, size: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..len).map_while(move |i| self.orientation.step(self.row, self.col, i, size))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    Placed(Placement),
    Skipped,
}

/// What happened to one input word during a placement run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordOutcome {
    /// Position of the word in the caller's input order.
    pub index: usize,
    pub word: String,
    pub outcome: PlacementOutcome,
}

impl WordOutcome {
    pub fn placement(&self) -> Option<Placement> {
        match self.outcome {
            PlacementOutcome::Placed(p) => Some(p),
            PlacementOutcome::Skipped => None,
        }
    }

    pub fn is_placed(&self) -> bool {
        self.placement().is_some()
    }
}
