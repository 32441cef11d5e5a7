use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid size must be a positive integer, got {size}")]
    InvalidSize { size: usize },

    #[error("Cell ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

/// A square matrix of single-character cells.
///
/// Cells are stored row-major; `None` marks an empty cell. The side length is
/// fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates an empty `size x size` grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.size && col < self.size {
            Ok(row * self.size + col)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// Returns the character at `(row, col)`, or `None` for an empty cell.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<char>, GridError> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Writes `ch` at `(row, col)`, replacing whatever was there.
    ///
    /// The grid does not check for conflicts with an existing letter.
    pub fn set(&mut self, row: usize, col: usize, ch: char) -> Result<(), GridError> {
        let i = self.index(row, col)?;
        self.cells[i] = Some(ch);
        Ok(())
    }

    /// True when no cell holds a letter.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.size)
    }
}
