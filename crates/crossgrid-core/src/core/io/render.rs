use crate::core::models::entry::WordEntry;
use crate::core::models::grid::Grid;
use std::io::{self, Write};

pub const BLOCKED_CELL: char = '#';
pub const OPEN_CELL: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStyle {
    /// Occupied cells show their letter.
    #[default]
    Solution,
    /// Occupied cells are shown as blank slots to fill in.
    Blank,
}

/// Writes the grid one row per line, cells separated by a single space.
///
/// Empty cells are rendered as blocked slots.
pub fn render_grid(grid: &Grid, style: CellStyle, writer: &mut impl Write) -> io::Result<()> {
    for row in grid.rows() {
        let line = row
            .iter()
            .map(|cell| match (cell, style) {
                (None, _) => BLOCKED_CELL,
                (Some(ch), CellStyle::Solution) => *ch,
                (Some(_), CellStyle::Blank) => OPEN_CELL,
            })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Writes a numbered hint list in the order the entries are given.
pub fn render_hints(entries: &[WordEntry], writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "Hints")?;
    for (i, entry) in entries.iter().enumerate() {
        writeln!(writer, "{}. {}", i + 1, entry.hint)?;
    }
    Ok(())
}
