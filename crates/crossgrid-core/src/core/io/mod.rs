//! Input/output for word lists, rendered puzzles and placement reports.
//!
//! Word lists are read through the [`traits::WordListFile`] trait, which is
//! implemented for the colon-separated hint format and for CSV. Finished
//! grids and hint lists are rendered as plain text.

pub mod render;
pub mod report;
pub mod traits;
pub mod wordlist;
