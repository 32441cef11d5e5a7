//! # Core Module
//!
//! Fundamental data structures and I/O for crossword generation.
//!
//! - **Puzzle Representation** ([`models`]) - The square grid, word entries and placements
//! - **File I/O** ([`io`]) - Word-list formats, text renderers and placement reports

pub mod io;
pub mod models;
