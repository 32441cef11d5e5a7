//! # Crossgrid Core Library
//!
//! A greedy crossword grid generator. Words are placed, longest first, onto a
//! fixed-size square grid at the position that shares the most letters with
//! the words already on it.
//!
//! ## Architecture
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Plain data models (`Grid`, `WordEntry`,
//!   `Placement`) and I/O for word lists, rendered puzzles and reports.
//!
//! - **[`engine`]: The Logic Core.** The placement search with its
//!   intersection scoring, the adjacency validator, configuration and
//!   progress reporting.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into
//!   a single generation run.

pub mod core;
pub mod engine;
pub mod workflows;
