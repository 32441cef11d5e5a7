//! # Workflows Module
//!
//! High-level entry points that run a complete generation: creating the grid,
//! placing the words and validating the result.
//!
//! - **Generate Workflow** ([`generate`]) - One placement run followed by validation

pub mod generate;
