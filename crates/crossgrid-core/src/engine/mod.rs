//! # Engine Module
//!
//! The placement engine and the rules that decide what a finished grid may
//! look like.
//!
//! - **Configuration** ([`config`]) - Grid size and the acceptance policy for placements
//! - **Placement** ([`placement`]) - Greedy intersection-maximizing word placement
//! - **Validation** ([`validator`]) - Post-placement adjacency check
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod error;
pub mod placement;
pub mod progress;
pub mod validator;
