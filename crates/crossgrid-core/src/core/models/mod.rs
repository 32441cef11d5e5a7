//! Data models shared by the placement engine and the I/O layer.

pub mod entry;
pub mod grid;
pub mod placement;
