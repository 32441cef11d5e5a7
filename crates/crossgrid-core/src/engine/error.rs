use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::grid::GridError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
