use crate::cli::WordListFormat;
use crossgrid::core::io::render::CellStyle;
use crossgrid::engine::config as core_config;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub input_format: WordListFormat,
    pub output_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub style: CellStyle,
    pub allow_invalid: bool,
    pub core_config: core_config::GenerationConfig,
}
