use crossgrid::core::io::render::CellStyle;
use crossgrid::engine::config::PlacementPolicy;

pub struct DefaultsConfig {
    pub grid_size: usize,
    pub policy: PlacementPolicy,
    pub style: CellStyle,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            policy: PlacementPolicy::Strict,
            style: CellStyle::Solution,
        }
    }
}
