use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use times_grid_drill::GridConfig;

/// Read a JSON grid config. Missing fields fall back to the defaults.
pub fn load_grid_config(path: &Path) -> Result<GridConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    parse_grid_config(&text).with_context(|| format!("parsing config file {}", path.display()))
}

pub fn parse_grid_config(text: &str) -> Result<GridConfig> {
    let config: GridConfig = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Apply command-line overrides on top of a base config.
pub fn with_overrides(
    mut base: GridConfig,
    cell_size: Option<u32>,
    padding: Option<u32>,
) -> GridConfig {
    if let Some(u) = cell_size {
        base.cell_size = u;
    }
    if let Some(p) = padding {
        base.padding = p;
    }
    base
}
