use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use pahtum::{BoardConfig, MAX_BOARD_SIZE};

/// Reads a [`BoardConfig`] from a JSON file. Missing keys keep their defaults.
pub fn load_board_config(path: &Path) -> anyhow::Result<BoardConfig> {
    let file = File::open(path)
        .with_context(|| format!("Could not open config file '{}'", path.display()))?;
    let config: BoardConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not parse config file '{}'", path.display()))?;
    Ok(config)
}

pub fn validate_board_config(config: &BoardConfig) -> anyhow::Result<()> {
    anyhow::ensure!(
        config.size >= 1,
        "The board size must be at least 1, but is {}",
        config.size
    );
    anyhow::ensure!(
        config.size <= MAX_BOARD_SIZE,
        "The board size must be at most {}, but is {}",
        MAX_BOARD_SIZE,
        config.size
    );
    Ok(())
}
