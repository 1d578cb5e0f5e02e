use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/chessbox.toml";

/// Demo configuration for the box pair.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BoxConfig {
    /// Capacity of each player's box. Non-positive values select 64.
    pub capacity: i64,
    /// Player 1's color label.
    pub p1_color: String,
    /// Player 2's color label.
    pub p2_color: String,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            p1_color: "BLACK".to_string(),
            p2_color: "WHITE".to_string(),
        }
    }
}

impl BoxConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults
    /// on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<BoxConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    BoxConfig::default()
                }
            },
            Err(_) => BoxConfig::default(),
        }
    }

    /// Capacity with the non-positive inputs clamped to the default 64.
    pub fn effective_capacity(&self) -> usize {
        if self.capacity <= 0 {
            64
        } else {
            self.capacity as usize
        }
    }
}
