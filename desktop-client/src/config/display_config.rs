use common::config::{Validate, validate_range};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Edge of one board cell in points.
    pub tile_size: f32,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        validate_range("tile_size", self.tile_size, 8.0..=64.0)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { tile_size: 20.0 }
    }
}
