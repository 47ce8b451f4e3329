use crate::cell::Cell;
use crate::error::{PathfinderError, Result};
use serde::{Deserialize, Serialize};

/// Construction parameters for a [Pathfinder](crate::Pathfinder).
///
/// Missing fields fall back to [Default] when deserializing, so a host can store only the
/// values it wants to override.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathfinderConfig {
    /// Number of columns, must be positive.
    pub width: usize,
    /// Number of rows, must be positive.
    pub height: usize,
    /// Independent chance in `[0, 1]` that a generated cell is blocked.
    pub obstacle_probability: f64,
    pub start: Cell,
    pub goal: Cell,
    /// Seed for grid generation. Without one the generator is seeded from entropy.
    pub seed: Option<u64>,
}

impl Default for PathfinderConfig {
    fn default() -> PathfinderConfig {
        PathfinderConfig {
            width: 5,
            height: 5,
            obstacle_probability: 0.3,
            start: Cell::new(0, 1),
            goal: Cell::new(4, 4),
            seed: None,
        }
    }
}

impl PathfinderConfig {
    pub fn validate(&self) -> Result<()> {
        validate_generation(self.width, self.height, self.obstacle_probability)
    }
}

pub(crate) fn validate_generation(
    width: usize,
    height: usize,
    obstacle_probability: f64,
) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(PathfinderError::InvalidDimensions { width, height });
    }
    // Also rejects NaN.
    if !(0.0..=1.0).contains(&obstacle_probability) {
        return Err(PathfinderError::InvalidProbability(obstacle_probability));
    }
    Ok(())
}
