//! Error type shared by grid construction and the [Pathfinder](crate::Pathfinder) boundary
//! operations. None of these are fatal: a rejected operation leaves prior state untouched.

use crate::cell::Cell;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PathfinderError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathfinderError {
    /// The cell lies outside the grid.
    #[error("cell {cell} is out of bounds for a {width}x{height} grid")]
    OutOfBounds {
        cell: Cell,
        width: usize,
        height: usize,
    },

    /// The cell is an obstacle and cannot serve as start or goal.
    #[error("cell {cell} is blocked")]
    Blocked { cell: Cell },

    #[error("invalid grid dimensions {width}x{height}, both must be positive")]
    InvalidDimensions { width: usize, height: usize },

    #[error("obstacle probability {0} is not within [0, 1]")]
    InvalidProbability(f64),

    #[error("invalid map: {0}")]
    InvalidMap(String),
}

impl PathfinderError {
    pub fn invalid_map(reason: impl Into<String>) -> Self {
        Self::InvalidMap(reason.into())
    }

    /// The cell this error refers to, if any.
    pub fn cell(&self) -> Option<Cell> {
        match self {
            Self::OutOfBounds { cell, .. } | Self::Blocked { cell } => Some(*cell),
            _ => None,
        }
    }
}
