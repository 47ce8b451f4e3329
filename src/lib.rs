//! # grid_bfs
//!
//! Procedurally generated obstacle grids with
//! [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search) pathfinding between two
//! cells. Movement is 4-connected and every move has the same cost, so the returned path has the
//! fewest possible moves. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use grid_bfs::{Cell, ObstacleGrid, Pathfinder};
//!
//! let grid = ObstacleGrid::from_ascii("...\n.#.\n...").unwrap();
//! let mut pathfinder = Pathfinder::from_grid(grid, Cell::new(0, 0), Cell::new(2, 2));
//! assert_eq!(pathfinder.path().len(), 5);
//! assert!(pathfinder.set_goal(Cell::new(1, 1)).is_err());
//! ```
pub mod bfs;
pub mod cell;
pub mod config;
pub mod error;
pub mod obstacle_grid;
pub mod pathfinder;
pub mod render;
pub mod solver;

pub use cell::{Cell, NEIGHBOUR_OFFSETS};
pub use config::PathfinderConfig;
pub use error::{PathfinderError, Result};
pub use obstacle_grid::ObstacleGrid;
pub use pathfinder::Pathfinder;
pub use render::render;
pub use solver::{find_path, path_is_contiguous, path_moves};
