use crate::bfs::bfs;
use crate::cell::Cell;
use crate::obstacle_grid::ObstacleGrid;
use itertools::Itertools;
use log::info;

/// Computes a path with the fewest 4-connected moves from `start` to `goal`, both inclusive.
/// An empty path means the goal cannot be reached. Start and goal are assumed to be in bounds
/// and walkable; callers validate them.
///
/// When the grid's components are up to date and place a walkable start apart from the goal, the
/// search is skipped instead of flood-filling the start's component. A blocked start is its own
/// component but still expands into its walkable neighbours, so it always gets the full search.
pub fn find_path(grid: &ObstacleGrid, start: Cell, goal: Cell) -> Vec<Cell> {
    if !grid.components_dirty() && grid.is_walkable(&start) && grid.unreachable(&start, &goal) {
        info!("{} is not reachable from {}", goal, start);
        return Vec::new();
    }
    match bfs(&start, |&cell| grid.walkable_neighbours(cell), |cell| *cell == goal) {
        Some(path) => path,
        None => {
            info!("Path not found from {} to {}", start, goal);
            Vec::new()
        }
    }
}

/// Number of moves along a path.
pub fn path_moves(path: &[Cell]) -> usize {
    path.len().saturating_sub(1)
}

/// Checks that every consecutive pair of cells differs by exactly one unit offset.
pub fn path_is_contiguous(path: &[Cell]) -> bool {
    path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
}
