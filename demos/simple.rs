use grid_bfs::{Cell, ObstacleGrid, Pathfinder};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  G|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Nodes have a 4-neighborhood

fn main() {
    env_logger::init();
    let grid = ObstacleGrid::from_ascii("...\n.#.\n...").unwrap();
    let pathfinder = Pathfinder::from_grid(grid, Cell::new(0, 0), Cell::new(2, 2));
    println!("{}", pathfinder);
    println!("Path:");
    for p in pathfinder.path() {
        println!("{}", p);
    }
}
