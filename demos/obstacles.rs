use grid_bfs::{Cell, Pathfinder, PathfinderConfig};

// Generates a seeded random grid, then moves the goal and drops obstacles onto the path. Run with
// RUST_LOG=info to see rejected requests and search outcomes.
fn main() {
    env_logger::init();
    let config = PathfinderConfig {
        width: 12,
        height: 8,
        obstacle_probability: 0.25,
        start: Cell::new(0, 0),
        goal: Cell::new(11, 7),
        seed: Some(3),
    };
    let mut pathfinder = Pathfinder::new(&config).unwrap();
    println!("{}", pathfinder);

    // Out of bounds: rejected, nothing changes.
    if let Err(e) = pathfinder.set_goal(Cell::new(12, 7)) {
        println!("set_goal rejected: {}", e);
    }

    // Block the middle of the current path; it only takes effect on the next recompute.
    let len = pathfinder.path().len();
    if len > 2 {
        let middle = pathfinder.path()[len / 2];
        pathfinder.add_obstacle(middle).unwrap();
        pathfinder.set_goal(config.goal).unwrap();
        println!("{}", pathfinder);
    }
    println!("{} moves", grid_bfs::path_moves(pathfinder.path()));
}
