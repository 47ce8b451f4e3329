use crate::cell::Cell;
use crate::config::PathfinderConfig;
use crate::error::{PathfinderError, Result};
use crate::obstacle_grid::ObstacleGrid;
use crate::render::render;
use crate::solver::find_path;
use core::fmt;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Owns an [ObstacleGrid] together with a start and goal cell and the last path computed between
/// them.
///
/// The path is recomputed from scratch whenever the start or goal is moved or the grid is
/// regenerated. [add_obstacle](Self::add_obstacle) leaves the stored path alone, so it may run
/// through a blocked cell until the next recompute.
#[derive(Clone, Debug)]
pub struct Pathfinder {
    grid: ObstacleGrid,
    start: Cell,
    goal: Cell,
    path: Vec<Cell>,
}

impl Pathfinder {
    /// Generates a grid from `config` and computes the initial path. Generation is seeded with
    /// `config.seed` when set.
    pub fn new(config: &PathfinderConfig) -> Result<Pathfinder> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Pathfinder::with_rng(config, &mut rng)
    }

    pub fn with_rng<R: Rng + ?Sized>(config: &PathfinderConfig, rng: &mut R) -> Result<Pathfinder> {
        config.validate()?;
        let grid = ObstacleGrid::generate(
            config.width,
            config.height,
            config.obstacle_probability,
            config.start,
            config.goal,
            rng,
        )?;
        Ok(Pathfinder::from_grid(grid, config.start, config.goal))
    }

    /// Wraps an existing grid and computes the initial path.
    pub fn from_grid(grid: ObstacleGrid, start: Cell, goal: Cell) -> Pathfinder {
        let mut pathfinder = Pathfinder {
            grid,
            start,
            goal,
            path: Vec::new(),
        };
        pathfinder.initialize();
        pathfinder
    }

    /// Recomputes the path for the current start and goal. If either is not walkable the path
    /// is cleared instead.
    pub fn initialize(&mut self) {
        if self.grid.is_walkable(&self.start) && self.grid.is_walkable(&self.goal) {
            self.recompute();
        } else {
            warn!(
                "Start {} or goal {} is out of bounds or blocked, no path computed",
                self.start, self.goal
            );
            self.path.clear();
        }
    }

    fn recompute(&mut self) {
        self.grid.update();
        self.path = find_path(&self.grid, self.start, self.goal);
        if !self.path.is_empty() {
            info!(
                "Found path of {} cells from {} to {}",
                self.path.len(),
                self.start,
                self.goal
            );
        }
    }

    /// Replaces the grid with a newly generated one, keeping the current start and goal free,
    /// and recomputes the path. On invalid parameters the old grid is kept.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        width: usize,
        height: usize,
        obstacle_probability: f64,
        rng: &mut R,
    ) -> Result<()> {
        self.grid = ObstacleGrid::generate(
            width,
            height,
            obstacle_probability,
            self.start,
            self.goal,
            rng,
        )?;
        self.initialize();
        Ok(())
    }

    /// Blocks a cell. The stored path is not touched.
    pub fn add_obstacle(&mut self, cell: Cell) -> Result<()> {
        self.grid
            .add_obstacle(cell)
            .inspect(|_| info!("Added obstacle at {}", cell))
            .inspect_err(|e| warn!("Rejected obstacle: {}", e))
    }

    fn check_endpoint(&self, cell: Cell) -> Result<()> {
        if !self.grid.in_bounds(&cell) {
            Err(self.grid.out_of_bounds(cell))
        } else if self.grid.is_blocked(&cell) {
            Err(PathfinderError::Blocked { cell })
        } else {
            Ok(())
        }
    }

    /// Moves the start and recomputes the path. An out of bounds or blocked cell is rejected and
    /// leaves start, goal and path unchanged. The move is also rejected while the current goal is
    /// blocked or out of bounds, since no search can run from the new start.
    pub fn set_start(&mut self, cell: Cell) -> Result<()> {
        if let Err(e) = self.check_endpoint(cell) {
            warn!("Invalid start position: {}", e);
            return Err(e);
        }
        if let Err(e) = self.check_endpoint(self.goal) {
            warn!("Current goal is no longer valid, start not moved: {}", e);
            return Err(e);
        }
        self.start = cell;
        self.recompute();
        Ok(())
    }

    /// Moves the goal and recomputes the path, with the same rejection rules as
    /// [set_start](Self::set_start) applied to the new goal and the current start.
    pub fn set_goal(&mut self, cell: Cell) -> Result<()> {
        if let Err(e) = self.check_endpoint(cell) {
            warn!("Invalid goal position: {}", e);
            return Err(e);
        }
        if let Err(e) = self.check_endpoint(self.start) {
            warn!("Current start is no longer valid, goal not moved: {}", e);
            return Err(e);
        }
        self.goal = cell;
        self.recompute();
        Ok(())
    }

    pub fn grid(&self) -> &ObstacleGrid {
        &self.grid
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// The last computed path from start to goal, empty if none was found.
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn in_bounds(&self, cell: &Cell) -> bool {
        self.grid.in_bounds(cell)
    }

    pub fn is_walkable(&self, cell: &Cell) -> bool {
        self.grid.is_walkable(cell)
    }
}

impl fmt::Display for Pathfinder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render(
            &self.grid,
            &self.path,
            Some(self.start),
            Some(self.goal),
        ))
    }
}
