use crate::cell::Cell;
use crate::config::validate_generation;
use crate::error::{PathfinderError, Result};
use core::fmt;
use log::info;
use petgraph::unionfind::UnionFind;
use rand::Rng;

/// Fixed-size grid of free and blocked cells, stored row-major as `true` for blocked.
///
/// In addition to the raw cell states it keeps the connected components of the free cells in a
/// [UnionFind] structure, so that an unreachable goal can be detected without flood-filling the
/// grid. Placing an obstacle may split a component, so it only flags the components as dirty;
/// [update](Self::update) regenerates them.
#[derive(Clone, Debug)]
pub struct ObstacleGrid {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl ObstacleGrid {
    /// An obstacle-free grid.
    pub fn new(width: usize, height: usize) -> Result<ObstacleGrid> {
        validate_generation(width, height, 0.0)?;
        let mut grid = ObstacleGrid {
            width,
            height,
            blocked: vec![false; width * height],
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    /// Generates a grid where every cell is independently blocked with probability
    /// `obstacle_probability`. `start` and `goal` are kept free if they lie in bounds.
    pub fn generate<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        obstacle_probability: f64,
        start: Cell,
        goal: Cell,
        rng: &mut R,
    ) -> Result<ObstacleGrid> {
        validate_generation(width, height, obstacle_probability)?;
        let mut blocked = Vec::with_capacity(width * height);
        for _row in 0..height {
            for _col in 0..width {
                blocked.push(rng.gen_bool(obstacle_probability));
            }
        }
        let mut grid = ObstacleGrid {
            width,
            height,
            blocked,
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        for cell in [start, goal] {
            if let Some(ix) = grid.ix(&cell) {
                grid.blocked[ix] = false;
            }
        }
        grid.generate_components();
        info!(
            "Generated {}x{} grid with {:.1}% obstacles ({} blocked)",
            width,
            height,
            obstacle_probability * 100.0,
            grid.obstacle_count()
        );
        Ok(grid)
    }

    /// Parses rows of `#` (blocked) and `.` (free). `S`, `G` and `*` are read as free so that
    /// the output of [render](crate::render::render) parses back. The first line is row 0.
    pub fn from_ascii(text: &str) -> Result<ObstacleGrid> {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<&str>>();
        let width = lines.first().map_or(0, |l| l.chars().count());
        if width == 0 {
            return Err(PathfinderError::invalid_map("no rows"));
        }
        let mut grid = ObstacleGrid::new(width, lines.len())?;
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != width {
                return Err(PathfinderError::invalid_map(format!(
                    "row {} has {} columns, expected {}",
                    row,
                    line.chars().count(),
                    width
                )));
            }
            for (col, c) in line.chars().enumerate() {
                let blocked = match c {
                    '#' => true,
                    '.' | 'S' | 'G' | '*' => false,
                    other => {
                        return Err(PathfinderError::invalid_map(format!(
                            "unexpected character {:?} at row {}",
                            other, row
                        )))
                    }
                };
                grid.blocked[row * width + col] = blocked;
            }
        }
        grid.generate_components();
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn ix(&self, cell: &Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.row as usize * self.width + cell.col as usize)
    }

    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && (cell.col as usize) < self.width
            && (cell.row as usize) < self.height
    }

    pub fn is_walkable(&self, cell: &Cell) -> bool {
        self.ix(cell).is_some_and(|ix| !self.blocked[ix])
    }

    pub fn is_blocked(&self, cell: &Cell) -> bool {
        self.ix(cell).is_some_and(|ix| self.blocked[ix])
    }

    pub(crate) fn out_of_bounds(&self, cell: Cell) -> PathfinderError {
        PathfinderError::OutOfBounds {
            cell,
            width: self.width,
            height: self.height,
        }
    }

    /// Blocks a cell. Flags the components as dirty if a free cell became blocked.
    pub fn add_obstacle(&mut self, cell: Cell) -> Result<()> {
        let ix = self.ix(&cell).ok_or_else(|| self.out_of_bounds(cell))?;
        if !self.blocked[ix] {
            self.blocked[ix] = true;
            self.components_dirty = true;
        }
        Ok(())
    }

    pub fn obstacle_count(&self) -> usize {
        self.blocked.iter().filter(|b| **b).count()
    }

    /// Walkable orthogonal neighbours of `cell`, in [NEIGHBOUR_OFFSETS](crate::cell::NEIGHBOUR_OFFSETS) order.
    pub fn walkable_neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neumann_neighborhood()
            .into_iter()
            .filter(move |n| self.is_walkable(n))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height as i32)
            .flat_map(move |row| (0..self.width as i32).map(move |col| Cell::new(col, row)))
    }

    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Checks if start and goal are on the same component. Only meaningful when the
    /// components are not dirty.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Cells out of bounds are never
    /// reachable.
    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        match (self.ix(start), self.ix(goal)) {
            (Some(start_ix), Some(goal_ix)) => !self.components.equiv(start_ix, goal_ix),
            _ => true,
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free 4-neighbours to the same
    /// components. Looking right and down from every cell covers each edge once.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                let cell = Cell::new(col, row);
                let Some(parent_ix) = self.ix(&cell).filter(|ix| !self.blocked[*ix]) else {
                    continue;
                };
                for n in [Cell::new(col + 1, row), Cell::new(col, row + 1)] {
                    if let Some(ix) = self.ix(&n).filter(|ix| !self.blocked[*ix]) {
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for ObstacleGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&crate::render::render(self, &[], None, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // .#.
        // .#.
        let path_graph = ObstacleGrid::from_ascii(".#.\n.#.").unwrap();
        let p1 = Cell::new(0, 0);
        let p2 = Cell::new(1, 1);
        let p3 = Cell::new(0, 1);
        let p4 = Cell::new(2, 0);
        assert!(path_graph.unreachable(&p1, &p2));
        assert!(path_graph.reachable(&p1, &p3));
        assert!(path_graph.unreachable(&p1, &p4));
    }

    /// Diagonal contact does not connect two cells on a 4-grid.
    #[test]
    fn diagonal_is_not_connected() {
        let grid = ObstacleGrid::from_ascii(".#\n#.").unwrap();
        assert!(grid.unreachable(&Cell::new(0, 0), &Cell::new(1, 1)));
    }

    #[test]
    fn obstacles_dirty_components() {
        let mut grid = ObstacleGrid::new(3, 1).unwrap();
        let (a, b) = (Cell::new(0, 0), Cell::new(2, 0));
        assert!(grid.reachable(&a, &b));
        grid.add_obstacle(Cell::new(1, 0)).unwrap();
        assert!(grid.components_dirty());
        grid.update();
        assert!(!grid.components_dirty());
        assert!(grid.unreachable(&a, &b));
        // Blocking an already blocked cell is a no-op.
        grid.add_obstacle(Cell::new(1, 0)).unwrap();
        assert!(!grid.components_dirty());
    }

    #[test]
    fn bounds_and_walkability() {
        let mut grid = ObstacleGrid::new(2, 3).unwrap();
        assert!(grid.in_bounds(&Cell::new(1, 2)));
        assert!(!grid.in_bounds(&Cell::new(2, 0)));
        assert!(!grid.in_bounds(&Cell::new(0, 3)));
        assert!(!grid.in_bounds(&Cell::new(-1, 0)));
        assert!(!grid.is_walkable(&Cell::new(-1, 0)));
        assert!(!grid.is_blocked(&Cell::new(-1, 0)));

        assert_eq!(
            grid.add_obstacle(Cell::new(0, 3)),
            Err(PathfinderError::OutOfBounds {
                cell: Cell::new(0, 3),
                width: 2,
                height: 3
            })
        );
        assert_eq!(grid.obstacle_count(), 0);
        grid.add_obstacle(Cell::new(0, 1)).unwrap();
        assert!(grid.is_blocked(&Cell::new(0, 1)));
        assert!(!grid.is_walkable(&Cell::new(0, 1)));
        assert_eq!(grid.obstacle_count(), 1);
    }

    #[test]
    fn neighbours_skip_blocked_and_out_of_bounds() {
        let grid = ObstacleGrid::from_ascii("...\n.#.\n...").unwrap();
        let n = grid.walkable_neighbours(Cell::new(0, 1)).collect::<Vec<_>>();
        assert_eq!(n, vec![Cell::new(0, 2), Cell::new(0, 0)]);
        let n = grid.walkable_neighbours(Cell::new(1, 0)).collect::<Vec<_>>();
        assert_eq!(n, vec![Cell::new(2, 0), Cell::new(0, 0)]);
    }

    #[test]
    fn generation_keeps_endpoints_free() {
        let mut rng = StdRng::seed_from_u64(0);
        let start = Cell::new(0, 1);
        let goal = Cell::new(4, 4);
        let grid = ObstacleGrid::generate(5, 5, 1.0, start, goal, &mut rng).unwrap();
        assert_eq!(grid.obstacle_count(), 23);
        assert!(grid.is_walkable(&start));
        assert!(grid.is_walkable(&goal));

        let grid = ObstacleGrid::generate(4, 3, 0.0, start, goal, &mut rng).unwrap();
        assert_eq!(grid.obstacle_count(), 0);
        assert_eq!((grid.width(), grid.height()), (4, 3));
    }

    #[test]
    fn generation_is_seeded() {
        let generate = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            ObstacleGrid::generate(12, 9, 0.4, Cell::new(0, 0), Cell::new(11, 8), &mut rng)
                .unwrap()
                .to_string()
        };
        assert_eq!(generate(7), generate(7));
    }

    #[test]
    fn generation_rejects_bad_parameters() {
        let mut rng = StdRng::seed_from_u64(0);
        let c = Cell::default();
        assert!(matches!(
            ObstacleGrid::generate(0, 3, 0.5, c, c, &mut rng),
            Err(PathfinderError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            ObstacleGrid::generate(3, 3, 2.0, c, c, &mut rng),
            Err(PathfinderError::InvalidProbability(_))
        ));
    }

    #[test]
    fn ascii_round_trip() {
        let text = "..#\n#..\n";
        let grid = ObstacleGrid::from_ascii(text).unwrap();
        assert_eq!(grid.to_string(), text);
        assert!(grid.is_blocked(&Cell::new(2, 0)));
        assert!(grid.is_blocked(&Cell::new(0, 1)));
    }

    #[test]
    fn ascii_rejects_malformed() {
        assert!(ObstacleGrid::from_ascii("").is_err());
        assert!(ObstacleGrid::from_ascii("...\n..").is_err());
        assert!(ObstacleGrid::from_ascii(".x.").is_err());
    }

    #[test]
    fn cells_are_row_major() {
        let grid = ObstacleGrid::new(2, 2).unwrap();
        assert_eq!(
            grid.cells().collect::<Vec<_>>(),
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(0, 1),
                Cell::new(1, 1)
            ]
        );
    }
}
