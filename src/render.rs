//! Plain-text rendering of a grid and a path, one line per row with row 0 first.
//!
//! | char | meaning      |
//! |------|--------------|
//! | `#`  | blocked cell |
//! | `.`  | free cell    |
//! | `*`  | path cell    |
//! | `S`  | start        |
//! | `G`  | goal         |
use crate::cell::Cell;
use crate::obstacle_grid::ObstacleGrid;
use fxhash::FxHashSet;

pub fn render(
    grid: &ObstacleGrid,
    path: &[Cell],
    start: Option<Cell>,
    goal: Option<Cell>,
) -> String {
    let on_path = path.iter().collect::<FxHashSet<_>>();
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in 0..grid.height() as i32 {
        for col in 0..grid.width() as i32 {
            let cell = Cell::new(col, row);
            let c = if start == Some(cell) {
                'S'
            } else if goal == Some(cell) {
                'G'
            } else if on_path.contains(&cell) {
                '*'
            } else if grid.is_blocked(&cell) {
                '#'
            } else {
                '.'
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}
