use core::fmt;
use core::ops::Add;
use serde::{Deserialize, Serialize};

/// Integer `(col, row)` coordinate of a grid cell.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

/// Unit offsets of the 4-neighbourhood in expansion order: +x, -x, +y, -y.
/// The order only decides which of several equally short paths is returned.
pub const NEIGHBOUR_OFFSETS: [Cell; 4] = [
    Cell::new(1, 0),
    Cell::new(-1, 0),
    Cell::new(0, 1),
    Cell::new(0, -1),
];

impl Cell {
    pub const fn new(col: i32, row: i32) -> Cell {
        Cell { col, row }
    }

    /// The four orthogonal neighbours in [NEIGHBOUR_OFFSETS] order, regardless of bounds.
    /// Coordinates wrap at the `i32` limits, which keeps them outside any grid.
    pub fn neumann_neighborhood(&self) -> [Cell; 4] {
        NEIGHBOUR_OFFSETS.map(|offset| *self + offset)
    }

    pub fn manhattan_distance(&self, other: &Cell) -> u64 {
        u64::from(self.col.abs_diff(other.col)) + u64::from(self.row.abs_diff(other.row))
    }

    /// True if `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

/// Component-wise wrapping addition.
impl Add for Cell {
    type Output = Cell;

    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.col.wrapping_add(rhs.col), self.row.wrapping_add(rhs.row))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((col, row): (i32, i32)) -> Cell {
        Cell::new(col, row)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
