use serde::Serialize;
use std::fmt;

/// A board square, 1-indexed from the top-left corner.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub struct Square {
    pub row: u32,
    pub col: u32,
}

impl Square {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// The square one `step` away, or `None` if it would fall left of column 1
    /// or above row 1. The upper bounds are the board's business.
    #[inline]
    pub fn offset(self, step: Step) -> Option<Square> {
        let row = self.row as i64 + step.dr as i64;
        let col = self.col as i64 + step.dc as i64;
        if row < 1 || col < 1 || row > u32::MAX as i64 || col > u32::MAX as i64 {
            return None;
        }
        Some(Square::new(row as u32, col as u32))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A signed move offset.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Step {
    pub dr: i8,
    pub dc: i8,
}

impl Step {
    #[inline]
    pub const fn new(dr: i8, dc: i8) -> Self {
        Self { dr, dc }
    }
}

/// The 8 knight steps.
pub const KNIGHT_STEPS: [Step; 8] = [
    Step::new(1, 2),
    Step::new(2, 1),
    Step::new(-1, 2),
    Step::new(-2, 1),
    Step::new(1, -2),
    Step::new(2, -1),
    Step::new(-1, -2),
    Step::new(-2, -1),
];

/// Absolute row/column distance between two squares.
///
/// Order of the two squares does not matter.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Displacement {
    pub dr: u32,
    pub dc: u32,
}

impl Displacement {
    #[inline]
    pub const fn new(dr: u32, dc: u32) -> Self {
        Self { dr, dc }
    }

    #[inline]
    pub fn between(a: Square, b: Square) -> Self {
        Self {
            dr: a.row.abs_diff(b.row),
            dc: a.col.abs_diff(b.col),
        }
    }

    #[inline]
    pub fn l1(self) -> u64 {
        self.dr as u64 + self.dc as u64
    }
}
