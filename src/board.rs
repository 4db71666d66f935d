use crate::coord::{Square, KNIGHT_STEPS};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be positive (got {rows}x{cols})")]
    EmptyDimension { rows: i64, cols: i64 },
    #[error("board dimension {value} does not fit in 32 bits")]
    TooLarge { value: i64 },
    #[error("square ({row}, {col}) is not on the {rows}x{cols} board")]
    OffBoard {
        row: i64,
        col: i64,
        rows: u32,
        cols: u32,
    },
}

/// A rectangular `rows x cols` board. Both dimensions are at least 1.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct Board {
    rows: u32,
    cols: u32,
}

impl Board {
    pub fn new(rows: u32, cols: u32) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyDimension {
                rows: rows as i64,
                cols: cols as i64,
            });
        }
        Ok(Self { rows, cols })
    }

    /// Build from signed integers as they come off an input line.
    pub fn from_signed(rows: i64, cols: i64) -> Result<Self, BoardError> {
        if rows < 1 || cols < 1 {
            return Err(BoardError::EmptyDimension { rows, cols });
        }
        let rows = u32::try_from(rows).map_err(|_| BoardError::TooLarge { value: rows })?;
        let cols = u32::try_from(cols).map_err(|_| BoardError::TooLarge { value: cols })?;
        Self::new(rows, cols)
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        (1..=self.rows).contains(&sq.row) && (1..=self.cols).contains(&sq.col)
    }

    pub fn check_square(&self, sq: Square) -> Result<(), BoardError> {
        if self.contains(sq) {
            Ok(())
        } else {
            Err(BoardError::OffBoard {
                row: sq.row as i64,
                col: sq.col as i64,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// One of the four squares with row in `{1, R}` and column in `{1, C}`.
    #[inline]
    pub fn is_corner(&self, sq: Square) -> bool {
        (sq.row == 1 || sq.row == self.rows) && (sq.col == 1 || sq.col == self.cols)
    }

    /// A square diagonally inward from some corner: row in `{2, R-1}` and
    /// column in `{2, C-1}`.
    #[inline]
    pub fn is_corner_diagonal(&self, sq: Square) -> bool {
        (sq.row == 2 || self.rows.checked_sub(1) == Some(sq.row))
            && (sq.col == 2 || self.cols.checked_sub(1) == Some(sq.col))
    }

    /// Dense row-major index of an on-board square.
    #[inline]
    pub fn index_of(&self, sq: Square) -> Option<usize> {
        if !self.contains(sq) {
            return None;
        }
        Some((sq.row as usize - 1) * self.cols as usize + (sq.col as usize - 1))
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        (1..=self.rows).flat_map(move |row| (1..=self.cols).map(move |col| Square::new(row, col)))
    }

    /// On-board squares one knight move away from `sq`.
    pub fn knight_neighbours(&self, sq: Square) -> impl Iterator<Item = Square> + '_ {
        KNIGHT_STEPS
            .into_iter()
            .filter_map(move |step| sq.offset(step))
            .filter(move |&to| self.contains(to))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}
