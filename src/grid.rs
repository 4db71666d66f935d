//! Whole-board distance tables and their text rendering.

use crate::board::Board;
use crate::coord::Square;
use crate::distance::{knight_distance, Distance};
use crate::oracle::DistanceMap;
use std::fmt::{self, Write as _};

/// Distance from a fixed source to every square of a board, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceGrid {
    board: Board,
    source: Square,
    cells: Vec<Distance>,
}

impl DistanceGrid {
    /// Closed-form distances from `source`.
    pub fn closed_form(board: &Board, source: Square) -> Self {
        let cells = board
            .squares()
            .map(|sq| knight_distance(board, source, sq))
            .collect();
        Self {
            board: *board,
            source,
            cells,
        }
    }

    /// Breadth-first-search distances, as a grid.
    pub fn from_oracle(map: &DistanceMap) -> Self {
        let board = map.board();
        let cells = board.squares().map(|sq| map.distance(sq)).collect();
        Self {
            board,
            source: map.source(),
            cells,
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn source(&self) -> Square {
        self.source
    }

    /// The largest finite distance on the grid.
    pub fn eccentricity(&self) -> u32 {
        self.cells.iter().filter_map(|d| d.moves()).max().unwrap_or(0)
    }

    /// Squares on which the two grids disagree, row-major.
    pub fn differences(&self, other: &DistanceGrid) -> Vec<Square> {
        debug_assert_eq!(self.board, other.board);
        self.board
            .squares()
            .zip(self.cells.iter().zip(&other.cells))
            .filter(|(_, (a, b))| a != b)
            .map(|(sq, _)| sq)
            .collect()
    }

    fn cell_width(&self) -> usize {
        self.cells.iter().map(|d| cell_text(*d).len()).max().unwrap_or(1)
    }

    fn render_row(&self, row: u32, width: usize, against: Option<&DistanceGrid>) -> String {
        let cols = self.board.cols() as usize;
        let start = (row as usize - 1) * cols;
        let mut line = String::new();
        for (offset, d) in self.cells[start..start + cols].iter().enumerate() {
            if offset > 0 {
                line.push(' ');
            }
            let _ = write!(line, "{:>width$}", cell_text(*d));
            if let Some(other) = against {
                line.push(if other.cells[start + offset] != *d { '*' } else { ' ' });
            }
        }
        line.trim_end().to_string()
    }

    /// Two grids next to each other, `self` on the left. Cells that differ are
    /// suffixed with `*` on both sides.
    pub fn side_by_side(&self, other: &DistanceGrid, left_title: &str, right_title: &str) -> String {
        let lw = self.cell_width();
        let rw = other.cell_width();
        let left_rows: Vec<String> = (1..=self.board.rows())
            .map(|r| self.render_row(r, lw, Some(other)))
            .collect();
        let right_rows: Vec<String> = (1..=other.board.rows())
            .map(|r| other.render_row(r, rw, Some(self)))
            .collect();
        let pad = left_rows
            .iter()
            .map(String::len)
            .chain(std::iter::once(left_title.len()))
            .max()
            .unwrap_or(0);

        let mut out = format!("{left_title:<pad$}   {right_title}\n");
        for (l, r) in left_rows.iter().zip(&right_rows) {
            let _ = writeln!(out, "{l:<pad$}   {r}");
        }
        out
    }
}

fn cell_text(d: Distance) -> String {
    match d {
        Distance::Moves(n) => n.to_string(),
        Distance::Unreachable => "-".to_string(),
    }
}

impl fmt::Display for DistanceGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.cell_width();
        for row in 1..=self.board.rows() {
            writeln!(f, "{}", self.render_row(row, width, None))?;
        }
        Ok(())
    }
}
