//! Constant-time knight distance on a bounded `R x C` board.
//!
//! On a board large enough in both directions the knight distance for a
//! displacement `(dr, dc)` is
//!
//! ```text
//! m = ceil(max(dr / 2, dc / 2, (dr + dc) / 3))
//! d = m + (m + dr + dc) mod 2
//! ```
//!
//! with the two short-range exceptions `(1, 0) -> 3` and `(2, 2) -> 4`.
//! Near the edges of small or narrow boards that estimate is wrong, so
//! [`knight_distance`] runs an ordered cascade of guards before falling back
//! to it. The first guard that matches decides the answer; later guards rely
//! on the earlier ones having been ruled out.
//!
//! The guard set agrees with breadth-first search (see [`crate::oracle`]) on
//! every board up to 20x20.

use crate::board::{Board, BoardError};
use crate::coord::{Displacement, Square};
use serde::{Serialize, Serializer};
use std::fmt;

/// Result of a distance query.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Distance {
    /// Minimum number of knight moves.
    Moves(u32),
    /// No sequence of knight moves connects the two squares.
    Unreachable,
}

impl Distance {
    #[inline]
    pub fn moves(self) -> Option<u32> {
        match self {
            Distance::Moves(n) => Some(n),
            Distance::Unreachable => None,
        }
    }

    #[inline]
    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Moves(_))
    }
}

impl From<Option<u32>> for Distance {
    fn from(v: Option<u32>) -> Self {
        v.map_or(Distance::Unreachable, Distance::Moves)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Moves(n) => write!(f, "{n}"),
            Distance::Unreachable => f.write_str("impossible"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Moves(n) => serializer.serialize_u32(*n),
            Distance::Unreachable => serializer.serialize_str("impossible"),
        }
    }
}

/// Minimum number of knight moves from `source` to `target` on `board`.
///
/// `source` must be on the board; a `target` off the board is
/// [`Distance::Unreachable`].
pub fn knight_distance(board: &Board, source: Square, target: Square) -> Distance {
    debug_assert!(board.contains(source), "source {source} is off the {board} board");

    let probe = Probe {
        rows: board.rows(),
        cols: board.cols(),
        board,
        source,
        target,
        d: Displacement::between(source, target),
    };

    probe
        .off_board()
        .or_else(|| probe.same_square())
        .or_else(|| probe.single_line())
        .or_else(|| probe.two_columns())
        .or_else(|| probe.two_rows())
        .or_else(|| probe.isolated_centre())
        .or_else(|| probe.corner_to_diagonal())
        .or_else(|| probe.corner_to_corner_on_four())
        .or_else(|| probe.middle_line_of_three())
        .or_else(|| probe.centre_pair_of_three_by_four())
        .or_else(|| probe.short_range())
        .unwrap_or_else(|| Distance::Moves(open_board_estimate(probe.d)))
}

/// The six-integer query form: `R C Gr Gc Lr Lc`.
///
/// Fails on a non-positive board dimension or a source square that is not on
/// the board. A target that is not on the board is `Unreachable`, not an error.
pub fn knight_distance_raw(
    rows: i64,
    cols: i64,
    source_row: i64,
    source_col: i64,
    target_row: i64,
    target_col: i64,
) -> Result<Distance, BoardError> {
    let board = Board::from_signed(rows, cols)?;
    let source = on_board(&board, source_row, source_col).ok_or(BoardError::OffBoard {
        row: source_row,
        col: source_col,
        rows: board.rows(),
        cols: board.cols(),
    })?;
    Ok(match on_board(&board, target_row, target_col) {
        Some(target) => knight_distance(&board, source, target),
        None => Distance::Unreachable,
    })
}

fn on_board(board: &Board, row: i64, col: i64) -> Option<Square> {
    let sq = Square::new(u32::try_from(row).ok()?, u32::try_from(col).ok()?);
    board.contains(sq).then_some(sq)
}

/// Knight distance for displacement `d` on an unbounded board, ignoring the
/// `(1, 0)` and `(2, 2)` exceptions.
///
/// The result always has the parity of `dr + dc`.
#[inline]
pub fn open_board_estimate(d: Displacement) -> u32 {
    let (dr, dc) = (d.dr as u64, d.dc as u64);
    let m = dr.div_ceil(2).max(dc.div_ceil(2)).max((dr + dc).div_ceil(3));
    // m <= ceil(2 * u32::MAX / 3), so adding the parity bit still fits.
    (m + (m + dr + dc) % 2) as u32
}

struct Probe<'a> {
    board: &'a Board,
    rows: u32,
    cols: u32,
    source: Square,
    target: Square,
    d: Displacement,
}

impl Probe<'_> {
    fn off_board(&self) -> Option<Distance> {
        (!self.board.contains(self.target)).then_some(Distance::Unreachable)
    }

    fn same_square(&self) -> Option<Distance> {
        (self.source == self.target).then_some(Distance::Moves(0))
    }

    // Every knight step changes both coordinates.
    fn single_line(&self) -> Option<Distance> {
        (self.rows == 1 || self.cols == 1).then_some(Distance::Unreachable)
    }

    // On two columns the knight shuttles down the board two rows at a time,
    // switching column on every move.
    fn two_columns(&self) -> Option<Distance> {
        if self.cols != 2 {
            return None;
        }
        let Displacement { dr, dc } = self.d;
        let reachable = (dr % 4 == 0 && dc == 0) || (dr % 4 == 2 && dc == 1);
        (!reachable).then_some(Distance::Unreachable)
    }

    fn two_rows(&self) -> Option<Distance> {
        if self.rows != 2 {
            return None;
        }
        let Displacement { dr, dc } = self.d;
        let reachable = (dc % 4 == 0 && dr == 0) || (dc % 4 == 2 && dr == 1);
        (!reachable).then_some(Distance::Unreachable)
    }

    // The centre of 3x3 has no knight neighbours.
    fn isolated_centre(&self) -> Option<Distance> {
        if (self.rows, self.cols) != (3, 3) {
            return None;
        }
        let centre = Square::new(2, 2);
        ((self.source == centre) != (self.target == centre)).then_some(Distance::Unreachable)
    }

    fn corner_to_diagonal(&self) -> Option<Distance> {
        if self.d != Displacement::new(1, 1) {
            return None;
        }
        let b = self.board;
        let hit = (b.is_corner(self.source) && b.is_corner_diagonal(self.target))
            || (b.is_corner_diagonal(self.source) && b.is_corner(self.target));
        hit.then_some(Distance::Moves(4))
    }

    fn corner_to_corner_on_four(&self) -> Option<Distance> {
        let b = self.board;
        if !(b.is_corner(self.source) && b.is_corner(self.target)) {
            return None;
        }
        let Displacement { dr, dc } = self.d;
        let hit = (dr == 3 && dc == 0 && self.rows == 4) || (dr == 0 && dc == 3 && self.cols == 4);
        hit.then_some(Distance::Moves(5))
    }

    // Two squares apart along the middle line of a board three wide.
    fn middle_line_of_three(&self) -> Option<Distance> {
        let Displacement { dr, dc } = self.d;
        let hit = (dr == 0 && dc == 2 && self.rows == 3 && self.source.row == 2)
            || (dr == 2 && dc == 0 && self.cols == 3 && self.source.col == 2);
        hit.then_some(Distance::Moves(4))
    }

    fn centre_pair_of_three_by_four(&self) -> Option<Distance> {
        let pair = match (self.rows, self.cols) {
            (3, 4) => (Square::new(2, 2), Square::new(2, 3)),
            (4, 3) => (Square::new(2, 2), Square::new(3, 2)),
            _ => return None,
        };
        let hit = (self.source, self.target) == pair || (self.target, self.source) == pair;
        hit.then_some(Distance::Moves(5))
    }

    fn short_range(&self) -> Option<Distance> {
        match (self.d.dr, self.d.dc) {
            (1, 0) | (0, 1) => Some(Distance::Moves(3)),
            (2, 2) => Some(Distance::Moves(4)),
            _ => None,
        }
    }
}
