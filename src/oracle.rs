use crate::board::Board;
use crate::coord::Square;
use crate::distance::Distance;
use std::collections::VecDeque;

/// Exact knight distances from one source square to every square of a board,
/// computed by breadth-first search.
///
/// This costs O(R·C) per source and is the reference the closed form is
/// checked against.
#[derive(Clone, Debug)]
pub struct DistanceMap {
    board: Board,
    source: Square,
    dist: Vec<Option<u32>>,
}

impl DistanceMap {
    pub fn board(&self) -> Board {
        self.board
    }

    pub fn source(&self) -> Square {
        self.source
    }

    /// Moves to `sq`, or `None` if `sq` is unreachable or off the board.
    pub fn get(&self, sq: Square) -> Option<u32> {
        self.board.index_of(sq).and_then(|i| self.dist[i])
    }

    pub fn distance(&self, sq: Square) -> Distance {
        Distance::from(self.get(sq))
    }

    pub fn reachable_count(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }
}

/// Breadth-first search over the knight-move graph of `board` from `source`.
pub fn bfs_distances(board: &Board, source: Square) -> DistanceMap {
    let mut dist: Vec<Option<u32>> = vec![None; board.area()];
    let mut q: VecDeque<(Square, u32)> = VecDeque::new();

    let Some(start) = board.index_of(source) else {
        // Nothing is reachable from a square that is not on the board.
        return DistanceMap {
            board: *board,
            source,
            dist,
        };
    };
    dist[start] = Some(0);
    q.push_back((source, 0));

    while let Some((sq, d)) = q.pop_front() {
        for nxt in board.knight_neighbours(sq) {
            let Some(i) = board.index_of(nxt) else {
                continue;
            };
            if dist[i].is_some() {
                continue;
            }
            dist[i] = Some(d + 1);
            q.push_back((nxt, d + 1));
        }
    }

    DistanceMap {
        board: *board,
        source,
        dist,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board_from_corner() {
        let board = Board::new(8, 8).unwrap();
        let map = bfs_distances(&board, Square::new(1, 1));
        assert_eq!(map.get(Square::new(1, 1)), Some(0));
        assert_eq!(map.get(Square::new(2, 3)), Some(1));
        assert_eq!(map.get(Square::new(2, 2)), Some(4));
        assert_eq!(map.get(Square::new(8, 8)), Some(6));
        assert_eq!(map.reachable_count(), 64);
    }

    #[test]
    fn three_by_three_centre_is_cut_off() {
        let board = Board::new(3, 3).unwrap();
        let map = bfs_distances(&board, Square::new(1, 1));
        assert_eq!(map.distance(Square::new(2, 2)), Distance::Unreachable);
        assert_eq!(map.reachable_count(), 8);

        let centre = bfs_distances(&board, Square::new(2, 2));
        assert_eq!(centre.reachable_count(), 1);
    }

    #[test]
    fn single_row_reaches_nothing_else() {
        let board = Board::new(1, 7).unwrap();
        let map = bfs_distances(&board, Square::new(1, 4));
        assert_eq!(map.reachable_count(), 1);
        assert_eq!(map.distance(Square::new(1, 4)), Distance::Moves(0));
    }
}
