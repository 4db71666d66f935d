use knight_distance::board::Board;
use knight_distance::coord::{Displacement, Square};
use knight_distance::distance::{knight_distance, open_board_estimate, Distance};

fn boards(max: u32) -> impl Iterator<Item = Board> {
    (1..=max).flat_map(move |r| (1..=max).map(move |c| Board::new(r, c).unwrap()))
}

#[test]
fn distance_is_symmetric() {
    for board in boards(9) {
        for a in board.squares() {
            for b in board.squares() {
                assert_eq!(
                    knight_distance(&board, a, b),
                    knight_distance(&board, b, a),
                    "board {board}, {a} <-> {b}"
                );
            }
        }
    }
}

#[test]
fn every_square_is_zero_from_itself() {
    for board in boards(12) {
        for sq in board.squares() {
            assert_eq!(knight_distance(&board, sq, sq), Distance::Moves(0));
        }
    }
}

#[test]
fn move_count_parity_follows_square_colour() {
    // A knight move always changes square colour, so on any board the move
    // count has the parity of dr + dc.
    for board in boards(10) {
        for a in board.squares() {
            for b in board.squares() {
                if let Distance::Moves(m) = knight_distance(&board, a, b) {
                    let d = Displacement::between(a, b);
                    assert_eq!((m as u64 + d.l1()) % 2, 0, "board {board}, {a} -> {b}");
                }
            }
        }
    }
}

#[test]
fn open_board_estimate_has_the_right_parity() {
    for dr in 0..60 {
        for dc in 0..60 {
            let d = Displacement::new(dr, dc);
            assert_eq!((open_board_estimate(d) as u64 + d.l1()) % 2, 0);
        }
    }
}

#[test]
fn single_row_and_column_boards_only_reach_themselves() {
    for n in 1..=20u32 {
        for board in [Board::new(1, n).unwrap(), Board::new(n, 1).unwrap()] {
            for a in board.squares() {
                for b in board.squares() {
                    let expected = if a == b {
                        Distance::Moves(0)
                    } else {
                        Distance::Unreachable
                    };
                    assert_eq!(knight_distance(&board, a, b), expected);
                }
            }
        }
    }
}

#[test]
fn off_board_targets_are_unreachable_never_zero() {
    let board = Board::new(5, 5).unwrap();
    let source = Square::new(5, 5);
    for target in [Square::new(6, 5), Square::new(5, 6), Square::new(0, 0), Square::new(7, 4)] {
        assert_eq!(knight_distance(&board, source, target), Distance::Unreachable);
    }
}
