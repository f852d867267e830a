//! Flanking rule
//!
//! A placement is legal when, in at least one of the 8 directions, the
//! neighbouring cell holds an opposing disc and the run of opposing discs
//! that starts there ends on a disc of the mover. Every such run is flipped.

use crate::board::{Board, Disc, Pos, Side};

/// Direction vectors for ray scanning (8 directions)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), // ↖
    (-1, 0),  // ↑
    (-1, 1),  // ↗
    (0, -1),  // ←
    (0, 1),   // →
    (1, -1),  // ↙
    (1, 0),   // ↓
    (1, 1),   // ↘
];

/// Length of the opposing run bracketed by `side` when walking from `pos`
/// along `dir`, or `None` if the direction captures nothing.
///
/// Running off the edge or reaching an empty cell before a disc of `side`
/// rejects the direction.
#[inline]
fn bracketed_run(board: &Board, pos: Pos, dir: (i32, i32), side: Side) -> Option<i32> {
    let size = board.size();
    let own = side.disc();
    let opponent = side.opponent().disc();

    let neighbour = pos.offset(dir, 1, size)?;
    if board.get(neighbour) != opponent {
        return None;
    }

    let mut n = 2;
    loop {
        let next = pos.offset(dir, n, size)?;
        match board.get(next) {
            Disc::Empty => return None,
            disc if disc == own => return Some(n - 1),
            _ => n += 1,
        }
    }
}

/// Check whether `side` may place a disc at `pos`.
///
/// # Arguments
/// * `board` - Current board state
/// * `pos` - Target cell (must be on the board)
/// * `side` - Side making the placement
pub fn is_legal(board: &Board, pos: Pos, side: Side) -> bool {
    if !board.is_empty(pos) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| bracketed_run(board, pos, dir, side).is_some())
}

/// Return the board that results from `side` playing at `pos`.
///
/// The input board is never modified. Returns `None` when the placement
/// flips nothing (not a legal move). Each direction is resolved against the
/// input board, so a cell is flipped only by the runs that pass through it.
pub fn apply(board: &Board, pos: Pos, side: Side) -> Option<Board> {
    if !board.is_empty(pos) {
        return None;
    }

    let disc = side.disc();
    let mut result: Option<Board> = None;

    for &dir in &DIRECTIONS {
        let Some(run) = bracketed_run(board, pos, dir, side) else {
            continue;
        };
        let next = result.get_or_insert_with(|| {
            let mut next = board.clone();
            next.set(pos, disc);
            next
        });
        for i in 1..=run {
            if let Some(cell) = pos.offset(dir, i, board.size()) {
                next.set(cell, disc);
            }
        }
    }

    result
}

/// Find all discs that would be flipped if `side` played at `pos`.
///
/// Positions are grouped by direction, nearest first. Empty when the move
/// is not legal.
pub fn flipped_positions(board: &Board, pos: Pos, side: Side) -> Vec<Pos> {
    let mut flipped = Vec::new();
    if !board.is_empty(pos) {
        return flipped;
    }

    for &dir in &DIRECTIONS {
        if let Some(run) = bracketed_run(board, pos, dir, side) {
            flipped.extend((1..=run).filter_map(|i| pos.offset(dir, i, board.size())));
        }
    }

    flipped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty(size: usize) -> Board {
        Board::new(size).unwrap()
    }

    fn place(board: &mut Board, cells: &[(u8, u8)], disc: Disc) {
        for &(r, c) in cells {
            board.set(Pos::new(r, c), disc);
        }
    }

    #[test]
    fn test_opening_moves_for_black() {
        let board = Board::standard(8).unwrap();
        let legal: Vec<Pos> = board
            .positions()
            .filter(|&p| is_legal(&board, p, Side::Black))
            .collect();
        assert_eq!(
            legal,
            vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
        );
    }

    #[test]
    fn test_occupied_cell_is_illegal() {
        let board = Board::standard(8).unwrap();
        assert!(!is_legal(&board, Pos::new(3, 3), Side::Black));
        assert!(apply(&board, Pos::new(3, 3), Side::Black).is_none());
        assert!(flipped_positions(&board, Pos::new(3, 3), Side::Black).is_empty());
    }

    #[test]
    fn test_single_flip_changes_only_two_cells() {
        // Row 0: _ W B  -> Black at (0,0) flips (0,1)
        let mut board = empty(8);
        place(&mut board, &[(0, 2)], Disc::Black);
        place(&mut board, &[(0, 1)], Disc::White);

        assert!(is_legal(&board, Pos::new(0, 0), Side::Black));
        let next = apply(&board, Pos::new(0, 0), Side::Black).unwrap();

        assert_eq!(next.get(Pos::new(0, 0)), Disc::Black);
        assert_eq!(next.get(Pos::new(0, 1)), Disc::Black);
        let changed: Vec<Pos> = board
            .positions()
            .filter(|&p| board.get(p) != next.get(p))
            .collect();
        assert_eq!(changed, vec![Pos::new(0, 0), Pos::new(0, 1)]);
        // Input untouched
        assert_eq!(board.get(Pos::new(0, 0)), Disc::Empty);
        assert_eq!(board.get(Pos::new(0, 1)), Disc::White);
    }

    #[test]
    fn test_long_run_flipped() {
        // B W W W _ on row 5
        let mut board = empty(8);
        place(&mut board, &[(5, 0)], Disc::Black);
        place(&mut board, &[(5, 1), (5, 2), (5, 3)], Disc::White);

        let next = apply(&board, Pos::new(5, 4), Side::Black).unwrap();
        for c in 0..=4 {
            assert_eq!(next.get(Pos::new(5, c)), Disc::Black);
        }
        assert_eq!(
            flipped_positions(&board, Pos::new(5, 4), Side::Black),
            vec![Pos::new(5, 3), Pos::new(5, 2), Pos::new(5, 1)]
        );
    }

    #[test]
    fn test_run_ending_on_edge_is_rejected() {
        // _ W W | edge: nothing brackets the run
        let mut board = empty(6);
        place(&mut board, &[(2, 4), (2, 5)], Disc::White);
        assert!(!is_legal(&board, Pos::new(2, 3), Side::Black));
        assert!(apply(&board, Pos::new(2, 3), Side::Black).is_none());
    }

    #[test]
    fn test_run_ending_on_empty_is_rejected() {
        // _ W _ B: gap breaks the run
        let mut board = empty(8);
        place(&mut board, &[(4, 1)], Disc::White);
        place(&mut board, &[(4, 3)], Disc::Black);
        assert!(!is_legal(&board, Pos::new(4, 0), Side::Black));
    }

    #[test]
    fn test_adjacent_own_disc_is_not_a_capture() {
        let mut board = empty(8);
        place(&mut board, &[(4, 1), (4, 2)], Disc::Black);
        assert!(!is_legal(&board, Pos::new(4, 0), Side::Black));
    }

    #[test]
    fn test_multiple_directions_flip_independently() {
        //   col: 0 1 2 3
        // row 0: B . B .
        // row 1: . W W .
        // row 2: B W _ .
        // Black at (2,2) flips (1,2) upward, (2,1) leftward and (1,1) diagonally.
        let mut board = empty(6);
        place(&mut board, &[(0, 0), (0, 2), (2, 0)], Disc::Black);
        place(&mut board, &[(1, 1), (1, 2), (2, 1)], Disc::White);

        let next = apply(&board, Pos::new(2, 2), Side::Black).unwrap();
        assert_eq!(next.get(Pos::new(1, 1)), Disc::Black);
        assert_eq!(next.get(Pos::new(1, 2)), Disc::Black);
        assert_eq!(next.get(Pos::new(2, 1)), Disc::Black);
        assert_eq!(next.disc_count(), board.disc_count() + 1);
        assert_eq!(next.count(Side::White), 0);
    }

    #[test]
    fn test_white_flips_black() {
        let mut board = empty(8);
        place(&mut board, &[(7, 7)], Disc::White);
        place(&mut board, &[(6, 6)], Disc::Black);
        let next = apply(&board, Pos::new(5, 5), Side::White).unwrap();
        assert_eq!(next.get(Pos::new(6, 6)), Disc::White);
        assert_eq!(next.get(Pos::new(5, 5)), Disc::White);
        assert!(!is_legal(&board, Pos::new(5, 5), Side::Black));
    }

    #[test]
    fn test_legal_iff_apply_succeeds() {
        let mut board = Board::standard(8).unwrap();
        // Play a few moves to get an irregular position
        for (pos, side) in [
            (Pos::new(2, 3), Side::Black),
            (Pos::new(2, 2), Side::White),
            (Pos::new(3, 2), Side::Black),
            (Pos::new(2, 4), Side::White),
        ] {
            board = apply(&board, pos, side).unwrap();
        }

        for side in [Side::Black, Side::White] {
            for pos in board.positions() {
                let legal = is_legal(&board, pos, side);
                let applied = apply(&board, pos, side);
                assert_eq!(legal, applied.is_some(), "{pos:?} {side:?}");
                assert_eq!(legal, !flipped_positions(&board, pos, side).is_empty());

                if let Some(next) = applied {
                    assert_eq!(next.disc_count(), board.disc_count() + 1);
                    assert!(next.count(side) >= board.count(side) + 2);
                    assert_eq!(next.get(pos), side.disc());
                }
            }
        }
    }
}
