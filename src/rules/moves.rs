//! Legal move enumeration and terminal detection

use crate::board::{Board, Move, Pos, Side};

use super::flip::{apply, is_legal};

/// A move paired with the board it produces.
///
/// The outcome owns its board; dropping the outcome releases it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub mv: Move,
    pub board: Board,
}

impl Outcome {
    #[inline]
    pub fn is_pass(&self) -> bool {
        self.mv.is_pass()
    }
}

/// Get every legal move for `side` together with its resulting board.
///
/// Cells are tried in row-major order. When `side` has no legal placement
/// the result is exactly one outcome: a pass paired with a copy of `board`,
/// so callers never see an empty list.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Outcome> {
    let mut outcomes: Vec<Outcome> = board
        .positions()
        .filter_map(|pos| {
            apply(board, pos, side).map(|next| Outcome {
                mv: Move::Place(pos),
                board: next,
            })
        })
        .collect();

    if outcomes.is_empty() {
        outcomes.push(Outcome {
            mv: Move::Pass,
            board: board.clone(),
        });
    }

    outcomes
}

/// Cells where `side` may play, in row-major order
pub fn legal_positions(board: &Board, side: Side) -> Vec<Pos> {
    board
        .positions()
        .filter(|&pos| is_legal(board, pos, side))
        .collect()
}

/// Check if `side` has at least one legal placement
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board.positions().any(|pos| is_legal(board, pos, side))
}

/// Check if the game is over: neither side can place a disc anywhere.
pub fn is_terminal(board: &Board) -> bool {
    !board
        .positions()
        .any(|pos| is_legal(board, pos, Side::Black) || is_legal(board, pos, Side::White))
}
