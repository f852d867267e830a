//! Material counting and the disc-ratio evaluation

use crate::board::{Board, Disc};

/// Number of discs each side holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiscCount {
    pub black: u32,
    pub white: u32,
}

impl DiscCount {
    #[inline]
    pub fn total(self) -> u32 {
        self.black + self.white
    }
}

/// Count black and white discs in one pass over the grid.
pub fn counts(board: &Board) -> DiscCount {
    board
        .cells()
        .iter()
        .fold(DiscCount::default(), |mut acc, disc| {
            match disc {
                Disc::Black => acc.black += 1,
                Disc::White => acc.white += 1,
                Disc::Empty => {}
            }
            acc
        })
}

/// Static evaluation: the fraction of occupied cells held by Black.
///
/// Returns a value in `[0, 1]` for any board holding at least one disc.
/// A board with no discs yields NaN; such a board cannot arise from a game.
pub fn evaluate(board: &Board) -> f32 {
    let discs = counts(board);
    discs.black as f32 / discs.total() as f32
}

/// Game outcome from Black's point of view: `1` if Black has more discs,
/// `-1` if White has more, `0` on a tie.
pub fn utility(board: &Board) -> i8 {
    let DiscCount { black, white } = counts(board);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    }
}
