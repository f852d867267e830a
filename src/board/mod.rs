//! Board representation for Othello

pub mod board;


// Re-exports
pub use board::Board;

/// Side length of the standard Othello board
pub const STANDARD_SIZE: usize = 8;
/// Smallest supported board (a 4x4 board still has a centre block)
pub const MIN_BOARD_SIZE: usize = 4;
/// Largest supported board
pub const MAX_BOARD_SIZE: usize = 16;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Disc {
    #[default]
    Empty,
    Black,
    White,
}

/// A player. Black moves first and is the side the score scale favours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Disc placed by this side
    #[inline]
    pub fn disc(self) -> Disc {
        match self {
            Side::Black => Disc::Black,
            Side::White => Disc::White,
        }
    }

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            Side::Black => "Black",
            Side::White => "White",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    /// Step `n` cells along a direction. Returns `None` when the result
    /// leaves a board of the given size.
    #[inline]
    pub fn offset(self, (dr, dc): (i32, i32), n: i32, size: usize) -> Option<Pos> {
        let r = self.row as i32 + dr * n;
        let c = self.col as i32 + dc * n;
        if r >= 0 && r < size as i32 && c >= 0 && c < size as i32 {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// A decision: place a disc somewhere, or pass the turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Pos),
    Pass,
}

impl Move {
    /// Coordinates used by the text protocol, `(-1, -1)` for a pass
    #[inline]
    pub fn coords(self) -> (i32, i32) {
        match self {
            Move::Place(pos) => (pos.row as i32, pos.col as i32),
            Move::Pass => (-1, -1),
        }
    }

    #[inline]
    pub fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }

    #[inline]
    pub fn pos(self) -> Option<Pos> {
        match self {
            Move::Place(pos) => Some(pos),
            Move::Pass => None,
        }
    }
}

impl From<Pos> for Move {
    fn from(pos: Pos) -> Self {
        Move::Place(pos)
    }
}
