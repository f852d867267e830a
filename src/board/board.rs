//! Board structure: a fixed-size square grid of discs

use std::fmt;

use super::{Disc, Pos, Side, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::BoardError;

/// Game board.
///
/// The side length is chosen once at construction and never changes.
/// Cloning copies the whole grid; search code treats boards as value
/// snapshots and builds new ones instead of editing existing ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Disc>,
}

impl Board {
    /// Create an empty board with side length `size`.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Disc::Empty; size * size],
        }
    }

    /// Create the opening position: the centre 2x2 block with White on the
    /// main diagonal and Black on the anti-diagonal.
    pub fn standard(size: usize) -> Result<Self, BoardError> {
        if size % 2 != 0 {
            return Err(BoardError::OddSize(size));
        }
        let mut board = Self::new(size)?;
        board.place_centre();
        Ok(board)
    }

    fn place_centre(&mut self) {
        let lo = (self.size / 2 - 1) as u8;
        let hi = (self.size / 2) as u8;
        self.set(Pos::new(lo, lo), Disc::White);
        self.set(Pos::new(lo, hi), Disc::Black);
        self.set(Pos::new(hi, lo), Disc::Black);
        self.set(Pos::new(hi, hi), Disc::White);
    }

    /// Build a board from row-major cells. `cells.len()` must be `size * size`.
    pub fn from_cells(size: usize, cells: &[Disc]) -> Result<Self, BoardError> {
        let mut board = Self::new(size)?;
        if cells.len() != size * size {
            return Err(BoardError::CellCount {
                expected: size * size,
                found: cells.len(),
            });
        }
        board.cells.copy_from_slice(cells);
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get disc at position. `pos` must be on the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Disc {
        debug_assert!(self.contains(pos.row as i32, pos.col as i32));
        self.cells[pos.to_index(self.size)]
    }

    /// Overwrite the cell at `pos`. `pos` must be on the board.
    #[inline]
    pub fn set(&mut self, pos: Pos, disc: Disc) {
        debug_assert!(self.contains(pos.row as i32, pos.col as i32));
        let idx = pos.to_index(self.size);
        self.cells[idx] = disc;
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Disc::Empty
    }

    /// Whether signed coordinates fall inside the board
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.size as i32 && col >= 0 && col < self.size as i32
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size * size).map(move |idx| Pos::from_index(idx, size))
    }

    /// Row-major view of the grid
    #[inline]
    pub fn cells(&self) -> &[Disc] {
        &self.cells
    }

    /// Number of discs a side has on the board
    #[inline]
    pub fn count(&self, side: Side) -> u32 {
        let disc = side.disc();
        self.cells.iter().filter(|&&d| d == disc).count() as u32
    }

    /// Total discs on board
    #[inline]
    pub fn disc_count(&self) -> u32 {
        self.cells.iter().filter(|&&d| d != Disc::Empty).count() as u32
    }
}

impl Default for Board {
    fn default() -> Self {
        let mut board = Self::empty(super::STANDARD_SIZE);
        board.place_centre();
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for disc in row {
                let mark = match disc {
                    Disc::Black => "o ",
                    Disc::White => "x ",
                    Disc::Empty => "  ",
                };
                f.write_str(mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
