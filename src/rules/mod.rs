//! Game rules for Othello
//!
//! This module implements the move generator:
//! - Flanking rule: legality test and disc flipping
//! - Legal move enumeration (with a synthetic pass)
//! - Terminal detection (neither side can move)

pub mod flip;
pub mod moves;

// Re-exports for convenient access
pub use flip::{apply, flipped_positions, is_legal, DIRECTIONS};
pub use moves::{has_legal_move, is_terminal, legal_moves, legal_positions, Outcome};
