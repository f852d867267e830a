//! Othello best-move engine
//!
//! Given a board, the side to move and a depth budget, the engine returns one
//! decision: a placement or a pass, plus the score it expects at the end of
//! the chosen line.
//! - Board sizes from 4x4 to 16x16 (even sizes have an opening position)
//! - Flanking rule in all eight directions
//! - Scores are Black's share of the discs on the board, in `[0, 1]`
//!
//! # Architecture
//!
//! - [`board`]: Board representation and the shared value types
//! - [`rules`]: Move legality, flipping, move enumeration, terminal test
//! - [`eval`]: Disc-ratio evaluation and game outcome
//! - [`search`]: Two-ply minimax with reply cut-off, search observers
//! - [`engine`]: AI engine facade with timing and logging
//! - [`config`]: TOML-loadable engine configuration
//! - [`protocol`]: Text protocol of the `othello-search` tool
//! - [`ui`]: Desktop game built on egui
//!
//! # Quick Start
//!
//! ```
//! use othello::{AIEngine, Board, Move, Side};
//! use othello::rules::apply;
//!
//! let mut board = Board::standard(8).unwrap();
//! let mut engine = AIEngine::new();
//! engine.set_depth(3);
//!
//! if let Move::Place(pos) = engine.get_move(&board, Side::Black) {
//!     board = apply(&board, pos, Side::Black).unwrap();
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! print!("{board}");
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod protocol;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Disc, Move, Pos, Side, STANDARD_SIZE};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{BoardError, ConfigError, ProtocolError};
