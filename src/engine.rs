//! AI engine facade over the minimax searcher
//!
//! The engine carries the configured depth, times each search and logs the
//! decision. Progress lines come from a [`ProgressLogger`] when the
//! configured interval is non-zero.
//!
//! # Example
//!
//! ```
//! use othello::{AIEngine, Board, Side};
//!
//! let mut engine = AIEngine::new();
//! engine.set_depth(3);
//!
//! let board = Board::standard(8).unwrap();
//! let result = engine.get_move_with_stats(&board, Side::Black);
//! println!("Best move: {:?} (score {})", result.best_move, result.score);
//! println!("Time: {}ms, nodes: {}", result.time_ms, result.nodes);
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::board::{Board, Move, Side};
use crate::config::EngineConfig;
use crate::search::{ProgressLogger, SearchStats, Searcher};

/// Outcome of one engine decision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    /// Best move found, [`Move::Pass`] when the side cannot place a disc
    pub best_move: Move,
    /// Black's disc share at the end of the chosen line
    pub score: f32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    pub stats: SearchStats,
}

/// Main AI engine for Othello.
#[derive(Debug, Clone)]
pub struct AIEngine {
    depth: i32,
    progress_interval: u64,
}

impl AIEngine {
    /// Create a new AI engine with default settings (depth 4).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Create an AI engine from a configuration.
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            depth: config.depth,
            progress_interval: config.progress_interval,
        }
    }

    /// Get the best move for the given position.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, side: Side) -> Move {
        self.get_move_with_stats(board, side).best_move
    }

    /// Get the best move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, side: Side) -> MoveResult {
        let start = Instant::now();
        debug!(side = side.name(), depth = self.depth, "search started");

        let result = if self.progress_interval > 0 {
            Searcher::with_observer(ProgressLogger::new(self.progress_interval))
                .search(board, side, self.depth)
        } else {
            Searcher::new().search(board, side, self.depth)
        };

        let time_ms = start.elapsed().as_millis() as u64;
        info!(
            side = side.name(),
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.stats.nodes,
            pruned = result.stats.pruned,
            time_ms,
            "search finished"
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.stats.nodes,
            stats: result.stats,
        }
    }

    /// Set the search depth in plies.
    pub fn set_depth(&mut self, depth: i32) {
        self.depth = depth;
    }

    /// Get the current search depth.
    #[must_use]
    pub fn depth(&self) -> i32 {
        self.depth
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
