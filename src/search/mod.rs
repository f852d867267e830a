//! Search module for the Othello AI
//!
//! Contains:
//! - Depth-limited two-ply minimax with a cut-off on the reply scan
//! - Search observers for diagnostics (progress logging, counters)

pub mod minimax;
pub mod observer;

pub use minimax::{search, SearchResult, SearchStats, Searcher};
pub use observer::{NoopObserver, ProgressLogger, SearchObserver};
