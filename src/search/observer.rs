//! Search observers
//!
//! The searcher reports what it does to an observer it owns. Nothing is
//! global, so several searches can run side by side (the GUI runs each one
//! on its own thread).

use std::time::Instant;

use tracing::info;

/// Callbacks invoked by [`Searcher`](super::Searcher) while it walks the tree.
///
/// Every method has an empty default body; implement only what you need.
pub trait SearchObserver {
    /// A search frame was entered with `depth` plies remaining.
    fn on_node(&mut self, _depth: i32) {}

    /// A reply scan was abandoned because the reply already refutes the move.
    fn on_prune(&mut self, _depth: i32) {}

    /// Neither side could move; the frame returned its static score early.
    fn on_double_pass(&mut self, _depth: i32) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_node(&mut self, depth: i32) {
        (**self).on_node(depth);
    }

    fn on_prune(&mut self, depth: i32) {
        (**self).on_prune(depth);
    }

    fn on_double_pass(&mut self, depth: i32) {
        (**self).on_double_pass(depth);
    }
}

/// Logs a progress line every `interval` visited nodes, with the time spent
/// since the previous line.
#[derive(Debug, Clone)]
pub struct ProgressLogger {
    interval: u64,
    nodes: u64,
    lap_start: Instant,
}

impl ProgressLogger {
    /// Default reporting cadence
    pub const DEFAULT_INTERVAL: u64 = 1_000_000;

    /// `interval == 0` disables the log lines but still counts nodes.
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            nodes: 0,
            lap_start: Instant::now(),
        }
    }

    /// Nodes seen so far
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn interval(&self) -> u64 {
        self.interval
    }
}

impl Default for ProgressLogger {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

impl SearchObserver for ProgressLogger {
    fn on_node(&mut self, _depth: i32) {
        self.nodes += 1;
        if self.interval > 0 && self.nodes % self.interval == 0 {
            let lap_ms = self.lap_start.elapsed().as_millis() as u64;
            info!(nodes = self.nodes, lap_ms, "search progress");
            self.lap_start = Instant::now();
        }
    }
}
