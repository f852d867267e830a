//! Depth-limited minimax over move pairs
//!
//! One frame expands a move for the side to move and every reply of the
//! opponent, then recurses on each reply board for the same side with two
//! plies fewer. Black maximises the score, White minimises it; both run
//! through the same code with the comparison flipped by [`Side`].
//!
//! The reply scan for a move stops as soon as the running reply value is
//! strictly worse for the mover than the best move already found, since
//! that move can no longer be chosen.

use crate::board::{Board, Move, Side};
use crate::eval::evaluate;
use crate::rules::legal_moves;

use super::observer::{NoopObserver, SearchObserver};

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frames entered, leaves included
    pub nodes: u64,
    /// Reply scans cut short
    pub pruned: u64,
    /// Frames that found neither side able to move
    pub double_passes: u64,
}

/// Best move for the searching side and its backed-up score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Black's disc share at the end of the chosen line
    pub score: f32,
    pub stats: SearchStats,
}

/// `a` is strictly better than `b` from `side`'s point of view.
#[inline]
fn prefers(side: Side, a: f32, b: f32) -> bool {
    match side {
        Side::Black => a > b,
        Side::White => a < b,
    }
}

/// Bound that any real score beats for `side`. Scores live in `[0, 1]`.
#[inline]
fn worst_score(side: Side) -> f32 {
    match side {
        Side::Black => -10.0,
        Side::White => 10.0,
    }
}

/// Best candidate seen so far in one frame
struct BestMove {
    side: Side,
    score: f32,
    mv: Option<Move>,
}

impl BestMove {
    fn new(side: Side) -> Self {
        Self {
            side,
            score: worst_score(side),
            mv: None,
        }
    }

    /// Record `mv` if `score` strictly improves on the best so far.
    fn offer(&mut self, mv: Move, score: f32) {
        if prefers(self.side, score, self.score) {
            self.score = score;
            self.mv = Some(mv);
        }
    }

    /// With nothing recorded (no score ever compared, as with NaN) the first
    /// candidate is returned with the starting bound.
    fn finish(self, first: Move) -> (Move, f32) {
        (self.mv.unwrap_or(first), self.score)
    }
}

/// Minimax searcher owning its observer.
///
/// A searcher holds no board state between calls; reuse it to keep the
/// observer (for example a progress logger) across searches.
#[derive(Debug, Default)]
pub struct Searcher<O: SearchObserver = NoopObserver> {
    observer: O,
    stats: SearchStats,
}

impl Searcher<NoopObserver> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: SearchObserver> Searcher<O> {
    pub fn with_observer(observer: O) -> Self {
        Self {
            observer,
            stats: SearchStats::default(),
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Find the best move for `side` looking `depth` plies ahead.
    ///
    /// `depth <= 0` evaluates the board directly and reports a pass. A side
    /// with no placement gets [`Move::Pass`] as its only candidate. When
    /// candidates tie, the earliest in row-major order wins.
    pub fn search(&mut self, board: &Board, side: Side, depth: i32) -> SearchResult {
        self.stats = SearchStats::default();
        let (best_move, score) = self.frame(board, side, depth);
        SearchResult {
            best_move,
            score,
            stats: self.stats,
        }
    }

    fn frame(&mut self, board: &Board, side: Side, depth: i32) -> (Move, f32) {
        self.stats.nodes += 1;
        self.observer.on_node(depth);

        if depth <= 0 {
            return (Move::Pass, evaluate(board));
        }

        let responder = side.opponent();
        let candidates = legal_moves(board, side);

        let mut best = BestMove::new(side);

        for candidate in &candidates {
            let replies = legal_moves(&candidate.board, responder);

            if candidate.is_pass() && replies[0].is_pass() {
                self.stats.double_passes += 1;
                self.observer.on_double_pass(depth);
                return (Move::Pass, evaluate(board));
            }

            // The responder drives this towards the mover's worst case
            let mut reply_value = worst_score(responder);
            for reply in &replies {
                let (_, score) = self.frame(&reply.board, side, depth - 2);
                if prefers(side, reply_value, score) {
                    reply_value = score;
                }
                if prefers(side, best.score, reply_value) {
                    self.stats.pruned += 1;
                    self.observer.on_prune(depth);
                    break;
                }
            }

            best.offer(candidate.mv, reply_value);
        }

        best.finish(candidates[0].mv)
    }
}

/// Search with a fresh searcher and no observer.
///
/// ```
/// use othello::board::{Board, Move, Pos, Side};
/// use othello::search::search;
///
/// let board = Board::standard(8).unwrap();
/// let result = search(&board, Side::Black, 3);
/// assert_eq!(result.best_move, Move::Place(Pos::new(2, 3)));
/// assert_eq!(result.score, 0.375);
/// ```
pub fn search(board: &Board, side: Side, depth: i32) -> SearchResult {
    Searcher::new().search(board, side, depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Disc, Pos};

    /// Same recursion without the reply cut-off
    fn full_minimax(board: &Board, side: Side, depth: i32) -> (Move, f32) {
        if depth <= 0 {
            return (Move::Pass, evaluate(board));
        }
        let candidates = legal_moves(board, side);
        let mut best = BestMove::new(side);
        for candidate in &candidates {
            let replies = legal_moves(&candidate.board, side.opponent());
            if candidate.is_pass() && replies[0].is_pass() {
                return (Move::Pass, evaluate(board));
            }
            let mut reply_value = worst_score(side.opponent());
            for reply in &replies {
                let (_, score) = full_minimax(&reply.board, side, depth - 2);
                if prefers(side, reply_value, score) {
                    reply_value = score;
                }
            }
            best.offer(candidate.mv, reply_value);
        }
        best.finish(candidates[0].mv)
    }

    #[derive(Default)]
    struct Counting {
        nodes: u64,
        prunes: u64,
        double_passes: u64,
        deepest_leaf: Option<i32>,
    }

    impl SearchObserver for Counting {
        fn on_node(&mut self, depth: i32) {
            self.nodes += 1;
            if depth <= 0 {
                self.deepest_leaf = Some(self.deepest_leaf.map_or(depth, |d| d.min(depth)));
            }
        }
        fn on_prune(&mut self, _depth: i32) {
            self.prunes += 1;
        }
        fn on_double_pass(&mut self, _depth: i32) {
            self.double_passes += 1;
        }
    }

    fn place(m: (u8, u8)) -> Move {
        Move::Place(Pos::new(m.0, m.1))
    }

    /// Black to move with one tempting and one safe option.
    ///
    /// (0,5) flips a long run but lets White answer at (0,7); (7,0) flips a
    /// single disc and leaves White without a move.
    fn trap_board() -> Board {
        let mut board = Board::new(8).unwrap();
        let row0 = [
            Disc::White,
            Disc::Black,
            Disc::Black,
            Disc::Black,
            Disc::White,
            Disc::Empty,
            Disc::Black,
            Disc::Empty,
        ];
        for (col, disc) in row0.into_iter().enumerate() {
            board.set(Pos::new(0, col as u8), disc);
        }
        board.set(Pos::new(7, 1), Disc::White);
        board.set(Pos::new(7, 2), Disc::Black);
        board
    }

    #[test]
    fn test_zero_depth_evaluates_directly() {
        let board = Board::standard(8).unwrap();
        for depth in [0, -1, -5] {
            let result = search(&board, Side::Black, depth);
            assert_eq!(result.best_move, Move::Pass);
            assert_eq!(result.score, 0.5);
            assert_eq!(result.stats.nodes, 1);
        }
    }

    #[test]
    fn test_opening_depth_one() {
        let board = Board::standard(8).unwrap();

        let black = search(&board, Side::Black, 1);
        assert_eq!(black.best_move, place((2, 3)));
        assert_eq!(black.score, 0.5);
        assert_eq!(black.stats.nodes, 13);

        let white = search(&board, Side::White, 1);
        assert_eq!(white.best_move, place((2, 4)));
        assert_eq!(white.score, 0.5);
        assert_eq!(white.stats.nodes, 13);
    }

    #[test]
    fn test_even_depth_matches_odd_below() {
        let board = Board::standard(8).unwrap();
        for side in [Side::Black, Side::White] {
            assert_eq!(search(&board, side, 2), search(&board, side, 1));
            assert_eq!(search(&board, side, 4), search(&board, side, 3));
        }
    }

    #[test]
    fn test_opening_depth_three() {
        let board = Board::standard(8).unwrap();

        let black = search(&board, Side::Black, 3);
        assert_eq!(black.best_move, place((2, 3)));
        assert_eq!(black.score, 0.375);
        assert_eq!(black.stats.nodes, 244);
        assert_eq!(black.stats.pruned, 8);

        let white = search(&board, Side::White, 3);
        assert_eq!(white.best_move, place((2, 4)));
        assert_eq!(white.score, 0.625);
        assert_eq!(white.stats.nodes, 244);
        assert_eq!(white.stats.pruned, 8);
    }

    #[test]
    fn test_opening_depth_five() {
        let board = Board::standard(8).unwrap();

        let black = search(&board, Side::Black, 5);
        assert_eq!(black.best_move, place((2, 3)));
        assert_eq!(black.score, 0.4);
        assert_eq!(black.stats.nodes, 5672);
        assert_eq!(black.stats.pruned, 496);

        let white = search(&board, Side::White, 5);
        assert_eq!(white.best_move, place((2, 4)));
        assert_eq!(white.score, 0.6);
        assert_eq!(white.stats.nodes, 5598);
        assert_eq!(white.stats.pruned, 476);
    }

    #[test]
    fn test_avoids_move_that_hands_over_the_edge() {
        let board = trap_board();
        let candidates: Vec<Move> = legal_moves(&board, Side::Black).iter().map(|o| o.mv).collect();
        assert_eq!(candidates, vec![place((0, 5)), place((7, 0))]);

        let shallow = search(&board, Side::Black, 1);
        assert_eq!(shallow.best_move, place((7, 0)));
        assert_eq!(shallow.score, 7.0 / 9.0);
        assert_eq!(shallow.stats.nodes, 4);
        assert_eq!(search(&board, Side::Black, 2), shallow);

        let deeper = search(&board, Side::Black, 3);
        assert_eq!(deeper.best_move, place((7, 0)));
        assert_eq!(deeper.score, 3.0 / 11.0);
        assert_eq!(deeper.stats.nodes, 7);
    }

    #[test]
    fn test_forced_pass_is_reported() {
        // W B on a 4x4 board: Black cannot move, White can take (0,2)
        let mut board = Board::new(4).unwrap();
        board.set(Pos::new(0, 0), Disc::White);
        board.set(Pos::new(0, 1), Disc::Black);

        for depth in [1, 2] {
            let result = search(&board, Side::Black, depth);
            assert_eq!(result.best_move, Move::Pass);
            assert_eq!(result.score, 0.0);
            assert_eq!(result.stats.double_passes, 0);
        }

        let white = search(&board, Side::White, 2);
        assert_eq!(white.best_move, place((0, 2)));
        assert_eq!(white.score, 0.0);
    }

    #[test]
    fn test_double_pass_short_circuits() {
        let mut board = Board::new(8).unwrap();
        board.set(Pos::new(0, 0), Disc::Black);
        board.set(Pos::new(7, 7), Disc::White);

        for side in [Side::Black, Side::White] {
            let result = search(&board, side, 4);
            assert_eq!(result.best_move, Move::Pass);
            assert_eq!(result.score, 0.5);
            assert_eq!(
                result.stats,
                SearchStats {
                    nodes: 1,
                    pruned: 0,
                    double_passes: 1,
                }
            );
        }
    }

    #[test]
    fn test_cut_off_matches_full_minimax() {
        let mut positions = vec![Board::standard(8).unwrap(), Board::standard(6).unwrap(), trap_board()];

        // A few midgame positions from always taking the last legal move
        let mut board = Board::standard(8).unwrap();
        let mut side = Side::Black;
        for _ in 0..10 {
            board = legal_moves(&board, side).pop().unwrap().board;
            side = side.opponent();
            positions.push(board.clone());
        }

        for board in &positions {
            for side in [Side::Black, Side::White] {
                for depth in 1..=4 {
                    let pruned = search(board, side, depth);
                    let (full_move, full_score) = full_minimax(board, side, depth);
                    assert_eq!(pruned.best_move, full_move, "depth {depth} {side:?}\n{board}");
                    assert_eq!(pruned.score, full_score, "depth {depth} {side:?}\n{board}");
                }
            }
        }
    }

    #[test]
    fn test_best_move_is_legal() {
        let board = Board::standard(6).unwrap();
        for side in [Side::Black, Side::White] {
            let result = search(&board, side, 3);
            let legal: Vec<Move> = legal_moves(&board, side).iter().map(|o| o.mv).collect();
            assert!(legal.contains(&result.best_move));
            assert!((0.0..=1.0).contains(&result.score));
        }
    }

    #[test]
    fn test_observer_sees_every_event() {
        let board = Board::standard(8).unwrap();
        let mut searcher = Searcher::with_observer(Counting::default());
        let result = searcher.search(&board, Side::Black, 3);

        let observer = searcher.observer();
        assert_eq!(observer.nodes, result.stats.nodes);
        assert_eq!(observer.prunes, result.stats.pruned);
        assert_eq!(observer.double_passes, result.stats.double_passes);
        // depth 3 recurses to 1, then to -1
        assert_eq!(observer.deepest_leaf, Some(-1));
    }

    #[test]
    fn test_searcher_reuse_resets_stats() {
        let board = Board::standard(8).unwrap();
        let mut counting = Counting::default();
        {
            let mut searcher = Searcher::with_observer(&mut counting);
            let first = searcher.search(&board, Side::White, 1);
            let second = searcher.search(&board, Side::White, 1);
            assert_eq!(first, second);
            assert_eq!(second.stats.nodes, 13);
        }
        assert_eq!(counting.nodes, 26);
    }

    #[test]
    fn test_unscored_frame_falls_back_to_first_candidate() {
        let first = place((0, 0));

        let mut black = BestMove::new(Side::Black);
        black.offer(place((1, 1)), f32::NAN);
        assert_eq!(black.finish(first), (first, -10.0));

        let mut white = BestMove::new(Side::White);
        white.offer(place((1, 1)), f32::NAN);
        assert_eq!(white.finish(first), (first, 10.0));
    }

    #[test]
    fn test_best_move_keeps_earliest_tie() {
        let mut best = BestMove::new(Side::White);
        best.offer(place((2, 4)), 0.5);
        best.offer(place((3, 5)), 0.5);
        best.offer(place((4, 2)), 0.75);
        assert_eq!(best.finish(Move::Pass), (place((2, 4)), 0.5));
    }

    #[test]
    fn test_search_leaves_input_untouched() {
        let board = trap_board();
        let before = board.clone();
        let _ = search(&board, Side::Black, 3);
        let _ = search(&board, Side::White, 3);
        assert_eq!(board, before);
    }
}
