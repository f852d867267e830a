//! Game state management for the Othello GUI

use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::board::{Board, Move, Pos, Side};
use crate::config::EngineConfig;
use crate::eval::{counts, evaluate, utility, DiscCount};
use crate::rules::{apply, has_legal_move, is_terminal, legal_positions};
use crate::{AIEngine, MoveResult};

/// Deepest search a hint runs on the UI thread
const HINT_MAX_DEPTH: i32 = 3;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_side: Side },
    /// Player vs Player (hotseat)
    PvP { show_suggestions: bool },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_side: Side::Black }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Final result once neither side can move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// `None` on a draw
    pub winner: Option<Side>,
    pub discs: DiscCount,
}

impl GameResult {
    fn from_board(board: &Board) -> Self {
        let winner = match utility(board) {
            1 => Some(Side::Black),
            -1 => Some(Side::White),
            _ => None,
        };
        Self {
            winner,
            discs: counts(board),
        }
    }
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Side,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    /// Every decision in order, automatic passes included
    pub move_history: Vec<(Move, Side)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Move>,
    pub message: Option<String>,

    config: EngineConfig,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self::with_config(mode, EngineConfig::default())
    }

    pub fn with_config(mode: GameMode, config: EngineConfig) -> Self {
        Self {
            board: Self::opening(&config),
            mode,
            current_turn: Side::Black,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            config,
        }
    }

    fn opening(config: &EngineConfig) -> Board {
        Board::standard(config.board_size).unwrap_or_else(|err| {
            warn!(%err, "unusable board size, falling back to the standard board");
            Board::default()
        })
    }

    pub fn reset(&mut self) {
        self.board = Self::opening(&self.config);
        self.current_turn = Side::Black;
        self.game_over = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
        info!(size = self.board.size(), mode = ?self.mode, "new game");
    }

    pub fn ai_depth(&self) -> i32 {
        self.config.depth
    }

    pub fn set_ai_depth(&mut self, depth: i32) {
        self.config.depth = depth.max(0);
    }

    /// Disc counts for the side panel
    pub fn disc_count(&self) -> DiscCount {
        counts(&self.board)
    }

    /// Black's share of the discs on the board
    pub fn evaluation(&self) -> f32 {
        evaluate(&self.board)
    }

    /// Cells the side to move may play
    pub fn legal_positions(&self) -> Vec<Pos> {
        if self.game_over.is_some() {
            return Vec::new();
        }
        legal_positions(&self.board, self.current_turn)
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_side } => self.current_turn == human_side,
            GameMode::PvP { .. } => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_side } => self.current_turn != human_side,
            GameMode::PvP { .. } => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a disc at the given position
    pub fn try_place_disc(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        match apply(&self.board, pos, self.current_turn) {
            Some(next) => {
                self.commit(Move::Place(pos), next);
                Ok(())
            }
            None => Err("Illegal move (must flip at least one disc)".to_string()),
        }
    }

    /// Execute a decision (for both human and AI)
    fn execute_move(&mut self, mv: Move) {
        match mv {
            Move::Place(pos) => match apply(&self.board, pos, self.current_turn) {
                Some(next) => self.commit(mv, next),
                None => self.message = Some(format!("Rejected illegal move at {pos:?}")),
            },
            Move::Pass => {
                let board = self.board.clone();
                self.commit(Move::Pass, board);
            }
        }
    }

    fn commit(&mut self, mv: Move, next: Board) {
        let side = self.current_turn;
        debug!(side = side.name(), ?mv, "move played");

        self.board = next;
        self.move_history.push((mv, side));
        if let Move::Place(pos) = mv {
            self.last_move = Some(pos);
        }
        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();

        self.advance_turn();
    }

    /// Hand the turn over, passing automatically for a side with no moves.
    fn advance_turn(&mut self) {
        if is_terminal(&self.board) {
            let result = GameResult::from_board(&self.board);
            info!(winner = ?result.winner, black = result.discs.black, white = result.discs.white, "game over");
            self.game_over = Some(result);
            return;
        }

        let next = self.current_turn.opponent();
        if has_legal_move(&self.board, next) {
            self.current_turn = next;
        } else {
            // The mover keeps the turn
            self.move_history.push((Move::Pass, next));
            self.message = Some(format!("{} has no legal move and passes", next.name()));
        }
        self.move_timer.start();
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board.clone();
        let side = self.current_turn;
        let config = self.config.clone();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(&config);
            let result = engine.get_move_with_stats(&board, side);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result);
            self.move_timer.set_ai_time(elapsed);
            self.execute_move(move_result.best_move);
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Ask the engine for a move for the side to play
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        // Quick search at a capped depth
        let mut engine = AIEngine::with_config(&self.config);
        engine.set_depth(self.config.depth.min(HINT_MAX_DEPTH));
        let result = engine.get_move_with_stats(&self.board, self.current_turn);

        self.suggested_move = Some(result.best_move);
        self.last_ai_result = Some(result);
    }

    /// Undo back to the last position where a human placed a disc
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        while let Some((mv, side)) = self.move_history.pop() {
            let by_human = match self.mode {
                GameMode::PvE { human_side } => side == human_side,
                GameMode::PvP { .. } => true,
            };
            if !mv.is_pass() && by_human {
                break;
            }
        }

        // Simple undo: reset and replay
        let moves = std::mem::take(&mut self.move_history);
        self.board = Self::opening(&self.config);
        self.current_turn = Side::Black;
        self.game_over = None;
        self.last_move = None;
        self.suggested_move = None;
        self.message = None;

        for (mv, side) in moves {
            if let Move::Place(pos) = mv {
                if let Some(next) = apply(&self.board, pos, side) {
                    self.board = next;
                    self.last_move = Some(pos);
                }
            }
            self.move_history.push((mv, side));
            self.current_turn = side.opponent();
        }

        self.move_timer.start();
    }
}
