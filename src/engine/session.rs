//! Turn-sequencing state machine.
//!
//! A `GameSession` owns the board, the undo stack, and the score tallies for
//! one screen's lifetime. The presentation layer forwards cell taps to
//! [`GameSession::apply_move`], button presses to [`GameSession::undo_move`]
//! and [`GameSession::restart`], and reads [`GameSession::snapshot`] to
//! redraw.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::board::{Board, Side};
use crate::engine::error::EngineError;
use crate::engine::history::{Move, MoveHistory};
use crate::engine::rules::{self, Outcome};
use crate::engine::scoreboard::{ScoreCounts, Scoreboard};

/// Who sits across the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    HumanVsHuman,
    HumanVsAi,
}

/// Construction-time options for a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Grid dimension N, at least 3.
    pub size: usize,
    pub starting_side: Side,
    pub mode: Mode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: 3,
            starting_side: Side::Circle,
            mode: Mode::HumanVsHuman,
        }
    }
}

/// Result of a successful move: the evaluated outcome and the side to move
/// next. When the outcome is terminal `to_move` is the mover itself; no
/// further moves are accepted until undo or restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub outcome: Outcome,
    pub to_move: Side,
}

/// Serializable view of the session for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub board: Board,
    pub to_move: Side,
    pub turn_count: usize,
    pub outcome: Outcome,
    pub mode: Mode,
    pub scores: ScoreCounts,
}

#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    board: Board,
    history: MoveHistory,
    turn_count: usize,
    current_side: Side,
    outcome: Outcome,
    scoreboard: Scoreboard,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Result<Self, EngineError> {
        let board = Board::new(config.size)?;
        Ok(Self {
            config,
            board,
            history: MoveHistory::new(),
            turn_count: 0,
            current_side: config.starting_side,
            outcome: Outcome::InProgress,
            scoreboard: Scoreboard::new(),
        })
    }

    /// Apply the current side's move at (row, col).
    ///
    /// Rejects moves after a terminal state with `IllegalMove`; bad
    /// coordinates and occupied cells fail with the board's own error kinds.
    /// A failed move leaves the session untouched.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, EngineError> {
        if self.outcome.is_terminal() {
            return Err(EngineError::IllegalMove(
                "game has ended; undo or restart first".into(),
            ));
        }

        let side = self.current_side;
        self.board.set(row, col, side)?;
        self.history.push(Move {
            row,
            col,
            side,
            turn: self.turn_count,
        });
        self.turn_count += 1;

        self.outcome = rules::evaluate(&self.board);
        match self.outcome {
            Outcome::Won(winner) => {
                self.scoreboard.record_win(winner);
                debug!(%winner, turn = self.turn_count, "game won");
            }
            Outcome::Draw => {
                self.scoreboard.record_draw();
                debug!(turn = self.turn_count, "game drawn");
            }
            Outcome::InProgress => {
                self.current_side = side.opponent();
            }
        }

        Ok(MoveOutcome {
            outcome: self.outcome,
            to_move: self.current_side,
        })
    }

    /// Take back the most recent move and give the turn back to the side
    /// that played it.
    ///
    /// Undo is the only way out of a terminal state short of a restart: the
    /// popped cell re-opens and the game resumes as `InProgress`, letting
    /// the undone player replay the turn. Score tallies already recorded are
    /// not retracted.
    pub fn undo_move(&mut self) -> Result<Move, EngineError> {
        let mv = self.history.pop().ok_or(EngineError::EmptyHistory)?;
        self.board.clear(mv.row, mv.col)?;
        self.turn_count -= 1;
        self.current_side = mv.side;
        self.outcome = Outcome::InProgress;
        debug!(row = mv.row, col = mv.col, side = %mv.side, "move undone");
        Ok(mv)
    }

    /// Fresh board and history; turn goes back to the configured starting
    /// side. The scoreboard is untouched.
    pub fn restart(&mut self) {
        self.board.reset();
        self.history.clear();
        self.turn_count = 0;
        self.current_side = self.config.starting_side;
        self.outcome = Outcome::InProgress;
        debug!("session restarted");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    pub fn current_side(&self) -> Side {
        self.current_side
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Zero the score tallies. The menu path calls this when the screen is
    /// discarded; [`GameSession::restart`] never does.
    pub fn reset_scores(&mut self) {
        self.scoreboard.reset();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board.clone(),
            to_move: self.current_side,
            turn_count: self.turn_count,
            outcome: self.outcome,
            mode: self.config.mode,
            scores: self.scoreboard.counts(),
        }
    }
}
