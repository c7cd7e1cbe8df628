//! Engine error kinds.
//!
//! Every error is synchronous and recoverable by the caller: the usual
//! response to a bad move is to ignore the click and keep the session alive.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Rejected configuration value, e.g. a board size below the minimum.
    InvalidArgument(String),
    /// Coordinates outside the grid.
    OutOfBounds { row: usize, col: usize, size: usize },
    /// Move into an occupied cell, or a move after the game ended.
    IllegalMove(String),
    /// Undo with nothing to undo.
    EmptyHistory,
    /// An opponent was asked to move on a full board.
    NoLegalMoves,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            EngineError::OutOfBounds { row, col, size } => {
                write!(f, "cell ({row}, {col}) is outside the {size}x{size} grid")
            }
            EngineError::IllegalMove(msg) => write!(f, "illegal move: {msg}"),
            EngineError::EmptyHistory => write!(f, "no moves to undo"),
            EngineError::NoLegalMoves => write!(f, "no legal moves: board is full"),
        }
    }
}

impl std::error::Error for EngineError {}
