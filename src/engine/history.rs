//! Undo stack of applied moves.
//!
//! While a session is live the stack length always equals its turn counter.

use serde::{Deserialize, Serialize};

use crate::engine::board::Side;

/// Immutable record of one applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub side: Side,
    /// Turn index at the time the move was applied, starting at 0.
    pub turn: usize,
}

/// Last-in-first-out sequence of applied moves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Remove and return the most recent move, or `None` when empty.
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// Discard all moves. Used on restart.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Applied moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
}
