//! Win and draw detection over a board snapshot.
//!
//! Stateless: the session calls [`evaluate`] after every applied move. Draw
//! is declared only on a full board with no complete line; the session
//! cross-checks that against its turn counter.

use serde::{Deserialize, Serialize};

use crate::engine::board::{Board, Side};

/// Terminal or non-terminal result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    InProgress,
    Won(Side),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// The side holding a complete row, column, or diagonal, if any.
///
/// Scans N rows, N columns, and the 2 diagonals once each, short-circuiting
/// on the first complete line. In a well-formed single-move-per-turn game at
/// most one line can be complete, so scan order does not affect the result.
pub fn winner(board: &Board) -> Option<Side> {
    let n = board.size();

    for row in 0..n {
        if let Some(side) = line_owner(board, (0..n).map(|col| (row, col))) {
            return Some(side);
        }
    }

    for col in 0..n {
        if let Some(side) = line_owner(board, (0..n).map(|row| (row, col))) {
            return Some(side);
        }
    }

    if let Some(side) = line_owner(board, (0..n).map(|i| (i, i))) {
        return Some(side);
    }
    line_owner(board, (0..n).map(|i| (i, n - 1 - i)))
}

/// The side occupying every cell of the line, if the line is uniform and
/// fully marked.
fn line_owner(board: &Board, mut cells: impl Iterator<Item = (usize, usize)>) -> Option<Side> {
    let (row, col) = cells.next()?;
    let side = board.cell(row, col)?;
    cells
        .all(|(r, c)| board.cell(r, c) == Some(side))
        .then_some(side)
}

/// Evaluate a board: a complete line wins; a full board with no line draws.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(side) = winner(board) {
        Outcome::Won(side)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
