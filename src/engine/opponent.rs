//! Opponent strategies for the computer side.
//!
//! A strategy picks a blank cell from a board snapshot. The session never
//! calls an opponent on a full board (its draw transition runs first), but a
//! full board still fails loudly with `NoLegalMoves` rather than misbehaving.

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::engine::board::{Board, Side};
use crate::engine::error::EngineError;
use crate::engine::rules::{self, Outcome};

/// Move selection for one side. Implementations read the board snapshot and
/// nothing else, so they can be swapped without touching the session.
pub trait Opponent {
    fn name(&self) -> &str;

    /// Coordinates of a currently-blank cell for `side` to play.
    fn select_move(&self, board: &Board, side: Side) -> Result<(usize, usize), EngineError>;
}

/// Baseline strategy: a uniformly random blank cell.
pub struct RandomOpponent {
    // The core is single-threaded, so interior mutability over a Mutex.
    rng: RefCell<StdRng>,
}

impl RandomOpponent {
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible variant for arena runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn name(&self) -> &str {
        "random"
    }

    fn select_move(&self, board: &Board, _side: Side) -> Result<(usize, usize), EngineError> {
        board
            .blank_cells()
            .choose(&mut *self.rng.borrow_mut())
            .copied()
            .ok_or(EngineError::NoLegalMoves)
    }
}

const WIN_SCORE: i32 = 1_000;

/// Look-ahead strategy: depth-limited negamax over the blank cells.
///
/// The default searches to the end of the game, which is tractable on 3x3;
/// use [`MinimaxOpponent::with_depth`] on larger boards. Positions still
/// unresolved at the depth limit score 0.
pub struct MinimaxOpponent {
    max_depth: usize,
}

impl MinimaxOpponent {
    pub fn new() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }

    pub fn with_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for MinimaxOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for MinimaxOpponent {
    fn name(&self) -> &str {
        "minimax"
    }

    fn select_move(&self, board: &Board, side: Side) -> Result<(usize, usize), EngineError> {
        let blanks = board.blank_cells();
        if blanks.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        let mut scratch = board.clone();
        let mut best: Option<((usize, usize), i32)> = None;
        for (row, col) in blanks {
            scratch.put(row, col, Some(side));
            let score = -negamax(&mut scratch, side.opponent(), self.max_depth, 1);
            scratch.put(row, col, None);

            // Ties break toward the earliest cell in row-major order.
            if best.map_or(true, |(_, s)| score > s) {
                best = Some(((row, col), score));
            }
        }

        // blanks was non-empty, so best is set
        best.map(|(cell, _)| cell).ok_or(EngineError::NoLegalMoves)
    }
}

/// Score of the position from `to_move`'s perspective. `ply` counts moves
/// from the root so that earlier wins (and later losses) score higher.
fn negamax(board: &mut Board, to_move: Side, depth_left: usize, ply: i32) -> i32 {
    match rules::evaluate(board) {
        // The previous mover just ended the game, so this is a loss for
        // the side now to move.
        Outcome::Won(_) => return -(WIN_SCORE - ply),
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }
    if depth_left == 0 {
        return 0;
    }

    let mut best = -WIN_SCORE;
    for (row, col) in board.blank_cells() {
        board.put(row, col, Some(to_move));
        let score = -negamax(board, to_move.opponent(), depth_left - 1, ply + 1);
        board.put(row, col, None);
        if score > best {
            best = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len()).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                match ch {
                    'o' => board.set(r, c, Side::Circle).unwrap(),
                    'x' => board.set(r, c, Side::Cross).unwrap(),
                    _ => {}
                }
            }
        }
        board
    }

    #[test]
    fn test_random_returns_blank_cell() {
        let opponent = RandomOpponent::seeded(7);
        let board = board_from(&["oxo", "x.x", "oxo"]);
        for _ in 0..20 {
            let (row, col) = opponent.select_move(&board, Side::Circle).unwrap();
            assert_eq!((row, col), (1, 1));
        }
    }

    #[test]
    fn test_random_full_board_fails() {
        let opponent = RandomOpponent::seeded(7);
        let board = board_from(&["oxo", "oxx", "xoo"]);
        assert_eq!(
            opponent.select_move(&board, Side::Circle).unwrap_err(),
            EngineError::NoLegalMoves
        );
    }

    #[test]
    fn test_random_seeded_is_deterministic() {
        let board = Board::new(3).unwrap();
        let a = RandomOpponent::seeded(99);
        let b = RandomOpponent::seeded(99);
        for _ in 0..10 {
            assert_eq!(
                a.select_move(&board, Side::Cross).unwrap(),
                b.select_move(&board, Side::Cross).unwrap()
            );
        }
    }

    #[test]
    fn test_minimax_takes_immediate_win() {
        let opponent = MinimaxOpponent::new();
        let board = board_from(&["oo.", "xx.", "..."]);
        assert_eq!(opponent.select_move(&board, Side::Circle).unwrap(), (0, 2));
    }

    #[test]
    fn test_minimax_blocks_opponent_win() {
        let opponent = MinimaxOpponent::new();
        // Circle threatens (2,0); cross has no win of its own.
        let board = board_from(&["o.x", "o..", "..."]);
        assert_eq!(opponent.select_move(&board, Side::Cross).unwrap(), (2, 0));
    }

    #[test]
    fn test_minimax_prefers_win_over_block() {
        let opponent = MinimaxOpponent::new();
        // Both sides threaten a line; cross should complete its own.
        let board = board_from(&["oo.", "xx.", "o.."]);
        assert_eq!(opponent.select_move(&board, Side::Cross).unwrap(), (1, 2));
    }

    #[test]
    fn test_minimax_full_board_fails() {
        let opponent = MinimaxOpponent::new();
        let board = board_from(&["oxo", "oxx", "xoo"]);
        assert_eq!(
            opponent.select_move(&board, Side::Circle).unwrap_err(),
            EngineError::NoLegalMoves
        );
    }

    #[test]
    fn test_depth_limited_minimax_on_larger_board() {
        let opponent = MinimaxOpponent::with_depth(3);
        let board = board_from(&["ooo.", "xxx.", "....", "...."]);
        // Cross completes its own row rather than blocking.
        assert_eq!(opponent.select_move(&board, Side::Cross).unwrap(), (1, 3));
    }
}
