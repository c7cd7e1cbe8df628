//! Board state: an NxN row-major grid of cells.
//!
//! The board is pure data plus accessors. It knows nothing about turn order;
//! the session layers that on top.

use serde::{Deserialize, Serialize};

use crate::engine::error::EngineError;

/// Smallest playable grid.
pub const MIN_BOARD_SIZE: usize = 3;

/// One of the two competing players. The names follow the marks they draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Circle,
    Cross,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Circle => Side::Cross,
            Side::Cross => Side::Circle,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Circle => write!(f, "circle"),
            Side::Cross => write!(f, "cross"),
        }
    }
}

/// NxN grid of cells. `None` is a blank cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Side>>,
}

impl Board {
    /// Create a blank `size`x`size` board. Sizes below [`MIN_BOARD_SIZE`]
    /// are rejected.
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if size < MIN_BOARD_SIZE {
            return Err(EngineError::InvalidArgument(format!(
                "board size must be at least {MIN_BOARD_SIZE}, got {size}"
            )));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, EngineError> {
        if row >= self.size || col >= self.size {
            return Err(EngineError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    /// Cell state at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Side>, EngineError> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Mark a blank cell for `side`.
    pub fn set(&mut self, row: usize, col: usize, side: Side) -> Result<(), EngineError> {
        let idx = self.index(row, col)?;
        if self.cells[idx].is_some() {
            return Err(EngineError::IllegalMove(format!(
                "cell ({row}, {col}) is already occupied"
            )));
        }
        self.cells[idx] = Some(side);
        Ok(())
    }

    /// Reset a cell to blank. Only the undo path does this.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = None;
        Ok(())
    }

    /// Blank every cell, keeping the size.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// All blank cells in row-major order.
    pub fn blank_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// Unchecked cell access for in-crate scans whose coordinates come from
    /// `0..size` loops.
    pub(crate) fn cell(&self, row: usize, col: usize) -> Option<Side> {
        self.cells[row * self.size + col]
    }

    /// Unchecked cell write for in-crate search code. Bypasses the
    /// occupied-cell rule; callers restore the previous value themselves.
    pub(crate) fn put(&mut self, row: usize, col: usize, cell: Option<Side>) {
        let idx = row * self.size + col;
        self.cells[idx] = cell;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_all_blank() {
        for size in 3..=6 {
            let board = Board::new(size).unwrap();
            assert_eq!(board.size(), size);
            assert_eq!(board.blank_cells().len(), size * size);
            assert!(!board.is_full());
        }
    }

    #[test]
    fn test_undersized_board_rejected() {
        for size in 0..3 {
            assert!(matches!(
                Board::new(size),
                Err(EngineError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(3).unwrap();
        board.set(1, 2, Side::Circle).unwrap();
        assert_eq!(board.get(1, 2).unwrap(), Some(Side::Circle));
        assert_eq!(board.get(0, 0).unwrap(), None);
    }

    #[test]
    fn test_set_occupied_rejected() {
        let mut board = Board::new(3).unwrap();
        board.set(0, 0, Side::Circle).unwrap();
        let err = board.set(0, 0, Side::Cross).unwrap_err();
        assert!(matches!(err, EngineError::IllegalMove(_)));
        // Losing side of the race keeps the original mark
        assert_eq!(board.get(0, 0).unwrap(), Some(Side::Circle));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::new(3).unwrap();
        assert!(matches!(
            board.get(3, 0),
            Err(EngineError::OutOfBounds { .. })
        ));
        assert!(matches!(
            board.set(0, 3, Side::Cross),
            Err(EngineError::OutOfBounds { .. })
        ));
        assert!(matches!(
            board.clear(7, 7),
            Err(EngineError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_clear_reopens_cell() {
        let mut board = Board::new(3).unwrap();
        board.set(2, 2, Side::Cross).unwrap();
        board.clear(2, 2).unwrap();
        assert_eq!(board.get(2, 2).unwrap(), None);
        board.set(2, 2, Side::Circle).unwrap();
        assert_eq!(board.get(2, 2).unwrap(), Some(Side::Circle));
    }

    #[test]
    fn test_blank_cells_row_major() {
        let mut board = Board::new(3).unwrap();
        board.set(0, 0, Side::Circle).unwrap();
        board.set(1, 1, Side::Cross).unwrap();
        let blanks = board.blank_cells();
        assert_eq!(blanks.len(), 7);
        assert_eq!(blanks[0], (0, 1));
        assert_eq!(blanks[6], (2, 2));
    }

    #[test]
    fn test_reset_blanks_everything() {
        let mut board = Board::new(4).unwrap();
        board.set(0, 0, Side::Circle).unwrap();
        board.set(3, 3, Side::Cross).unwrap();
        board.reset();
        assert_eq!(board.blank_cells().len(), 16);
        assert_eq!(board.size(), 4);
    }
}
