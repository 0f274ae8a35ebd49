//! Letter grid model: positions, directions, cells, and the grid itself.

use crate::error::{Result, WordSearchError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A (row, col) coordinate in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `steps` cells along `direction` from this position
    ///
    /// Saturates at `usize::MAX`, which is always outside any grid.
    pub fn offset(self, direction: Direction, steps: usize) -> Self {
        let (d_row, d_col) = direction.deltas();
        Self {
            row: self.row.saturating_add(steps.saturating_mul(d_row)),
            col: self.col.saturating_add(steps.saturating_mul(d_col)),
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.col)
    }
}

/// Directions a word can run in the grid
///
/// Reversed readings are not separate directions; the finder accepts
/// selections in either order instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
}

impl Direction {
    /// All directions, in draw order
    pub const ALL: [Direction; 3] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
    ];

    /// Row and column step for one letter
    pub fn deltas(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "Horizontal"),
            Direction::Vertical => write!(f, "Vertical"),
            Direction::DiagonalDown => write!(f, "DiagonalDown"),
        }
    }
}

/// A single cell of the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    letter: Option<char>,
    part_of_word: bool,
}

impl Cell {
    fn new(position: Position) -> Self {
        Self {
            position,
            letter: None,
            part_of_word: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// The letter held by this cell, `None` while empty
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    pub fn is_empty(&self) -> bool {
        self.letter.is_none()
    }

    /// Whether a placed word runs through this cell (as opposed to filler)
    pub fn is_part_of_word(&self) -> bool {
        self.part_of_word
    }
}

/// A rows x cols matrix of letter cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. Both dimensions must be positive.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(WordSearchError::invalid(format!(
                "Grid dimensions must be positive. Got {}x{}.",
                rows, cols
            )));
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(Position::new(row, col)));
            }
        }

        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get a cell, `None` outside the grid
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if self.is_in_bounds(pos.row, pos.col) {
            Some(&self.cells[self.index(pos.row, pos.col)])
        } else {
            None
        }
    }

    /// Letter at a position. Empty cells and positions outside the grid
    /// both read as `None`.
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        if self.is_in_bounds(row, col) {
            self.cells[self.index(row, col)].letter
        } else {
            None
        }
    }

    /// Write a letter. Fails for positions outside the grid.
    pub fn set_letter(&mut self, row: usize, col: usize, letter: char) -> Result<()> {
        let cell = self.cell_mut(row, col)?;
        cell.letter = Some(letter);
        Ok(())
    }

    pub(crate) fn mark_part_of_word(&mut self, row: usize, col: usize) -> Result<()> {
        let cell = self.cell_mut(row, col)?;
        cell.part_of_word = true;
        Ok(())
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell> {
        if !self.is_in_bounds(row, col) {
            return Err(WordSearchError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = self.index(row, col);
        Ok(&mut self.cells[idx])
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Check if every cell holds a letter
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Count the empty cells
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Read the letters along a run of positions, `None` if any is empty
    /// or outside the grid
    pub fn read(&self, positions: &[Position]) -> Option<String> {
        positions
            .iter()
            .map(|p| self.letter(p.row, p.col))
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let letter = self.letter(row, col).unwrap_or('.');
                write!(f, "{}", letter)?;
                if col + 1 < self.cols {
                    write!(f, " ")?;
                }
            }
            if row + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
