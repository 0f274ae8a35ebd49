//! Single-word placement primitives.
//!
//! Words may cross each other only where the letters agree.

use crate::error::Result;
use crate::grid::{Direction, Grid, Position};

/// Check if `word` fits at `start` running in `direction`
///
/// Every cell must be in bounds and either empty or already holding the
/// same letter. Empty words never fit.
pub fn can_place(grid: &Grid, word: &str, start: Position, direction: Direction) -> bool {
    if word.is_empty() {
        return false;
    }

    for (i, letter) in word.chars().enumerate() {
        let pos = start.offset(direction, i);
        if !grid.is_in_bounds(pos.row, pos.col) {
            return false;
        }
        match grid.letter(pos.row, pos.col) {
            Some(existing) if existing != letter => return false,
            _ => {}
        }
    }

    true
}

/// Write `word` into the grid without checking for conflicts
///
/// Callers validate with [`can_place`] first. Writes past the grid edge
/// fail with `OutOfBounds`.
pub fn place(grid: &mut Grid, word: &str, start: Position, direction: Direction) -> Result<()> {
    for (i, letter) in word.chars().enumerate() {
        let pos = start.offset(direction, i);
        grid.set_letter(pos.row, pos.col, letter)?;
        grid.mark_part_of_word(pos.row, pos.col)?;
    }
    Ok(())
}

/// Place `word` if it fits, returning whether it was placed
pub fn try_place(grid: &mut Grid, word: &str, start: Position, direction: Direction) -> bool {
    if !can_place(grid, word, start, direction) {
        return false;
    }
    // can_place guarantees every cell is in bounds
    place(grid, word, start, direction).is_ok()
}

/// Inclusive upper bound of legal start coordinates as (max_row, max_col)
///
/// Negative when a word of `word_len` cannot fit in `direction` at all.
pub fn max_start(grid: &Grid, word_len: usize, direction: Direction) -> (isize, isize) {
    let (d_row, d_col) = direction.deltas();
    let span = |extent: usize, delta: usize| -> isize {
        let needed = if delta == 0 { 1 } else { word_len * delta };
        extent as isize - needed as isize
    };
    (span(grid.rows(), d_row), span(grid.cols(), d_col))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_8x8() -> Grid {
        Grid::new(8, 8).unwrap()
    }

    #[test]
    fn test_place_horizontal() {
        let mut grid = empty_8x8();
        assert!(try_place(&mut grid, "GATO", Position::new(0, 0), Direction::Horizontal));
        assert_eq!(grid.letter(0, 0), Some('G'));
        assert_eq!(grid.letter(0, 1), Some('A'));
        assert_eq!(grid.letter(0, 2), Some('T'));
        assert_eq!(grid.letter(0, 3), Some('O'));
        assert_eq!(grid.letter(0, 4), None);
    }

    #[test]
    fn test_place_vertical() {
        let mut grid = empty_8x8();
        assert!(try_place(&mut grid, "SOL", Position::new(2, 5), Direction::Vertical));
        assert_eq!(grid.read(&[
            Position::new(2, 5),
            Position::new(3, 5),
            Position::new(4, 5)
        ]).as_deref(), Some("SOL"));
    }

    #[test]
    fn test_place_diagonal() {
        let mut grid = empty_8x8();
        assert!(try_place(&mut grid, "MAR", Position::new(5, 5), Direction::DiagonalDown));
        assert_eq!(grid.letter(5, 5), Some('M'));
        assert_eq!(grid.letter(6, 6), Some('A'));
        assert_eq!(grid.letter(7, 7), Some('R'));
    }

    #[test]
    fn test_place_out_of_bounds_fails() {
        let mut grid = empty_8x8();
        assert!(!try_place(&mut grid, "ELEFANTE", Position::new(0, 1), Direction::Horizontal));
        assert!(!try_place(&mut grid, "GATO", Position::new(6, 0), Direction::Vertical));
        assert_eq!(grid.count_empty(), 64);
    }

    #[test]
    fn test_overlap_same_letter() {
        let mut grid = empty_8x8();
        assert!(try_place(&mut grid, "GATO", Position::new(0, 0), Direction::Horizontal));
        assert!(can_place(&grid, "GALO", Position::new(0, 0), Direction::Vertical));
        assert!(try_place(&mut grid, "GALO", Position::new(0, 0), Direction::Vertical));
        assert_eq!(grid.letter(3, 0), Some('O'));
    }

    #[test]
    fn test_overlap_different_letter() {
        let mut grid = empty_8x8();
        assert!(try_place(&mut grid, "GATO", Position::new(0, 0), Direction::Horizontal));
        assert!(!can_place(&grid, "PATO", Position::new(0, 0), Direction::Horizontal));
        assert!(!try_place(&mut grid, "PATO", Position::new(0, 0), Direction::Horizontal));
        assert_eq!(grid.letter(0, 0), Some('G'));
    }

    #[test]
    fn test_empty_word_never_fits() {
        let grid = empty_8x8();
        assert!(!can_place(&grid, "", Position::new(0, 0), Direction::Horizontal));
    }

    #[test]
    fn test_place_marks_part_of_word() {
        let mut grid = empty_8x8();
        try_place(&mut grid, "SAPO", Position::new(1, 1), Direction::Horizontal);
        for col in 1..5 {
            assert!(grid.cell(Position::new(1, col)).unwrap().is_part_of_word());
        }
        assert!(!grid.cell(Position::new(1, 5)).unwrap().is_part_of_word());
    }

    #[test]
    fn test_place_past_edge_errors() {
        let mut grid = empty_8x8();
        assert!(place(&mut grid, "ABC", Position::new(0, 6), Direction::Horizontal).is_err());
    }

    #[test]
    fn test_max_start() {
        let grid = Grid::new(8, 10).unwrap();
        assert_eq!(max_start(&grid, 4, Direction::Horizontal), (7, 6));
        assert_eq!(max_start(&grid, 4, Direction::Vertical), (4, 9));
        assert_eq!(max_start(&grid, 4, Direction::DiagonalDown), (4, 6));
        assert_eq!(max_start(&grid, 8, Direction::Vertical), (0, 9));
    }

    #[test]
    fn test_max_start_too_long() {
        let grid = empty_8x8();
        let (max_row, max_col) = max_start(&grid, 9, Direction::Horizontal);
        assert_eq!(max_row, 7);
        assert!(max_col < 0);
        let (max_row, _) = max_start(&grid, 9, Direction::Vertical);
        assert!(max_row < 0);
    }
}
