use crate::grid::{Direction, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A word hidden in the grid
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPlacement {
    /// Grid form (accent-free, uppercase)
    pub normalized_word: String,
    /// Form shown in the word list (uppercase, accents kept)
    pub display_word: String,
    /// Cell of the first letter
    pub start: Position,
    pub direction: Direction,
}

impl WordPlacement {
    pub fn new(
        normalized_word: impl Into<String>,
        display_word: impl Into<String>,
        start: Position,
        direction: Direction,
    ) -> Self {
        Self {
            normalized_word: normalized_word.into(),
            display_word: display_word.into(),
            start,
            direction,
        }
    }

    /// Number of cells the word spans
    pub fn len(&self) -> usize {
        self.normalized_word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.normalized_word.is_empty()
    }

    /// Cells occupied by each letter, first to last
    pub fn cell_positions(&self) -> Vec<Position> {
        (0..self.len())
            .map(|i| self.start.offset(self.direction, i))
            .collect()
    }

    /// Last cell of the word
    pub fn end(&self) -> Position {
        self.start
            .offset(self.direction, self.len().saturating_sub(1))
    }
}

impl fmt::Display for WordPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) at {} {}",
            self.display_word, self.normalized_word, self.start, self.direction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_positions_horizontal() {
        let p = WordPlacement::new("GATO", "GATO", Position::new(2, 1), Direction::Horizontal);
        assert_eq!(
            p.cell_positions(),
            vec![
                Position::new(2, 1),
                Position::new(2, 2),
                Position::new(2, 3),
                Position::new(2, 4),
            ]
        );
    }

    #[test]
    fn test_cell_positions_vertical() {
        let p = WordPlacement::new("SOL", "SOL", Position::new(0, 3), Direction::Vertical);
        assert_eq!(
            p.cell_positions(),
            vec![Position::new(0, 3), Position::new(1, 3), Position::new(2, 3)]
        );
    }

    #[test]
    fn test_cell_positions_diagonal() {
        let p = WordPlacement::new("MAR", "MAR", Position::new(1, 1), Direction::DiagonalDown);
        assert_eq!(
            p.cell_positions(),
            vec![Position::new(1, 1), Position::new(2, 2), Position::new(3, 3)]
        );
        assert_eq!(p.end(), Position::new(3, 3));
    }

    #[test]
    fn test_length_counts_chars() {
        let p = WordPlacement::new("LEAO", "LEÃO", Position::new(0, 0), Direction::Horizontal);
        assert_eq!(p.len(), 4);
        assert_eq!(p.to_string(), "LEÃO (LEAO) at [0,0] Horizontal");
    }

    #[test]
    fn test_cell_positions_near_usize_max() {
        let p = WordPlacement::new(
            "GATO",
            "GATO",
            Position::new(usize::MAX - 1, 0),
            Direction::Vertical,
        );
        let cells = p.cell_positions();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[1], Position::new(usize::MAX, 0));
        assert_eq!(cells[3], Position::new(usize::MAX, 0));
        assert_eq!(p.end().row, usize::MAX);
    }
}
