use crate::error::{Result, WordSearchError};
use crate::grid::{Direction, Grid, Position};
use crate::placement::WordPlacement;
use crate::placer;
use crate::rng::SeededRng;
use log::debug;

const FILL_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Builds a filled letter grid with words hidden in it
///
/// All randomness comes from one seeded generator, so identical inputs
/// and seed always give an identical grid and placement list.
pub struct GridGenerator {
    rng: SeededRng,
}

impl GridGenerator {
    /// Create a generator with a specific seed for reproducibility
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SeededRng::new(seed),
        }
    }

    /// Generate a grid with the words placed and every other cell filled
    ///
    /// `normalized_words` and `display_words` are index-aligned. Words
    /// that cannot be placed within the attempt budget are left out of
    /// the returned placements.
    pub fn generate(
        &mut self,
        rows: usize,
        cols: usize,
        normalized_words: &[String],
        display_words: &[String],
    ) -> Result<(Grid, Vec<WordPlacement>)> {
        if normalized_words.len() != display_words.len() {
            return Err(WordSearchError::invalid(
                "normalized_words and display_words must have the same count.",
            ));
        }

        let mut grid = Grid::new(rows, cols)?;
        let mut placements = Vec::with_capacity(normalized_words.len());

        for idx in self.length_order(normalized_words) {
            let normalized = &normalized_words[idx];
            let display = &display_words[idx];

            match self.try_place_word(&mut grid, normalized, display) {
                Some(placement) => placements.push(placement),
                None => debug!("Dropped '{}': no room in {}x{} grid", normalized, rows, cols),
            }
        }

        self.fill_empty_cells(&mut grid)?;

        Ok((grid, placements))
    }

    /// Indices ordered longest word first, ties in random order
    fn length_order(&mut self, words: &[String]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..words.len()).collect();
        self.rng.shuffle(&mut indices);
        // Stable sort keeps the shuffled order among equal lengths
        indices.sort_by_key(|&i| std::cmp::Reverse(words[i].chars().count()));
        indices
    }

    /// Draw random directions and starts until the word fits or the
    /// budget of rows * cols * directions draws runs out
    fn try_place_word(
        &mut self,
        grid: &mut Grid,
        normalized: &str,
        display: &str,
    ) -> Option<WordPlacement> {
        let word_len = normalized.chars().count();
        let max_attempts = grid.rows() * grid.cols() * Direction::ALL.len();

        for _ in 0..max_attempts {
            let direction = Direction::ALL[self.rng.next_below(Direction::ALL.len())];

            let (max_row, max_col) = placer::max_start(grid, word_len, direction);
            if max_row < 0 || max_col < 0 {
                continue;
            }

            let start = Position::new(
                self.rng.next_below(max_row as usize + 1),
                self.rng.next_below(max_col as usize + 1),
            );

            if placer::try_place(grid, normalized, start, direction) {
                return Some(WordPlacement::new(normalized, display, start, direction));
            }
        }

        None
    }

    /// Fill every empty cell with a random letter, row by row
    fn fill_empty_cells(&mut self, grid: &mut Grid) -> Result<()> {
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                if grid.letter(row, col).is_none() {
                    let letter = FILL_LETTERS[self.rng.next_below(FILL_LETTERS.len())] as char;
                    grid.set_letter(row, col, letter)?;
                }
            }
        }
        Ok(())
    }
}
