use serde::{Deserialize, Serialize};

/// Number of levels each category offers
pub const LEVELS_PER_CATEGORY: u32 = 15;

/// Grid size and accepted word-count range for a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DifficultyTier {
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub min_words: usize,
    pub max_words: usize,
}

impl DifficultyTier {
    pub fn new(grid_rows: usize, grid_cols: usize, min_words: usize, max_words: usize) -> Self {
        Self {
            grid_rows,
            grid_cols,
            min_words,
            max_words,
        }
    }

    /// Levels 1-5: 8x8 with 5-6 words
    pub fn easy() -> Self {
        Self::new(8, 8, 5, 6)
    }

    /// Levels 6-10: 10x10 with 6-8 words
    pub fn medium() -> Self {
        Self::new(10, 10, 6, 8)
    }

    /// Levels 11 and up: 12x12 with 8-10 words
    pub fn hard() -> Self {
        Self::new(12, 12, 8, 10)
    }

    /// Tier for a level number. Levels past the last tier stay hard.
    pub fn for_level(level_number: u32) -> Self {
        match level_number {
            0..=5 => Self::easy(),
            6..=10 => Self::medium(),
            _ => Self::hard(),
        }
    }
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{}, {}-{} words",
            self.grid_rows, self.grid_cols, self.min_words, self.max_words
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_level_tiers() {
        let cases = [
            (1, 8, 8, 5, 6),
            (3, 8, 8, 5, 6),
            (5, 8, 8, 5, 6),
            (6, 10, 10, 6, 8),
            (8, 10, 10, 6, 8),
            (10, 10, 10, 6, 8),
            (11, 12, 12, 8, 10),
            (13, 12, 12, 8, 10),
            (15, 12, 12, 8, 10),
        ];
        for (level, rows, cols, min, max) in cases {
            let tier = DifficultyTier::for_level(level);
            assert_eq!(tier, DifficultyTier::new(rows, cols, min, max), "level {}", level);
        }
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(DifficultyTier::for_level(5).grid_rows, 8);
        assert_eq!(DifficultyTier::for_level(6).grid_rows, 10);
        assert_eq!(DifficultyTier::for_level(10).grid_rows, 10);
        assert_eq!(DifficultyTier::for_level(11).grid_rows, 12);
    }

    #[test]
    fn test_out_of_range_levels() {
        assert_eq!(DifficultyTier::for_level(0), DifficultyTier::easy());
        assert_eq!(DifficultyTier::for_level(100), DifficultyTier::hard());
        assert_eq!(DifficultyTier::for_level(u32::MAX), DifficultyTier::hard());
    }

    #[test]
    fn test_display() {
        assert_eq!(DifficultyTier::medium().to_string(), "10x10, 6-8 words");
    }
}
