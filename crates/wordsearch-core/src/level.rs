//! Level generation: seed derivation, word selection, and the level
//! snapshot handed to the game.

use crate::difficulty::DifficultyTier;
use crate::error::{Result, WordSearchError};
use crate::finder::WordFinder;
use crate::generator::GridGenerator;
use crate::grid::Grid;
use crate::placement::WordPlacement;
use crate::rng::SeededRng;
use crate::words::{WordCatalog, MIN_WORD_LENGTH};
use log::info;
use serde::{Deserialize, Serialize};

/// Version of the seed derivation. Bump when [`level_seed`] changes,
/// since every generated level changes with it.
pub const SEED_FORMAT_VERSION: u32 = 1;

/// Category id given to challenge levels
///
/// The shipped game named this category `"desafio"`. Progress saved
/// under that id does not carry over.
pub const CHALLENGE_CATEGORY_ID: &str = "challenge";

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Seed for a category level: 64-bit FNV-1a over the UTF-8 bytes of
/// `"{category_id}_{level_number}"`
pub fn level_seed(category_id: &str, level_number: u32) -> u64 {
    let key = format!("{}_{}", category_id, level_number);
    key.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
    })
}

/// A generated level. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelData {
    category_id: String,
    level_number: u32,
    seed: u64,
    difficulty: DifficultyTier,
    grid: Grid,
    placements: Vec<WordPlacement>,
}

impl LevelData {
    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn level_number(&self) -> u32 {
        self.level_number
    }

    /// Seed the grid was generated from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn difficulty(&self) -> DifficultyTier {
        self.difficulty
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Words hidden in the grid, in placement order
    pub fn placements(&self) -> &[WordPlacement] {
        &self.placements
    }

    /// Start a play session over this level's words
    pub fn finder(&self) -> WordFinder {
        WordFinder::new(self.placements.clone())
    }
}

/// Grid size and word count for a challenge level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeConfig {
    pub rows: usize,
    pub cols: usize,
    pub word_count: usize,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self::small()
    }
}

impl ChallengeConfig {
    pub fn small() -> Self {
        Self {
            rows: 14,
            cols: 22,
            word_count: 10,
        }
    }

    pub fn medium() -> Self {
        Self {
            rows: 18,
            cols: 22,
            word_count: 10,
        }
    }

    pub fn large() -> Self {
        Self {
            rows: 20,
            cols: 22,
            word_count: 10,
        }
    }
}

/// Builds complete levels from word lists
#[derive(Debug, Default, Clone, Copy)]
pub struct LevelGenerator;

impl LevelGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a level of a category
    ///
    /// The seed is derived from the category id and level number, so the
    /// same inputs always produce the same level.
    pub fn generate(
        &self,
        category_id: &str,
        level_number: u32,
        normalized_words: &[String],
        display_words: &[String],
    ) -> Result<LevelData> {
        if category_id.is_empty() {
            return Err(WordSearchError::invalid("category_id cannot be empty."));
        }
        if normalized_words.is_empty() {
            return Err(WordSearchError::invalid("normalized_words cannot be empty."));
        }
        if normalized_words.len() != display_words.len() {
            return Err(WordSearchError::invalid(
                "normalized_words and display_words must have the same count.",
            ));
        }

        let seed = level_seed(category_id, level_number);
        let difficulty = DifficultyTier::for_level(level_number);

        let mut rng = SeededRng::new(seed);
        let word_count = rng.range_inclusive(difficulty.min_words, difficulty.max_words);

        let (selected_normalized, selected_display) = select_words(
            &mut rng,
            normalized_words,
            display_words,
            word_count,
            difficulty.grid_cols,
        );

        let (grid, placements) = GridGenerator::new(seed).generate(
            difficulty.grid_rows,
            difficulty.grid_cols,
            &selected_normalized,
            &selected_display,
        )?;

        info!(
            "Level generated: {} #{} (grid {}x{}, {} words)",
            category_id,
            level_number,
            difficulty.grid_rows,
            difficulty.grid_cols,
            placements.len()
        );

        Ok(LevelData {
            category_id: category_id.to_string(),
            level_number,
            seed,
            difficulty,
            grid,
            placements,
        })
    }

    /// Generate a level from a category registered in `catalog`
    pub fn generate_from_catalog(
        &self,
        catalog: &WordCatalog,
        category_id: &str,
        level_number: u32,
    ) -> Result<LevelData> {
        let category = catalog.category(category_id)?;
        self.generate(
            category_id,
            level_number,
            category.normalized_words(),
            category.display_words(),
        )
    }

    /// Generate a challenge level mixing words from every category
    pub fn generate_challenge(
        &self,
        catalog: &WordCatalog,
        config: &ChallengeConfig,
        seed: u64,
    ) -> Result<LevelData> {
        let (all_normalized, all_display) = catalog.all_words();
        if all_normalized.is_empty() {
            return Err(WordSearchError::invalid("No words available for challenge."));
        }

        let difficulty =
            DifficultyTier::new(config.rows, config.cols, config.word_count, config.word_count);

        let mut rng = SeededRng::new(seed);
        let (selected_normalized, selected_display) = select_words(
            &mut rng,
            &all_normalized,
            &all_display,
            config.word_count,
            config.rows.max(config.cols),
        );

        let (grid, placements) = GridGenerator::new(seed).generate(
            config.rows,
            config.cols,
            &selected_normalized,
            &selected_display,
        )?;

        info!(
            "Challenge generated: {}x{}, {} words from {} categories",
            config.rows,
            config.cols,
            placements.len(),
            catalog.category_count()
        );

        Ok(LevelData {
            category_id: CHALLENGE_CATEGORY_ID.to_string(),
            level_number: 1,
            seed,
            difficulty,
            grid,
            placements,
        })
    }
}

/// Pick up to `count` random words whose length fits the grid
fn select_words(
    rng: &mut SeededRng,
    all_normalized: &[String],
    all_display: &[String],
    count: usize,
    max_word_length: usize,
) -> (Vec<String>, Vec<String>) {
    let mut valid_indices: Vec<usize> = all_normalized
        .iter()
        .enumerate()
        .filter(|(_, word)| {
            let len = word.chars().count();
            (MIN_WORD_LENGTH..=max_word_length).contains(&len)
        })
        .map(|(i, _)| i)
        .collect();

    rng.shuffle(&mut valid_indices);
    valid_indices.truncate(count);

    let normalized = valid_indices
        .iter()
        .map(|&i| all_normalized[i].clone())
        .collect();
    let display = valid_indices
        .iter()
        .map(|&i| all_display[i].clone())
        .collect();
    (normalized, display)
}
