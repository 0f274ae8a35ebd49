//! Word search engine: seeded puzzle generation and selection validation.
//!
//! ```
//! use wordsearch_core::{LevelGenerator, WordCatalog};
//!
//! let mut catalog = WordCatalog::new();
//! catalog.add_category("animais", &["gato", "leão", "pato", "sapo", "urso"]).unwrap();
//!
//! let level = LevelGenerator::new()
//!     .generate_from_catalog(&catalog, "animais", 1)
//!     .unwrap();
//! assert!(level.grid().is_filled());
//!
//! let mut finder = level.finder();
//! let first = level.placements()[0].clone();
//! assert!(finder.check_selection(&first.cell_positions()).is_some());
//! ```

pub mod difficulty;
pub mod error;
pub mod finder;
pub mod generator;
pub mod grid;
pub mod level;
pub mod placement;
pub mod placer;
pub mod rng;
pub mod words;

pub use difficulty::{DifficultyTier, LEVELS_PER_CATEGORY};
pub use error::{Result, WordSearchError};
pub use finder::{FinderEvent, WordFinder};
pub use generator::GridGenerator;
pub use grid::{Cell, Direction, Grid, Position};
pub use level::{level_seed, ChallengeConfig, LevelData, LevelGenerator};
pub use placement::WordPlacement;
pub use rng::SeededRng;
pub use words::{normalize, to_display, WordCatalog, WordCategory, WordsFile};
