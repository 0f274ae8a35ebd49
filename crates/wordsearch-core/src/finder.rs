//! Validates player selections against the words hidden in a level.

use crate::grid::Position;
use crate::placement::WordPlacement;
use rand::Rng;

/// Notification emitted while a level is being played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinderEvent {
    /// A word was found, by selection or by reveal
    WordFound { index: usize, word: String },
    /// The last remaining word was found. Always follows the
    /// `WordFound` that triggered it.
    AllWordsFound,
}

/// Tracks which words of a level have been found
///
/// Placements are kept in their original order alongside a found flag
/// per placement. A word, once found, stays found.
#[derive(Debug, Clone)]
pub struct WordFinder {
    placements: Vec<WordPlacement>,
    found: Vec<bool>,
    events: Vec<FinderEvent>,
    hints_used: usize,
}

impl WordFinder {
    pub fn new(placements: Vec<WordPlacement>) -> Self {
        let found = vec![false; placements.len()];
        Self {
            placements,
            found,
            events: Vec::new(),
            hints_used: 0,
        }
    }

    pub fn total_words(&self) -> usize {
        self.placements.len()
    }

    pub fn found_count(&self) -> usize {
        self.found.iter().filter(|&&f| f).count()
    }

    pub fn all_found(&self) -> bool {
        self.found_count() == self.total_words()
    }

    /// Whether the placement at `index` has been found
    pub fn is_found(&self, index: usize) -> bool {
        self.found.get(index).copied().unwrap_or(false)
    }

    /// All placements (for the word list), in level order
    pub fn placements(&self) -> &[WordPlacement] {
        &self.placements
    }

    /// Number of words revealed through [`reveal_word`](Self::reveal_word)
    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    /// Check a player's selection against the unfound words
    ///
    /// The selection must cover exactly a word's cells, first to last or
    /// last to first. On a match the word is marked found and returned.
    pub fn check_selection(&mut self, selected: &[Position]) -> Option<&WordPlacement> {
        if selected.is_empty() {
            return None;
        }

        let index = (0..self.placements.len())
            .find(|&i| !self.found[i] && matches_placement(&self.placements[i], selected))?;

        self.mark_found(index);
        Some(&self.placements[index])
    }

    /// Pick a random unfound word, `None` once everything is found
    pub fn get_hint<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&WordPlacement> {
        let unfound: Vec<&WordPlacement> = self
            .placements
            .iter()
            .zip(&self.found)
            .filter(|(_, &found)| !found)
            .map(|(p, _)| p)
            .collect();

        if unfound.is_empty() {
            return None;
        }

        Some(unfound[rng.gen_range(0..unfound.len())])
    }

    /// Mark a word found without a selection (granting a hint)
    ///
    /// Does nothing if the word is already found or not part of the level.
    pub fn reveal_word(&mut self, placement: &WordPlacement) {
        let index = self
            .placements
            .iter()
            .zip(&self.found)
            .position(|(p, &found)| !found && p == placement);

        if let Some(index) = index {
            self.hints_used += 1;
            self.mark_found(index);
        }
    }

    /// Drain the notifications queued since the last call
    pub fn take_events(&mut self) -> Vec<FinderEvent> {
        std::mem::take(&mut self.events)
    }

    fn mark_found(&mut self, index: usize) {
        self.found[index] = true;
        self.events.push(FinderEvent::WordFound {
            index,
            word: self.placements[index].normalized_word.clone(),
        });

        if self.all_found() {
            self.events.push(FinderEvent::AllWordsFound);
        }
    }
}

/// Selection covers the placement's cells in either order
fn matches_placement(placement: &WordPlacement, selected: &[Position]) -> bool {
    let expected = placement.cell_positions();
    if expected.len() != selected.len() {
        return false;
    }

    expected.iter().eq(selected.iter()) || expected.iter().rev().eq(selected.iter())
}
