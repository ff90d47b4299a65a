use crate::grid::{Direction, Grid, Point};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Indicates that a puzzle could not be built from the given input.
#[derive(Debug)]
pub enum WordSearchError {
    /// A grid row whose character count differs from the rows above it.
    /// Carries the zero-based index of the offending row along with the
    /// expected and actual counts.
    DimensionMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// Reading the input failed.
    Io(io::Error),
}

impl fmt::Display for WordSearchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WordSearchError::DimensionMismatch {
                row,
                expected,
                actual,
            } => write!(
                f,
                "grid row {} has {} letters where {} were expected; every row must have the same length",
                row, actual, expected
            ),
            WordSearchError::Io(error) => write!(f, "failed to read the puzzle input: {}", error),
        }
    }
}

impl std::error::Error for WordSearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WordSearchError::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for WordSearchError {
    fn from(error: io::Error) -> WordSearchError {
        WordSearchError::Io(error)
    }
}

/// One validated placement of a word in the grid.
///
/// The path holds the cell of each letter in word order, and consecutive
/// cells differ by exactly one step along `direction`. Two placements along
/// different directions are distinct occurrences even when their paths cover
/// the same cells, which is why a single-letter word can occur once per
/// direction from the same cell.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Occurrence {
    /// The direction the word runs along.
    pub direction: Direction,
    /// The cell of each letter, first letter first.
    pub path: Vec<Point>,
}

impl Occurrence {
    /// The cell of the word's first letter.
    pub fn start(&self) -> Option<Point> {
        self.path.first().copied()
    }
}

/// Every occurrence of every word that was found in one search.
///
/// Iteration preserves discovery order: words appear in word-list order, and
/// each word's occurrences in scan order. Words that were not found at all
/// are absent rather than mapped to an empty list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FoundWords {
    entries: Vec<(Arc<str>, Vec<Occurrence>)>,
}

impl FoundWords {
    /// Creates an empty result set.
    pub fn new() -> FoundWords {
        FoundWords {
            entries: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, word: &str, occurrences: Vec<Occurrence>) {
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.as_ref() == word)
        {
            // A word listed twice is scanned twice; the rescan replaces the
            // earlier, identical entry without moving it.
            Some(entry) => entry.1 = occurrences,
            None => self.entries.push((Arc::from(word), occurrences)),
        }
    }

    /// Retrieves the occurrences of the given word, if it was found.
    pub fn get(&self, word: &str) -> Option<&[Occurrence]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_ref() == word)
            .map(|(_, occurrences)| occurrences.as_slice())
    }

    /// Returns `true` iff the given word was found at least once.
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Iterates over the found words in discovery order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_ref())
    }

    /// Iterates over `(word, occurrences)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.entries
            .iter()
            .map(|(word, occurrences)| (word.as_ref(), occurrences.as_slice()))
    }

    /// The number of distinct words that were found.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` iff no word was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The set of every cell covered by at least one occurrence. A cell
    /// shared by several occurrences appears once.
    pub fn covered_cells(&self) -> HashSet<Point> {
        let mut covered = HashSet::new();
        for (_, occurrences) in &self.entries {
            for occurrence in occurrences {
                covered.extend(occurrence.path.iter().copied());
            }
        }
        covered
    }
}

/// Concatenates the letters of every cell not covered by any found word, in
/// row-major order. In a typical puzzle these leftover letters spell the
/// hidden answer.
///
/// Returns an empty string when the grid is empty or every cell is covered.
///
/// ```
/// use rs_wordsearch_solver::*;
///
/// let grid = Grid::from_rows(&["CAT", "REO", "ALG"]).unwrap();
/// let found = search(&grid, &["CAT", "GO"]);
///
/// assert_eq!(remaining_letters(&grid, &found), "REAL");
/// ```
pub fn remaining_letters(grid: &Grid, found_words: &FoundWords) -> String {
    let covered = found_words.covered_cells();
    grid.points()
        .filter(|point| !covered.contains(point))
        .filter_map(|point| grid.get(point))
        .collect()
}
