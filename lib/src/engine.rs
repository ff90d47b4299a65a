use crate::grid::{Direction, Grid, Point};
use crate::results::{FoundWords, Occurrence};
use rayon::prelude::*;

/// Finds every occurrence of every listed word in the grid.
///
/// Each word is tried from every cell in row-major order, extending along the
/// eight directions in [`Direction::ALL`] order, so a word's occurrence list
/// comes back in discovery order. Words with no occurrences are left out of
/// the result entirely. Matching is case-sensitive: normalize the words (for
/// example via [`WordList`](crate::WordList)) before calling.
///
/// Occurrences may overlap freely and a word may match several times; every
/// match is recorded. A single-letter word matches once per direction from
/// each matching cell, so the same cell can appear in up to eight of its
/// occurrences. Empty words are skipped, and a word repeated in `words` is
/// searched again, replacing its earlier, identical entry.
///
/// ```
/// use rs_wordsearch_solver::*;
///
/// let grid = Grid::from_rows(&["CAT", "REO", "ALG"]).unwrap();
/// let found = search(&grid, &["CAT", "GO", "YETI"]);
///
/// assert_eq!(found.get("CAT").unwrap()[0].direction, Direction::East);
/// assert_eq!(found.get("GO").unwrap()[0].direction, Direction::North);
/// assert!(!found.contains("YETI"));
/// ```
pub fn search<S: AsRef<str>>(grid: &Grid, words: &[S]) -> FoundWords {
    let mut found = FoundWords::new();
    for word in words {
        let word = word.as_ref();
        let occurrences = search_word(grid, word);
        if !occurrences.is_empty() {
            found.insert(word, occurrences);
        }
    }
    found
}

/// The same results as [`search`], with the per-word scans spread across
/// threads.
///
/// Word order and per-word occurrence order are unaffected, so the output is
/// identical to the sequential version. Worth it for large grids or long word
/// lists; for a typical puzzle the sequential search is already instant.
pub fn par_search<S: AsRef<str> + Sync>(grid: &Grid, words: &[S]) -> FoundWords {
    let occurrences_per_word: Vec<(&str, Vec<Occurrence>)> = words
        .par_iter()
        .map(|word| {
            let word = word.as_ref();
            (word, search_word(grid, word))
        })
        .collect();

    let mut found = FoundWords::new();
    for (word, occurrences) in occurrences_per_word {
        if !occurrences.is_empty() {
            found.insert(word, occurrences);
        }
    }
    found
}

/// All occurrences of a single word, in scan order.
fn search_word(grid: &Grid, word: &str) -> Vec<Occurrence> {
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty() {
        return Vec::new();
    }
    let mut occurrences = Vec::new();
    for start in grid.points() {
        for direction in Direction::ALL {
            if let Some(path) = match_word_at(grid, &letters, start, direction) {
                occurrences.push(Occurrence { direction, path });
            }
        }
    }
    occurrences
}

/// Attempts to lay a single word into the grid, starting at `start` and
/// stepping one cell along `direction` per letter.
///
/// Returns the exact cell path (first letter's cell first) when every letter
/// lands in bounds on the matching character, and `None` as soon as one does
/// not; there are no partial matches. A word longer than the grid extent in
/// the chosen direction simply runs out of bounds and fails like any other
/// mismatch.
pub fn match_word_at(
    grid: &Grid,
    word: &[char],
    start: Point,
    direction: Direction,
) -> Option<Vec<Point>> {
    let (d_row, d_col) = direction.step();
    let mut path = Vec::with_capacity(word.len());
    let mut row = start.row as isize;
    let mut col = start.col as isize;
    for &letter in word {
        if row < 0 || col < 0 {
            return None;
        }
        let point = Point::new(row as usize, col as usize);
        if grid.get(point) != Some(letter) {
            return None;
        }
        path.push(point);
        row += d_row;
        col += d_col;
    }
    Some(path)
}

#[cfg(all(feature = "unstable", test))]
mod benches {

    extern crate test;

    use super::*;
    use test::Bencher;

    const BENCH_WORDS: [&str; 6] = ["ABC", "GHIJKL", "ZYX", "PONM", "AA", "QRSTU"];

    fn bench_grid() -> Grid {
        let rows: Vec<String> = (0..16)
            .map(|row| {
                (0..16)
                    .map(|col| (b'A' + ((row + col) % 26) as u8) as char)
                    .collect()
            })
            .collect();
        Grid::from_rows(&rows).unwrap()
    }

    #[bench]
    fn bench_search(b: &mut Bencher) {
        let grid = bench_grid();

        b.iter(|| search(&grid, &BENCH_WORDS).len());
    }

    #[bench]
    fn bench_par_search(b: &mut Bencher) {
        let grid = bench_grid();

        b.iter(|| par_search(&grid, &BENCH_WORDS).len());
    }
}
