use crate::results::WordSearchError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::BufRead;

/// A single cell in the grid, addressed by zero-based (row, column) indices.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Point {
        Point { row, col }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight compass directions a word can run along.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    East,
    South,
    SouthEast,
    SouthWest,
    West,
    North,
    NorthEast,
    NorthWest,
}

impl Direction {
    /// Every direction, in the order the search tries them from each cell.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::South,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::West,
        Direction::North,
        Direction::NorthEast,
        Direction::NorthWest,
    ];

    /// The (row, column) offset of one step along this direction.
    pub fn step(&self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let abbreviation = match self {
            Direction::East => "E",
            Direction::South => "S",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::NorthWest => "NW",
        };
        f.write_str(abbreviation)
    }
}

/// An immutable rectangular table of the puzzle's letters.
///
/// A grid is built once from already-cleaned rows and only read afterwards.
/// Every row must contain the same number of characters; a grid with zero
/// rows is valid and makes every search come back empty. The grid stores
/// characters exactly as given, with no case folding.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    rows: Vec<Vec<char>>,
    num_cols: usize,
}

impl Grid {
    /// Constructs a `Grid` from the given rows, one string per row.
    ///
    /// Row lengths are counted in characters, not bytes, so accented letters
    /// do not skew the shape. Fails with
    /// [`WordSearchError::DimensionMismatch`] if any row's length differs
    /// from the first row's; the input is never padded or truncated to fit.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Grid, WordSearchError> {
        let mut cells: Vec<Vec<char>> = Vec::with_capacity(rows.len());
        let mut num_cols = 0;
        for (index, row) in rows.iter().enumerate() {
            let row: Vec<char> = row.as_ref().chars().collect();
            if index == 0 {
                num_cols = row.len();
            } else if row.len() != num_cols {
                return Err(WordSearchError::DimensionMismatch {
                    row: index,
                    expected: num_cols,
                    actual: row.len(),
                });
            }
            cells.push(row);
        }
        Ok(Grid {
            rows: cells,
            num_cols,
        })
    }

    /// Constructs a `Grid` from a block of text with one row per line.
    ///
    /// The text is trimmed as a whole and each row is trimmed individually,
    /// so surrounding blank lines and indentation are ignored. A blank line
    /// in the middle of the grid still fails as a dimension mismatch.
    pub fn from_text(text: &str) -> Result<Grid, WordSearchError> {
        let rows: Vec<&str> = text.trim().lines().map(|row| row.trim()).collect();
        Grid::from_rows(&rows)
    }

    /// Constructs a `Grid` by reading rows from the given reader, one row per
    /// line, trimming each and ignoring leading and trailing blank lines.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Grid, WordSearchError> {
        let mut rows: Vec<String> = Vec::new();
        for maybe_line in reader.lines() {
            rows.push(maybe_line?.trim().to_string());
        }
        while rows.first().map_or(false, |row| row.is_empty()) {
            rows.remove(0);
        }
        while rows.last().map_or(false, |row| row.is_empty()) {
            rows.pop();
        }
        Grid::from_rows(&rows)
    }

    /// The number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// The number of columns. Zero when the rows are empty strings.
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// The total number of cells.
    pub fn len(&self) -> usize {
        self.rows.len() * self.num_cols
    }

    /// Returns `true` iff the grid holds no cells at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Retrieves the character at the given cell, or `None` out of bounds.
    pub fn get(&self, point: Point) -> Option<char> {
        self.rows
            .get(point.row)
            .and_then(|row| row.get(point.col))
            .copied()
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Iterates over every cell in row-major order (row ascending, then
    /// column ascending).
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let num_cols = self.num_cols;
        (0..self.rows.len())
            .flat_map(move |row| (0..num_cols).map(move |col| Point::new(row, col)))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            for letter in row {
                write!(f, "{}", letter)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
