#![cfg_attr(feature = "unstable", feature(test))]

//! Solves word-search ("osmisměrka") puzzles.
//!
//! Build a [`Grid`] from the puzzle's rows, [`search`] it for a list of
//! words, and read the hidden answer out of the letters no word covers:
//!
//! ```
//! use rs_wordsearch_solver::*;
//!
//! let grid = Grid::from_rows(&["CAT", "REO", "ALG"]).unwrap();
//! let found = search(&grid, &["CAT", "GO"]);
//!
//! assert_eq!(
//!     found.get("CAT").unwrap()[0].path,
//!     vec![Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)],
//! );
//! assert_eq!(remaining_letters(&grid, &found), "REAL");
//! ```
//!
//! Words run along any of the eight compass directions and may overlap; see
//! [`search`] for the exact matching rules.

mod engine;
mod grid;
mod results;
mod words;

pub use engine::*;
pub use grid::*;
pub use results::*;
pub use words::*;
