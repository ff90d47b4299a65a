use clap::{Parser, Subcommand};
use colored::{Color, Colorize};
use rs_wordsearch_solver::*;
use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io;

/// Solves a word-search puzzle: finds every listed word in the letter grid,
/// along any of the eight directions, and the leftover letters that spell the
/// hidden answer.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Path to a file that contains the letter grid, with one row per line.
    #[clap(short = 'g', long)]
    grid_file: String,

    /// Path to a file that contains the words to find, separated by spaces,
    /// commas, or newlines.
    #[clap(short = 'w', long)]
    words_file: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the grid with every found word highlighted, then each found
    /// word with its placements.
    Solve,
    /// Print only the letters left over once every found word is removed.
    Remaining,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let grid = Grid::from_reader(io::BufReader::new(File::open(&args.grid_file)?))?;
    let words = WordList::from_reader(io::BufReader::new(File::open(&args.words_file)?))?;
    let found = par_search(&grid, &words);

    match args.command {
        Command::Solve => print_solution(&grid, &words, &found),
        Command::Remaining => println!("{}", remaining_letters(&grid, &found)),
    }

    Ok(())
}

const WORD_COLORS: [Color; 8] = [
    Color::Blue,
    Color::Green,
    Color::Red,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::BrightBlue,
    Color::BrightGreen,
];

/// More words than colors just cycles the palette.
fn color_for(word_index: usize) -> Color {
    WORD_COLORS[word_index % WORD_COLORS.len()]
}

fn print_solution(grid: &Grid, words: &WordList, found: &FoundWords) {
    println!(
        "Grid is {} rows x {} columns; {} of {} words found.\n",
        grid.num_rows(),
        grid.num_cols(),
        found.len(),
        words.len()
    );

    let mut cell_colors: HashMap<Point, Color> = HashMap::new();
    for (index, (_, occurrences)) in found.iter().enumerate() {
        for occurrence in occurrences {
            for point in &occurrence.path {
                cell_colors.insert(*point, color_for(index));
            }
        }
    }

    for (row_index, row) in grid.rows().enumerate() {
        for (col_index, letter) in row.iter().enumerate() {
            match cell_colors.get(&Point::new(row_index, col_index)) {
                Some(color) => print!("{} ", letter.to_string().color(*color).bold()),
                None => print!("{} ", letter),
            }
        }
        println!();
    }
    println!();

    if found.is_empty() {
        println!("No words from the list were found in the grid.");
        return;
    }

    for (index, (word, occurrences)) in found.iter().enumerate() {
        println!("{}:", word.color(color_for(index)).bold());
        for occurrence in occurrences {
            if let Some(start) = occurrence.start() {
                println!("\tstarts at {} heading {}", start, occurrence.direction);
            }
        }
    }
}
