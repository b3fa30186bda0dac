//! Example demonstrating basic puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` with a removal count
//! - Generate a random puzzle, or reproduce one from a seed
//! - Display the puzzle, solution, and seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Control the number of erased cells (default: 40):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --removals 55
//! ```
//!
//! Reproduce a specific puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```

use clap::Parser;
use nanpure_core::{DigitGrid, Position};
use nanpure_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of cells to erase from the solution (0-81).
    #[arg(
        long,
        value_name = "COUNT",
        default_value_t = PuzzleGenerator::DEFAULT_REMOVALS,
        value_parser = clap::value_parser!(u8).range(..=81)
    )]
    removals: u8,

    /// Seed to reproduce a specific puzzle (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,
}

fn main() {
    let args = Args::parse();
    let generator = PuzzleGenerator::with_removals(args.removals);

    let puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    print_puzzle(&puzzle);
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Problem ({} givens):", puzzle.problem.filled_count());
    print_grid_rows(&puzzle.problem);
    println!();

    println!("Solution:");
    print_grid_rows(&puzzle.solution);
}

fn print_grid_rows(grid: &DigitGrid) {
    for y in 0..9 {
        print!("  ");
        for x in 0..9 {
            match grid.get(Position::new(x, y)) {
                Some(digit) => print!("{digit}"),
                None => print!("."),
            }
        }
        println!();
    }
}
