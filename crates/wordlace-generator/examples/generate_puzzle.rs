//! Example demonstrating word-search puzzle generation.
//!
//! This example shows how to:
//! - Normalise raw words into a `WordList`
//! - Configure a `PuzzleGenerator`
//! - Generate a puzzle from a fixed or random seed
//! - Display the grid, the placements, the unplaced words and the seed
//! - Sample several seeds and keep the one that places the most words
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- cat dog bird fish
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 42 --size 6 --no-diagonals --no-backwards cat dog
//! ```
//!
//! Sample up to 1000 random seeds and keep the puzzle with the fewest unplaced
//! words:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 8 --max-tries 1000 because different answer beautiful
//! ```

use std::{cmp, process};

use clap::Parser;
use rayon::prelude::*;
use wordlace_core::{MAX_GRID_SIZE, MIN_GRID_SIZE, WordList};
use wordlace_generator::{
    GenerateError, GeneratedPuzzle, GeneratorConfig, PuzzleGenerator, PuzzleSeed,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Words to place.
    #[arg(value_name = "WORD", required = true, num_args = 1..)]
    words: Vec<String>,

    /// Side length of the grid.
    #[arg(long, default_value_t = GeneratorConfig::DEFAULT_SIZE)]
    size: u8,

    /// Only place words horizontally and vertically.
    #[arg(long)]
    no_diagonals: bool,

    /// Only place words left to right and top to bottom.
    #[arg(long)]
    no_backwards: bool,

    /// Seed to generate from. A random seed is used if omitted.
    #[arg(long, conflicts_with = "max_tries")]
    seed: Option<PuzzleSeed>,

    /// Number of random seeds to sample, keeping the puzzle with the fewest
    /// unplaced words.
    #[arg(long, value_name = "COUNT")]
    max_tries: Option<usize>,
}

fn main() {
    let args = Args::parse();

    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&args.size) {
        eprintln!("--size must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}.");
        process::exit(2);
    }

    let words = WordList::from_raw(&args.words);
    if words.is_empty() {
        eprintln!("No playable words given.");
        process::exit(2);
    }

    let config = GeneratorConfig::default()
        .size(args.size)
        .allow_diagonals(!args.no_diagonals)
        .allow_backwards(!args.no_backwards);
    let generator = PuzzleGenerator::new(config);

    let result = match (args.seed, args.max_tries) {
        (Some(seed), _) => generator.generate_with_seed(&words, seed),
        (None, None) => generator.generate(&words),
        (None, Some(max_tries)) => {
            let Some(best) = best_of(&generator, &words, max_tries) else {
                eprintln!("--max-tries must be at least 1.");
                process::exit(2);
            };
            best
        }
    };

    match result {
        Ok(generated) => print_puzzle(&generated, &words, args.max_tries),
        Err(err) => {
            eprintln!("Failed to generate a puzzle: {err}");
            process::exit(1);
        }
    }
}

/// Generates `max_tries` puzzles from random seeds and keeps the best one.
///
/// Returns `None` when `max_tries` is zero; any generation error is returned
/// as is.
fn best_of(
    generator: &PuzzleGenerator,
    words: &WordList,
    max_tries: usize,
) -> Option<Result<GeneratedPuzzle, GenerateError>> {
    (0..max_tries)
        .into_par_iter()
        .map(|_| generator.generate(words))
        .try_reduce_with(|a, b| Ok(fewer_unplaced(a, b)))
}

/// Prefers the puzzle with fewer unplaced words, then the smaller seed.
fn fewer_unplaced(a: GeneratedPuzzle, b: GeneratedPuzzle) -> GeneratedPuzzle {
    cmp::min_by_key(a, b, |generated| (generated.puzzle.unplaced().len(), generated.seed))
}

fn print_puzzle(generated: &GeneratedPuzzle, words: &WordList, max_tries: Option<usize>) {
    let puzzle = &generated.puzzle;

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();

    if let Some(max_tries) = max_tries {
        println!("Selection:");
        println!("  Max tries: {max_tries}");
        println!("  Unplaced: {}", puzzle.unplaced().len());
        println!();
    }

    println!("Grid:");
    for line in puzzle.grid().to_string().lines() {
        let spaced: Vec<String> = line.chars().map(String::from).collect();
        println!("  {}", spaced.join(" "));
    }
    println!();

    println!("Placements:");
    for placement in puzzle.placements() {
        let label = words.label_of(placement.word()).unwrap_or(placement.word());
        println!(
            "  {label}: {} -> {} ({})",
            placement.first(),
            placement.last(),
            placement.direction()
        );
    }

    if !puzzle.unplaced().is_empty() {
        println!();
        println!("Unplaced:");
        for word in puzzle.unplaced() {
            println!("  {}", words.label_of(word).unwrap_or(word));
        }
    }
}
