use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;

use wordgrid::errors::PuzzleError;
use wordgrid::puzzle::{Puzzle, PuzzleConfig, DEFAULT_GRID_SIZE};
use wordgrid::word_list::WordList;

/// Word search puzzle generator
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Grid side length (the grid is SIZE x SIZE)
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// RNG seed; omitted means a random one (the seed used is always reported)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the word list file (WORD;definition per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/animals.txt")
    )]
    word_list: String,

    /// Number of seeds to try before giving up on an unlucky word list
    #[arg(short, long, default_value_t = 5)]
    attempts: u32,
}

/// Entry point of the wordgrid CLI generator.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("WORDGRID_DEBUG").is_ok();
    wordgrid::log::init_logger(debug_enabled);

    log::info!("Starting wordgrid generator");

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a PuzzleError
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the wordgrid CLI generator.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk.
/// 3. Generate a puzzle, retrying with derived seeds for unlucky runs.
/// 4. Print the grid and the word bank on stdout.
/// 5. Print performance metrics (timings, counts) on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., bad grid size, a word
/// that cannot fit, missing word-list file) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();
    if cli.attempts == 0 {
        return Err("attempts must be at least 1".into());
    }

    // 1. Load the word list from disk
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    if word_list.is_empty() {
        return Err(format!("word list '{}' contains no valid words", cli.word_list).into());
    }

    // 2. Generate the puzzle, moving to the next seed when an arrangement
    //    cannot be found for the current one
    let t_generate = Instant::now();
    let base_seed = cli.seed.unwrap_or_else(rand::random);
    let mut puzzle: Option<Puzzle> = None;
    let mut last_err: Option<PuzzleError> = None;

    for attempt in 0..cli.attempts {
        let config = PuzzleConfig {
            size: cli.size,
            seed: base_seed.wrapping_add(u64::from(attempt)),
            step_budget: None,
        };
        match Puzzle::generate(&config, &word_list.words) {
            Ok(p) => {
                puzzle = Some(p);
                break;
            }
            Err(e @ PuzzleError::Unplaceable { .. }) => {
                log::warn!("attempt {} (seed {}) failed: {e}", attempt + 1, config.seed);
                last_err = Some(e);
            }
            // Retrying cannot fix a bad size or an overlong word
            Err(e) => return Err(e.into()),
        }
    }
    let generate_secs = t_generate.elapsed().as_secs_f64();

    let Some(puzzle) = puzzle else {
        eprintln!(
            "⚠️  Gave up after {} attempt(s); try a larger --size or fewer words",
            cli.attempts
        );
        return match last_err {
            Some(e) => Err(e.into()),
            None => Err("puzzle generation failed".into()),
        };
    };

    // 3. Print the grid and the word bank on stdout
    println!("{}", puzzle.grid());
    println!();
    for word in puzzle.words() {
        match word.definition() {
            Some(definition) => println!("{}: {}", word.text(), definition),
            None => println!("{}", word.text()),
        }
    }

    eprintln!(
        "✓ Hid {} words in a {}x{} grid (seed {})",
        puzzle.placements().len(),
        puzzle.size(),
        puzzle.size(),
        puzzle.seed()
    );

    // 4. Print diagnostics (word-list size, timings) to stderr
    eprintln!(
        "Loaded {} words in {:.3}s; generated in {:.3}s.",
        word_list.len(),
        load_secs,
        generate_secs
    );

    Ok(())
}
