//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for puzzle generation on *your* machine.
//! - Loads each bundled word list once, then generates several times and
//!   reports the median.
//! - The seed is fixed per case so every repeat does identical work.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Bigger board:                   `cargo run --bin bench_local --release -- -s 20`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Use the same machine and `--release` for more comparable numbers.
//! - I/O (file loading, printing) is kept outside the timed section.
//! - One warm-up run per case is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordgrid::puzzle::{Puzzle, PuzzleConfig};
use wordgrid::word_list::WordList;

/// Simple local benchmark runner: load each bundled list once, time generation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Grid side length for every case
    #[arg(short, long, default_value_t = 14)]
    size: usize,

    /// Base RNG seed; the case index is added so cases stay distinct
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Number of repeats per case (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,
}

/// A benchmark case: one bundled themed list.
#[derive(Clone)]
struct Case {
    name: &'static str,
    path: &'static str,
}

/// Edit/add new lists here. The summary displays `name`.
fn get_cases() -> Vec<Case> {
    vec![
        Case { name: "animals", path: concat!(env!("CARGO_MANIFEST_DIR"), "/data/animals.txt") },
        Case { name: "landscape", path: concat!(env!("CARGO_MANIFEST_DIR"), "/data/landscape.txt") },
        Case { name: "computing", path: concat!(env!("CARGO_MANIFEST_DIR"), "/data/computing.txt") },
        Case { name: "ocean", path: concat!(env!("CARGO_MANIFEST_DIR"), "/data/ocean.txt") },
        Case { name: "adventure", path: concat!(env!("CARGO_MANIFEST_DIR"), "/data/adventure.txt") },
        Case { name: "literature", path: concat!(env!("CARGO_MANIFEST_DIR"), "/data/literature.txt") },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    // safe: f64 durations are never NaN in this context
    xs.sort_by(|a, b| a.partial_cmp(b).expect("f64 durations should not be NaN"));
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> std::io::Result<()> {
    /// One row in the benchmark summary: (case name, elapsed seconds,
    /// number of hidden words).
    type SummaryRow = (String, f64, usize);

    let cli = Cli::parse();
    let cases = get_cases();
    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        eprintln!("\n[{:02}] {} ({})", idx + 1, case.name, case.path);

        // Load the word list once. This I/O is *not* included in timing.
        let list = WordList::load_from_path(case.path)?;
        eprintln!("  loaded {} words", list.len());

        let config = PuzzleConfig {
            size: cli.size,
            seed: cli.seed.wrapping_add(idx as u64),
            step_budget: None,
        };

        // One *warm-up* execution per case to "touch" code paths / caches.
        // We intentionally ignore its timing.
        if let Err(e) = Puzzle::generate(&config, &list.words) {
            eprintln!("  ✗ Warm-up failed: {e}");
            continue;
        }

        // Repeat the timed runs and collect durations.
        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_word_count = 0;

        for rep in 0..cli.num_repeats {
            // Keep only the *core* operation inside the timed region.
            let t_generate = Instant::now();
            let puzzle = match Puzzle::generate(black_box(&config), &list.words) {
                Ok(puzzle) => puzzle,
                Err(e) => {
                    eprintln!("  ✗ Run {}/{} failed: {e}", rep + 1, cli.num_repeats);
                    continue;
                }
            };
            let generate_secs = t_generate.elapsed().as_secs_f64();

            // Prevent the compiler from proving the result unused and eliding work.
            last_word_count = black_box(puzzle.placements().len());

            times.push(generate_secs);
            eprintln!(
                "  run {:>2}/{:>2}: {:.4}s ({} words hidden)",
                rep + 1,
                cli.num_repeats,
                generate_secs,
                last_word_count
            );
        }

        // Prefer median for small N--it's less sensitive to noisy outliers.
        let med = median(times);
        eprintln!("  → median {med:.4}s over {} run(s)", cli.num_repeats);

        summary.push((case.name.to_string(), med, last_word_count));
    }

    // Compact summary at the end for a quick scan across all cases.
    eprintln!("\n==== Summary ({}x{} grid) ====", cli.size, cli.size);
    eprintln!("{:<12} | {:>10} | {:>7}", "list", "median (s)", "# words");
    eprintln!("{:-<12}-+-{:-<10}-+-{:-<7}", "", "", "");
    for (name, med, word_count) in &summary {
        eprintln!("{name:<12} | {med:>10.4} | {word_count:>7}");
    }

    Ok(())
}
