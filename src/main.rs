use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use wordshift::cli::wordshift_cli_error;
use wordshift::{find_shiftable_pairs, load_inputs, write_pairs, RunSummary};

/// Find dictionary word pairs related by a character substitution table.
#[derive(Parser)]
struct Args {
    /// Newline-delimited word list, one word per line
    word_list: PathBuf,
    /// Two-column CSV mapping a source character to its replacement
    table: PathBuf,
    /// Output CSV path, one (original, shifted) row per pair
    output: PathBuf,
    /// Print a machine-readable run summary on stdout
    #[clap(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let start = Instant::now();

    let (words, subs) = load_inputs(&args.word_list, &args.table)
        .map_err(|e| wordshift_cli_error("loading inputs", e))?;

    let pairs = find_shiftable_pairs(&words, &subs);

    write_pairs(&args.output, &pairs).map_err(|e| wordshift_cli_error("writing results", e))?;

    let summary = RunSummary::new(words.len(), subs.len(), pairs.len(), start.elapsed());
    summary.report(&args.output);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
