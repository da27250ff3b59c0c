use std::env;
use std::path::Path;

use wordshift::{load_substitution_table, SubstitutionMap};

pub fn dump_table_to_csv(subs: &SubstitutionMap) -> std::io::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    let mut rules: Vec<(char, &str)> = subs.iter().map(|(c, s)| (*c, s.as_str())).collect();
    rules.sort_by_key(|&(c, _)| c);
    for (src, dst) in rules {
        wtr.write_record([src.to_string().as_str(), dst])?;
    }
    wtr.flush()?;
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <table.csv>", args[0]);
        std::process::exit(1);
    }
    let subs = match load_substitution_table(Path::new(&args[1])) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to load substitution table: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = dump_table_to_csv(&subs) {
        eprintln!("Failed to write CSV: {e}");
        std::process::exit(1);
    }
}
