use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::WordshiftError;

/// Deduplicated dictionary entries under analysis.
pub type WordSet = HashSet<String>;

/// Character-level rewrite rules. A key absent from the map means identity.
pub type SubstitutionMap = HashMap<char, String>;

fn open_source(path: &Path) -> Result<File, WordshiftError> {
    File::open(path).map_err(|source| WordshiftError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the newline-delimited word list at `path`.
///
/// Each line is stripped of surrounding whitespace; lines that are empty
/// after stripping are skipped. Duplicate words collapse silently.
pub fn load_word_list(path: &Path) -> Result<WordSet, WordshiftError> {
    let reader = BufReader::new(open_source(path)?);
    let mut words = WordSet::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.insert(word.to_string());
        }
    }
    Ok(words)
}

/// Load the two-column CSV substitution table at `path`.
///
/// The first field of a row is the source character, the second its
/// replacement string. Rows with fewer than two fields are skipped, as are
/// rows whose first field is not a single character. Extra fields are
/// ignored and later rows overwrite earlier ones for the same source.
pub fn load_substitution_table(path: &Path) -> Result<SubstitutionMap, WordshiftError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(open_source(path)?);

    let mut map = SubstitutionMap::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < 2 {
            continue;
        }
        let mut src = record[0].chars();
        match (src.next(), src.next()) {
            (Some(c), None) => {
                map.insert(c, record[1].to_string());
            }
            _ => continue,
        }
    }
    Ok(map)
}

/// Load both input sources, word list first. The first failure wins.
pub fn load_inputs(
    word_list: &Path,
    table: &Path,
) -> Result<(WordSet, SubstitutionMap), WordshiftError> {
    let words = load_word_list(word_list)?;
    let subs = load_substitution_table(table)?;
    Ok((words, subs))
}
