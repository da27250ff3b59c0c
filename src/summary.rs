//! Counters describing a completed run. Reported on stderr for operators
//! and optionally rendered as JSON for scripting.

use std::path::Path;
use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Unique words loaded from the dictionary.
    pub words: usize,
    /// Substitution rules loaded from the table.
    pub rules: usize,
    /// Pairs discovered.
    pub pairs: usize,
    /// Wall-clock time for the whole run.
    pub elapsed_ms: u64,
}

impl RunSummary {
    pub fn new(words: usize, rules: usize, pairs: usize, elapsed: Duration) -> Self {
        Self {
            words,
            rules,
            pairs,
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }

    pub fn report(&self, output: &Path) {
        eprintln!(
            "Processed {} words with {} rules: found {} pairs in {} ms",
            self.words, self.rules, self.pairs, self.elapsed_ms
        );
        eprintln!("Wrote results to {}", output.display());
    }
}
