use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordshiftError {
    /// An input source was missing or could not be opened.
    #[error("source not found: {}", .path.display())]
    SourceNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The result table could not be persisted.
    #[error("failed to write output: {0}")]
    OutputWrite(#[source] csv::Error),

    /// The substitution table stream became unreadable mid-parse.
    #[error("substitution table error: {0}")]
    Table(#[from] csv::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
