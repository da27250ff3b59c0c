use std::fmt;
use std::io;
use std::path::Path;

use crate::error::WordshiftError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        WriteZero => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert a wordshift library error into a CLI error with a hint.
pub fn wordshift_cli_error(context: &str, err: WordshiftError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a wordshift error variant.
pub fn cli_hint(err: &WordshiftError) -> String {
    use WordshiftError::*;
    match err {
        SourceNotFound { path, source } => format_io_error("opening", path, source),
        OutputWrite(e) => format!("{e}. Check permissions or free up disk space."),
        Table(e) => format!("{e}. Verify the table is two-column CSV."),
        Io(e) => format!("{e}"),
    }
}
