use std::path::Path;

use crate::error::WordshiftError;
use crate::finder::Pair;

/// Persist discovered pairs as a two-column CSV file, one row per pair.
///
/// Rows are written in the order given and no header row is emitted.
pub fn write_pairs(path: &Path, pairs: &[Pair]) -> Result<(), WordshiftError> {
    let mut writer = csv::Writer::from_path(path).map_err(WordshiftError::OutputWrite)?;
    for pair in pairs {
        writer
            .write_record([pair.original.as_str(), pair.shifted.as_str()])
            .map_err(WordshiftError::OutputWrite)?;
    }
    writer
        .flush()
        .map_err(|e| WordshiftError::OutputWrite(e.into()))?;
    Ok(())
}
