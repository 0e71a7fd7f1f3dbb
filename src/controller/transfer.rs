use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::model::RoundSnapshot;
use crate::mvu::error::AppError;

/// Parses user-supplied import text. Any well-formed JSON is accepted here;
/// shape problems are repaired later by normalization.
///
/// # Errors
///
/// Returns `AppError::Parse` if `text` is not valid JSON.
pub fn parse_import(text: &str) -> Result<Value, AppError> {
    let value: Value = serde_json::from_str(text.trim_start_matches('\u{feff}'))?;
    Ok(value)
}

/// Reads the text of an import file.
///
/// # Errors
///
/// Returns `AppError::NotFound` for a missing file and `AppError::Io` for
/// any other read failure.
pub fn read_import_file(path: &Path) -> Result<String, AppError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(AppError::NotFound(path.display().to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Pretty-printed JSON of the snapshot, as written by the export command.
///
/// # Errors
///
/// Returns `AppError::Parse` if serialization fails.
pub fn export_json(snapshot: &RoundSnapshot) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}
