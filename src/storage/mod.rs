//! Read-only access to exported match history.
//!
//! Records are kept by an external collaborator. This module only reads its
//! JSON Lines export: one match record per line, most recent first.

pub mod jsonl;

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::MatchRecord;

pub use jsonl::{JsonlIterator, JsonlReader};

/// Errors that can occur while loading records.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Load every match record from a JSON Lines file, keeping file order.
pub fn load_records(path: &Path) -> Result<Vec<MatchRecord>, StorageError> {
    JsonlReader::new(path.to_path_buf()).read_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Killer;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_records() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"date":"2025-06-15","opponent":"Nurse","outcome":{{"self":"escaped","teammates":[{{"status":"died"}},{{"status":"died"}},{{"status":"escaped"}}]}}}}"#
        )
        .unwrap();
        writeln!(
            file,
            r#"{{"date":"2025-06-14","opponent":"ghost face","stage":"Haddonfield","self_rating":"A","outcome":{{"self":"died","teammates":[{{"label":"Mika","status":"died"}},{{"status":"died"}},{{"status":"died"}}]}}}}"#
        )
        .unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].opponent, Killer::Nurse);
        assert!(records[0].self_escaped());
        assert_eq!(records[1].opponent, Killer::GhostFace);
        assert_eq!(records[1].outcome.teammates()[0].label, "Mika");
    }

    #[test]
    fn test_load_records_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(&dir.path().join("none.jsonl")).unwrap_err();
        assert!(matches!(err, StorageError::PathNotFound(_)));
    }

    #[test]
    fn test_load_records_reports_bad_line() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"date":"2025-06-15","opponent":"Nurse","outcome":{{"self":"escaped","teammates":[{{"status":"died"}},{{"status":"died"}},{{"status":"died"}}]}}}}"#
        )
        .unwrap();
        writeln!(file).unwrap();
        writeln!(
            file,
            r#"{{"date":"2025-06-14","opponent":"Freddy Krueger","outcome":{{"self":"died","teammates":[]}}}}"#
        )
        .unwrap();

        let err = load_records(file.path()).unwrap_err();
        match err {
            StorageError::Json { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {}", other),
        }
    }
}
