//! JSONL (JSON Lines) reading.
//!
//! Each non-blank line is one JSON object. Blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::StorageError;

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Read all entities from the file.
    ///
    /// Stops at the first line that does not parse; the error names the line.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        let entities = self.iter()?.collect::<Result<Vec<T>, _>>()?;
        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }

    /// Create an iterator over the file.
    pub fn iter(&self) -> Result<JsonlIterator<T>, StorageError> {
        if !self.path.exists() {
            return Err(StorageError::PathNotFound(self.path.clone()));
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        Ok(JsonlIterator {
            reader,
            line_num: 0,
            _marker: PhantomData,
        })
    }
}

/// Iterator over JSONL file entries.
pub struct JsonlIterator<T> {
    reader: BufReader<File>,
    line_num: usize,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> Iterator for JsonlIterator<T> {
    type Item = Result<T, StorageError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();

        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    self.line_num += 1;
                    if line.trim().is_empty() {
                        continue;
                    }
                    let line_num = self.line_num;
                    return Some(serde_json::from_str(&line).map_err(|source| {
                        StorageError::Json {
                            line: line_num,
                            source,
                        }
                    }));
                }
                Err(e) => return Some(Err(StorageError::Io(e))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Deserialize, PartialEq)]
    struct TestEntity {
        id: String,
        value: u32,
    }

    fn write_file(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("test.jsonl");
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_all_skips_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(
            &temp_dir,
            "{\"id\":\"1\",\"value\":100}\n\n   \n{\"id\":\"2\",\"value\":200}\n",
        );

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        let entities = reader.read_all().unwrap();

        assert_eq!(entities.len(), 2);
        assert_eq!(
            entities[1],
            TestEntity {
                id: "2".to_string(),
                value: 200
            }
        );
    }

    #[test]
    fn test_read_all_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "");

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        assert!(reader.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let reader: JsonlReader<TestEntity> =
            JsonlReader::new(temp_dir.path().join("missing.jsonl"));

        assert!(matches!(
            reader.read_all(),
            Err(StorageError::PathNotFound(_))
        ));
    }

    #[test]
    fn test_iterator_reports_line_numbers() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(
            &temp_dir,
            "{\"id\":\"1\",\"value\":1}\n\nnot json\n{\"id\":\"3\",\"value\":3}\n",
        );

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        let results: Vec<_> = reader.iter().unwrap().collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(StorageError::Json { line: 3, .. })));
        assert!(results[2].is_ok());
    }
}
