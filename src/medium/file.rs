//! Durable medium persisting its table as one JSON file.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use thiserror::Error;

use crate::logging;
use crate::medium::Medium;
use crate::value::Primitive;

/// Errors opening a [`JsonFileMedium`].
#[derive(Error, Debug)]
pub enum MediumError {
    /// An I/O error occurred reading or writing the medium file.
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),
    /// The medium file exists but does not parse as a primitive table.
    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Medium backed by a single JSON file.
///
/// Reads are served from memory. Every write rewrites the file with a
/// write-then-rename, so a crash mid-write leaves the previous contents
/// intact. A write whose flush fails keeps the in-memory cell and reports
/// through the logging channel only, per the [`Medium`] contract.
pub struct JsonFileMedium {
    path: PathBuf,
    cells: RwLock<HashMap<String, Primitive>>,
}

impl JsonFileMedium {
    /// Open the medium at `path`, loading any existing table.
    ///
    /// A missing file yields an empty table; an unreadable or malformed
    /// one is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, MediumError> {
        let path = path.as_ref().to_path_buf();
        let cells: HashMap<String, Primitive> = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(MediumError::Io(err)),
        };
        logging::info!(
            "opened medium at {} with {} entries",
            path.display(),
            cells.len()
        );
        Ok(Self {
            path,
            cells: RwLock::new(cells),
        })
    }

    fn flush(&self, cells: &HashMap<String, Primitive>) -> Result<(), MediumError> {
        let staging = self.path.with_extension("tmp");
        let bytes = serde_json::to_vec_pretty(cells)?;
        fs::write(&staging, bytes)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl Medium for JsonFileMedium {
    fn read(&self, key: &str) -> Option<Primitive> {
        self.cells.read().get(key).cloned()
    }

    fn write(&self, key: &str, value: Primitive) {
        let mut cells = self.cells.write();
        cells.insert(key.to_owned(), value);
        if let Err(err) = self.flush(&cells) {
            logging::error!("failed to flush medium at {}: {}", self.path.display(), err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = tempdir().unwrap();
        let medium = JsonFileMedium::open(dir.path().join("prefs.json")).unwrap();
        assert_eq!(medium.read("anything"), None);
    }

    #[test]
    fn test_write_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let medium = JsonFileMedium::open(&path).unwrap();
        medium.write("app.count", Primitive::Number(Number::Int(3)));
        medium.write("app.name", Primitive::Text("alice".to_owned()));
        drop(medium);

        let reopened = JsonFileMedium::open(&path).unwrap();
        assert_eq!(
            reopened.read("app.count"),
            Some(Primitive::Number(Number::Int(3)))
        );
        assert_eq!(
            reopened.read("app.name"),
            Some(Primitive::Text("alice".to_owned()))
        );
    }

    #[test]
    fn test_no_staging_file_left_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let medium = JsonFileMedium::open(&path).unwrap();
        medium.write("k", Primitive::Number(Number::Int(1)));

        assert!(path.exists());
        assert!(!dir.path().join("prefs.tmp").exists());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, b"not json at all").unwrap();

        let result = JsonFileMedium::open(&path);
        assert!(matches!(result, Err(MediumError::Serialization(_))));
    }

    #[test]
    fn test_blob_cells_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let medium = JsonFileMedium::open(&path).unwrap();
        medium.write("app.profile", Primitive::Blob(vec![1, 2, 3]));
        drop(medium);

        let reopened = JsonFileMedium::open(&path).unwrap();
        assert_eq!(
            reopened.read("app.profile"),
            Some(Primitive::Blob(vec![1, 2, 3]))
        );
    }
}
