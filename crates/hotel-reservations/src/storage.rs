//! Flat-file persistence for ordered record collections.
//!
//! Every store holds one JSON array of flat records. Loading never fails: a missing,
//! unreadable, or malformed file is reported through `tracing` and treated as an empty
//! store. Saving rewrites the whole file and hands back a [`StoreError`] so callers
//! decide how loud a failed write should be.

use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Load/save seam between the managers and whatever holds the records.
pub trait RecordStore<T>: Send + Sync {
    /// Every record currently stored, in stored order.
    fn load(&self) -> Vec<T>;
    /// Replace the stored collection with `records`.
    fn save(&self, records: &[T]) -> Result<(), StoreError>;
    /// Human readable location for log lines.
    fn location(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode records for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON array on the local filesystem.
#[derive(Debug, Clone)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> RecordStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Vec<T> {
        load_records(&self.path)
    }

    fn save(&self, records: &[T]) -> Result<(), StoreError> {
        save_records(records, &self.path)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Read the JSON array at `path`, falling back to an empty collection on any failure.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "store file missing, starting empty");
            return Vec::new();
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "store file unreadable, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(records) => records,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "store file holds invalid data, starting empty");
            Vec::new()
        }
    }
}

/// Overwrite `path` with `records` as an indented JSON array.
pub fn save_records<T: Serialize>(records: &[T], path: &Path) -> Result<(), StoreError> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records
        .serialize(&mut serializer)
        .map_err(|source| StoreError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, buffer).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}
