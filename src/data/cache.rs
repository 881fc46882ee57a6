#[cfg(test)]
use std::cell::Cell;
use std::cell::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::DashboardError;

use super::loader::load_file;
use super::model::Dataset;

/// Session-wide memo of the load step.
///
/// The first [`get`](DatasetCache::get) reads the file; every later call
/// returns the same outcome, success or failure, without touching storage.
/// The cache lives as long as the session and is never invalidated.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    slot: OnceCell<Result<Arc<Dataset>, DashboardError>>,
    #[cfg(test)]
    reads: Cell<usize>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            slot: OnceCell::new(),
            #[cfg(test)]
            reads: Cell::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> Result<Arc<Dataset>, &DashboardError> {
        self.slot
            .get_or_init(|| {
                #[cfg(test)]
                self.reads.set(self.reads.get() + 1);
                log::debug!("reading {}", self.path.display());
                load_file(&self.path).map(Arc::new)
            })
            .as_ref()
            .map(Arc::clone)
    }

    /// How many times storage has actually been read.
    #[cfg(test)]
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn reads_storage_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "Study_ID,Author,OR\nS1,Khan,1.5\n").unwrap();

        let cache = DatasetCache::new(&path);
        let first = cache.get().unwrap();

        // Later edits are invisible for the rest of the session.
        fs::write(&path, "Study_ID,Author,OR\n").unwrap();
        let second = cache.get().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);
        assert_eq!(cache.reads(), 1);
    }

    #[test]
    fn failure_is_cached_too() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let cache = DatasetCache::new(&path);

        assert!(matches!(
            cache.get().unwrap_err(),
            DashboardError::MissingInput { .. }
        ));

        fs::write(&path, "Study_ID,Author,OR\nS1,Khan,1.5\n").unwrap();
        assert!(cache.get().is_err());
        assert_eq!(cache.reads(), 1);
    }
}
