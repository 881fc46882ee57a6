use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop the dashboard from reaching the loaded state.
///
/// Cell-level problems (unparseable numbers, empty fields) never surface
/// here; the loader turns them into missing values instead.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Data file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Could not read data file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Data file {} is not valid CSV: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
