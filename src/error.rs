use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors produced while scanning a tree and writing its report.
#[derive(Debug, Error)]
pub enum Error {
    /// The root path given by the user does not exist.
    #[error("Folder does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    /// A directory could not be opened or iterated. The scanner logs it and
    /// moves on; it is never returned from [`crate::scan::scan`].
    #[error("Can't access {}: {source}", .path.display())]
    SubtreeInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report file could not be created or written.
    #[error("failed to write report {}: {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
