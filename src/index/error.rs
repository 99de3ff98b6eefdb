// Wed Jan 14 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("The directory '{0}' does not exist.")]
    MissingInputDirectory(PathBuf),
    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
