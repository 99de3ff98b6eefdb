// Tue Jan 13 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Error writing to file {path:?} for category {category}: {source}")]
    CategoryWrite {
        category: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Category {category} maps to reserved file {path:?}")]
    ReservedName { category: String, path: PathBuf },
    #[error("Error writing include list {path:?}: {source}")]
    Aggregator {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error writing stats {path:?}: {message}")]
    Stats { path: PathBuf, message: String },
}
