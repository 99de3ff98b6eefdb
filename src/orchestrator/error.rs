// Tue Jan 13 2026 - Alex

use crate::config::ConfigError;
use crate::index::IndexError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error("Error reading file {path:?}: {source}")]
    StructsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot prepare output directory {path:?}: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Output directory {output:?} would overwrite input {input:?}")]
    OutputOverlapsInput { output: PathBuf, input: PathBuf },
}
