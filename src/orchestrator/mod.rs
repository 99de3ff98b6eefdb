// Tue Jan 13 2026 - Alex

pub mod pipeline;
pub mod error;

pub use pipeline::{Pipeline, PipelineStage, RunSummary};
pub use error::PipelineError;
