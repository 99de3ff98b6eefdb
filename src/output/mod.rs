// Tue Jan 13 2026 - Alex

pub mod writer;
pub mod aggregator;
pub mod stats;
pub mod error;

pub use writer::{CategoryWriter, WriteReport, WrittenArtifact};
pub use aggregator::IncludeAggregator;
pub use stats::CoverageStats;
pub use error::OutputError;
