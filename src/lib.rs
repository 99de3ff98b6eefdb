// Tue Jan 15 2026 - Alex

pub mod config;
pub mod index;
pub mod extract;
pub mod categorize;
pub mod output;
pub mod orchestrator;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use index::{ClassIndexer, CategoryIndex};
pub use extract::{ScanMode, StructScanner};
pub use categorize::{DistributionContext, Distributor, SuffixMap};
pub use output::{CategoryWriter, CoverageStats};
pub use orchestrator::Pipeline;
