// Thu Jan 15 2026 - Alex

pub mod record;
pub mod scanner;
pub mod filter;

pub use record::StructRecord;
pub use scanner::{extract_structs, ScanMode, StructScanner};
pub use filter::ExclusionFilter;
