// Thu Jan 15 2026 - Alex

pub mod suffix;
pub mod distributor;

pub use suffix::{SuffixEntry, SuffixMap, SuffixVariant};
pub use distributor::{Assignment, CategoryBuffer, DistributionContext, Distributor};
