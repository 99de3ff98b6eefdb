// Wed Jan 14 2026 - Alex

pub mod identifier;
pub mod category;
pub mod walker;
pub mod error;

pub use identifier::ClassIdentifier;
pub use category::{Category, CategoryId, CategoryIndex};
pub use walker::ClassIndexer;
pub use error::IndexError;
