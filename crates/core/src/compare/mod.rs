//! Location comparison: purchasing power scores, percentage deltas and
//! comparison tables.

pub mod error;
pub mod scorer;
pub mod table;

pub use error::CompareError;
pub use scorer::ComparisonScorer;
pub use table::{ComparisonRow, ComparisonTable, ExcludedLocation, SortKey};
