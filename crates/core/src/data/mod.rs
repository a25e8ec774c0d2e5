//! Location records, expense categories, and the lookup index.

pub mod category;
pub mod error;
pub mod index;
pub mod raw;
pub mod record;

pub use category::{Category, InvalidCategory};
pub use error::DataError;
pub use index::DataIndex;
pub use raw::{RawCountry, RawDataset, RawStats};
pub use record::{LocationRecord, Metric};
