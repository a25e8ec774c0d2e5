//! Static data loading for livingcost.
//!
//! Reads the per-country statistics and the currency rate table from JSON
//! files and turns them into validated core types. This is the only crate
//! that touches the file system.

pub mod error;
pub mod loader;

pub use error::LoadError;
pub use loader::{StaticData, load_all, load_dataset, load_rates, parse_dataset, parse_rates};
