//! JSON loaders for the data set and the rate table.

use std::fs;
use std::path::{Path, PathBuf};

use livingcost_core::currency::{CurrencyRate, RateTable};
use livingcost_core::data::{DataIndex, RawDataset};
use livingcost_shared::config::DataConfig;
use tracing::{info, warn};

use crate::error::LoadError;

const INLINE: &str = "<inline>";

/// Everything the explorer needs, loaded once at startup.
#[derive(Debug, Clone)]
pub struct StaticData {
    /// Location statistics.
    pub index: DataIndex,
    /// Exchange rates against the data set's base currency.
    pub rates: RateTable,
}

/// Parses a data set from a JSON string.
///
/// # Errors
///
/// Returns `Json` for malformed input and `Data` for invalid records.
pub fn parse_dataset(json: &str) -> Result<DataIndex, LoadError> {
    parse_dataset_at(json, Path::new(INLINE))
}

/// Parses a rate table from a JSON array.
///
/// # Errors
///
/// Returns `Json` for malformed input and `Currency` for invalid rates.
pub fn parse_rates(json: &str) -> Result<RateTable, LoadError> {
    parse_rates_at(json, Path::new(INLINE))
}

/// Reads and parses the data set file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, otherwise as [`parse_dataset`].
pub fn load_dataset(path: impl AsRef<Path>) -> Result<DataIndex, LoadError> {
    let path = path.as_ref();
    let index = parse_dataset_at(&read(path)?, path)?;
    info!(path = %path.display(), locations = index.len(), "Loaded data set");
    Ok(index)
}

/// Reads and parses the rate table file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, otherwise as [`parse_rates`].
pub fn load_rates(path: impl AsRef<Path>) -> Result<RateTable, LoadError> {
    let path = path.as_ref();
    let rates = parse_rates_at(&read(path)?, path)?;
    info!(path = %path.display(), currencies = rates.len(), "Loaded exchange rates");
    Ok(rates)
}

/// Loads both files named in the configuration.
///
/// # Errors
///
/// Returns the first error from either loader.
pub fn load_all(config: &DataConfig) -> Result<StaticData, LoadError> {
    Ok(StaticData {
        index: load_dataset(&config.dataset_path)?,
        rates: load_rates(&config.rates_path)?,
    })
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_dataset_at(json: &str, path: &Path) -> Result<DataIndex, LoadError> {
    let raw: RawDataset = serde_json::from_str(json).map_err(|source| json_error(path, source))?;

    for (code, country) in &raw {
        if country.country.is_empty() && country.cities.is_empty() {
            warn!(code, "Location has no statistics");
        }
    }

    Ok(DataIndex::from_raw(&raw)?)
}

fn parse_rates_at(json: &str, path: &Path) -> Result<RateTable, LoadError> {
    let rates: Vec<CurrencyRate> =
        serde_json::from_str(json).map_err(|source| json_error(path, source))?;

    if rates.is_empty() {
        warn!(path = %path.display(), "Rate table is empty");
    }

    Ok(RateTable::new(rates)?)
}

fn json_error(path: &Path, source: serde_json::Error) -> LoadError {
    LoadError::Json {
        path: PathBuf::from(path),
        source,
    }
}
