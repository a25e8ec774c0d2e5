//! Integration tests for loading static data from disk.

use std::fs;
use std::path::PathBuf;

use livingcost_core::currency::CurrencyError;
use livingcost_core::data::{Category, DataError};
use livingcost_data::{LoadError, load_all, load_dataset, load_rates, parse_dataset, parse_rates};
use livingcost_shared::config::DataConfig;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::TempDir;

const DATASET: &str = r#"{
    "JPN": {
        "country_name": "Japan",
        "country": {
            "Net_Salary": 2300.50, "Markets": 310.25, "Clothing_And_Shoes": 95,
            "Rent_Per_Month": 764.64, "Restaurants": 180, "Public_Transportation": 62.4,
            "Utilities": 190, "Sports_And_Leisure": 60, "Total_Expenses": 1
        },
        "cities": {
            "Tokyo": { "Net_Salary": 3100, "Rent_Per_Month": 1050 }
        }
    },
    "USA": {
        "country_name": "United States",
        "country": { "Net_Salary": 6000, "Rent_Per_Month": 1500 }
    }
}"#;

const RATES: &str = r#"[
    { "code": "USD", "name": "US Dollar", "flag": "🇺🇸", "exchange_rate": 1 },
    { "code": "EUR", "name": "Euro", "flag": "🇪🇺", "exchange_rate": 0.92 },
    { "code": "JPY", "name": "Japanese Yen", "exchange_rate": 135.72 }
]"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_dataset_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "dataset.json", DATASET);

    let index = load_dataset(&path).unwrap();

    assert_eq!(index.len(), 2);
    let japan = index.get("JPN").unwrap();
    assert_eq!(japan.expense(Category::Rent), Some(dec!(764.64)));
    // Supplied total is ignored in favour of the category sum.
    assert_eq!(japan.total_expenses, Some(dec!(1662.29)));
    assert_eq!(index.get("USA").unwrap().total_expenses, None);
    assert_eq!(
        index.city("JPN", "tokyo").unwrap().net_salary,
        Some(Decimal::from(3100))
    );
}

#[test]
fn test_load_rates_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "currencies.json", RATES);

    let rates = load_rates(&path).unwrap();

    assert_eq!(rates.len(), 3);
    let codes: Vec<_> = rates.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["USD", "EUR", "JPY"]);
    assert_eq!(rates.rate(&"JPY".parse().unwrap()).unwrap(), dec!(135.72));
}

#[test]
fn test_load_all_uses_config_paths() {
    let dir = TempDir::new().unwrap();
    let config = DataConfig {
        dataset_path: write(&dir, "d.json", DATASET).display().to_string(),
        rates_path: write(&dir, "r.json", RATES).display().to_string(),
    };

    let data = load_all(&config).unwrap();

    assert_eq!(data.index.len(), 2);
    assert_eq!(data.rates.len(), 3);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    let err = load_dataset(&missing).unwrap_err();
    assert!(matches!(err, LoadError::Io { ref path, .. } if *path == missing));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_malformed_json_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.json", "{ not json");

    assert!(matches!(load_rates(&path), Err(LoadError::Json { .. })));
    assert!(matches!(parse_dataset("[1, 2]"), Err(LoadError::Json { .. })));
}

#[test]
fn test_negative_value_rejected() {
    let json = r#"{ "X": { "country_name": "X", "country": { "Markets": -1 } } }"#;
    assert!(matches!(
        parse_dataset(json),
        Err(LoadError::Data(DataError::NegativeValue { .. }))
    ));
}

#[test]
fn test_duplicate_code_rejected() {
    let json = r#"{
        "SWE": { "country_name": "Sweden" },
        "swe": { "country_name": "Sweden again" }
    }"#;
    assert!(matches!(
        parse_dataset(json),
        Err(LoadError::Data(DataError::DuplicateCode(_)))
    ));
}

#[test]
fn test_invalid_rates_rejected() {
    let zero = r#"[{ "code": "USD", "exchange_rate": 0 }]"#;
    assert!(matches!(
        parse_rates(zero),
        Err(LoadError::Currency(CurrencyError::InvalidRate { .. }))
    ));

    let bad_code = r#"[{ "code": "US", "exchange_rate": 1 }]"#;
    assert!(matches!(parse_rates(bad_code), Err(LoadError::Json { .. })));
}

#[test]
fn test_load_error_maps_to_app_error() {
    let err: livingcost_shared::AppError = parse_rates("{").unwrap_err().into();
    assert_eq!(err.error_code(), "INVALID_DATA");
}
